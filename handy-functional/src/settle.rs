// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use futures::future::{join_all, FutureExt};

/// Terminal state of one operation passed to [`settle_all`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Settled<T, E> {
    Fulfilled(T),
    Rejected(E),
}

impl<T, E> Settled<T, E> {
    pub const fn is_fulfilled(&self) -> bool {
        matches!(self, Self::Fulfilled(_))
    }

    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The success value, if fulfilled.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Fulfilled(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    /// The failure reason, if rejected.
    pub const fn reason(&self) -> Option<&E> {
        match self {
            Self::Fulfilled(_) => None,
            Self::Rejected(reason) => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Fulfilled(value) => Ok(value),
            Self::Rejected(reason) => Err(reason),
        }
    }
}

impl<T, E> From<Result<T, E>> for Settled<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Fulfilled(value),
            Err(reason) => Self::Rejected(reason),
        }
    }
}

/// Wait for every operation to finish, successfully or not.
///
/// All operations are driven concurrently. The result holds one [`Settled`]
/// per input, in input order, whatever the completion order was. A failure
/// never cuts the wait short, and the aggregate itself cannot fail.
///
/// # Example
///
/// ```rust
/// use handy_functional::{settle_all, Settled};
/// use futures::future::BoxFuture;
/// use futures::FutureExt;
///
/// # #[tokio::main]
/// # async fn main() {
/// let operations: Vec<BoxFuture<'static, Result<i32, &str>>> = vec![
///     async { Ok(1) }.boxed(),
///     async { Err("e") }.boxed(),
///     async { Ok(3) }.boxed(),
/// ];
///
/// let outcomes = settle_all(operations).await;
///
/// assert_eq!(
///     outcomes,
///     vec![Settled::Fulfilled(1), Settled::Rejected("e"), Settled::Fulfilled(3)]
/// );
/// # }
/// ```
pub async fn settle_all<I, Fut, T, E>(operations: I) -> Vec<Settled<T, E>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<T, E>>,
{
    join_all(operations.into_iter().map(|operation| operation.map(Settled::from))).await
}
