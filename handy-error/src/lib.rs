// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the handy utility library
//!
//! Most helpers in this workspace never fail: validators return `false`, lookups
//! return `None`, and the retry combinator hands the caller's own error back
//! untouched. The few operations that can fail on their own account report a
//! [`HandyError`]: deep cloning, URL-based query parsing and clipboard copies.
//!
//! # Examples
//!
//! ```
//! use handy_error::{HandyError, Result};
//!
//! fn copy() -> Result<()> {
//!     Err(HandyError::clipboard("clipboard permission denied"))
//! }
//!
//! assert_eq!(copy().unwrap_err().to_string(), "Failed to copy text.");
//! ```

/// Root error type for all handy operations
#[derive(Debug, thiserror::Error)]
pub enum HandyError {
    /// Copying text to the host clipboard failed
    ///
    /// Raised by whichever copy path the host offered: the modern clipboard
    /// when present, the legacy copy command otherwise. The message is fixed;
    /// the cause is kept in `context`.
    #[error("Failed to copy text.")]
    Clipboard {
        /// What the host reported
        context: String,
    },

    /// A value could not be serialized or deserialized
    ///
    /// Produced by the JSON round trip used for deep cloning.
    #[error("Serialization error: {context}")]
    Serialization {
        /// Description of the failing conversion
        context: String,
    },

    /// An argument could not be interpreted, such as a malformed URL
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the rejected input
        message: String,
    },
}

impl HandyError {
    /// Create a clipboard error with the given context
    pub fn clipboard(context: impl Into<String>) -> Self {
        Self::Clipboard {
            context: context.into(),
        }
    }

    /// Create a serialization error with the given context
    pub fn serialization(context: impl Into<String>) -> Self {
        Self::Serialization {
            context: context.into(),
        }
    }

    /// Create an invalid input error with the given message
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Specialized Result type for handy operations
///
/// ```
/// use handy_error::Result;
///
/// fn process() -> Result<String> {
///     Ok("processed".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, HandyError>;
