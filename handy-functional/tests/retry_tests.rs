// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use handy_functional::{retry, retry_with_timer, RetryPolicy, DEFAULT_RETRY_DELAY};
use handy_runtime::TokioTimer;
use handy_test_utils::helpers::assert_gaps;
use handy_test_utils::{FlakyOperation, TestError};
use std::time::Duration;
use tokio::time::Instant;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[tokio::test(start_paused = true)]
async fn test_retry_always_failing_runs_retries_plus_one_times() {
    // Arrange
    let operation = FlakyOperation::always_failing();
    let runner = operation.clone();

    // Act
    let result = retry(
        move || {
            let runner = runner.clone();
            async move { runner.attempt().await }
        },
        3,
        ms(100),
    )
    .await;

    // Assert
    assert_eq!(result, Err(TestError { attempt: 4 }));
    assert_eq!(operation.attempts(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_retry_doubles_delay_between_attempts() {
    // Arrange
    let operation = FlakyOperation::always_failing();
    let runner = operation.clone();

    // Act
    let _ = retry(
        move || {
            let runner = runner.clone();
            async move { runner.attempt().await }
        },
        3,
        ms(100),
    )
    .await;

    // Assert
    assert_gaps(&operation.attempt_times(), &[ms(100), ms(200), ms(400)]);
}

#[tokio::test(start_paused = true)]
async fn test_retry_returns_first_success_without_further_attempts() {
    // Arrange
    let operation = FlakyOperation::succeed_after(1);
    let runner = operation.clone();

    // Act
    let result = retry(
        move || {
            let runner = runner.clone();
            async move { runner.attempt().await }
        },
        3,
        ms(100),
    )
    .await;

    // Assert
    assert_eq!(result, Ok(2));
    assert_eq!(operation.attempts(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_retry_immediate_success_does_not_wait() {
    // Arrange
    let start = Instant::now();

    // Act
    let result: Result<&str, TestError> = retry(|| async { Ok("done") }, 5, ms(100)).await;

    // Assert
    assert_eq!(result, Ok("done"));
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_retry_zero_retries_surfaces_first_failure() {
    // Arrange
    let operation = FlakyOperation::always_failing();
    let runner = operation.clone();

    // Act
    let result = retry(
        move || {
            let runner = runner.clone();
            async move { runner.attempt().await }
        },
        0,
        ms(100),
    )
    .await;

    // Assert
    assert_eq!(result, Err(TestError { attempt: 1 }));
    assert_eq!(operation.attempts(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_retry_preserves_error_identity() {
    // Arrange
    #[derive(Debug)]
    struct Unclonable(&'static str);

    // Act
    let result: Result<(), Unclonable> =
        retry(|| async { Err(Unclonable("upstream 503")) }, 2, ms(10)).await;

    // Assert
    assert!(matches!(result, Err(Unclonable("upstream 503"))));
}

#[tokio::test(start_paused = true)]
async fn test_retry_with_explicit_timer() {
    // Arrange
    let operation = FlakyOperation::succeed_after(2);
    let runner = operation.clone();

    // Act
    let result = retry_with_timer(
        move || {
            let runner = runner.clone();
            async move { runner.attempt().await }
        },
        5,
        ms(20),
        &TokioTimer,
    )
    .await;

    // Assert
    assert_eq!(result, Ok(3));
    assert_gaps(&operation.attempt_times(), &[ms(20), ms(40)]);
}

#[tokio::test(start_paused = true)]
async fn test_retry_policy_run() {
    // Arrange
    let policy = RetryPolicy::new(1).with_initial_delay(ms(250));
    let operation = FlakyOperation::always_failing();
    let runner = operation.clone();

    // Act
    let result = policy
        .run(move || {
            let runner = runner.clone();
            async move { runner.attempt().await }
        })
        .await;

    // Assert
    assert_eq!(result, Err(TestError { attempt: 2 }));
    assert_gaps(&operation.attempt_times(), &[ms(250)]);
}

#[test]
fn test_retry_policy_defaults() {
    let policy = RetryPolicy::default();

    assert_eq!(policy.retries, 0);
    assert_eq!(policy.initial_delay, DEFAULT_RETRY_DELAY);
    assert_eq!(DEFAULT_RETRY_DELAY, ms(100));
    assert_eq!(policy.delays().count(), 0);
}

#[test]
fn test_retry_policy_delays_saturate() {
    let policy = RetryPolicy::new(3).with_initial_delay(Duration::MAX);

    let delays: Vec<_> = policy.delays().collect();

    assert_eq!(delays, vec![Duration::MAX; 3]);
}
