// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-smol")]

use handy_functional::{retry_with_timer, Debounced, Throttled};
use handy_runtime::{SmolRuntime, SmolTimer};
use handy_test_utils::CallRecorder;
use std::time::Duration;

#[test]
fn test_debounce_on_smol() {
    smol::block_on(async {
        // Arrange
        let recorder = CallRecorder::new();
        let debounced: Debounced<u32, SmolRuntime> =
            Debounced::new(recorder.callback(), Duration::from_millis(20));

        // Act
        debounced.call(1);
        debounced.call(2);
        smol::Timer::after(Duration::from_millis(150)).await;

        // Assert
        assert_eq!(recorder.calls(), vec![2]);
    });
}

#[test]
fn test_throttle_on_smol() {
    smol::block_on(async {
        // Arrange
        let recorder = CallRecorder::new();
        let throttled: Throttled<u32, SmolRuntime> =
            Throttled::new(recorder.callback(), Duration::from_millis(20));

        // Act
        throttled.call(1);
        throttled.call(2);
        smol::Timer::after(Duration::from_millis(150)).await;

        // Assert
        assert_eq!(recorder.calls(), vec![2]);
    });
}

#[test]
fn test_retry_on_smol_timer() {
    smol::block_on(async {
        let result: Result<(), &str> =
            retry_with_timer(|| async { Err("down") }, 2, Duration::from_millis(1), &SmolTimer)
                .await;

        assert_eq!(result, Err("down"));
    });
}
