// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Let the (paused) clock run for `ms` milliseconds so timers due in that
/// span fire and their tasks run.
pub async fn advance_ms(ms: u64) {
    sleep(Duration::from_millis(ms)).await;
}

/// Gaps between consecutive instants.
pub fn gaps(instants: &[Instant]) -> Vec<Duration> {
    instants
        .windows(2)
        .map(|pair| pair[1].duration_since(pair[0]))
        .collect()
}

/// Assert the gaps between `instants` match `expected`, allowing the few
/// milliseconds of slack the timer wheel may add.
pub fn assert_gaps(instants: &[Instant], expected: &[Duration]) {
    let actual = gaps(instants);
    assert_eq!(actual.len(), expected.len(), "gaps: {actual:?}");

    for (gap, want) in actual.iter().zip(expected) {
        assert!(
            *gap >= *want && *gap <= *want + Duration::from_millis(5),
            "gap {gap:?} not close to {want:?} (all gaps: {actual:?})"
        );
    }
}
