// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use handy_platform::{is_online, prefers_reduced_motion, MotionPreference, NetworkStatus};
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
struct FakeHost {
    online: AtomicBool,
    reduce_motion: AtomicBool,
}

impl NetworkStatus for FakeHost {
    fn on_line(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}

impl MotionPreference for FakeHost {
    fn reduced_motion(&self) -> bool {
        self.reduce_motion.load(Ordering::SeqCst)
    }
}

#[test]
fn test_is_online_reads_host_status() {
    // Arrange
    let host = FakeHost::default();

    // Act & Assert
    assert!(!is_online(&host));
    host.online.store(true, Ordering::SeqCst);
    assert!(is_online(&host));
}

#[test]
fn test_prefers_reduced_motion_reads_host_setting() {
    // Arrange
    let host = FakeHost::default();

    // Act & Assert
    assert!(!prefers_reduced_motion(&host));
    host.reduce_motion.store(true, Ordering::SeqCst);
    assert!(prefers_reduced_motion(&host));
}

#[test]
fn test_status_is_read_on_every_call() {
    let host = FakeHost::default();
    let readings: Vec<bool> = [true, false, true]
        .into_iter()
        .map(|online| {
            host.online.store(online, Ordering::SeqCst);
            is_online(&host)
        })
        .collect();

    assert_eq!(readings, vec![true, false, true]);
}
