// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use handy_runtime::runtime::Runtime;
use handy_runtime::timer::Timer;
use handy_runtime::DefaultRuntime;

/// Length of a scroll animation when the caller has no preference.
pub const DEFAULT_SCROLL_DURATION: Duration = Duration::from_millis(300);

// ~60 frames per second
const FRAME: Duration = Duration::from_millis(16);

/// Scroll geometry of an element, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Pixels left below the visible area.
    pub fn distance_to_bottom(&self) -> f64 {
        self.scroll_height - self.scroll_top - self.client_height
    }
}

/// Whether no more than `threshold` pixels remain below the visible area.
///
/// ```
/// use handy_platform::{is_scrolled_to_bottom, ScrollMetrics};
///
/// let metrics = ScrollMetrics { scroll_top: 590.0, scroll_height: 1000.0, client_height: 400.0 };
///
/// assert!(!is_scrolled_to_bottom(&metrics, 0.0));
/// assert!(is_scrolled_to_bottom(&metrics, 10.0));
/// ```
pub fn is_scrolled_to_bottom(metrics: &ScrollMetrics, threshold: f64) -> bool {
    metrics.distance_to_bottom() <= threshold
}

/// A vertically scrollable viewport.
pub trait ScrollTarget: Send + Sync {
    /// Current vertical offset.
    fn scroll_y(&self) -> f64;

    fn scroll_to(&self, y: f64);
}

/// Scroll `target` linearly to `y` over `duration` on the default runtime.
pub async fn animate_scroll_to(target: &dyn ScrollTarget, y: f64, duration: Duration) {
    let timer = <DefaultRuntime as Runtime>::Timer::default();
    animate_scroll_to_with_timer(target, y, duration, &timer).await;
}

/// [`animate_scroll_to`] with frames paced by `timer`.
///
/// The first frame lands on the starting offset, one frame follows roughly
/// every 16 ms, and the last frame lands exactly on `y`.
pub async fn animate_scroll_to_with_timer<T: Timer>(
    target: &dyn ScrollTarget,
    y: f64,
    duration: Duration,
    timer: &T,
) {
    let start_y = target.scroll_y();
    let distance = y - start_y;
    let start = timer.now();

    loop {
        let elapsed = timer.now() - start;
        if elapsed >= duration {
            target.scroll_to(y);
            return;
        }

        let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
        target.scroll_to(start_y + distance * progress);
        timer.sleep_future(FRAME).await;
    }
}
