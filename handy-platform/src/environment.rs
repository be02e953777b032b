// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Network reachability as the host reports it.
pub trait NetworkStatus: Send + Sync {
    fn on_line(&self) -> bool;
}

/// The user's accessibility setting for motion.
pub trait MotionPreference: Send + Sync {
    /// Whether the user asked for reduced motion.
    fn reduced_motion(&self) -> bool;
}

/// Whether the host believes it has network access.
///
/// Hosts only know about the local link; a `true` does not promise that a
/// server is reachable.
pub fn is_online(host: &dyn NetworkStatus) -> bool {
    host.on_line()
}

/// Whether animations should be skipped or shortened for the user.
///
/// ```
/// use handy_platform::{prefers_reduced_motion, MotionPreference};
///
/// struct Settings {
///     reduce_motion: bool,
/// }
///
/// impl MotionPreference for Settings {
///     fn reduced_motion(&self) -> bool {
///         self.reduce_motion
///     }
/// }
///
/// assert!(prefers_reduced_motion(&Settings { reduce_motion: true }));
/// ```
pub fn prefers_reduced_motion(host: &dyn MotionPreference) -> bool {
    host.reduced_motion()
}
