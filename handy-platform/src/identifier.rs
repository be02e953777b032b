// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use uuid::Uuid;

/// A random RFC 4122 version 4 identifier, lowercase and hyphenated.
///
/// ```
/// let id = handy_platform::uuid();
///
/// assert_eq!(id.len(), 36);
/// assert_eq!(id.as_bytes()[14], b'4');
/// ```
pub fn uuid() -> String {
    Uuid::new_v4().to_string()
}
