// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use handy_error::{HandyError, Result};

/// Failure reported by a host capability.
pub type HostError = Box<dyn std::error::Error + Send + Sync>;

/// The asynchronous system clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> std::result::Result<(), HostError>;
}

/// The synchronous copy command older hosts offer instead.
pub trait LegacyClipboard: Send + Sync {
    fn copy_text(&self, text: &str) -> std::result::Result<(), HostError>;
}

/// Copy `text` through `modern` when the host has one, else through `legacy`.
///
/// The legacy path is only a substitute for a missing clipboard; a modern
/// clipboard that fails is not retried through it.
///
/// # Errors
/// `HandyError::Clipboard` ("Failed to copy text.") when the chosen path fails.
/// The host's error is logged and kept as the error context.
pub async fn copy_to_clipboard(
    text: &str,
    modern: Option<&dyn Clipboard>,
    legacy: &dyn LegacyClipboard,
) -> Result<()> {
    match modern {
        Some(clipboard) => clipboard.write_text(text).await.map_err(|err| {
            error!("Failed to copy text using modern API: {err}");
            HandyError::clipboard(err.to_string())
        }),
        None => {
            debug!("no clipboard available, using the legacy copy command");
            legacy.copy_text(text).map_err(|err| {
                error!("Failed to copy text using fallback method: {err}");
                HandyError::clipboard(err.to_string())
            })
        }
    }
}
