// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use handy_error::HandyError;
use handy_platform::{copy_to_clipboard, Clipboard, HostError, LegacyClipboard};
use parking_lot::Mutex;

#[derive(Default)]
struct FakeClipboard {
    written: Mutex<Vec<String>>,
    denied: bool,
}

#[async_trait]
impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), HostError> {
        if self.denied {
            return Err("permission denied".into());
        }
        self.written.lock().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct FakeCopyCommand {
    copied: Mutex<Vec<String>>,
    unsupported: bool,
}

impl LegacyClipboard for FakeCopyCommand {
    fn copy_text(&self, text: &str) -> Result<(), HostError> {
        if self.unsupported {
            return Err("copy command unsupported".into());
        }
        self.copied.lock().push(text.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn test_copy_uses_modern_clipboard() -> anyhow::Result<()> {
    // Arrange
    let clipboard = FakeClipboard::default();
    let legacy = FakeCopyCommand::default();

    // Act
    copy_to_clipboard("Hello, world!", Some(&clipboard), &legacy).await?;

    // Assert
    assert_eq!(*clipboard.written.lock(), vec!["Hello, world!"]);
    assert!(legacy.copied.lock().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_copy_falls_back_without_clipboard() -> anyhow::Result<()> {
    // Arrange
    let legacy = FakeCopyCommand::default();

    // Act
    copy_to_clipboard("fallback", None, &legacy).await?;

    // Assert
    assert_eq!(*legacy.copied.lock(), vec!["fallback"]);
    Ok(())
}

#[tokio::test]
async fn test_modern_failure_is_reported() {
    // Arrange
    let clipboard = FakeClipboard {
        denied: true,
        ..FakeClipboard::default()
    };
    let legacy = FakeCopyCommand::default();

    // Act
    let result = copy_to_clipboard("secret", Some(&clipboard), &legacy).await;

    // Assert
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Failed to copy text.");
    assert!(matches!(err, HandyError::Clipboard { ref context } if context == "permission denied"));
    assert!(legacy.copied.lock().is_empty());
}

#[tokio::test]
async fn test_legacy_failure_is_reported() {
    let legacy = FakeCopyCommand {
        unsupported: true,
        ..FakeCopyCommand::default()
    };

    let err = copy_to_clipboard("text", None, &legacy).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to copy text.");
    assert!(matches!(
        err,
        HandyError::Clipboard { ref context } if context == "copy command unsupported"
    ));
}
