//! Clipboard hand-off for computed results.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard.
///
/// Failures (headless session, no clipboard manager) are ordinary
/// errors; callers log them and move on.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("accessing the clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("copying to the clipboard")
}
