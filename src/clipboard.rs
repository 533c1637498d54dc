// Clipboard access behind a small trait
//
// Uses `arboard` for cross-platform support (Windows, macOS, Linux).
// The clipboard handle is created fresh each time to avoid holding
// resources. The trait exists so copy/paste logic can be exercised in
// tests with stub clipboards.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Read/write access to a text clipboard
///
/// Common failure cases for the system implementation: no display server
/// (headless Linux), permission denied, non-text clipboard contents.
pub trait ClipboardAccess {
    /// Write text to the clipboard
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Read the clipboard's current text contents
    fn read_text(&mut self) -> Result<String>;
}

/// The system clipboard via `arboard`
pub struct SystemClipboard;

impl ClipboardAccess for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to set clipboard text")?;
        Ok(())
    }

    fn read_text(&mut self) -> Result<String> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard.get_text().context("Failed to read clipboard text")
    }
}
