//! Clipboard functionality for copying results.

use anyhow::{Context, Result};
use arboard::Clipboard;
use tracing::info;

/// Copy text to the system clipboard.
///
/// On Linux this blocks until another program takes over the selection, since
/// X11 and Wayland only serve it while the owning process is alive.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;

    set_text(&mut clipboard, text).context("Failed to copy to clipboard")?;

    info!(text, "copied result to clipboard");
    Ok(())
}

#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    clipboard.set().wait().text(text.to_string())
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_string())
}
