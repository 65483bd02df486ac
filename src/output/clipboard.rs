use arboard::Clipboard;

use crate::error::ScanError;

/// Write plain text to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), ScanError> {
    let mut clipboard =
        Clipboard::new().map_err(|e| ScanError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ScanError::Clipboard(e.to_string()))
}
