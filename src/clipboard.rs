//! Read-only system clipboard access via arboard.
//!
//! Queried only when the clipboard-sync action executes, never at
//! suggestion time.

pub fn read_text() -> Result<String, String> {
    use arboard::Clipboard;

    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Failed to open clipboard: {e}"))?;
    clipboard
        .get_text()
        .map_err(|e| format!("Failed to read clipboard: {e}"))
}
