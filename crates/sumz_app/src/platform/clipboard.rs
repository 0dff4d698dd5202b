use std::cell::RefCell;

use sumz_engine::{ClipboardError, ClipboardWriter};

/// System clipboard via `arboard`. The handle is opened on first use and kept
/// so the copied text stays available on platforms where the owning process
/// serves it.
#[derive(Default)]
pub(crate) struct SystemClipboard {
    inner: RefCell<Option<arboard::Clipboard>>,
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut slot = self.inner.borrow_mut();
        if slot.is_none() {
            *slot = Some(arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?);
        }
        match slot.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_owned())
                .map_err(|e| ClipboardError(e.to_string())),
            None => Err(ClipboardError("clipboard unavailable".into())),
        }
    }
}
