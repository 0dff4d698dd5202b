use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Write-only access to the system text clipboard.
pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
