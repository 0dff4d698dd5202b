use std::time::Duration;

/// How long the "copied" marker stays on an article row.
pub const COPY_FEEDBACK_TIMEOUT: Duration = Duration::from_millis(2000);

/// The article URL most recently copied, tagged with the generation of the
/// copy action that set it. Only a reset carrying the same generation may
/// clear it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    pub url: String,
    pub generation: u64,
}
