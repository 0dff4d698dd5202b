/// Sequence number of a summarization request. The first request is 1.
pub type RequestId = u64;

/// Lifecycle of the most recent summarization attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }
}

/// How a summarization request resolved, as seen by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// The service produced a usable summary.
    Summary(String),
    /// The request failed; the message is shown to the user.
    Failed(String),
    /// The service answered without a usable summary.
    Empty,
}
