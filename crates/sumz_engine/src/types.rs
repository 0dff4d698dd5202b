use std::fmt;

use sumz_core::RequestId;
use thiserror::Error;

/// Shown when the service gives no explanation of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong while summarizing the article.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SummaryCompleted {
        request_id: RequestId,
        result: Result<String, SummarizeError>,
    },
    CopyResetDue {
        generation: u64,
    },
}

/// A failed summarization. `message` is fit for display to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct SummarizeError {
    pub kind: FailureKind,
    pub message: String,
}

impl SummarizeError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn generic(kind: FailureKind) -> Self {
        Self::new(kind, GENERIC_FAILURE_MESSAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedPayload,
    EmptySummary,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedPayload => write!(f, "malformed payload"),
            FailureKind::EmptySummary => write!(f, "no summary in response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
