use std::time::Duration;

use crate::{Article, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the remote service for a summary of `url`.
    RequestSummary { request_id: RequestId, url: String },
    /// Replace the persisted article list with this snapshot.
    PersistArticles(Vec<Article>),
    /// Best-effort write to the system clipboard.
    WriteClipboard { text: String },
    /// Deliver `Msg::CopyFeedbackExpired { generation }` after `after`.
    ScheduleCopyReset { generation: u64, after: Duration },
}
