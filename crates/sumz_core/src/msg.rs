#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current URL input for summarization.
    UrlSubmitted,
    /// Restore previously summarized articles from persisted state.
    RestoreArticles(Vec<crate::Article>),
    /// Remote summarization finished for a request.
    SummaryResolved {
        request_id: crate::RequestId,
        outcome: crate::SummaryOutcome,
    },
    /// User picked a stored article from the history list.
    ArticleSelected { index: usize },
    /// User clicked the copy button of a stored article.
    CopyClicked { index: usize },
    /// A copy feedback timer fired.
    CopyFeedbackExpired { generation: u64 },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
