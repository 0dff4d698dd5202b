use crate::RequestState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub articles: Vec<ArticleRowView>,
    pub panel: SummaryPanel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRowView {
    pub index: usize,
    pub url: String,
    /// The copy button shows a tick instead of the copy icon.
    pub copied: bool,
}

/// What the area below the article list shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SummaryPanel {
    #[default]
    Hidden,
    Loading,
    Error {
        message: String,
    },
    Summary(String),
}

/// Derives the summary panel from the request lifecycle and the summary
/// currently on display. Pending and failed requests take precedence over any
/// summary.
pub fn summary_panel(request: &RequestState, current_summary: Option<&str>) -> SummaryPanel {
    match request {
        RequestState::Pending => SummaryPanel::Loading,
        RequestState::Failed(message) => SummaryPanel::Error {
            message: message.clone(),
        },
        RequestState::Idle | RequestState::Succeeded(_) => match current_summary {
            Some(summary) if !summary.is_empty() => SummaryPanel::Summary(summary.to_owned()),
            _ => SummaryPanel::Hidden,
        },
    }
}
