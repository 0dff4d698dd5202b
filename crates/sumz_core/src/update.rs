use crate::{AppState, Effect, Msg, SummaryOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::UrlSubmitted => {
            let Some(url) = submitted_url(state.input()) else {
                return (state, Vec::new());
            };
            let request_id = state.begin_request(url.clone());
            vec![Effect::RequestSummary { request_id, url }]
        }
        Msg::RestoreArticles(articles) => {
            state.restore_articles(articles);
            Vec::new()
        }
        Msg::SummaryResolved {
            request_id,
            outcome,
        } => {
            // Superseded or already settled requests never touch state.
            let Some(url) = state.pending_url(request_id).map(ToOwned::to_owned) else {
                return (state, Vec::new());
            };
            match outcome {
                SummaryOutcome::Summary(summary) if !summary.trim().is_empty() => {
                    let articles = state.complete_with_summary(url, summary);
                    vec![Effect::PersistArticles(articles)]
                }
                SummaryOutcome::Summary(_) | SummaryOutcome::Empty => {
                    state.abandon_request();
                    Vec::new()
                }
                SummaryOutcome::Failed(message) => {
                    state.fail_request(message);
                    Vec::new()
                }
            }
        }
        Msg::ArticleSelected { index } => {
            state.select_article(index);
            Vec::new()
        }
        Msg::CopyClicked { index } => match state.start_copy_feedback(index) {
            Some((url, generation)) => vec![
                Effect::WriteClipboard { text: url },
                Effect::ScheduleCopyReset {
                    generation,
                    after: state.copy_timeout(),
                },
            ],
            None => Vec::new(),
        },
        Msg::CopyFeedbackExpired { generation } => {
            state.expire_copy_feedback(generation);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Form-level validation: a non-empty absolute URL, trimmed of whitespace.
fn submitted_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    url::Url::parse(trimmed).ok()?;
    Some(trimmed.to_owned())
}
