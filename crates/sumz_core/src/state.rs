use std::time::Duration;

use crate::view_model::{summary_panel, AppViewModel, ArticleRowView};
use crate::{CopyFeedback, RequestId, RequestState, COPY_FEEDBACK_TIMEOUT};

/// A summarized article. `url` is the identity key but is not unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub url: String,
    pub summary: String,
}

impl Article {
    pub fn new(url: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            summary: summary.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input: String,
    articles: Vec<Article>,
    request: RequestState,
    latest_request: Option<(RequestId, String)>,
    current_summary: Option<String>,
    copy_feedback: Option<CopyFeedback>,
    copy_generation: u64,
    copy_timeout: Duration,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            articles: Vec::new(),
            request: RequestState::Idle,
            latest_request: None,
            current_summary: None,
            copy_feedback: None,
            copy_generation: 0,
            copy_timeout: COPY_FEEDBACK_TIMEOUT,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose copy feedback resets after `timeout` instead of the default.
    pub fn with_copy_timeout(timeout: Duration) -> Self {
        Self {
            copy_timeout: timeout,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let copied = self.copy_feedback.as_ref().map(|c| c.url.as_str());
        AppViewModel {
            input: self.input.clone(),
            articles: self
                .articles
                .iter()
                .enumerate()
                .map(|(index, article)| ArticleRowView {
                    index,
                    url: article.url.clone(),
                    copied: copied == Some(article.url.as_str()),
                })
                .collect(),
            panel: summary_panel(&self.request, self.current_summary.as_deref()),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request
    }

    pub fn current_summary(&self) -> Option<&str> {
        self.current_summary.as_deref()
    }

    pub fn copy_feedback(&self) -> Option<&CopyFeedback> {
        self.copy_feedback.as_ref()
    }

    pub fn copy_timeout(&self) -> Duration {
        self.copy_timeout
    }

    /// Id of the most recently issued request, if any.
    pub fn latest_request_id(&self) -> Option<RequestId> {
        self.latest_request.as_ref().map(|(id, _)| *id)
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.mark_dirty();
        }
    }

    pub(crate) fn restore_articles(&mut self, articles: Vec<Article>) {
        self.articles = articles;
        if self
            .copy_feedback
            .as_ref()
            .is_some_and(|c| !self.articles.iter().any(|a| a.url == c.url))
        {
            self.copy_feedback = None;
        }
        self.mark_dirty();
    }

    /// Starts a new request, superseding any request still in flight.
    pub(crate) fn begin_request(&mut self, url: String) -> RequestId {
        let request_id = self.latest_request_id().map_or(1, |id| id + 1);
        self.latest_request = Some((request_id, url));
        self.request = RequestState::Pending;
        self.mark_dirty();
        request_id
    }

    /// URL of `request_id` if it is the latest request and still pending.
    pub(crate) fn pending_url(&self, request_id: RequestId) -> Option<&str> {
        if !self.request.is_pending() {
            return None;
        }
        match &self.latest_request {
            Some((id, url)) if *id == request_id => Some(url),
            _ => None,
        }
    }

    /// Appends the article and returns the list to persist.
    pub(crate) fn complete_with_summary(&mut self, url: String, summary: String) -> Vec<Article> {
        self.articles.push(Article::new(url, summary.clone()));
        self.current_summary = Some(summary.clone());
        self.request = RequestState::Succeeded(summary);
        self.mark_dirty();
        self.articles.clone()
    }

    pub(crate) fn fail_request(&mut self, message: String) {
        self.request = RequestState::Failed(message);
        self.mark_dirty();
    }

    pub(crate) fn abandon_request(&mut self) {
        self.request = RequestState::Idle;
        self.mark_dirty();
    }

    pub(crate) fn select_article(&mut self, index: usize) -> bool {
        let Some(article) = self.articles.get(index) else {
            return false;
        };
        self.current_summary = Some(article.summary.clone());
        self.input = article.url.clone();
        self.mark_dirty();
        true
    }

    /// Marks the article at `index` as copied; returns the URL and generation.
    pub(crate) fn start_copy_feedback(&mut self, index: usize) -> Option<(String, u64)> {
        let url = self.articles.get(index)?.url.clone();
        self.copy_generation += 1;
        let generation = self.copy_generation;
        self.copy_feedback = Some(CopyFeedback {
            url: url.clone(),
            generation,
        });
        self.mark_dirty();
        Some((url, generation))
    }

    pub(crate) fn expire_copy_feedback(&mut self, generation: u64) {
        if self
            .copy_feedback
            .as_ref()
            .is_some_and(|c| c.generation == generation)
        {
            self.copy_feedback = None;
            self.mark_dirty();
        }
    }
}
