use std::time::{Duration, Instant};

use sumz_core::{update, AppState, AppViewModel, Effect, Msg, SummaryOutcome};
use sumz_logging::{sumz_debug, sumz_info, sumz_warn};

use crate::{ArticleStore, ClipboardWriter, EngineEvent, EngineHandle, FailureKind};

/// Owns the article session: runs the pure state machine, persists the
/// article list through the injected store, and hands remote work and timers
/// to the engine.
pub struct SessionController {
    state: AppState,
    store: ArticleStore,
    clipboard: Box<dyn ClipboardWriter>,
    engine: EngineHandle,
}

impl SessionController {
    /// Loads the store once; stored articles are listed but none is selected.
    pub fn new(
        state: AppState,
        store: ArticleStore,
        clipboard: Box<dyn ClipboardWriter>,
        engine: EngineHandle,
    ) -> Self {
        let articles = store.load();
        let mut controller = Self {
            state,
            store,
            clipboard,
            engine,
        };
        if !articles.is_empty() {
            sumz_info!("Restoring {} stored articles", articles.len());
            controller.dispatch(Msg::RestoreArticles(articles));
        }
        controller
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    /// Applies `msg` and runs its effects. Persistence completes before this returns.
    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.run_effect(effect);
        }
    }

    pub fn submit(&mut self, url: impl Into<String>) {
        self.dispatch(Msg::InputChanged(url.into()));
        self.dispatch(Msg::UrlSubmitted);
    }

    pub fn select(&mut self, index: usize) {
        self.dispatch(Msg::ArticleSelected { index });
    }

    pub fn copy(&mut self, index: usize) {
        self.dispatch(Msg::CopyClicked { index });
    }

    /// Handles every engine event already waiting; returns how many there were.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.engine.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Handles engine events until `done` holds or `timeout` elapses.
    pub fn pump_until(&mut self, timeout: Duration, done: impl Fn(&AppState) -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if done(&self.state) {
                return true;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.engine.recv_timeout(remaining) {
                Some(event) => self.handle_event(event),
                None => return done(&self.state),
            }
        }
    }

    /// Handles engine events for the whole of `duration`.
    pub fn pump_for(&mut self, duration: Duration) {
        let deadline = Instant::now() + duration;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return;
            }
            if let Some(event) = self.engine.recv_timeout(remaining) {
                self.handle_event(event);
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::RequestSummary { request_id, url } => {
                sumz_info!("RequestSummary request_id={} url={}", request_id, url);
                self.engine.summarize(request_id, url);
            }
            Effect::PersistArticles(articles) => {
                self.store.save(&articles);
            }
            Effect::WriteClipboard { text } => {
                if let Err(err) = self.clipboard.write_text(&text) {
                    sumz_warn!("Copy of {} failed: {}", text, err);
                }
            }
            Effect::ScheduleCopyReset { generation, after } => {
                self.engine.schedule_copy_reset(generation, after);
            }
        }
    }

    fn handle_event(&mut self, event: EngineEvent) {
        let msg = match event {
            EngineEvent::SummaryCompleted { request_id, result } => {
                if self.state.latest_request_id() != Some(request_id) {
                    sumz_debug!("Discarding stale response request_id={}", request_id);
                }
                let outcome = match result {
                    Ok(summary) => SummaryOutcome::Summary(summary),
                    Err(err) if err.kind == FailureKind::EmptySummary => SummaryOutcome::Empty,
                    Err(err) => SummaryOutcome::Failed(err.message),
                };
                Msg::SummaryResolved {
                    request_id,
                    outcome,
                }
            }
            EngineEvent::CopyResetDue { generation } => Msg::CopyFeedbackExpired { generation },
        };
        self.dispatch(msg);
    }
}
