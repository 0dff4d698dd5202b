//! Sumz core: pure article-session state machine and view-state derivation.
mod copy_feedback;
mod effect;
mod msg;
mod request;
mod state;
mod update;
mod view_model;

pub use copy_feedback::{CopyFeedback, COPY_FEEDBACK_TIMEOUT};
pub use effect::Effect;
pub use msg::Msg;
pub use request::{RequestId, RequestState, SummaryOutcome};
pub use state::{AppState, Article};
pub use update::update;
pub use view_model::{summary_panel, AppViewModel, ArticleRowView, SummaryPanel};
