//! Sumz engine: summarization transport, article persistence and effect execution.
mod article_store;
mod clipboard;
mod engine;
mod persist;
mod session;
mod storage;
mod summarize;
mod types;

pub use article_store::{decode_articles, encode_articles, ArticleStore, ARTICLES_KEY};
pub use clipboard::{ClipboardError, ClipboardWriter};
pub use engine::EngineHandle;
pub use persist::{ensure_data_dir, AtomicFileWriter, PersistError};
pub use session::SessionController;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use summarize::{ReqwestSummaryClient, SummarizeSettings, SummaryClient};
pub use types::{EngineEvent, FailureKind, SummarizeError, GENERIC_FAILURE_MESSAGE};
