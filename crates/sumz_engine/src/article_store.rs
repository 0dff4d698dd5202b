use serde::{Deserialize, Serialize};
use sumz_core::Article;
use sumz_logging::{sumz_debug, sumz_error, sumz_warn};

use crate::storage::KeyValueStorage;

/// Storage slot holding the serialized article list.
pub const ARTICLES_KEY: &str = "articles";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedArticle {
    url: String,
    summary: String,
}

/// Durable list of summarized articles, kept as one JSON array in a single slot.
pub struct ArticleStore {
    storage: Box<dyn KeyValueStorage>,
}

impl ArticleStore {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Reads the persisted list. Missing, empty or unreadable data is an empty list.
    pub fn load(&self) -> Vec<Article> {
        let content = match self.storage.get_item(ARTICLES_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(err) => {
                sumz_warn!("Failed to read persisted articles: {}", err);
                return Vec::new();
            }
        };
        if content.trim().is_empty() {
            return Vec::new();
        }

        match decode_articles(&content) {
            Ok(articles) => {
                sumz_debug!("Loaded {} persisted articles", articles.len());
                articles
            }
            Err(err) => {
                sumz_warn!("Ignoring unparseable persisted articles: {}", err);
                Vec::new()
            }
        }
    }

    /// Replaces the persisted list with `articles`. Failures are logged only.
    pub fn save(&self, articles: &[Article]) {
        let content = match encode_articles(articles) {
            Ok(text) => text,
            Err(err) => {
                sumz_error!("Failed to serialize articles: {}", err);
                return;
            }
        };
        if let Err(err) = self.storage.set_item(ARTICLES_KEY, &content) {
            sumz_error!("Failed to write persisted articles: {}", err);
        }
    }
}

/// Serializes articles as a JSON array of `{"url", "summary"}` records.
pub fn encode_articles(articles: &[Article]) -> Result<String, serde_json::Error> {
    let persisted: Vec<PersistedArticle> = articles
        .iter()
        .map(|article| PersistedArticle {
            url: article.url.clone(),
            summary: article.summary.clone(),
        })
        .collect();
    serde_json::to_string(&persisted)
}

pub fn decode_articles(content: &str) -> Result<Vec<Article>, serde_json::Error> {
    let persisted: Vec<PersistedArticle> = serde_json::from_str(content)?;
    Ok(persisted
        .into_iter()
        .map(|article| Article::new(article.url, article.summary))
        .collect())
}
