use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::ACCEPT;
use serde_json::Value;
use sumz_logging::{sumz_debug, sumz_warn};

use crate::{FailureKind, SummarizeError, GENERIC_FAILURE_MESSAGE};

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

#[derive(Debug, Clone)]
pub struct SummarizeSettings {
    /// Full URL of the summarize endpoint; the article URL is added as `?url=`.
    pub endpoint: String,
    pub api_key: Option<String>,
    pub api_host: Option<String>,
    /// Requested summary length in paragraphs, sent as `&length=`.
    pub summary_length: u8,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_response_bytes: u64,
}

impl Default for SummarizeSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://article-extractor-and-summarizer.p.rapidapi.com/summarize"
                .to_string(),
            api_key: None,
            api_host: Some("article-extractor-and-summarizer.p.rapidapi.com".to_string()),
            summary_length: 3,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_response_bytes: 1024 * 1024,
        }
    }
}

/// Opaque remote summarizer.
#[async_trait::async_trait]
pub trait SummaryClient: Send + Sync {
    async fn summarize(&self, article_url: &str) -> Result<String, SummarizeError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSummaryClient {
    settings: SummarizeSettings,
}

impl ReqwestSummaryClient {
    /// Fails only when the HTTP client cannot be built from `settings`.
    pub fn new(settings: SummarizeSettings) -> Result<Self, SummarizeError> {
        let client = Self { settings };
        client.build_client(Arc::new(AtomicUsize::new(0)))?;
        Ok(client)
    }

    pub fn settings(&self) -> &SummarizeSettings {
        &self.settings
    }

    /// Each request gets its own client so its redirect count is not shared
    /// with overlapping requests.
    fn build_client(
        &self,
        redirect_counter: Arc<AtomicUsize>,
    ) -> Result<reqwest::Client, SummarizeError> {
        let redirect_limit = self.settings.redirect_limit;
        let policy = reqwest::redirect::Policy::custom(move |attempt| {
            let count = attempt.previous().len();
            redirect_counter.store(count, Ordering::Relaxed);
            if count >= redirect_limit {
                attempt.error("redirect limit exceeded")
            } else {
                attempt.follow()
            }
        });

        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(policy)
            .build()
            .map_err(|err| {
                sumz_warn!("HTTP client setup failed: {}", err);
                SummarizeError::generic(FailureKind::Network)
            })
    }

    fn request_url(&self, article_url: &str) -> Result<reqwest::Url, SummarizeError> {
        let mut url = reqwest::Url::parse(&self.settings.endpoint).map_err(|err| {
            sumz_warn!("Summary endpoint {:?} is invalid: {}", self.settings.endpoint, err);
            SummarizeError::generic(FailureKind::InvalidEndpoint)
        })?;
        url.query_pairs_mut()
            .append_pair("url", article_url)
            .append_pair("length", &self.settings.summary_length.to_string());
        Ok(url)
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, SummarizeError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(SummarizeError::generic(FailureKind::TooLarge {
                    max_bytes,
                    actual: Some(content_len),
                }));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(SummarizeError::generic(FailureKind::TooLarge {
                    max_bytes,
                    actual: Some(next_len),
                }));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl SummaryClient for ReqwestSummaryClient {
    async fn summarize(&self, article_url: &str) -> Result<String, SummarizeError> {
        let url = self.request_url(article_url)?;
        let redirect_counter = Arc::new(AtomicUsize::new(0));
        let client = self.build_client(redirect_counter.clone())?;
        let mut request = client.get(url).header(ACCEPT, "application/json");
        if let Some(key) = &self.settings.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        if let Some(host) = &self.settings.api_host {
            request = request.header(API_HOST_HEADER, host);
        }

        let response = request.send().await.map_err(|err| {
            sumz_warn!("Summary request for {} failed: {}", article_url, err);
            map_reqwest_error(err)
        })?;
        let status = response.status();
        let body = self.read_body(response).await?;
        sumz_debug!(
            "Summary response status={} bytes={} redirects={}",
            status,
            body.len(),
            redirect_counter.load(Ordering::Relaxed)
        );

        if !status.is_success() {
            let message =
                error_message(&body).unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            return Err(SummarizeError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        parse_summary(&body)
    }
}

/// Extracts `error` from `{"error": "…"}` or `{"error": {"error": "…"}}`.
fn error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let message = match value.get("error")? {
        Value::String(text) => text.clone(),
        Value::Object(inner) => inner.get("error")?.as_str()?.to_owned(),
        _ => return None,
    };
    (!message.trim().is_empty()).then_some(message)
}

fn parse_summary(body: &[u8]) -> Result<String, SummarizeError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| SummarizeError::generic(FailureKind::MalformedPayload))?;
    match value.get("summary").and_then(Value::as_str) {
        Some(summary) if !summary.trim().is_empty() => Ok(summary.to_owned()),
        _ => Err(SummarizeError::generic(FailureKind::EmptySummary)),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SummarizeError {
    if err.is_timeout() {
        return SummarizeError::generic(FailureKind::Timeout);
    }
    if err.is_redirect() {
        return SummarizeError::generic(FailureKind::RedirectLimitExceeded);
    }
    SummarizeError::generic(FailureKind::Network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_accepts_flat_and_nested_shapes() {
        assert_eq!(
            error_message(br#"{"error":"rate limited"}"#),
            Some("rate limited".to_string())
        );
        assert_eq!(
            error_message(br#"{"error":{"error":"rate limited"}}"#),
            Some("rate limited".to_string())
        );
    }

    #[test]
    fn error_message_rejects_missing_or_blank() {
        assert_eq!(error_message(b""), None);
        assert_eq!(error_message(b"<html>oops</html>"), None);
        assert_eq!(error_message(br#"{"message":"x"}"#), None);
        assert_eq!(error_message(br#"{"error":"  "}"#), None);
        assert_eq!(error_message(br#"{"error":42}"#), None);
    }

    #[test]
    fn summary_field_must_be_a_non_blank_string() {
        assert_eq!(parse_summary(br#"{"summary":"ok"}"#), Ok("ok".to_string()));
        for body in [
            br#"{}"#.as_slice(),
            br#"{"summary":null}"#.as_slice(),
            br#"{"summary":""}"#.as_slice(),
            br#"{"summary":7}"#.as_slice(),
        ] {
            assert_eq!(parse_summary(body).unwrap_err().kind, FailureKind::EmptySummary);
        }
        assert_eq!(
            parse_summary(b"not json").unwrap_err().kind,
            FailureKind::MalformedPayload
        );
    }

    #[test]
    fn request_url_carries_article_and_length() {
        let client = ReqwestSummaryClient::new(SummarizeSettings {
            endpoint: "http://localhost:1/summarize".into(),
            ..SummarizeSettings::default()
        })
        .unwrap();
        let url = client.request_url("https://example.com/a?b=c").unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("url".to_string(), "https://example.com/a?b=c".to_string()),
                ("length".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn invalid_endpoint_is_reported() {
        let client = ReqwestSummaryClient::new(SummarizeSettings {
            endpoint: "not a url".into(),
            ..SummarizeSettings::default()
        })
        .unwrap();
        let err = client.request_url("https://example.com").unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidEndpoint);
        assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
    }
}
