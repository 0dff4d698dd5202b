use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use sumz_core::COPY_FEEDBACK_TIMEOUT;
use sumz_engine::SummarizeSettings;
use sumz_logging::{LevelFilter, LogDestination, LogSettings};

const CONFIG_FILENAME: &str = "sumz.ron";
const CONFIG_PATH_ENV: &str = "SUMZ_CONFIG";
const API_KEY_ENV: &str = "SUMZ_API_KEY";
const DEFAULT_DATA_DIR: &str = "data";

/// On-disk RON configuration. Every field is optional; missing values fall
/// back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ConfigFile {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub api_host: Option<String>,
    pub summary_length: Option<u8>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub max_response_bytes: Option<u64>,
    pub data_dir: Option<PathBuf>,
    pub copy_feedback_ms: Option<u64>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct LogConfig {
    pub destination: Option<LogTarget>,
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub(crate) enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

/// Fully resolved host configuration.
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub summarize: SummarizeSettings,
    pub data_dir: PathBuf,
    pub copy_feedback: Duration,
    pub log: LogSettings,
}

/// Loads `$SUMZ_CONFIG` or `./sumz.ron` if present; `$SUMZ_API_KEY` wins over
/// the file's API key.
pub(crate) fn load() -> Result<AppConfig> {
    let path = std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let file = load_from_path(&path)?.unwrap_or_default();
    let api_key = std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
    resolve(file, api_key)
}

fn load_from_path(path: &Path) -> Result<Option<ConfigFile>> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("reading config {}", path.display()))
        }
    };
    let file = ron::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(Some(file))
}

pub(crate) fn resolve(file: ConfigFile, api_key_override: Option<String>) -> Result<AppConfig> {
    let defaults = SummarizeSettings::default();
    let summarize = SummarizeSettings {
        endpoint: file.endpoint.unwrap_or(defaults.endpoint),
        api_key: api_key_override.or(file.api_key),
        api_host: file.api_host.or(defaults.api_host),
        summary_length: file.summary_length.unwrap_or(defaults.summary_length),
        connect_timeout: file
            .connect_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.connect_timeout),
        request_timeout: file
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
        redirect_limit: defaults.redirect_limit,
        max_response_bytes: file
            .max_response_bytes
            .unwrap_or(defaults.max_response_bytes),
    };

    let log_file = file.log.unwrap_or_default();
    let mut log = LogSettings {
        destination: LogDestination::File,
        ..LogSettings::default()
    };
    if let Some(target) = log_file.destination {
        log.destination = target.into();
    }
    if let Some(level) = log_file.level {
        log.level = level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("unknown log level {level:?}"))?;
    }
    if let Some(path) = log_file.file {
        log.file_path = path;
    }

    Ok(AppConfig {
        summarize,
        data_dir: file
            .data_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        copy_feedback: file
            .copy_feedback_ms
            .map(Duration::from_millis)
            .unwrap_or(COPY_FEEDBACK_TIMEOUT),
        log,
    })
}
