//! Environment configuration (optionally loaded from `.env`).
//!
//! | variable            | meaning                                   | default        |
//! |---------------------|-------------------------------------------|----------------|
//! | `BOOSTERS_SEED`     | seed for the noisy analytics generators   | fresh entropy  |
//! | `BOOSTERS_LOG`      | tracing filter directive                  | `info`         |
//! | `BOOSTERS_LOG_FILE` | log file used while the TUI owns stdout   | `boosters.log` |
//! | `BOOSTERS_OPENER`   | command used to open links                | platform opener|

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

pub const ENV_SEED: &str = "BOOSTERS_SEED";
pub const ENV_LOG: &str = "BOOSTERS_LOG";
pub const ENV_LOG_FILE: &str = "BOOSTERS_LOG_FILE";
pub const ENV_OPENER: &str = "BOOSTERS_OPENER";

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_LOG_FILE: &str = "boosters.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed: Option<u64>,
    pub log_filter: String,
    pub log_file: PathBuf,
    pub opener: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            opener: None,
        }
    }
}

impl Settings {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut settings = Settings::default();

        if let Some(raw) = get(ENV_SEED) {
            let seed = raw
                .parse::<u64>()
                .map_err(|e| AppError::new(2, format!("Invalid {ENV_SEED} '{raw}': {e}")))?;
            settings.seed = Some(seed);
        }
        if let Some(filter) = get(ENV_LOG) {
            EnvFilter::try_new(&filter)
                .map_err(|e| AppError::new(2, format!("Invalid {ENV_LOG} '{filter}': {e}")))?;
            settings.log_filter = filter;
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            settings.log_file = PathBuf::from(path);
        }
        settings.opener = get(ENV_OPENER);

        Ok(settings)
    }
}
