use thiserror::Error;

/// Process-boundary error: a message plus the exit code `main` returns.
///
/// Exit codes: `2` for usage, configuration and file errors, `4` for runtime
/// failures (terminal, data integrity).
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Marketplace-level failures.
///
/// Only `InvalidEmail` is user-reachable; the rest indicate bad reference data
/// or a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("unknown channel id {0}")]
    UnknownChannel(u32),
    #[error("month '{0}' has zero days")]
    EmptyMonth(String),
    #[error("subscriber baseline for '{month}' reconstructs to {start} (< 0)")]
    NegativeBaseline { month: String, start: i64 },
    #[error("catalog entry for channel {channel} is inconsistent: {reason}")]
    InconsistentCatalog { channel: u32, reason: String },
}

impl From<MarketError> for AppError {
    fn from(err: MarketError) -> Self {
        let code = match err {
            MarketError::UnknownChannel(_) => 2,
            _ => 4,
        };
        AppError::new(code, err.to_string())
    }
}

/// Login failures reported by an [`Authenticator`](crate::session::Authenticator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("credentials rejected")]
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_channel_maps_to_usage_exit_code() {
        let err: AppError = MarketError::UnknownChannel(9).into();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "unknown channel id 9");
    }

    #[test]
    fn integrity_errors_map_to_runtime_exit_code() {
        let err: AppError = MarketError::NegativeBaseline {
            month: "Aug 24".to_string(),
            start: -5,
        }
        .into();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("Aug 24"));
    }
}
