use thiserror::Error;

/// Errors raised by state transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("no project card at index {0}")]
    UnknownCard(usize),
    #[error("a contact submission is already in flight")]
    SubmissionInFlight,
}

/// Errors raised while loading the embedded site config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}
