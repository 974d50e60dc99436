//! Error types
//!
//! None of these are fatal to a session: every spin error resolves to a
//! well-defined controller state (`Idle` or a valid `Revealed`).

use thiserror::Error;

/// Errors raised while selecting a winner or running a spin
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpinError {
    /// There is nothing to spin; recoverable by adding options
    #[error("no options to spin")]
    EmptyOptionSet,
    /// Malformed or non-matching override; callers fall back to random
    #[error("invalid override: {reason}")]
    InvalidOverride { reason: String },
    /// The option list changed between selection and reveal
    #[error("outcome is stale: option list changed before reveal")]
    StaleOutcome,
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
