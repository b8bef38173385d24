//! Status provider error types

use thiserror::Error;

/// Failures of a single status poll
///
/// Every variant is local to the tick that produced it; the sync loop logs
/// it and moves on to the next tick.
#[derive(Debug, Error)]
pub enum StatusError {
    /// The probe process could not be launched
    #[error("Failed to run status probe: {0}")]
    Spawn(#[from] std::io::Error),

    /// The probe exited non-zero
    #[error("Status probe failed: {0}")]
    Script(String),

    /// The probe's output was not a valid status payload
    #[error("Unparseable status payload: {0}")]
    Parse(#[from] serde_json::Error),
}
