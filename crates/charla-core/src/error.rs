//! Core domain errors.

use thiserror::Error;

/// Core domain errors for Charla.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Context configuration is unusable.
    #[error("Invalid context configuration: {0}")]
    InvalidConfig(String),
}
