//! Relay error taxonomy.
//!
//! These variants never cross the public `ask` boundary: they exist so the
//! fallback catalog and the logs can tell failure modes apart.

use thiserror::Error;

/// Everything that can go wrong between us and the model provider.
#[derive(Debug, Error)]
pub enum RelayError {
    /// No API credential configured; the call was never attempted.
    #[error("no API credential configured")]
    MissingCredential,

    /// Provider answered with a non-2xx status.
    #[error("upstream returned HTTP {status}: {snippet}")]
    UpstreamStatus {
        status: u16,
        /// Response body, truncated for diagnostics.
        snippet: String,
    },

    /// Provider answered 2xx but the body did not match the expected shape.
    #[error("unexpected upstream payload: {0}")]
    Parse(String),

    /// Connection-level failure (refused, DNS, reset).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The bounded request deadline elapsed; the in-flight call was aborted.
    #[error("upstream call timed out")]
    Timeout,
}
