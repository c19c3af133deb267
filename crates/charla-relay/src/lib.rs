//! Charla Upstream Relay
//!
//! The single network-facing piece of the service: posts an assembled prompt
//! to the provider's chat-completions endpoint and *always* resolves to
//! displayable text. Every failure mode (missing credential, non-2xx,
//! malformed payload, transport error, timeout) maps to a deterministic
//! localized fallback string; no error ever escapes [`Relay::ask`].
//!
//! One attempt per call. Caller-side retry, if any, belongs to the client.

pub mod client;
pub mod error;
pub mod fallback;
mod wire;

pub use client::{Relay, RelayConfig};
pub use error::RelayError;
