//! Charla Core Domain Types
//!
//! This crate contains pure domain logic with no dependencies on:
//! - Network/HTTP
//! - Runtime specifics
//!
//! The central piece is [`ContextBuilder`], which turns a client-submitted
//! `(question, history)` pair into the exact message list sent to the
//! upstream model. All history lives client-side and is resent on every
//! request; nothing here holds state between calls.

pub mod chat;
pub mod context;
pub mod error;
pub mod lang;
pub mod text;

// Re-export commonly used types
pub use chat::{PromptMessage, PromptRole, Turn};
pub use context::{ContextBuilder, ContextConfig};
pub use error::CoreError;
pub use lang::Lang;
