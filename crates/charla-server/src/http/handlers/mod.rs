//! HTTP request handlers.

mod ask;
mod health;
mod page;

pub use ask::ask;
pub use health::healthz;
pub use page::chat_page;
