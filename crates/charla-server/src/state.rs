//! Shared application state.

use std::sync::Arc;

use charla_core::{ContextBuilder, ContextConfig, CoreError};
use charla_relay::Relay;

use crate::config::Config;
use crate::persona::{KeywordRouter, PersonaRouter};
use crate::policy::PolicyGuard;
use crate::ratelimit::RateLimiter;

/// Shared application state.
///
/// Everything here is either immutable after startup or internally
/// synchronized (the rate limiter); requests never coordinate with each
/// other beyond that.
pub struct AppState {
    /// Service configuration, loaded once.
    pub config: Config,

    /// Prompt assembly.
    pub builder: ContextBuilder,

    /// Upstream relay client.
    pub relay: Relay,

    /// Per-IP request limiter.
    pub limiter: RateLimiter,

    /// Persona selection strategy.
    pub personas: Box<dyn PersonaRouter>,

    /// Denylist guard, checked before the relay is reached.
    pub policy: PolicyGuard,
}

impl AppState {
    /// Create the shared state wrapped in Arc.
    pub fn new(config: Config) -> Result<Arc<Self>, CoreError> {
        let builder = ContextBuilder::new(ContextConfig::default())?;
        let relay = Relay::new(config.relay_config());
        let limiter = RateLimiter::new(config.rate_limit_max, config.rate_limit_window);
        let policy = PolicyGuard::new(config.denylist.clone());

        Ok(Arc::new(Self {
            config,
            builder,
            relay,
            limiter,
            personas: Box::new(KeywordRouter),
            policy,
        }))
    }
}
