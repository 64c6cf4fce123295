//! Shared Session
//!
//! The mutable state every request of a process sees: one outbound identity
//! and the cache namespaces. Owned by the engine and handed out by `Arc`.

use crate::config::ScoutConfig;
use crate::tools::cache::{Clock, ResponseCache, SystemClock};
use crate::tools::fetch::IdentityRotator;
use std::sync::Arc;

pub struct Session {
    pub identity: IdentityRotator,
    pub cache: ResponseCache,
}

impl Session {
    pub fn new(cfg: &ScoutConfig) -> Self {
        Self::with_clock(cfg, Arc::new(SystemClock))
    }

    pub fn with_clock(cfg: &ScoutConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            identity: IdentityRotator::new(cfg.user_agents.clone()),
            cache: ResponseCache::with_clock(cfg.cache_ttl, clock),
        }
    }
}
