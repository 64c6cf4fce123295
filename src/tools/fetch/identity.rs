//! Outbound browser identity shared by every request of a session.

use super::profile::BrowserProfile;
use super::utils::cookie_pairs;
use rand::seq::SliceRandom;
use std::sync::{Mutex, MutexGuard};

/// Snapshot of what the next request presents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_agent: String,
    pub cookie: String,
}

#[derive(Debug)]
struct IdentityState {
    user_agent: String,
    cookie: String,
}

/// Single-writer owner of the user agent and session cookie.
///
/// The same identity is presented to both catalog sites. All mutation goes
/// through the inner mutex, which is never held across an `.await`.
#[derive(Debug)]
pub struct IdentityRotator {
    pool: Vec<String>,
    state: Mutex<IdentityState>,
}

impl IdentityRotator {
    /// Empty pools fall back to [`BrowserProfile::default_pool`].
    pub fn new(pool: Vec<String>) -> Self {
        let pool: Vec<String> = pool.into_iter().filter(|ua| !ua.trim().is_empty()).collect();
        let pool = if pool.is_empty() {
            BrowserProfile::default_pool()
        } else {
            pool
        };
        let state = IdentityState {
            user_agent: pool[0].clone(),
            cookie: String::new(),
        };
        Self {
            pool,
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> MutexGuard<'_, IdentityState> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn current(&self) -> Identity {
        let state = self.lock();
        Identity {
            user_agent: state.user_agent.clone(),
            cookie: state.cookie.clone(),
        }
    }

    /// Pick the next user agent uniformly at random from the pool.
    pub fn rotate(&self) -> String {
        let next = self
            .pool
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default();
        self.lock().user_agent = next.clone();
        next
    }

    /// Replace the stored cookie with the `name=value` pairs of `set_cookie`.
    ///
    /// Returns false (and keeps the old cookie) when no usable cookie came back.
    pub fn absorb_cookies<S: AsRef<str>>(&self, set_cookie: &[S]) -> bool {
        let cookie = cookie_pairs(set_cookie);
        if cookie.is_empty() {
            return false;
        }
        tracing::debug!(cookies = set_cookie.len(), "session cookie replaced");
        self.lock().cookie = cookie;
        true
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }
}

impl Default for IdentityRotator {
    fn default() -> Self {
        Self::new(BrowserProfile::default_pool())
    }
}
