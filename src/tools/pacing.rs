//! Pacing Policy
//!
//! Randomized waits inserted before and between outbound requests so the
//! traffic shape does not trip rate-based bot defenses. The actual wait goes
//! through a [`Sleeper`] so tests never touch the wall clock.

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Uniform jitter window `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingWindow {
    pub min: Duration,
    pub max: Duration,
}

impl PacingWindow {
    pub const ZERO: PacingWindow = PacingWindow {
        min: Duration::ZERO,
        max: Duration::ZERO,
    };

    pub const fn from_millis(min: u64, max: u64) -> Self {
        Self {
            min: Duration::from_millis(min),
            max: Duration::from_millis(max),
        }
    }

    /// Draw one delay from the window.
    pub fn sample(&self) -> Duration {
        let min = self.min.as_millis() as u64;
        let max = self.max.as_millis() as u64;
        if max <= min {
            return self.min;
        }
        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }
}

#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Clone)]
pub struct Pacer {
    sleeper: Arc<dyn Sleeper>,
}

impl Pacer {
    pub fn new(sleeper: Arc<dyn Sleeper>) -> Self {
        Self { sleeper }
    }

    pub fn tokio() -> Self {
        Self::new(Arc::new(TokioSleeper))
    }

    /// Wait for a delay drawn from `window`. Zero windows return immediately.
    pub async fn pause(&self, window: &PacingWindow) {
        let delay = window.sample();
        if delay.is_zero() {
            return;
        }
        tracing::trace!(delay_ms = delay.as_millis() as u64, "pacing");
        self.sleeper.sleep(delay).await;
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::tokio()
    }
}

/// Sleeper that records requested delays instead of waiting.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingSleeper {
    pub calls: std::sync::Mutex<Vec<Duration>>,
}

#[cfg(test)]
impl RecordingSleeper {
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.calls.lock().unwrap().push(duration);
    }
}
