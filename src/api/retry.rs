//! Bounded exponential back-off

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::failure::ApiFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Retries after the initial attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Delay before the first retry; doubles for each further retry
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
}

fn default_max_retries() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `retry` (0-based) after a response with
    /// `status`, or `None` when the request must not be retried
    pub fn next_delay(&self, status: u16, retry: u32) -> Option<Duration> {
        let failure = ApiFailure::from_status(status)?;
        if !failure.is_retryable() || retry >= self.max_retries {
            return None;
        }
        let factor = 1u64.checked_shl(retry).unwrap_or(u64::MAX);
        Some(Duration::from_millis(self.base_delay_ms.saturating_mul(factor)))
    }

    /// Full delay schedule for a persistently failing server
    pub fn schedule(&self) -> Vec<Duration> {
        (0..self.max_retries)
            .filter_map(|retry| self.next_delay(500, retry))
            .collect()
    }
}
