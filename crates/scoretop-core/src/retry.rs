//! Bounded retry for the report pipeline.
//!
//! A failed attempt restarts the whole pipeline from the source snapshot;
//! no stage result is carried across attempts.

use std::time::Duration;

use crate::config::retry as retry_config;

/// How many times to attempt an operation and how long to pause between
/// attempts.
pub trait RetryStrategy {
    /// Total attempt bound, including the first attempt.
    fn max_attempts(&self) -> u32;

    /// Pause after the given failed attempt (0-indexed), or `None` for an
    /// immediate retry.
    fn delay_after_attempt(&self, attempt: u32) -> Option<Duration>;

    /// Calls `f` with the attempt number until it succeeds or the bound is
    /// exhausted; exhaustion returns the last error.
    fn execute<T, E, F>(&self, mut f: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Result<T, E>,
    {
        let max = self.max_attempts().max(1);
        let mut attempt = 0;
        loop {
            match f(attempt) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    attempt += 1;
                    if attempt >= max {
                        return Err(e);
                    }
                    if let Some(delay) = self.delay_after_attempt(attempt - 1) {
                        std::thread::sleep(delay);
                    }
                }
            }
        }
    }
}

/// Constant pause between attempts.
#[derive(Debug, Clone)]
pub struct FixedDelay {
    max_attempts: u32,
    delay: Duration,
}

impl FixedDelay {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self { max_attempts, delay }
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(
            retry_config::MAX_ATTEMPTS,
            Duration::from_millis(retry_config::RETRY_DELAY_MS),
        )
    }
}

impl RetryStrategy for FixedDelay {
    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn delay_after_attempt(&self, _attempt: u32) -> Option<Duration> {
        Some(self.delay)
    }
}

/// Single attempt, no pause.
#[derive(Debug, Clone, Default)]
pub struct NoRetry;

impl RetryStrategy for NoRetry {
    fn max_attempts(&self) -> u32 {
        1
    }

    fn delay_after_attempt(&self, _attempt: u32) -> Option<Duration> {
        None
    }
}
