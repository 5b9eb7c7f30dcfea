//! Query Staleness & Retry
//!
//! The cache policy the apps configure: a fixed staleness window before
//! a query is re-fetched, and a single retry for network failures.
//! HTTP error statuses are terminal and never retried.

use std::future::Future;

use crate::error::ApiError;

/// Cache policy for fetched server state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryConfig {
    /// How long fetched data stays fresh
    pub stale_ms: u64,
    /// Extra attempts for network (not HTTP-status) failures
    pub network_retries: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_ms: 30_000,
            network_retries: 1,
        }
    }
}

/// When a query was last fetched. Default = never, therefore stale.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Freshness {
    fetched_at_ms: Option<u64>,
}

impl Freshness {
    pub fn mark(&mut self, now_ms: u64) {
        self.fetched_at_ms = Some(now_ms);
    }

    pub fn invalidate(&mut self) {
        self.fetched_at_ms = None;
    }

    pub fn is_stale(&self, now_ms: u64, config: &QueryConfig) -> bool {
        match self.fetched_at_ms {
            None => true,
            Some(at) => now_ms >= at.saturating_add(config.stale_ms),
        }
    }
}

/// Current time in milliseconds from the JS clock
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Run a request, retrying network failures up to the configured count.
pub async fn retrying<T, F, Fut>(config: &QueryConfig, mut op: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 0u32;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(ApiError::Network(_)) if attempt < config.network_retries => {
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_never_fetched_is_stale() {
        let config = QueryConfig::default();
        assert!(Freshness::default().is_stale(0, &config));
    }

    #[test]
    fn test_fresh_within_window_stale_after() {
        let config = QueryConfig {
            stale_ms: 1_000,
            network_retries: 1,
        };
        let mut freshness = Freshness::default();
        freshness.mark(5_000);
        assert!(!freshness.is_stale(5_999, &config));
        assert!(freshness.is_stale(6_000, &config));
        freshness.invalidate();
        assert!(freshness.is_stale(5_000, &config));
    }

    #[test]
    fn test_retries_network_failure_once() {
        let config = QueryConfig::default();
        let calls = Cell::new(0u32);
        let result: Result<u32, ApiError> = block_on(retrying(&config, || {
            calls.set(calls.get() + 1);
            let attempt = calls.get();
            async move {
                if attempt == 1 {
                    Err(ApiError::Network("reset".to_string()))
                } else {
                    Ok(42)
                }
            }
        }));
        assert_eq!(result, Ok(42));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_status_failures_are_terminal() {
        let config = QueryConfig::default();
        let calls = Cell::new(0u32);
        let result: Result<u32, ApiError> = block_on(retrying(&config, || {
            calls.set(calls.get() + 1);
            async { Err(ApiError::NotFound) }
        }));
        assert_eq!(result, Err(ApiError::NotFound));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_retry_budget_exhausts() {
        let config = QueryConfig {
            stale_ms: 0,
            network_retries: 2,
        };
        let calls = Cell::new(0u32);
        let result: Result<u32, ApiError> = block_on(retrying(&config, || {
            calls.set(calls.get() + 1);
            async { Err(ApiError::Network("down".to_string())) }
        }));
        assert!(matches!(result, Err(ApiError::Network(_))));
        assert_eq!(calls.get(), 3);
    }
}
