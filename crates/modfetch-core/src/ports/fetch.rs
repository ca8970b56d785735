//! Fetch configuration shared by the executor and orchestrator.

/// Upper bound for the default worker pool size.
const MAX_DEFAULT_CONCURRENCY: usize = 16;

/// Configuration for a fetch batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Maximum transfers in flight at once.
    pub max_concurrent: usize,
    /// `User-Agent` sent with every download request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_concurrent: default_concurrency(),
            user_agent: concat!("modfetch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of concurrent transfers.
    #[must_use]
    pub const fn with_max_concurrent(mut self, max: usize) -> Self {
        self.max_concurrent = max;
        self
    }

    /// Set the `User-Agent` header for downloads.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Pool size actually used: never zero.
    #[must_use]
    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrent.max(1)
    }
}

/// Default pool size: available CPUs plus four, capped.
#[must_use]
pub fn default_concurrency() -> usize {
    (num_cpus::get() + 4).min(MAX_DEFAULT_CONCURRENCY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FetchConfig::new();
        assert!(config.max_concurrent >= 1);
        assert!(config.max_concurrent <= MAX_DEFAULT_CONCURRENCY);
        assert!(config.user_agent.starts_with("modfetch/"));
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let config = FetchConfig::new().with_max_concurrent(0);
        assert_eq!(config.effective_concurrency(), 1);
    }

    #[test]
    fn test_builder_pattern() {
        let config = FetchConfig::new()
            .with_max_concurrent(3)
            .with_user_agent("test-agent");
        assert_eq!(config.effective_concurrency(), 3);
        assert_eq!(config.user_agent, "test-agent");
    }
}
