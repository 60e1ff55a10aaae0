//! Mock feed provider for unit testing.
//!
//! This module provides a mock provider that can be used in tests without
//! touching the filesystem or any bookmaker site.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::TargetDay;
use crate::error::FeedError;
use crate::feed::{FeedProvider, RawFixture};
use crate::odds::Bookmaker;

/// Configuration for mock provider behavior.
#[derive(Debug, Clone, Default)]
pub struct MockFeedConfig {
    /// Whether fetches should fail.
    pub fail: bool,
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
}

/// Mock feed provider for testing.
#[derive(Debug, Clone)]
pub struct MockFeedProvider {
    bookmaker: Bookmaker,
    config: MockFeedConfig,
    fixtures: Arc<Mutex<HashMap<TargetDay, Vec<RawFixture>>>>,
}

impl MockFeedProvider {
    /// Create a mock provider with default configuration.
    pub fn new(bookmaker: impl Into<Bookmaker>) -> Self {
        Self::with_config(bookmaker, MockFeedConfig::default())
    }

    /// Create a mock provider with custom configuration.
    pub fn with_config(bookmaker: impl Into<Bookmaker>, config: MockFeedConfig) -> Self {
        Self {
            bookmaker: bookmaker.into(),
            config,
            fixtures: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Set the raw fixtures returned for a match day.
    pub fn set_fixtures(&self, day: TargetDay, fixtures: Vec<RawFixture>) {
        self.fixtures.lock().unwrap().insert(day, fixtures);
    }

    /// Clear all mock data.
    pub fn clear(&self) {
        self.fixtures.lock().unwrap().clear();
    }
}

#[async_trait]
impl FeedProvider for MockFeedProvider {
    fn bookmaker(&self) -> Bookmaker {
        self.bookmaker.clone()
    }

    async fn fetch(&self, day: TargetDay) -> Result<Vec<RawFixture>, FeedError> {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        if self.config.fail {
            return Err(FeedError::Unavailable("mock feed failure".to_string()));
        }

        let fixtures = self.fixtures.lock().unwrap();
        Ok(fixtures.get(&day).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(home: &str, away: &str) -> RawFixture {
        RawFixture {
            home: home.to_string(),
            away: away.to_string(),
            odds: vec!["2,0".to_string(), "3,0".to_string(), "4,0".to_string()],
        }
    }

    #[tokio::test]
    async fn mock_returns_configured_fixtures() {
        let provider = MockFeedProvider::new("betano");
        provider.set_fixtures(TargetDay::Tomorrow, vec![record("Benfica", "Porto")]);

        let fixtures = provider.fetch(TargetDay::Tomorrow).await.unwrap();

        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0].home, "Benfica");
    }

    #[tokio::test]
    async fn mock_failure_mode() {
        let provider = MockFeedProvider::with_config(
            "betano",
            MockFeedConfig {
                fail: true,
                ..Default::default()
            },
        );

        assert!(provider.fetch(TargetDay::Today).await.is_err());
    }

    #[tokio::test]
    async fn mock_clear_removes_fixtures() {
        let provider = MockFeedProvider::new("betano");
        provider.set_fixtures(TargetDay::Today, vec![record("Benfica", "Porto")]);
        provider.clear();

        let fixtures = provider.fetch(TargetDay::Today).await.unwrap();

        assert!(fixtures.is_empty());
    }
}
