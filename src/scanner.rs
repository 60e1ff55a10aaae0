//! Per-cycle orchestration: feeds → alignment → detection → notification.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument};

use crate::arbitrage::{find_surebets, implied_sum, is_arbitrage};
use crate::config::{Config, TargetDay};
use crate::error::Result;
use crate::feed::{collect_fixtures, FeedProvider, FileFeedProvider};
use crate::matching::{PartialRatioScorer, SimilarityScorer};
use crate::metrics;
use crate::notify::Notifier;
use crate::odds::{Bookmaker, Fixture};

/// Summary of one scan cycle, for logging and tests.
#[derive(Debug, Clone, Default)]
pub struct CycleReport {
    /// Fixtures collected per bookmaker.
    pub fixtures: Vec<(Bookmaker, usize)>,
    /// Opportunities found within a single bookmaker's own quotes.
    pub single_book_opportunities: usize,
    /// Opportunities found across bookmaker pairs.
    pub cross_book_opportunities: usize,
}

impl CycleReport {
    /// Total number of opportunities notified this cycle.
    pub fn total_opportunities(&self) -> usize {
        self.single_book_opportunities + self.cross_book_opportunities
    }
}

/// Batch scanner over a set of bookmaker feed providers.
///
/// Owns the collaborators for one process: feed providers (one per
/// bookmaker), a notifier, and the similarity scorer injected into the
/// aligner. Each cycle builds its own fixture lists; nothing is shared
/// between cycles except this configuration.
pub struct Scanner {
    providers: Vec<Box<dyn FeedProvider>>,
    notifier: Arc<dyn Notifier>,
    scorer: Box<dyn SimilarityScorer>,
    day: TargetDay,
    threshold: u8,
}

impl Scanner {
    /// Create a scanner with the default partial-ratio scorer.
    pub fn new(
        providers: Vec<Box<dyn FeedProvider>>,
        notifier: Arc<dyn Notifier>,
        day: TargetDay,
        threshold: u8,
    ) -> Self {
        Self {
            providers,
            notifier,
            scorer: Box::new(PartialRatioScorer),
            day,
            threshold,
        }
    }

    /// Replace the similarity scoring strategy.
    pub fn with_scorer(mut self, scorer: Box<dyn SimilarityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Build a scanner from configuration, with file-backed feed providers.
    pub fn from_config(config: &Config, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let providers = config
            .feed_specs()?
            .into_iter()
            .map(|(bookmaker, path)| {
                Box::new(FileFeedProvider::new(bookmaker, path)) as Box<dyn FeedProvider>
            })
            .collect();

        Ok(Self::new(
            providers,
            notifier,
            config.target_day,
            config.similarity_threshold,
        ))
    }

    /// Run one scan cycle: collect every feed, check each bookmaker alone,
    /// then compare every unordered bookmaker pair.
    #[instrument(skip(self), fields(day = %self.day))]
    pub async fn run_cycle(&self) -> CycleReport {
        let _timer = metrics::timer_cycle();
        let mut report = CycleReport::default();

        // Feeds are collected sequentially; matching starts only once every
        // feed is complete.
        let mut feeds: Vec<Vec<Fixture>> = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            let fixtures = collect_fixtures(provider.as_ref(), self.day).await;
            report
                .fixtures
                .push((provider.bookmaker(), fixtures.len()));
            feeds.push(fixtures);
        }

        // A single bookmaker's own quotes can already be an arbitrage.
        for fixtures in &feeds {
            for fixture in fixtures {
                if is_arbitrage(&fixture.odds) {
                    report.single_book_opportunities += 1;
                    metrics::inc_opportunities_detected();
                    self.notifier.notify(&single_book_message(fixture));
                }
            }
        }

        // Every unordered pair of bookmakers is compared independently.
        for i in 0..feeds.len() {
            for j in (i + 1)..feeds.len() {
                let surebets =
                    find_surebets(&feeds[i], &feeds[j], self.scorer.as_ref(), self.threshold);
                report.cross_book_opportunities += surebets.len();
                for surebet in &surebets {
                    self.notifier.notify(&surebet.message());
                }
            }
        }

        info!(
            single_book = report.single_book_opportunities,
            cross_book = report.cross_book_opportunities,
            "scan cycle complete"
        );
        report
    }

    /// Run `cycles` scan cycles with `delay` between consecutive cycles.
    pub async fn run(&self, cycles: u32, delay: Duration) {
        for cycle in 1..=cycles {
            info!(cycle, cycles, "starting scan cycle");
            self.run_cycle().await;

            if cycle < cycles {
                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Message for an opportunity inside one bookmaker's own quotes.
fn single_book_message(fixture: &Fixture) -> String {
    format!(
        "{} @ {}: home {:.2}, draw {:.2}, away {:.2}; implied sum {:.4}",
        fixture.teams,
        fixture.bookmaker,
        fixture.odds.home,
        fixture.odds.draw,
        fixture.odds.away,
        implied_sum(&fixture.odds)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{MockFeedProvider, RawFixture};
    use crate::notify::MemoryNotifier;

    fn record(home: &str, away: &str, odds: &[&str]) -> RawFixture {
        RawFixture {
            home: home.to_string(),
            away: away.to_string(),
            odds: odds.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn provider(name: &str, fixtures: Vec<RawFixture>) -> Box<dyn FeedProvider> {
        let provider = MockFeedProvider::new(name);
        provider.set_fixtures(TargetDay::Today, fixtures);
        Box::new(provider)
    }

    #[tokio::test]
    async fn cycle_reports_fixture_counts_per_bookmaker() {
        let notifier = Arc::new(MemoryNotifier::new());
        let scanner = Scanner::new(
            vec![
                provider("bwin", vec![record("Benfica", "Porto", &["2,0", "3,0", "4,0"])]),
                provider("betclic", vec![]),
            ],
            notifier,
            TargetDay::Today,
            70,
        );

        let report = scanner.run_cycle().await;

        assert_eq!(report.fixtures.len(), 2);
        assert_eq!(report.fixtures[0], (Bookmaker::new("bwin"), 1));
        assert_eq!(report.fixtures[1], (Bookmaker::new("betclic"), 0));
        assert_eq!(report.total_opportunities(), 0);
    }

    #[tokio::test]
    async fn single_bookmaker_arbitrage_is_notified() {
        let notifier = Arc::new(MemoryNotifier::new());
        let scanner = Scanner::new(
            vec![provider(
                "bwin",
                vec![record("Benfica", "Porto", &["4,0", "4,0", "4,0"])],
            )],
            notifier.clone(),
            TargetDay::Today,
            70,
        );

        let report = scanner.run_cycle().await;

        assert_eq!(report.single_book_opportunities, 1);
        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Benfica vs Porto"));
        assert!(messages[0].contains("bwin"));
    }

    #[tokio::test]
    async fn cross_book_opportunities_cover_every_pairing() {
        // Three bookmakers quote the same fixture; no book is profitable on
        // its own, but mixing legs with betano's long away odds is.
        let notifier = Arc::new(MemoryNotifier::new());
        let scanner = Scanner::new(
            vec![
                provider("bwin", vec![record("Team A", "Team B", &["2,5", "3,0", "2,8"])]),
                provider("betclic", vec![record("Team A", "Team B", &["2,4", "2,9", "2,7"])]),
                provider("betano", vec![record("Team A", "Team B", &["1,5", "3,6", "12,0"])]),
            ],
            notifier.clone(),
            TargetDay::Today,
            70,
        );

        let report = scanner.run_cycle().await;

        assert_eq!(report.single_book_opportunities, 0);
        assert!(report.cross_book_opportunities > 0);
        let messages = notifier.messages();
        assert!(messages.iter().any(|m| m.contains("bwin") && m.contains("betano")));
    }

    #[tokio::test]
    async fn failed_feed_does_not_abort_the_cycle() {
        let failing = MockFeedProvider::with_config(
            "bwin",
            crate::feed::MockFeedConfig {
                fail: true,
                ..Default::default()
            },
        );
        let notifier = Arc::new(MemoryNotifier::new());
        let scanner = Scanner::new(
            vec![
                Box::new(failing),
                provider("betclic", vec![record("Benfica", "Porto", &["4,0", "4,0", "4,0"])]),
            ],
            notifier.clone(),
            TargetDay::Today,
            70,
        );

        let report = scanner.run_cycle().await;

        assert_eq!(report.fixtures[0], (Bookmaker::new("bwin"), 0));
        assert_eq!(report.single_book_opportunities, 1);
    }
}
