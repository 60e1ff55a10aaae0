//! End-to-end tests for the surebet scanner.
//!
//! These tests exercise the full pipeline — feed collection, normalization,
//! cross-bookmaker alignment, combination evaluation, and notification —
//! using mock feed providers and the in-memory notifier.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use surebet_scanner::config::TargetDay;
use surebet_scanner::feed::{FeedProvider, MockFeedConfig, MockFeedProvider, RawFixture};
use surebet_scanner::notify::MemoryNotifier;
use surebet_scanner::scanner::Scanner;

fn record(home: &str, away: &str, odds: &[&str]) -> RawFixture {
    RawFixture {
        home: home.to_string(),
        away: away.to_string(),
        odds: odds.iter().map(|s| s.to_string()).collect(),
    }
}

fn provider(name: &str, day: TargetDay, fixtures: Vec<RawFixture>) -> Box<dyn FeedProvider> {
    let provider = MockFeedProvider::new(name);
    provider.set_fixtures(day, fixtures);
    Box::new(provider)
}

/// Spec scenario: the same fixture at two bookmakers, profitable only when
/// home and draw come from bookmaker 1 and the away leg from bookmaker 2.
#[tokio::test]
async fn detects_cross_bookmaker_opportunity_end_to_end() {
    let notifier = Arc::new(MemoryNotifier::new());
    let scanner = Scanner::new(
        vec![
            provider(
                "bookmaker1",
                TargetDay::Today,
                vec![record("Team A", "Team B", &["2,5", "3,0", "4,0"])],
            ),
            provider(
                "bookmaker2",
                TargetDay::Today,
                vec![record("Team A", "Team B", &["2,6", "3,5", "10,0"])],
            ),
        ],
        notifier.clone(),
        TargetDay::Today,
        70,
    );

    let report = scanner.run_cycle().await;

    // 1/2.5 + 1/3.0 + 1/10.0 = 0.833 < 1 must be among the detections.
    assert!(report.cross_book_opportunities > 0);

    let messages = notifier.messages();
    let mixed = messages
        .iter()
        .find(|m| m.contains("2.50 @ bookmaker1") && m.contains("10.00 @ bookmaker2"))
        .expect("mixed combination notified with both bookmakers and prices");
    assert!(mixed.contains("3.00 @ bookmaker1"));
    assert!(mixed.contains("Team A vs Team B"));
}

#[tokio::test]
async fn no_notification_when_sums_stay_at_or_above_one() {
    let notifier = Arc::new(MemoryNotifier::new());
    let scanner = Scanner::new(
        vec![
            provider(
                "bwin",
                TargetDay::Today,
                vec![record("Benfica", "Porto", &["3,0", "3,0", "3,0"])],
            ),
            provider(
                "betclic",
                TargetDay::Today,
                vec![record("Benfica", "Porto", &["3,0", "3,0", "3,0"])],
            ),
        ],
        notifier.clone(),
        TargetDay::Today,
        70,
    );

    let report = scanner.run_cycle().await;

    // Every combination sums to exactly 1.0; strict < must not flag it.
    assert_eq!(report.total_opportunities(), 0);
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn differently_ordered_team_names_still_align() {
    let notifier = Arc::new(MemoryNotifier::new());
    let scanner = Scanner::new(
        vec![
            provider(
                "bwin",
                TargetDay::Tomorrow,
                vec![record("Porto", "Benfica", &["2,5", "3,0", "2,8"])],
            ),
            provider(
                "betclic",
                TargetDay::Tomorrow,
                vec![record("Benfica", "Porto", &["1,5", "3,6", "12,0"])],
            ),
        ],
        notifier.clone(),
        TargetDay::Tomorrow,
        70,
    );

    let report = scanner.run_cycle().await;

    assert!(report.cross_book_opportunities > 0);
}

#[tokio::test]
async fn malformed_odds_degrade_to_no_signal() {
    let notifier = Arc::new(MemoryNotifier::new());
    let scanner = Scanner::new(
        vec![
            provider(
                "bwin",
                TargetDay::Today,
                vec![
                    record("Benfica", "Porto", &["x", "3,0", "4,0"]),
                    record("Ajax", "PSV", &["2,0", "3,0"]),
                ],
            ),
            provider(
                "betclic",
                TargetDay::Today,
                vec![record("Benfica", "Porto", &["1,5", "3,6", "12,0"])],
            ),
        ],
        notifier.clone(),
        TargetDay::Today,
        70,
    );

    let report = scanner.run_cycle().await;

    // Both bwin records are dropped at normalization, so nothing aligns.
    assert_eq!(report.fixtures[0].1, 0);
    assert_eq!(report.total_opportunities(), 0);
}

#[tokio::test]
async fn failed_feed_leaves_other_pairings_intact() {
    let failing = MockFeedProvider::with_config(
        "bwin",
        MockFeedConfig {
            fail: true,
            ..Default::default()
        },
    );
    let notifier = Arc::new(MemoryNotifier::new());
    let scanner = Scanner::new(
        vec![
            Box::new(failing),
            provider(
                "betclic",
                TargetDay::Today,
                vec![record("Team A", "Team B", &["2,5", "3,0", "2,8"])],
            ),
            provider(
                "betano",
                TargetDay::Today,
                vec![record("Team A", "Team B", &["1,5", "3,6", "12,0"])],
            ),
        ],
        notifier.clone(),
        TargetDay::Today,
        70,
    );

    let report = scanner.run_cycle().await;

    // The bwin pairings produce nothing, but betclic+betano still mixes
    // profitably.
    assert_eq!(report.fixtures[0].1, 0);
    assert!(report.cross_book_opportunities > 0);
}

#[tokio::test]
async fn repeated_cycles_over_identical_feeds_are_idempotent() {
    let notifier = Arc::new(MemoryNotifier::new());
    let scanner = Scanner::new(
        vec![
            provider(
                "bwin",
                TargetDay::Today,
                vec![record("Team A", "Team B", &["2,5", "3,0", "2,8"])],
            ),
            provider(
                "betano",
                TargetDay::Today,
                vec![record("Team A", "Team B", &["1,5", "3,6", "12,0"])],
            ),
        ],
        notifier.clone(),
        TargetDay::Today,
        70,
    );

    let first = scanner.run_cycle().await;
    let second = scanner.run_cycle().await;

    assert_eq!(
        first.cross_book_opportunities,
        second.cross_book_opportunities
    );
    assert_eq!(
        first.single_book_opportunities,
        second.single_book_opportunities
    );

    // Messages from the second cycle repeat the first exactly.
    let messages = notifier.messages();
    assert_eq!(messages.len() % 2, 0);
    let (a, b) = messages.split_at(messages.len() / 2);
    assert_eq!(a, b);
}
