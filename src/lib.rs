//! Cross-bookmaker football surebet scanner.
//!
//! This library detects arbitrage opportunities in three-way football
//! moneyline markets: combinations of home/draw/away odds, possibly split
//! across two bookmakers, whose implied probabilities sum to less than 1.0.
//!
//! # Strategy
//!
//! The implied probability of an outcome is `1 / odds`. If the three legs of
//! a match can be covered so that the implied probabilities sum below 1.0,
//! profit is guaranteed regardless of result:
//!
//! ```text
//! home win @ bookmaker A: 2.50  →  0.400
//! draw     @ bookmaker A: 3.00  →  0.333
//! away win @ bookmaker B: 10.0  →  0.100
//! ─────────────────────────────────────
//! implied sum:                     0.833 < 1.000 ✅
//! ```
//!
//! Feeds are matched across bookmakers by fuzzy team-name similarity, every
//! one of the 2³ leg-to-bookmaker assignments is evaluated, and opportunities
//! are handed to a fire-and-forget notifier.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`odds`]: Odds triples, fixtures, and raw-odds normalization
//! - [`matching`]: Fuzzy team-name alignment across bookmakers
//! - [`arbitrage`]: Implied-sum evaluation and surebet detection
//! - [`feed`]: Feed-provider collaborators (file-backed and mock)
//! - [`notify`]: Notification collaborators (log, webhook, in-memory)
//! - [`scanner`]: Per-cycle orchestration and the batch loop
//! - [`metrics`]: Prometheus metric helpers

pub mod arbitrage;
pub mod config;
pub mod error;
pub mod feed;
pub mod matching;
pub mod metrics;
pub mod notify;
pub mod odds;
pub mod scanner;

pub use config::Config;
pub use error::{Result, ScannerError};
