//! Unified error types for the surebet scanner.

use thiserror::Error;

/// Unified error type for the scanner.
#[derive(Error, Debug)]
pub enum ScannerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Invalid feed specification in configuration.
    #[error("invalid feed spec {0:?} (expected NAME=PATH)")]
    InvalidFeedSpec(String),

    /// Feed-provider error.
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),

    /// Odds normalization error.
    #[error("odds error: {0}")]
    Odds(#[from] OddsError),

    /// Notification delivery error.
    #[error("notification error: {0}")]
    Notify(#[from] NotifyError),
}

/// Raw-odds normalization errors.
///
/// Callers must treat any of these as "no arbitrage signal" for the affected
/// fixture; they never abort a scan cycle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OddsError {
    /// A fixture did not carry exactly three odds values.
    #[error("expected {expected} odds values, got {got}")]
    WrongLegCount {
        /// Required number of legs.
        expected: usize,
        /// Number of values actually present.
        got: usize,
    },

    /// An odds value failed to parse as a decimal number.
    #[error("odds value is not a number: {raw:?}")]
    NotANumber {
        /// The raw string that failed to parse.
        raw: String,
    },

    /// An odds value was zero, negative, or non-finite.
    #[error("odds value must be a positive finite number: {value}")]
    NonPositive {
        /// The offending value.
        value: f64,
    },
}

/// Feed-provider errors.
///
/// A failed feed degrades to "zero fixtures from this bookmaker"; pairings
/// involving the empty side simply produce no results.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The feed could not be read at all.
    #[error("feed unavailable: {0}")]
    Unavailable(String),

    /// IO error while reading a feed source.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Feed data did not parse.
    #[error("malformed feed data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Notification delivery errors. Delivery is best effort and never retried.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The receiving endpoint rejected the message.
    #[error("delivery rejected: {0}")]
    Rejected(String),

    /// HTTP transport error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ScannerError>;
