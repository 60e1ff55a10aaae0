//! Implied-probability evaluation and surebet detection.

pub mod evaluator;
pub mod finder;

pub use evaluator::{cross_book_combinations, implied_sum, is_arbitrage, Combination, Side};
pub use finder::{find_surebets, BetLeg, Surebet};
