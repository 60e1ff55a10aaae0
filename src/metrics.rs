//! Prometheus metrics for scan monitoring.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Scan cycle latency metric name.
pub const METRIC_CYCLE_LATENCY: &str = "scan_cycle_latency_ms";
/// Surebet detection latency metric name.
pub const METRIC_DETECTION_LATENCY: &str = "surebet_detection_latency_ms";
/// Fixtures collected counter metric name.
pub const METRIC_FIXTURES_COLLECTED: &str = "fixtures_collected_total";
/// Failed feeds counter metric name.
pub const METRIC_FEEDS_FAILED: &str = "feeds_failed_total";
/// Matched fixture pairs counter metric name.
pub const METRIC_PAIRS_MATCHED: &str = "fixture_pairs_matched_total";
/// Opportunities detected counter metric name.
pub const METRIC_OPPORTUNITIES_DETECTED: &str = "opportunities_detected_total";
/// Notifications sent counter metric name.
pub const METRIC_NOTIFICATIONS_SENT: &str = "notifications_sent_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(METRIC_CYCLE_LATENCY, "Full scan cycle latency in milliseconds");
    describe_histogram!(
        METRIC_DETECTION_LATENCY,
        "Surebet detection latency per bookmaker pairing in milliseconds"
    );

    describe_counter!(
        METRIC_FIXTURES_COLLECTED,
        "Total number of fixtures collected from feeds"
    );
    describe_counter!(METRIC_FEEDS_FAILED, "Total number of failed feed fetches");
    describe_counter!(
        METRIC_PAIRS_MATCHED,
        "Total number of fixture pairs aligned across bookmakers"
    );
    describe_counter!(
        METRIC_OPPORTUNITIES_DETECTED,
        "Total number of arbitrage opportunities detected"
    );
    describe_counter!(
        METRIC_NOTIFICATIONS_SENT,
        "Total number of opportunity notifications delivered"
    );

    debug!("Metrics initialized");
}

/// Increment fixtures collected counter.
pub fn inc_fixtures_collected(count: u64) {
    counter!(METRIC_FIXTURES_COLLECTED).increment(count);
}

/// Increment failed feeds counter.
pub fn inc_feeds_failed() {
    counter!(METRIC_FEEDS_FAILED).increment(1);
}

/// Increment matched fixture pairs counter.
pub fn inc_pairs_matched() {
    counter!(METRIC_PAIRS_MATCHED).increment(1);
}

/// Increment opportunities detected counter.
pub fn inc_opportunities_detected() {
    counter!(METRIC_OPPORTUNITIES_DETECTED).increment(1);
}

/// Increment notifications sent counter.
pub fn inc_notifications_sent() {
    counter!(METRIC_NOTIFICATIONS_SENT).increment(1);
}

/// RAII guard for timing operations.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    metric_name: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given metric.
    pub fn new(metric_name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            metric_name,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        let latency_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        histogram!(self.metric_name).record(latency_ms);
    }
}

/// Create a latency timer for a full scan cycle.
pub fn timer_cycle() -> LatencyTimer {
    LatencyTimer::new(METRIC_CYCLE_LATENCY)
}

/// Create a latency timer for one bookmaker pairing's detection pass.
pub fn timer_detection() -> LatencyTimer {
    LatencyTimer::new(METRIC_DETECTION_LATENCY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn latency_timer_measures_time() {
        let timer = LatencyTimer::new("test_metric");
        sleep(Duration::from_millis(10));
        let elapsed = timer.elapsed_ms();
        assert!(elapsed >= 9.0); // Allow some tolerance
        // Timer will record on drop
    }
}
