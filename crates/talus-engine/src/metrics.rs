//! Per-call metrics for the settle engine.

use talus_core::SettleStats;

/// Work counters and timing collected during one [`settle`](crate::settle)
/// call.
///
/// All durations are in microseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettleMetrics {
    /// Counters reported by the settler.
    pub stats: SettleStats,
    /// Time spent validating cell values, in microseconds.
    pub validate_us: u64,
    /// Time spent inside the settler, in microseconds.
    pub settle_us: u64,
    /// Wall-clock time for the entire call, in microseconds.
    pub total_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SettleMetrics::default();
        assert_eq!(m.stats, SettleStats::default());
        assert_eq!(m.validate_us, 0);
        assert_eq!(m.settle_us, 0);
        assert_eq!(m.total_us, 0);
    }
}
