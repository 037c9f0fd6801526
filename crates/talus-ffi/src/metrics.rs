//! C-compatible settle metrics.

use talus_engine::SettleMetrics;

/// Counters and timings from one settle call.
///
/// Every field is a fixed-width `u64` for ABI portability.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TalusSettleMetrics {
    /// Single-step token moves applied.
    pub moves: u64,
    /// Sweeps or worklist rounds executed (0 for the event-driven variant).
    pub rounds: u64,
    /// Cells on which the movement rule was evaluated.
    pub examined: u64,
    /// Cells re-activated after a support cell was vacated.
    pub activations: u64,
    /// Largest number of pending worklist or queue entries.
    pub peak_pending: u64,
    /// Time spent validating cell values, in microseconds.
    pub validate_us: u64,
    /// Time spent inside the settler, in microseconds.
    pub settle_us: u64,
    /// Wall-clock time for the entire call, in microseconds.
    pub total_us: u64,
}

// Compile-time layout assertions for ABI stability.
// 8×u64 = 64 bytes, align 8.
const _: () = assert!(std::mem::size_of::<TalusSettleMetrics>() == 64);
const _: () = assert!(std::mem::align_of::<TalusSettleMetrics>() == 8);

impl TalusSettleMetrics {
    pub(crate) fn from_rust(m: &SettleMetrics) -> Self {
        Self {
            moves: m.stats.moves,
            rounds: m.stats.rounds,
            examined: m.stats.examined,
            activations: m.stats.activations,
            peak_pending: m.stats.peak_pending as u64,
            validate_us: m.validate_us,
            settle_us: m.settle_us,
            total_us: m.total_us,
        }
    }
}
