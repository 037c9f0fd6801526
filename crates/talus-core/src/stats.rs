//! Per-run counters reported by every settler.

/// Work counters collected during one settle invocation.
///
/// Round-based settlers count sweeps in `rounds`. The single-pass greedy
/// settler reports one round and the event-driven settler, which has no
/// rounds, reports zero. Counters are exact, not sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettleStats {
    /// Single-step token moves applied to the grid.
    pub moves: u64,
    /// Full sweeps or worklist rounds executed, including the final
    /// round that observed no movement.
    pub rounds: u64,
    /// Cells on which the movement rule was evaluated.
    pub examined: u64,
    /// Cells re-activated because a support cell below them was vacated.
    pub activations: u64,
    /// Largest number of pending worklist or queue entries at any time.
    pub peak_pending: usize,
}

impl SettleStats {
    /// Record a pending-set size, keeping the maximum.
    #[inline]
    pub fn observe_pending(&mut self, len: usize) {
        if len > self.peak_pending {
            self.peak_pending = len;
        }
    }
}
