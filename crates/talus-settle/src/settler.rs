//! The [`Settler`] trait.

use talus_core::{SettleError, SettleStats};
use talus_grid::GridMut;

/// How a settler orders single-step moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Schedule {
    /// Each round gives every token at most one step, bottom-to-top,
    /// left-to-right.
    Sweep,
    /// The lowest pending token is slid to rest before the next starts.
    Cascade,
}

/// Settles a grid under gravity, in place.
///
/// # Contract
///
/// - On `Ok`, the grid is at a fixpoint of the movement rule.
/// - The multiset of token values is unchanged; obstacles, empty cells
///   that stay empty, and undefined values are never written.
/// - All working state (stability flags, worklists, queues) is local to
///   one call and dropped before it returns, on every path.
/// - Deterministic: the same grid always settles to the same result.
///
/// Cell-value validation is the caller's job (see `talus-engine`);
/// settlers treat any non-zero, non-token value as an obstacle.
///
/// # Object safety
///
/// This trait is object-safe; callers may hold `Box<dyn Settler>`.
pub trait Settler: Send + Sync {
    /// Human-readable name for logging and error reporting.
    fn name(&self) -> &str;

    /// Which schedule family this settler belongs to.
    fn schedule(&self) -> Schedule;

    /// Settle `grid` to a fixpoint.
    ///
    /// The only error a settler raises itself is
    /// [`SettleError::AllocationFailed`] when an internal buffer cannot
    /// grow.
    fn settle(&self, grid: &mut GridMut<'_>) -> Result<SettleStats, SettleError>;
}
