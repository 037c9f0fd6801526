//! The settle entry points.

use std::time::Instant;

use crate::config::SettleConfig;
use crate::metrics::SettleMetrics;
use talus_core::{CellPolicy, SettleError};
use talus_grid::{Grid, GridMut, Layout};

fn micros_since(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}

/// Check cell values against `policy` without touching the grid.
fn validate(grid: &GridMut<'_>, policy: CellPolicy) -> Result<(), SettleError> {
    match policy {
        CellPolicy::Reject => match grid.first_undefined() {
            Some((coord, value)) => Err(SettleError::InvalidCell { coord, value }),
            None => Ok(()),
        },
        CellPolicy::TreatAsObstacle => Ok(()),
    }
}

/// Settle `grid` in place under `config`.
///
/// Validation runs before any cell is written, so on
/// [`SettleError::InvalidCell`] the grid is untouched. On success the grid
/// is at a fixpoint of the movement rule and holds exactly the same
/// tokens.
///
/// ```
/// use talus_engine::{settle, SettleConfig};
/// use talus_grid::Grid;
///
/// let mut grid: Grid = "
///     5 .
///     . .
///     3 #
/// ".parse().unwrap();
/// let metrics = settle(&mut grid.view_mut(), &SettleConfig::default()).unwrap();
/// assert_eq!(grid.to_string(), ". .\n5 .\n3 #");
/// assert_eq!(metrics.stats.moves, 1);
/// ```
pub fn settle(grid: &mut GridMut<'_>, config: &SettleConfig) -> Result<SettleMetrics, SettleError> {
    let start = Instant::now();
    if let Err(e) = validate(grid, config.cell_policy) {
        tracing::warn!(error = %e, policy = ?config.cell_policy, "grid rejected");
        return Err(e);
    }
    let validate_us = micros_since(start);

    let settler = config.settler();
    let settle_start = Instant::now();
    let stats = settler.settle(grid).map_err(|e| {
        tracing::warn!(settler = settler.name(), error = %e, "settle failed");
        e
    })?;
    let settle_us = micros_since(settle_start);
    debug_assert!(grid.is_settled(), "{} stopped before a fixpoint", settler.name());

    let metrics = SettleMetrics {
        stats,
        validate_us,
        settle_us,
        total_us: micros_since(start),
    };
    tracing::debug!(
        settler = settler.name(),
        width = grid.width(),
        height = grid.height(),
        moves = stats.moves,
        rounds = stats.rounds,
        examined = stats.examined,
        activations = stats.activations,
        peak_pending = stats.peak_pending,
        settle_us,
        "grid settled"
    );
    Ok(metrics)
}

/// Settle a raw buffer of `width * height` cells stored in `layout`.
///
/// Dimensions are taken as signed integers, the way foreign callers pass
/// them; `width <= 0` or `height <= 0` is rejected with
/// [`SettleError::InvalidArgument`] before anything else. A buffer of the
/// wrong length yields [`SettleError::Grid`].
pub fn settle_slice(
    cells: &mut [i32],
    width: i32,
    height: i32,
    layout: Layout,
    config: &SettleConfig,
) -> Result<SettleMetrics, SettleError> {
    let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => {
            let e = SettleError::InvalidArgument {
                reason: format!("dimensions must be positive, got {width}x{height}"),
            };
            tracing::warn!(error = %e, "grid rejected");
            return Err(e);
        }
    };
    let mut grid = Grid::from_buffer(cells, w, h, layout)?;
    settle(&mut grid, config)
}
