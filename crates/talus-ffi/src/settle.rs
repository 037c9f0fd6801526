//! Exported settle functions.

use std::ffi::c_char;

use talus_core::SettleError;
use talus_engine::{settle_slice, SettleConfig, SettleMetrics};
use talus_grid::Layout;

use crate::metrics::TalusSettleMetrics;
use crate::status::TalusStatus;

/// Layout code for column-major buffers (`index = col * height + row`).
pub const TALUS_LAYOUT_COLUMN_MAJOR: i32 = 0;
/// Layout code for row-major buffers (`index = row * width + col`).
pub const TALUS_LAYOUT_ROW_MAJOR: i32 = 1;

fn invalid(reason: impl Into<String>) -> SettleError {
    SettleError::InvalidArgument {
        reason: reason.into(),
    }
}

/// Validate raw arguments, borrow the buffer and settle it.
#[allow(unsafe_code)]
fn settle_raw(
    cells: *mut i32,
    width: i32,
    height: i32,
    layout: i32,
    variant: i32,
    cell_policy: i32,
) -> Result<SettleMetrics, SettleError> {
    if cells.is_null() {
        return Err(invalid("cells is null"));
    }
    if width <= 0 || height <= 0 {
        return Err(invalid(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }
    let len = (width as usize)
        .checked_mul(height as usize)
        .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<i32>())
        .ok_or_else(|| invalid(format!("{width}x{height} cells exceed the address space")))?;
    let layout =
        Layout::try_from(layout).map_err(|code| invalid(format!("unknown layout code {code}")))?;
    let config = SettleConfig::from_codes(variant, cell_policy)?;

    // SAFETY: cells is non-null and, per the caller contract, points to
    // width * height initialised i32 values that nothing else accesses
    // for the duration of this call.
    let buf = unsafe { std::slice::from_raw_parts_mut(cells, len) };
    settle_slice(buf, width, height, layout, &config)
}

/// Settle a column-major grid of `width * height` cells in place.
///
/// `variant`: 0 baseline, 1 greedy, 2 incremental, 3 event-driven.
/// `cell_policy`: 0 reject negative values, 1 treat them as obstacles.
/// `metrics_out` may be null; otherwise it receives the run's counters
/// on success and zeroes on failure.
///
/// Returns `TALUS_STATUS_OK` (0) or a negative [`TalusStatus`]. On
/// `INVALID_ARGUMENT` and `INVALID_CELL` the buffer is untouched.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn talus_settle(
    cells: *mut i32,
    width: i32,
    height: i32,
    variant: i32,
    cell_policy: i32,
    metrics_out: *mut TalusSettleMetrics,
) -> i32 {
    talus_settle_layout(
        cells,
        width,
        height,
        TALUS_LAYOUT_COLUMN_MAJOR,
        variant,
        cell_policy,
        metrics_out,
    )
}

/// Like [`talus_settle`], with an explicit buffer layout:
/// [`TALUS_LAYOUT_COLUMN_MAJOR`] or [`TALUS_LAYOUT_ROW_MAJOR`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn talus_settle_layout(
    cells: *mut i32,
    width: i32,
    height: i32,
    layout: i32,
    variant: i32,
    cell_policy: i32,
    metrics_out: *mut TalusSettleMetrics,
) -> i32 {
    ffi_guard!({
        let (status, metrics) = match settle_raw(cells, width, height, layout, variant, cell_policy)
        {
            Ok(m) => (TalusStatus::Ok, TalusSettleMetrics::from_rust(&m)),
            Err(e) => {
                tracing::warn!(error = %e, "talus_settle failed");
                (TalusStatus::from(&e), TalusSettleMetrics::default())
            }
        };
        if !metrics_out.is_null() {
            // SAFETY: metrics_out is non-null and valid per caller contract.
            unsafe { *metrics_out = metrics };
        }
        status as i32
    })
}

/// Static, NUL-terminated description of a status code.
///
/// Unknown codes yield `"unknown status"`. The returned pointer is valid
/// for the lifetime of the program and must not be freed.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn talus_status_message(status: i32) -> *const c_char {
    TalusStatus::from_code(status)
        .map_or(c"unknown status", TalusStatus::message)
        .as_ptr()
}
