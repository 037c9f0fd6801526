//! C-compatible status codes.
//!
//! [`TalusStatus`] is a `repr(i32)` enum covering every way a settle call
//! can fail. Conversions from [`SettleError`] are provided.

use std::ffi::CStr;

use talus_core::SettleError;

/// C-compatible status code returned by all FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TalusStatus {
    /// Success.
    Ok = 0,
    /// A pointer is null, a dimension is not positive, or a variant,
    /// policy or layout code is unknown.
    InvalidArgument = -1,
    /// A cell holds a negative value and the policy is reject.
    InvalidCell = -2,
    /// An internal worklist or queue could not grow.
    AllocationFailed = -3,
    /// The grid dimensions and buffer are inconsistent.
    GridError = -4,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl TalusStatus {
    const ALL: [TalusStatus; 6] = [
        TalusStatus::Ok,
        TalusStatus::InvalidArgument,
        TalusStatus::InvalidCell,
        TalusStatus::AllocationFailed,
        TalusStatus::GridError,
        TalusStatus::Panicked,
    ];

    /// The status for a raw code, if it is one.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| *s as i32 == code)
    }

    /// Static, NUL-terminated description.
    pub fn message(self) -> &'static CStr {
        match self {
            TalusStatus::Ok => c"ok",
            TalusStatus::InvalidArgument => c"invalid argument",
            TalusStatus::InvalidCell => c"cell holds an undefined (negative) value",
            TalusStatus::AllocationFailed => c"internal buffer allocation failed",
            TalusStatus::GridError => c"grid dimensions do not match the buffer",
            TalusStatus::Panicked => c"panic caught at the FFI boundary",
        }
    }
}

impl From<&SettleError> for TalusStatus {
    fn from(e: &SettleError) -> Self {
        match e {
            SettleError::InvalidArgument { .. } => TalusStatus::InvalidArgument,
            SettleError::InvalidCell { .. } => TalusStatus::InvalidCell,
            SettleError::AllocationFailed { .. } => TalusStatus::AllocationFailed,
            SettleError::Grid(_) => TalusStatus::GridError,
        }
    }
}
