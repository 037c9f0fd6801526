//! C FFI bindings for the Talus grid settling kernel.
//!
//! Exposes Settle over a caller-owned `int32_t` buffer. This is the only
//! crate in the workspace that may contain `unsafe` code.
//!
//! Every exported function returns a [`TalusStatus`] code as `int32_t`
//! (`0` on success, negative on error) and never unwinds across the
//! boundary: panics are caught and reported as
//! [`TalusStatus::Panicked`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run `$body` (which evaluates to an `i32` status) with panics caught.
macro_rules! ffi_guard {
    ($body:block) => {{
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(code) => code,
            Err(_) => {
                ::tracing::error!("panic caught at the FFI boundary");
                $crate::status::TalusStatus::Panicked as i32
            }
        }
    }};
}

pub mod metrics;
pub mod settle;
pub mod status;

pub use metrics::TalusSettleMetrics;
pub use settle::{talus_settle, talus_settle_layout, talus_status_message};
pub use status::TalusStatus;
