//! Settle orchestration for Talus.
//!
//! [`settle`] is the single entry point most callers need: it validates
//! the grid against the configured [`CellPolicy`](talus_core::CellPolicy),
//! runs the configured settler in place, and reports [`SettleMetrics`].
//! [`settle_slice`] does the same over a raw buffer with caller-supplied
//! dimensions.
//!
//! The engine logs through `tracing` and never installs a subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod metrics;

pub use config::{SettleConfig, Variant};
pub use engine::{settle, settle_slice};
pub use metrics::SettleMetrics;
