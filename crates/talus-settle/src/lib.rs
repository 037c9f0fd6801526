//! Gravity settling algorithms for Talus.
//!
//! Every settler applies the same single-step [movement rule](movement)
//! until no token can move, mutating the grid in place. They differ only
//! in how they schedule work:
//!
//! | Settler | Schedule | Role |
//! |---------|----------|------|
//! | [`BaselineSettler`] | full sweeps until nothing moves | reference oracle |
//! | [`IncrementalSettler`] | sweeps restricted to unstable cells | primary engine |
//! | [`GreedySettler`] | one pass, each token slid to rest | reference oracle |
//! | [`EventDrivenSettler`] | one global min-priority queue | secondary engine |
//!
//! # Schedule families
//!
//! Sweep-scheduled settlers move every token at most one step per round,
//! so tokens falling side by side advance in lockstep. Cascade-scheduled
//! settlers slide the lowest pending token all the way down before the
//! next one starts. Where two tokens contend for a cell the families can
//! reach different (equally valid) fixpoints. Within a family results are
//! identical for every input:
//!
//! - `BaselineSettler` ≡ `IncrementalSettler`
//! - `GreedySettler` ≡ `EventDrivenSettler` (either [`Propagation`])
//!
//! All settlers conserve tokens, never touch obstacles, and stop at a
//! fixpoint.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod baseline;
pub mod event_driven;
pub mod greedy;
pub mod incremental;
pub mod movement;
mod queue;
pub mod settler;
mod stability;

pub use baseline::BaselineSettler;
pub use event_driven::{EventDrivenSettler, Propagation};
pub use greedy::GreedySettler;
pub use incremental::IncrementalSettler;
pub use settler::{Schedule, Settler};
