//! Settle configuration.
//!
//! [`SettleConfig`] picks the algorithm and the treatment of undefined
//! cell values. Every field has a sensible default, so
//! `SettleConfig::default()` is the usual starting point.

use talus_core::{CellPolicy, SettleError};
use talus_settle::{
    BaselineSettler, EventDrivenSettler, GreedySettler, IncrementalSettler, Propagation, Settler,
};

// ── Variant ────────────────────────────────────────────────────────

/// Which settle algorithm to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Full sweeps until nothing moves. Reference oracle.
    Baseline,
    /// One pass, each token slid to rest. Reference oracle.
    Greedy,
    /// Stability-tracked worklist rounds.
    #[default]
    Incremental,
    /// Global min-priority queue.
    EventDriven,
}

impl Variant {
    /// Every variant, in ABI code order.
    pub const ALL: [Variant; 4] = [
        Variant::Baseline,
        Variant::Greedy,
        Variant::Incremental,
        Variant::EventDriven,
    ];

    /// Instantiate the settler for this variant.
    ///
    /// `propagation` only affects [`Variant::EventDriven`].
    pub fn settler(self, propagation: Propagation) -> Box<dyn Settler> {
        match self {
            Variant::Baseline => Box::new(BaselineSettler),
            Variant::Greedy => Box::new(GreedySettler),
            Variant::Incremental => Box::new(IncrementalSettler),
            Variant::EventDriven => Box::new(EventDrivenSettler::new(propagation)),
        }
    }
}

impl TryFrom<i32> for Variant {
    type Error = i32;

    /// ABI code: `0` Baseline, `1` Greedy, `2` Incremental, `3` EventDriven.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(code)
    }
}

// ── SettleConfig ───────────────────────────────────────────────────

/// Configuration for one [`settle`](crate::settle) call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettleConfig {
    /// Algorithm to run. Default: [`Variant::Incremental`].
    pub variant: Variant,
    /// Treatment of negative cell values. Default: [`CellPolicy::Reject`].
    pub cell_policy: CellPolicy,
    /// Cells re-queued above a vacated cell by the event-driven variant.
    /// Ignored by the others. Default: [`Propagation::Neighbourhood`].
    pub propagation: Propagation,
}

impl SettleConfig {
    /// Default configuration running `variant`.
    pub fn with_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Build from ABI codes, as passed across the C boundary.
    ///
    /// Returns `Err(SettleError::InvalidArgument)` naming the first
    /// unknown code.
    pub fn from_codes(variant: i32, cell_policy: i32) -> Result<Self, SettleError> {
        let variant = Variant::try_from(variant).map_err(|code| SettleError::InvalidArgument {
            reason: format!("unknown variant code {code}"),
        })?;
        let cell_policy =
            CellPolicy::try_from(cell_policy).map_err(|code| SettleError::InvalidArgument {
                reason: format!("unknown cell policy code {code}"),
            })?;
        Ok(Self {
            variant,
            cell_policy,
            ..Self::default()
        })
    }

    /// The settler this configuration runs.
    pub fn settler(&self) -> Box<dyn Settler> {
        self.variant.settler(self.propagation)
    }
}
