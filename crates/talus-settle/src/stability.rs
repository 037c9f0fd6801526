//! Per-cell stability flags.

use talus_core::{Priority, SettleError};

/// One flag per cell, indexed by priority.
///
/// `true` means the token in that cell was found blocked and none of its
/// support cells has been vacated since. Empty and obstacle cells are
/// never flagged.
#[derive(Debug)]
pub(crate) struct StabilityTable {
    flags: Vec<bool>,
}

impl StabilityTable {
    pub(crate) fn new(cells: usize) -> Result<Self, SettleError> {
        let mut flags = Vec::new();
        flags
            .try_reserve_exact(cells)
            .map_err(|_| SettleError::AllocationFailed { requested: cells })?;
        flags.resize(cells, false);
        Ok(Self { flags })
    }

    #[inline]
    pub(crate) fn is_stable(&self, p: Priority) -> bool {
        self.flags[p.0]
    }

    #[inline]
    pub(crate) fn mark(&mut self, p: Priority) {
        self.flags[p.0] = true;
    }

    /// Clear the flag, returning whether it was set.
    #[inline]
    pub(crate) fn clear(&mut self, p: Priority) -> bool {
        std::mem::replace(&mut self.flags[p.0], false)
    }
}
