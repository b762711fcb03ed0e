//! Defines the heuristics for selecting which slot to assign next during
//! the search process.

use im::OrdSet;
use rand::seq::IteratorRandom;
use rand_core::RngCore;

use crate::game::SlotId;
use crate::solver::domains::DomainStore;

/// A trait for slot-selection heuristics.
///
/// Implementors define a strategy for choosing which still-unassigned
/// slot the search should branch on next. A good heuristic can
/// dramatically cut the number of consistency checks the search runs.
pub trait SlotSelectionHeuristic {
    /// Selects the next slot to assign from `remaining`, or `None` if
    /// the set is empty.
    fn select_slot(&mut self, remaining: &OrdSet<SlotId>, domains: &DomainStore) -> Option<SlotId>;
}

/// A simple heuristic that selects the lowest-numbered remaining slot.
///
/// Deterministic; useful as a test and benchmark baseline.
pub struct SelectFirst;

impl SlotSelectionHeuristic for SelectFirst {
    fn select_slot(&mut self, remaining: &OrdSet<SlotId>, _domains: &DomainStore) -> Option<SlotId> {
        remaining.iter().next().copied()
    }
}

/// Selects the remaining slot with the fewest values left in its domain,
/// breaking ties uniformly at random.
///
/// This is the fail-first strategy: the most constrained slot is the one
/// most likely to expose a dead end early. The tie-break RNG is injected
/// so tests can pin the choice.
pub struct MinRemainingValues {
    rng: Box<dyn RngCore>,
}

impl MinRemainingValues {
    pub fn new(rng: Box<dyn RngCore>) -> Self {
        Self { rng }
    }
}

impl SlotSelectionHeuristic for MinRemainingValues {
    fn select_slot(&mut self, remaining: &OrdSet<SlotId>, domains: &DomainStore) -> Option<SlotId> {
        let min = remaining.iter().map(|&slot| domains.len(slot)).min()?;
        remaining
            .iter()
            .copied()
            .filter(|&slot| domains.len(slot) == min)
            .choose(&mut *self.rng)
    }
}
