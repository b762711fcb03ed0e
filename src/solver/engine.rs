use im::OrdSet;
use tracing::debug;

use crate::{
    game::{Code, SlotId},
    solver::{
        consistency::{Assignment, ConsistencyChecker},
        domains::DomainStore,
        heuristics::{value::ValueOrderingHeuristic, variable::SlotSelectionHeuristic},
        history::History,
    },
};

/// Counters describing one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search-tree nodes entered (including the root).
    pub nodes_visited: u64,
    /// Nodes abandoned after every candidate value failed.
    pub backtracks: u64,
    /// Consistency-oracle invocations.
    pub consistency_checks: u64,
    /// Candidate extensions the oracle rejected.
    pub rejections: u64,
}

/// The backtracking search driver.
///
/// The engine owns its heuristics and consistency checker; the domains
/// and history it searches over belong to the caller and are read-only
/// for the duration of one [`search`](SearchEngine::search) call. The
/// growing partial assignment and the remaining-slot set are threaded
/// through the recursion as persistent values: each branch extends its
/// own copy, so there is no undo step on backtrack.
pub struct SearchEngine {
    slot_heuristic: Box<dyn SlotSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
    checker: ConsistencyChecker,
}

impl SearchEngine {
    pub fn new(
        slot_heuristic: Box<dyn SlotSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
        checker: ConsistencyChecker,
    ) -> Self {
        Self {
            slot_heuristic,
            value_heuristic,
            checker,
        }
    }

    pub fn checker(&self) -> &ConsistencyChecker {
        &self.checker
    }

    /// Searches for a full assignment consistent with `history`.
    ///
    /// Returns the found code, or `None` when no assignment over the
    /// current domains satisfies every feedback record, meaning the
    /// accumulated feedback is internally contradictory.
    pub fn search(&mut self, domains: &DomainStore, history: &History) -> (Option<Code>, SearchStats) {
        let mut stats = SearchStats::default();
        let remaining: OrdSet<SlotId> = (0..domains.slots()).collect();

        let found = self.search_rec(domains, history, Assignment::new(), remaining, &mut stats);
        let code = found.map(|assignment| {
            (0..domains.slots())
                .map(|slot| assignment[&slot])
                .collect::<Code>()
        });

        debug!(?stats, found = code.is_some(), "search finished");
        (code, stats)
    }

    fn search_rec(
        &mut self,
        domains: &DomainStore,
        history: &History,
        assignment: Assignment,
        remaining: OrdSet<SlotId>,
        stats: &mut SearchStats,
    ) -> Option<Assignment> {
        stats.nodes_visited += 1;

        if remaining.is_empty() {
            return Some(assignment);
        }

        let slot = self.slot_heuristic.select_slot(&remaining, domains)?;
        let next_remaining = remaining.without(&slot);

        for value in self
            .value_heuristic
            .order_values(slot, domains.slot_domain(slot), history)
        {
            let candidate = assignment.update(slot, value);
            stats.consistency_checks += 1;
            if self.checker.is_consistent(&candidate, history) {
                if let Some(found) =
                    self.search_rec(domains, history, candidate, next_remaining.clone(), stats)
                {
                    return Some(found);
                }
            } else {
                stats.rejections += 1;
            }
        }

        stats.backtracks += 1;
        None
    }
}
