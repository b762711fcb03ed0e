use im::OrdSet;
use tracing::debug;

use crate::game::{SlotId, Value};

/// The per-slot candidate sets: one ordered set of still-possible values
/// for every slot of the code.
///
/// Domains start full and only ever shrink as feedback is applied. A
/// domain may shrink to empty; that is not an error here, since the
/// search engine discovers the dead slot and fails the enclosing search.
///
/// Ordered sets keep value iteration deterministic, which the ordering
/// heuristics rely on for reproducible tie-breaking under a stubbed RNG.
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: Vec<OrdSet<Value>>,
}

impl DomainStore {
    /// Builds full domains: every slot may hold any value in `[0, options)`.
    pub fn new(slots: usize, options: usize) -> Self {
        let full: OrdSet<Value> = (0..options).collect();
        Self {
            domains: vec![full; slots],
        }
    }

    pub fn slots(&self) -> usize {
        self.domains.len()
    }

    /// The candidate set for one slot.
    pub fn slot_domain(&self, slot: SlotId) -> &OrdSet<Value> {
        &self.domains[slot]
    }

    pub fn len(&self, slot: SlotId) -> usize {
        self.domains[slot].len()
    }

    pub fn is_empty(&self, slot: SlotId) -> bool {
        self.domains[slot].is_empty()
    }

    /// Applies a `(0, 0)` feedback record: no value of `guess` occurs
    /// anywhere in the secret, so each is removed from every slot.
    pub fn apply_zero_feedback(&mut self, guess: &[Value]) {
        for domain in &mut self.domains {
            for value in guess {
                domain.remove(value);
            }
        }
        debug!(?guess, "zero-feedback prune applied to all slots");
    }

    /// Applies a `bulls == 0` record: no position matched, so
    /// `guess[slot]` cannot be the secret's value at slot `slot` and is
    /// removed from that slot's domain, for every slot.
    pub fn apply_no_bulls(&mut self, guess: &[Value]) {
        for (slot, value) in guess.iter().enumerate() {
            self.domains[slot].remove(value);
        }
        debug!(?guess, "no-bulls prune applied positionally");
    }

    /// Applies a `bulls + cows == slots` record: the secret uses only
    /// values drawn from `guess`, so every domain is intersected with the
    /// guess's distinct value set.
    pub fn apply_full_match(&mut self, guess: &[Value]) {
        let keep: OrdSet<Value> = guess.iter().copied().collect();
        for domain in &mut self.domains {
            let kept: OrdSet<Value> = domain.iter().filter(|v| keep.contains(*v)).copied().collect();
            *domain = kept;
        }
        debug!(?guess, "full-match prune restricted domains to guess values");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn as_vec(store: &DomainStore, slot: SlotId) -> Vec<Value> {
        store.slot_domain(slot).iter().copied().collect()
    }

    #[test]
    fn new_store_has_full_domains() {
        let store = DomainStore::new(4, 6);
        assert_eq!(store.slots(), 4);
        for slot in 0..4 {
            assert_eq!(as_vec(&store, slot), vec![0, 1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn zero_feedback_removes_guess_values_everywhere() {
        let mut store = DomainStore::new(4, 6);
        store.apply_zero_feedback(&[0, 0, 0, 0]);
        for slot in 0..4 {
            assert_eq!(as_vec(&store, slot), vec![1, 2, 3, 4, 5]);
        }

        store.apply_zero_feedback(&[1, 2, 1, 2]);
        for slot in 0..4 {
            assert_eq!(as_vec(&store, slot), vec![3, 4, 5]);
        }
    }

    #[test]
    fn no_bulls_removes_values_positionally() {
        let mut store = DomainStore::new(3, 6);
        store.apply_no_bulls(&[1, 2, 3]);
        assert_eq!(as_vec(&store, 0), vec![0, 2, 3, 4, 5]);
        assert_eq!(as_vec(&store, 1), vec![0, 1, 3, 4, 5]);
        assert_eq!(as_vec(&store, 2), vec![0, 1, 2, 4, 5]);
    }

    #[test]
    fn full_match_restricts_to_guess_values() {
        let mut store = DomainStore::new(4, 6);
        store.apply_full_match(&[1, 2, 3, 4]);
        for slot in 0..4 {
            assert_eq!(as_vec(&store, slot), vec![1, 2, 3, 4]);
        }

        // A repeated-value guess restricts to its distinct values.
        store.apply_full_match(&[1, 1, 2, 2]);
        for slot in 0..4 {
            assert_eq!(as_vec(&store, slot), vec![1, 2]);
        }
    }

    #[test]
    fn pruning_can_empty_a_domain() {
        let mut store = DomainStore::new(2, 2);
        store.apply_zero_feedback(&[0, 1]);
        assert!(store.is_empty(0));
        assert!(store.is_empty(1));
    }

    proptest! {
        // Whatever prune runs, domains only ever lose values.
        #[test]
        fn pruning_is_monotone(
            ops in prop::collection::vec(
                (0..3usize, prop::collection::vec(0..6usize, 4)),
                1..8,
            ),
        ) {
            let mut store = DomainStore::new(4, 6);
            for (op, guess) in ops {
                let before: Vec<OrdSet<Value>> =
                    (0..4).map(|s| store.slot_domain(s).clone()).collect();
                match op {
                    0 => store.apply_zero_feedback(&guess),
                    1 => store.apply_no_bulls(&guess),
                    _ => store.apply_full_match(&guess),
                }
                for slot in 0..4 {
                    prop_assert!(store
                        .slot_domain(slot)
                        .iter()
                        .all(|v| before[slot].contains(v)));
                }
            }
        }
    }
}
