use im::OrdSet;
use rand::seq::SliceRandom;
use rand_core::RngCore;

use crate::game::{SlotId, Value};
use crate::solver::history::History;

/// A trait for strategies that determine the order in which a slot's
/// candidate values are tried.
pub trait ValueOrderingHeuristic {
    /// Returns the values of `domain` in the order they should be tried
    /// at `slot`.
    fn order_values(&mut self, slot: SlotId, domain: &OrdSet<Value>, history: &History)
        -> Vec<Value>;
}

/// A simple heuristic that returns values in their natural domain order.
pub struct IdentityOrdering;

impl ValueOrderingHeuristic for IdentityOrdering {
    fn order_values(
        &mut self,
        _slot: SlotId,
        domain: &OrdSet<Value>,
        _history: &History,
    ) -> Vec<Value> {
        domain.iter().copied().collect()
    }
}

/// Orders values by how often the feedback history has implicated them
/// at this slot: descending by bull count, then by cow count, remaining
/// ties in uniformly random order.
///
/// Values the history keeps crediting with exact matches at a slot are
/// the likeliest to complete a consistent assignment quickly. The random
/// tie order comes from shuffling before a stable sort, so an injected
/// stub RNG makes the full ordering reproducible.
pub struct FrequencyOrdering {
    rng: Box<dyn RngCore>,
}

impl FrequencyOrdering {
    pub fn new(rng: Box<dyn RngCore>) -> Self {
        Self { rng }
    }
}

impl ValueOrderingHeuristic for FrequencyOrdering {
    fn order_values(
        &mut self,
        slot: SlotId,
        domain: &OrdSet<Value>,
        history: &History,
    ) -> Vec<Value> {
        let mut values: Vec<Value> = domain.iter().copied().collect();
        values.shuffle(&mut *self.rng);
        values.sort_by_key(|&value| {
            std::cmp::Reverse((history.bull_count(slot, value), history.cow_count(slot, value)))
        });
        values
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::game::Feedback;
    use crate::solver::history::GuessRecord;

    fn domain(values: &[Value]) -> OrdSet<Value> {
        values.iter().copied().collect()
    }

    #[test]
    fn identity_ordering_returns_the_domain_in_order() {
        let history = History::new(3, 6);
        let mut heuristic = IdentityOrdering;
        assert_eq!(
            heuristic.order_values(0, &domain(&[4, 1, 3]), &history),
            vec![1, 3, 4]
        );
    }

    #[test]
    fn bull_counts_dominate_cow_counts() {
        let mut history = History::new(3, 6);
        // Value 3 earns a bull credit at slot 0; values 2 and 4 earn cow
        // credits there.
        history.push(GuessRecord::new(vec![3, 2, 4], Feedback::new(1, 0)));
        history.push(GuessRecord::new(vec![5, 2, 4], Feedback::new(0, 1)));

        let mut heuristic = FrequencyOrdering::new(Box::new(StepRng::new(0, 0)));
        let ordered = heuristic.order_values(0, &domain(&[0, 1, 2, 3, 4, 5]), &history);

        assert_eq!(ordered[0], 3);
        // The cow-credited values come before the never-credited ones.
        let tail: Vec<Value> = ordered[1..3].to_vec();
        assert!(tail.contains(&2) && tail.contains(&4), "tail was {tail:?}");
    }

    #[test]
    fn ordering_is_a_permutation_of_the_domain() {
        let mut history = History::new(2, 6);
        history.push(GuessRecord::new(vec![1, 2], Feedback::new(0, 2)));

        let mut heuristic =
            FrequencyOrdering::new(Box::new(ChaCha8Rng::seed_from_u64(3)));
        let ordered = heuristic.order_values(1, &domain(&[0, 1, 2, 3]), &history);

        let mut sorted = ordered.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn tie_order_is_reproducible_under_a_stub_rng() {
        let history = History::new(2, 6);
        let full = domain(&[0, 1, 2, 3, 4, 5]);

        let mut first = FrequencyOrdering::new(Box::new(StepRng::new(0, 0)));
        let mut second = FrequencyOrdering::new(Box::new(StepRng::new(0, 0)));
        assert_eq!(
            first.order_values(0, &full, &history),
            second.order_values(0, &full, &history)
        );
    }
}
