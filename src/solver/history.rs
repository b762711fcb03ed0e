//! The append-only feedback history and the per-slot frequency counters
//! accumulated from it.

use serde::{Deserialize, Serialize};

use crate::game::{Code, Feedback, SlotId, Value};

/// One round of the game as seen by the solver: the guess it (or anyone)
/// made and the feedback that came back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: Code,
    pub feedback: Feedback,
}

impl GuessRecord {
    pub fn new(guess: Code, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }
}

/// A dense `slots x options` counter matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: Vec<Vec<u32>>,
}

impl FrequencyTable {
    fn new(slots: usize, options: usize) -> Self {
        Self {
            counts: vec![vec![0; options]; slots],
        }
    }

    fn bump(&mut self, slot: SlotId, value: Value) {
        self.counts[slot][value] += 1;
    }

    pub fn count(&self, slot: SlotId, value: Value) -> u32 {
        self.counts[slot][value]
    }
}

/// The full feedback history of one game, together with the bull/cow
/// frequency tables the value-ordering heuristic reads.
///
/// Records are append-only; the tables are updated exactly once per
/// [`push`](History::push). Insertion order is presentation order only;
/// the feasible set a search sees does not depend on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    slots: usize,
    options: usize,
    records: Vec<GuessRecord>,
    bull_counts: FrequencyTable,
    cow_counts: FrequencyTable,
}

impl History {
    pub fn new(slots: usize, options: usize) -> Self {
        Self {
            slots,
            options,
            records: Vec::new(),
            bull_counts: FrequencyTable::new(slots, options),
            cow_counts: FrequencyTable::new(slots, options),
        }
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    pub fn options(&self) -> usize {
        self.options
    }

    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether an identical guess was already recorded.
    pub fn contains_guess(&self, guess: &[Value]) -> bool {
        self.records.iter().any(|r| r.guess == guess)
    }

    /// How many records with bulls placed `value` at `slot`.
    pub fn bull_count(&self, slot: SlotId, value: Value) -> u32 {
        self.bull_counts.count(slot, value)
    }

    /// How many records with cows contained `value` somewhere other than
    /// `slot`.
    pub fn cow_count(&self, slot: SlotId, value: Value) -> u32 {
        self.cow_counts.count(slot, value)
    }

    /// Appends a record and folds it into the frequency tables.
    ///
    /// A record with bulls credits, at each slot, the value the guess
    /// placed there. A record with cows credits, at each slot, every
    /// distinct guess value other than the one at that slot (those are
    /// the values the cows could have come from).
    pub fn push(&mut self, record: GuessRecord) {
        if record.feedback.bulls > 0 {
            for (slot, &value) in record.guess.iter().enumerate() {
                self.bull_counts.bump(slot, value);
            }
        }
        if record.feedback.cows > 0 {
            let distinct: im::OrdSet<Value> = record.guess.iter().copied().collect();
            for (slot, &own) in record.guess.iter().enumerate() {
                for &value in distinct.iter() {
                    if value != own {
                        self.cow_counts.bump(slot, value);
                    }
                }
            }
        }
        self.records.push(record);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn records_are_appended_in_order() {
        let mut history = History::new(3, 6);
        assert!(history.is_empty());

        history.push(GuessRecord::new(vec![1, 2, 3], Feedback::new(1, 0)));
        history.push(GuessRecord::new(vec![4, 5, 0], Feedback::new(0, 2)));

        assert_eq!(history.len(), 2);
        assert_eq!(history.records()[0].guess, vec![1, 2, 3]);
        assert_eq!(history.records()[1].feedback, Feedback::new(0, 2));
        assert!(history.contains_guess(&[1, 2, 3]));
        assert!(!history.contains_guess(&[3, 2, 1]));
    }

    #[test]
    fn bull_records_credit_the_value_at_each_slot() {
        let mut history = History::new(3, 6);
        history.push(GuessRecord::new(vec![1, 2, 3], Feedback::new(2, 0)));

        assert_eq!(history.bull_count(0, 1), 1);
        assert_eq!(history.bull_count(1, 2), 1);
        assert_eq!(history.bull_count(2, 3), 1);
        assert_eq!(history.bull_count(0, 2), 0);
    }

    #[test]
    fn zero_bull_records_credit_nothing() {
        let mut history = History::new(3, 6);
        history.push(GuessRecord::new(vec![1, 2, 3], Feedback::new(0, 1)));

        for slot in 0..3 {
            for value in 0..6 {
                assert_eq!(history.bull_count(slot, value), 0);
            }
        }
    }

    #[test]
    fn cow_records_credit_the_other_guess_values() {
        let mut history = History::new(3, 6);
        history.push(GuessRecord::new(vec![1, 2, 1], Feedback::new(0, 2)));

        // Slot 0 held 1, so only 2 is credited there; slot 1 held 2, so
        // only the (single, distinct) 1 is credited there.
        assert_eq!(history.cow_count(0, 2), 1);
        assert_eq!(history.cow_count(0, 1), 0);
        assert_eq!(history.cow_count(1, 1), 1);
        assert_eq!(history.cow_count(1, 2), 0);
        assert_eq!(history.cow_count(2, 2), 1);
        assert_eq!(history.cow_count(2, 1), 0);
    }

    #[test]
    fn counts_accumulate_across_records() {
        let mut history = History::new(2, 4);
        history.push(GuessRecord::new(vec![0, 1], Feedback::new(1, 0)));
        history.push(GuessRecord::new(vec![0, 2], Feedback::new(1, 1)));

        assert_eq!(history.bull_count(0, 0), 2);
        assert_eq!(history.bull_count(1, 1), 1);
        assert_eq!(history.bull_count(1, 2), 1);
        // Only the second record had cows.
        assert_eq!(history.cow_count(0, 2), 1);
        assert_eq!(history.cow_count(1, 0), 1);
    }
}
