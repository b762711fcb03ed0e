//! The feedback/consistency oracle: decides whether a (possibly partial)
//! slot assignment can still be completed without contradicting any
//! recorded feedback.

use crate::game::{SlotId, Value};
use crate::solver::history::History;

/// A partial slot assignment, grown one slot at a time during search.
///
/// Persistent map so each search branch can extend its own copy cheaply;
/// nothing is ever mutated in place and undone.
pub type Assignment = im::HashMap<SlotId, Value>;

/// Which admissibility test to run.
///
/// `Relaxed` skips the cow-surplus upper bound whenever the assignment
/// already accounts for every bull of a record, trading precision for
/// fewer rejections; it can accept assignments that a full re-scoring
/// would turn away. `Strict` applies the bound unconditionally, which
/// for complete assignments collapses to an exact feedback comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckMode {
    #[default]
    Relaxed,
    Strict,
}

/// Validates assignments against the full feedback history.
#[derive(Debug, Clone)]
pub struct ConsistencyChecker {
    slots: usize,
    options: usize,
    mode: CheckMode,
}

impl ConsistencyChecker {
    pub fn new(slots: usize, options: usize, mode: CheckMode) -> Self {
        Self {
            slots,
            options,
            mode,
        }
    }

    pub fn mode(&self) -> CheckMode {
        self.mode
    }

    /// Whether `assignment` can still extend to a code agreeing with
    /// every record in `history`.
    ///
    /// The assignment is materialised into a hypothetical code whose
    /// unassigned slots hold a sentinel that never matches and is never
    /// counted. Each record is then checked against what the empty slots
    /// could still supply:
    ///
    /// - the missing bulls (`bulls_dist`) must fit into the empty slots;
    /// - filling an empty slot with a new bull can consume at most one
    ///   existing cow, so the cow deficit may not exceed the new bulls
    ///   (`cows_dist + bulls_dist >= 0`);
    /// - the cow surplus must fit into the slots left after the new
    ///   bulls (`cows_dist <= remaining_empty`); enforced always in
    ///   strict mode, but only when `bulls_dist != 0` in relaxed mode.
    pub fn is_consistent(&self, assignment: &Assignment, history: &History) -> bool {
        let mut hypothetical: Vec<Option<Value>> = vec![None; self.slots];
        for (&slot, &value) in assignment.iter() {
            hypothetical[slot] = Some(value);
        }
        let empty = (self.slots - assignment.len()) as i64;

        for record in history.records() {
            let (res_bulls, res_cows) = score_partial(&record.guess, &hypothetical, self.options);

            let bulls_dist = record.feedback.bulls as i64 - res_bulls as i64;
            if bulls_dist < 0 || bulls_dist > empty {
                return false;
            }

            let remaining_empty = empty - bulls_dist;
            let cows_dist = record.feedback.cows as i64 - res_cows as i64;
            if cows_dist + bulls_dist < 0 {
                return false;
            }
            let enforce_upper = self.mode == CheckMode::Strict || bulls_dist != 0;
            if enforce_upper && cows_dist > remaining_empty {
                return false;
            }
        }
        true
    }
}

/// Scores a guess against a partially materialised code. The sentinel
/// (`None`) never matches positionally and contributes nothing to the
/// multiset intersection.
fn score_partial(guess: &[Value], hypothetical: &[Option<Value>], options: usize) -> (usize, usize) {
    let mut bulls = 0;
    let mut guess_counts = vec![0usize; options];
    let mut hyp_counts = vec![0usize; options];

    for (g, h) in guess.iter().zip(hypothetical.iter()) {
        guess_counts[*g] += 1;
        if let Some(h) = h {
            hyp_counts[*h] += 1;
            if h == g {
                bulls += 1;
            }
        }
    }

    let common: usize = guess_counts
        .iter()
        .zip(hyp_counts.iter())
        .map(|(a, b)| a.min(b))
        .sum();

    (bulls, common - bulls)
}
