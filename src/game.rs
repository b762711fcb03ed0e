//! Code, feedback and scoring primitives for the code-breaking game,
//! plus a [`Game`] that can act as the feedback source for a solver.

use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SolverError};

/// One position in a code.
pub type SlotId = usize;
/// One symbol of the alphabet a slot may hold, always in `[0, options)`.
pub type Value = usize;
/// An ordered sequence of values, one per slot.
pub type Code = Vec<Value>;

/// The response to a guess: exact positional matches ("bulls") and
/// additional value-only matches ("cows").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    /// Count of slots where guess and secret hold the same value.
    pub bulls: usize,
    /// Count of values shared between guess and secret as multisets,
    /// after the bulls have been subtracted.
    pub cows: usize,
}

impl Feedback {
    pub fn new(bulls: usize, cows: usize) -> Self {
        Self { bulls, cows }
    }

    /// Whether this feedback means the secret was fully matched.
    pub fn is_win(&self, slots: usize) -> bool {
        self.bulls == slots
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bulls, {} cows", self.bulls, self.cows)
    }
}

/// Scores a guess against a secret (or any two equal-length codes).
///
/// `bulls` counts indices where the two codes agree. `cows` is the size
/// of the multiset intersection of the two codes minus `bulls`, i.e. the
/// number of values that occur in both codes but at the wrong position.
///
/// Pure and symmetric in its arguments. Equal lengths are a caller
/// obligation.
pub fn score(a: &[Value], b: &[Value]) -> Feedback {
    debug_assert_eq!(a.len(), b.len(), "scored codes must have equal length");

    let bulls = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();

    let mut counts_a: HashMap<Value, usize> = HashMap::new();
    for &v in a {
        *counts_a.entry(v).or_insert(0) += 1;
    }
    let mut counts_b: HashMap<Value, usize> = HashMap::new();
    for &v in b {
        *counts_b.entry(v).or_insert(0) += 1;
    }

    let common: usize = counts_a
        .iter()
        .map(|(v, n)| n.min(counts_b.get(v).unwrap_or(&0)))
        .sum();

    Feedback::new(bulls, common - bulls)
}

/// A feedback source holding a secret code.
///
/// A `Game` plays the adversary role: it owns the secret and answers
/// guesses with [`Feedback`]. It keeps no per-round state; the solver
/// side owns the guess history.
#[derive(Debug, Clone)]
pub struct Game {
    options: usize,
    secret: Code,
}

impl Game {
    /// Creates a game with a uniformly random secret.
    pub fn random<R: Rng + ?Sized>(slots: usize, options: usize, rng: &mut R) -> Result<Self> {
        if slots == 0 || options == 0 {
            return Err(SolverError::InvalidDimensions { slots, options }.into());
        }
        let secret = (0..slots).map(|_| rng.gen_range(0..options)).collect();
        Ok(Self { options, secret })
    }

    /// Creates a game around a known secret. Every value must lie in
    /// `[0, options)`.
    pub fn with_secret(secret: Code, options: usize) -> Result<Self> {
        if secret.is_empty() || options == 0 {
            return Err(SolverError::InvalidDimensions {
                slots: secret.len(),
                options,
            }
            .into());
        }
        for (slot, &value) in secret.iter().enumerate() {
            if value >= options {
                return Err(SolverError::ValueOutOfRange {
                    slot,
                    value,
                    options,
                }
                .into());
            }
        }
        Ok(Self { options, secret })
    }

    pub fn slots(&self) -> usize {
        self.secret.len()
    }

    pub fn options(&self) -> usize {
        self.options
    }

    /// Scores a guess against the secret.
    pub fn check_guess(&self, guess: &[Value]) -> Feedback {
        score(&self.secret, guess)
    }

    /// Exposes the secret, for drivers that need to report it after the
    /// game ends.
    pub fn reveal(&self) -> &[Value] {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn score_counts_exact_matches() {
        assert_eq!(score(&[1, 2, 3, 4], &[1, 2, 3, 4]), Feedback::new(4, 0));
        assert_eq!(score(&[1, 2, 3, 4], &[1, 2, 4, 3]), Feedback::new(2, 2));
        assert_eq!(score(&[1, 2, 3, 4], &[5, 5, 5, 5]), Feedback::new(0, 0));
    }

    #[test]
    fn score_handles_repeated_values_as_multisets() {
        // The duplicate 1 in the guess matches only once.
        assert_eq!(score(&[1, 2, 2], &[1, 1, 2]), Feedback::new(2, 0));
        assert_eq!(score(&[0, 0, 1], &[1, 0, 0]), Feedback::new(1, 2));
        assert_eq!(score(&[2, 2, 2], &[2, 3, 4]), Feedback::new(1, 0));
    }

    proptest! {
        #[test]
        fn score_within_bounds(
            a in prop::collection::vec(0..6usize, 4),
            b in prop::collection::vec(0..6usize, 4),
        ) {
            let fb = score(&a, &b);
            prop_assert!(fb.bulls <= 4);
            prop_assert!(fb.cows <= 4 - fb.bulls);
        }

        #[test]
        fn score_is_symmetric(
            a in prop::collection::vec(0..6usize, 4),
            b in prop::collection::vec(0..6usize, 4),
        ) {
            prop_assert_eq!(score(&a, &b), score(&b, &a));
        }

        #[test]
        fn score_of_code_against_itself(a in prop::collection::vec(0..6usize, 4)) {
            prop_assert_eq!(score(&a, &a), Feedback::new(4, 0));
        }
    }

    #[test]
    fn game_rejects_bad_dimensions() {
        let mut rng = rand::thread_rng();
        assert!(Game::random(0, 6, &mut rng).is_err());
        assert!(Game::random(4, 0, &mut rng).is_err());
        assert!(Game::with_secret(vec![], 6).is_err());
        assert!(Game::with_secret(vec![1, 2, 6], 6).is_err());
    }

    #[test]
    fn game_scores_guesses_against_its_secret() {
        let game = Game::with_secret(vec![1, 2, 3, 4], 6).unwrap();
        assert_eq!(game.slots(), 4);
        assert_eq!(game.check_guess(&[1, 2, 3, 4]), Feedback::new(4, 0));
        assert!(game.check_guess(&[1, 2, 3, 4]).is_win(4));
        assert_eq!(game.check_guess(&[4, 3, 2, 1]), Feedback::new(0, 4));
    }

    #[test]
    fn random_secret_stays_within_the_alphabet() {
        let mut rng = rand::thread_rng();
        let game = Game::random(8, 3, &mut rng).unwrap();
        assert_eq!(game.slots(), 8);
        assert!(game.reveal().iter().all(|&v| v < 3));
    }
}
