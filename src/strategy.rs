//! Pluggable guess generators.
//!
//! The constraint solver is one of several ways to produce a next guess;
//! an action-selection layer above this crate can mix it with cheaper
//! generators. Each strategy reads the shared [`History`] and proposes a
//! code, or `None` when it has nothing left to offer.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_core::RngCore;

use crate::{
    game::{Code, Value},
    solver::{
        breaker::{default_engine, seeded_engine, CodeBreaker},
        consistency::CheckMode,
        history::History,
    },
};

/// How long the random generator keeps rerolling before conceding that
/// every unguessed code is too hard to hit by chance.
const MAX_RANDOM_ATTEMPTS: usize = 1_000;

/// A strategy for producing the next guess from the game history.
pub trait GuessStrategy {
    fn name(&self) -> &'static str;

    /// Proposes a next guess, or `None` when this strategy cannot
    /// produce one (exhausted, or the history is contradictory).
    fn propose(&mut self, history: &History) -> Option<Code>;
}

/// Uniformly random codes, rerolled until one differs from every guess
/// already in the history.
pub struct RandomStrategy {
    rng: Box<dyn RngCore>,
}

impl RandomStrategy {
    pub fn new(rng: Box<dyn RngCore>) -> Self {
        Self { rng }
    }
}

impl GuessStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn propose(&mut self, history: &History) -> Option<Code> {
        let slots = history.slots();
        let options = history.options();

        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let code: Code = (0..slots).map(|_| self.rng.gen_range(0..options)).collect();
            if !history.contains_guess(&code) {
                return Some(code);
            }
        }
        None
    }
}

/// A random code with no repeated value, the classic opening guess that
/// maximises the value coverage of the first feedback.
pub struct AllDifferentStrategy {
    rng: Box<dyn RngCore>,
}

impl AllDifferentStrategy {
    pub fn new(rng: Box<dyn RngCore>) -> Self {
        Self { rng }
    }
}

impl GuessStrategy for AllDifferentStrategy {
    fn name(&self) -> &'static str {
        "all-different"
    }

    fn propose(&mut self, history: &History) -> Option<Code> {
        let slots = history.slots();
        let options = history.options();
        if options < slots {
            return None;
        }

        let mut values: Vec<Value> = (0..options).collect();
        values.shuffle(&mut *self.rng);
        values.truncate(slots);
        Some(values)
    }
}

/// The constraint solver as a strategy: replays the history into a fresh
/// [`CodeBreaker`] and asks it for the next consistent guess.
pub struct CspStrategy {
    mode: CheckMode,
    seed: Option<u64>,
}

impl CspStrategy {
    pub fn new(mode: CheckMode) -> Self {
        Self { mode, seed: None }
    }

    pub fn with_seed(mode: CheckMode, seed: u64) -> Self {
        Self {
            mode,
            seed: Some(seed),
        }
    }
}

impl GuessStrategy for CspStrategy {
    fn name(&self) -> &'static str {
        "csp"
    }

    fn propose(&mut self, history: &History) -> Option<Code> {
        let slots = history.slots();
        let options = history.options();
        let engine = match self.seed {
            Some(seed) => seeded_engine(slots, options, self.mode, seed),
            None => default_engine(
                slots,
                options,
                self.mode,
                Box::new(rand::thread_rng()),
                Box::new(rand::thread_rng()),
            ),
        };

        let mut breaker = CodeBreaker::with_engine(slots, options, engine).ok()?;
        for record in history.records() {
            breaker
                .record_feedback(record.guess.clone(), record.feedback)
                .ok()?;
        }

        let (code, _stats) = breaker.next_guess();
        code
    }
}
