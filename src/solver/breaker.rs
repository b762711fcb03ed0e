use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_core::RngCore;
use tracing::debug;

use crate::{
    error::{Result, SolverError},
    game::{Code, Feedback, Value},
    solver::{
        consistency::{CheckMode, ConsistencyChecker},
        domains::DomainStore,
        engine::{SearchEngine, SearchStats},
        heuristics::{value::FrequencyOrdering, variable::MinRemainingValues},
        history::{GuessRecord, History},
    },
};

/// The code-breaker: owns the feedback history and the pruned domains
/// for one game, and produces guesses consistent with everything seen
/// so far.
///
/// One instance per game; there is no shared state between instances.
pub struct CodeBreaker {
    slots: usize,
    options: usize,
    domains: DomainStore,
    history: History,
    engine: SearchEngine,
}

impl CodeBreaker {
    /// Creates a breaker with the default engine: minimum-remaining-values
    /// slot selection, frequency value ordering (both tie-broken by the
    /// thread RNG) and the relaxed consistency check.
    pub fn new(slots: usize, options: usize) -> Result<Self> {
        let engine = default_engine(
            slots,
            options,
            CheckMode::Relaxed,
            Box::new(rand::thread_rng()),
            Box::new(rand::thread_rng()),
        );
        Self::with_engine(slots, options, engine)
    }

    /// Like [`new`](CodeBreaker::new), but with all tie-breaking drawn
    /// from a seeded RNG, so two breakers with the same seed play
    /// identical games.
    pub fn with_seed(slots: usize, options: usize, seed: u64) -> Result<Self> {
        let engine = seeded_engine(slots, options, CheckMode::Relaxed, seed);
        Self::with_engine(slots, options, engine)
    }

    /// Creates a breaker around a caller-assembled engine (custom
    /// heuristics or the strict consistency mode).
    pub fn with_engine(slots: usize, options: usize, engine: SearchEngine) -> Result<Self> {
        if slots == 0 || options == 0 {
            return Err(SolverError::InvalidDimensions { slots, options }.into());
        }
        Ok(Self {
            slots,
            options,
            domains: DomainStore::new(slots, options),
            history: History::new(slots, options),
            engine,
        })
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    pub fn options(&self) -> usize {
        self.options
    }

    /// The feedback history so far, for external statistics or feature
    /// computation.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The current per-slot candidate domains.
    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    /// Records one round of feedback: validates the inputs, applies the
    /// matching domain-pruning rule and appends to the history (which
    /// also folds the record into the frequency counters).
    pub fn record_feedback(&mut self, guess: Code, feedback: Feedback) -> Result<()> {
        self.validate(&guess, feedback)?;

        if feedback.bulls == 0 {
            if feedback.cows == 0 {
                self.domains.apply_zero_feedback(&guess);
            } else {
                self.domains.apply_no_bulls(&guess);
            }
        }
        if feedback.bulls + feedback.cows == self.slots {
            self.domains.apply_full_match(&guess);
        }

        debug!(?guess, %feedback, "feedback recorded");
        self.history.push(GuessRecord::new(guess, feedback));
        Ok(())
    }

    /// Produces the next guess: a full code consistent with every
    /// feedback record so far.
    ///
    /// `None` means the history admits no code at all: the feedback is
    /// internally contradictory and the game should be restarted, not
    /// continued.
    pub fn next_guess(&mut self) -> (Option<Code>, SearchStats) {
        self.engine.search(&self.domains, &self.history)
    }

    fn validate(&self, guess: &[Value], feedback: Feedback) -> Result<()> {
        if guess.len() != self.slots {
            return Err(SolverError::GuessLength {
                expected: self.slots,
                got: guess.len(),
            }
            .into());
        }
        for (slot, &value) in guess.iter().enumerate() {
            if value >= self.options {
                return Err(SolverError::ValueOutOfRange {
                    slot,
                    value,
                    options: self.options,
                }
                .into());
            }
        }
        if feedback.bulls > self.slots || feedback.cows > self.slots - feedback.bulls {
            return Err(SolverError::FeedbackOutOfRange {
                bulls: feedback.bulls,
                cows: feedback.cows,
                slots: self.slots,
            }
            .into());
        }
        Ok(())
    }
}

/// The default engine assembly: MRV slot selection and frequency value
/// ordering over the supplied RNGs, with the given check mode.
pub fn default_engine(
    slots: usize,
    options: usize,
    mode: CheckMode,
    slot_rng: Box<dyn RngCore>,
    value_rng: Box<dyn RngCore>,
) -> SearchEngine {
    SearchEngine::new(
        Box::new(MinRemainingValues::new(slot_rng)),
        Box::new(FrequencyOrdering::new(value_rng)),
        ConsistencyChecker::new(slots, options, mode),
    )
}

/// [`default_engine`] with all tie-breaking drawn from a seeded ChaCha
/// RNG; the deterministic entry point for tests and benchmarks.
pub fn seeded_engine(slots: usize, options: usize, mode: CheckMode, seed: u64) -> SearchEngine {
    default_engine(
        slots,
        options,
        mode,
        Box::new(ChaCha8Rng::seed_from_u64(seed)),
        Box::new(ChaCha8Rng::seed_from_u64(seed.wrapping_add(1))),
    )
}
