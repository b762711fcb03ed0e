//! Codebreak is a constraint-based solver for Mastermind-style
//! code-breaking games.
//!
//! An adversary holds a hidden code of `slots` values drawn from an
//! alphabet of `options` symbols. Each round the solver proposes a guess
//! and receives two counts back: exact positional matches ("bulls") and
//! additional value-only matches ("cows"). The solver treats the
//! accumulated feedback as a constraint satisfaction problem: per-slot
//! candidate domains shrink as records arrive, and a backtracking search
//! guided by frequency heuristics produces the next guess consistent
//! with everything seen so far.
//!
//! # Core Concepts
//!
//! - **[`CodeBreaker`]**: the solver facade. Record feedback, ask for
//!   the next guess, inspect the history.
//! - **[`score`]**: the pure scoring function both sides of the game
//!   agree on.
//! - **[`Game`]**: a feedback source holding a secret, for self-play and
//!   tests.
//! - **[`GuessStrategy`]**: pluggable non-CSP guess generators for an
//!   action-selection layer above this crate.
//!
//! # Example: solving a fixed secret
//!
//! ```
//! use codebreak::game::score;
//! use codebreak::solver::breaker::CodeBreaker;
//!
//! let secret = vec![1, 2, 3, 4];
//! let mut breaker = CodeBreaker::with_seed(4, 6, 42).unwrap();
//!
//! let mut solved = false;
//! for _round in 0..24 {
//!     let (guess, _stats) = breaker.next_guess();
//!     // `None` would mean the recorded feedback contradicts itself,
//!     // which cannot happen when it comes from a real secret.
//!     let guess = guess.expect("feedback history is consistent");
//!     let feedback = score(&secret, &guess);
//!     if feedback.is_win(4) {
//!         solved = true;
//!         break;
//!     }
//!     breaker.record_feedback(guess, feedback).unwrap();
//! }
//! assert!(solved);
//! ```
//!
//! [`CodeBreaker`]: solver::breaker::CodeBreaker
//! [`score`]: game::score
//! [`Game`]: game::Game
//! [`GuessStrategy`]: strategy::GuessStrategy

pub mod error;
pub mod game;
pub mod solver;
pub mod strategy;
