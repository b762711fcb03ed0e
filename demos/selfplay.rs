use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use codebreak::{
    game::Game,
    solver::{
        breaker::{default_engine, seeded_engine, CodeBreaker},
        consistency::CheckMode,
        stats::{render_rounds_table, RoundReport},
    },
};

/// Play the solver against a randomly drawn secret and report every round.
#[derive(Parser, Debug)]
#[command(name = "selfplay")]
struct Args {
    /// Number of slots in the code.
    #[arg(long, default_value_t = 4)]
    slots: usize,

    /// Alphabet size; values run from 0 to options - 1.
    #[arg(long, default_value_t = 6)]
    options: usize,

    /// Seed for the secret and all solver tie-breaking; omit for a
    /// different game every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Use the strict consistency check instead of the relaxed default.
    #[arg(long)]
    strict: bool,

    /// Give up after this many rounds.
    #[arg(long, default_value_t = 64)]
    max_rounds: usize,

    /// Dump the final guess history as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mode = if args.strict {
        CheckMode::Strict
    } else {
        CheckMode::Relaxed
    };

    let game = match args.seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            Game::random(args.slots, args.options, &mut rng)?
        }
        None => Game::random(args.slots, args.options, &mut rand::thread_rng())?,
    };

    let engine = match args.seed {
        Some(seed) => seeded_engine(args.slots, args.options, mode, seed),
        None => default_engine(
            args.slots,
            args.options,
            mode,
            Box::new(rand::thread_rng()),
            Box::new(rand::thread_rng()),
        ),
    };
    let mut breaker = CodeBreaker::with_engine(args.slots, args.options, engine)?;

    let mut rounds: Vec<RoundReport> = Vec::new();
    let mut solved = false;
    let mut contradiction = false;

    for round in 1..=args.max_rounds {
        let (guess, stats) = breaker.next_guess();
        let Some(guess) = guess else {
            contradiction = true;
            break;
        };

        let feedback = game.check_guess(&guess);
        rounds.push(RoundReport {
            round,
            guess: guess.clone(),
            feedback,
            stats,
        });

        if feedback.is_win(args.slots) {
            solved = true;
            break;
        }
        breaker.record_feedback(guess, feedback)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(breaker.history())?);
    } else {
        println!("{}", render_rounds_table(&rounds));
    }

    if solved {
        println!("Solved {:?} in {} round(s).", game.reveal(), rounds.len());
    } else if contradiction {
        println!("Feedback history became contradictory.");
    } else {
        println!(
            "Gave up after {} rounds; the secret was {:?}.",
            args.max_rounds,
            game.reveal()
        );
    }

    Ok(())
}
