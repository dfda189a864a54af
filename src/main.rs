#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use twenty48::{
    init_logging, AiPlayer, CliPlayer, FileStore, GameEngine, GameStatus, RngSource, ScoreStore,
    Session,
};

#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "best_score.txt")]
        best_file: PathBuf,
    },
    /// Let the greedy AI play one or more games.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long, default_value = "best_score.txt")]
        best_file: PathBuf,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, best_file } => {
            let store = FileStore::new(best_file);
            let player = CliPlayer::with_best(store.get());
            let engine = GameEngine::new(RngSource::new(make_rng(seed)));
            let mut session = Session::new(engine, player, store);
            let report = session.play()?;
            println!(
                "Final score: {} (best {}, kept in {})",
                report.score,
                session.store().get(),
                session.store().path().display()
            );
        }
        Commands::Auto {
            seed,
            games,
            best_file,
        } => {
            let store = FileStore::new(best_file);
            let engine = GameEngine::new(RngSource::new(make_rng(seed)));
            let mut session = Session::new(engine, AiPlayer::new(), store);
            let mut wins = 0;
            for game in 1..=games {
                let report = session.play()?;
                if report.status == GameStatus::Won {
                    wins += 1;
                }
                println!(
                    "game {:>3}: {:<7} score {:>7}  max tile {:>5}  moves {:>5}",
                    game, report.status, report.score, report.max_tile, report.moves
                );
            }
            println!(
                "{} of {} games won, best score {}",
                wins,
                games,
                session.store().get()
            );
        }
    }
    Ok(())
}
