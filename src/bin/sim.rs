use twenty48::{init_logging, AiPlayer, GameEngine, MemoryStore, Session};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let engine = GameEngine::seeded(seed);
    let mut session = Session::new(engine, AiPlayer::new(), MemoryStore::new());
    let report = session.play()?;
    let (engine, _, _) = session.into_parts();

    let result = json!({
        "seed": seed,
        "status": report.status.to_string(),
        "score": report.score,
        "max_tile": report.max_tile,
        "moves": report.moves,
        "board": engine.grid(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
