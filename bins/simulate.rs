use snake_board::{Board, Simulation};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Plays a batch of seeded games with random brains and reports how they went.
#[derive(Debug, Parser)]
#[command(name = "simulate", version)]
struct Args {
    /// Board height in cells.
    #[arg(long, default_value_t = 7)]
    height: i32,

    /// Board width in cells.
    #[arg(long, default_value_t = 11)]
    width: i32,

    /// Number of games to play side by side.
    #[arg(long, default_value_t = 16)]
    snakes: usize,

    /// Seed of the first game; game `i` uses `seed + i`.
    #[arg(long, default_value_t = 121345)]
    seed: i64,

    /// Give up on games that are still going after this many moves.
    #[arg(long, default_value_t = 1_000)]
    max_moves: u32,

    /// Print every final board, not just the best one.
    #[arg(long)]
    show: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "simulate=info,snake_board=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    info!(?args, "starting");

    let mut sim = Simulation::new(args.height, args.width, args.snakes, args.seed)?;
    let ticks = sim.run(args.max_moves);

    if args.show {
        for (i, board) in sim.boards().enumerate() {
            println!("game {}:\n{}\n", i, board);
        }
    }

    let scores: Vec<u32> = sim.boards().map(Board::score).collect();
    let total: u32 = scores.iter().sum();

    println!("ticks: {}, still live: {}", ticks, sim.live_count());
    println!("scores: {:?}", scores);
    println!("mean score: {:.2}", f64::from(total) / scores.len().max(1) as f64);

    if let Some(best) = sim.best() {
        println!("best:\n{}", best);
    }

    Ok(())
}
