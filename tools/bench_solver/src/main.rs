//! Average solve time over random boards
//!
//! Boards are drawn with English letter frequencies from a fixed seed, so
//! runs against the same dictionary are comparable.
//!
//! Usage:
//!   cargo run --release -p bench_solver -- --dict /usr/share/dict/words
//!   cargo run --release -p bench_solver -- --trials 500 --parallel

use anyhow::Result;
use boggle::{rng_from_seed, TileSampler};
use boggle_core::dictionary::load_dictionary_file;
use boggle_core::{Config, Solver};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bench_solver")]
#[command(about = "Time the solver on random boards")]
struct Args {
    /// Word list, one word per line
    #[arg(short, long, default_value = "/usr/share/dict/words")]
    dict: PathBuf,

    /// Number of boards to solve
    #[arg(short, long, default_value_t = 100)]
    trials: usize,

    /// RNG seed for board generation
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Board width
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Board height
    #[arg(long, default_value_t = 4)]
    height: usize,

    /// Search start cells in parallel
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.trials == 0 {
        anyhow::bail!("--trials must be at least 1");
    }

    let cfg = Config {
        width: args.width,
        height: args.height,
        dictionary_path: args.dict.clone(),
        parallel: args.parallel,
        ..Config::default()
    };
    cfg.validate()?;

    let (trie, stats) = load_dictionary_file(&cfg.dictionary_path)?;
    println!("Loaded {} words from {}", stats.inserted, args.dict.display());

    let solver = Solver::new(trie, cfg);
    let sampler = TileSampler::new();
    let mut rng = rng_from_seed(Some(args.seed));

    let mut total = Duration::ZERO;
    let mut words = 0usize;
    for _ in 0..args.trials {
        let board = sampler.board(&mut rng, args.width, args.height)?;
        let solution = solver.solve(&board)?;
        total += solution.elapsed;
        words += solution.words.len();
    }

    let avg_ms = total.as_secs_f64() * 1000.0 / args.trials as f64;
    println!(
        "Average solve time for {} trials: {:.3} milliseconds",
        args.trials, avg_ms
    );
    println!(
        "Average words per board: {:.1}",
        words as f64 / args.trials as f64
    );
    Ok(())
}
