//! Boggle solver CLI
//!
//! Usage:
//!   boggle --board "SERS PATG LINE SERS"
//!   boggle --random --seed 42 --dict words.txt
//!   printf 'a\nt\n...' | boggle          # one tile per line on stdin
//!
//! Logging goes to stderr; set RUST_LOG or pass -v / -vv.

use anyhow::{Context, Result};
use boggle::{
    parse_board, prompt_board, render_board, render_words, rng_from_seed, SolveReport,
    TileSampler,
};
use boggle_core::dictionary::load_dictionary_file;
use boggle_core::{Board, Config, Solver};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "boggle")]
#[command(about = "Find every dictionary word on a Boggle board")]
struct Args {
    /// Word list, one word per line (overrides the config file)
    #[arg(short, long)]
    dict: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board tiles, row-major ("Q" is a "QU" tile)
    #[arg(short, long, conflicts_with = "random")]
    board: Option<String>,

    /// Generate a board with English letter frequencies
    #[arg(long)]
    random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Board width
    #[arg(long)]
    width: Option<usize>,

    /// Board height
    #[arg(long)]
    height: Option<usize>,

    /// Search start cells in parallel
    #[arg(long)]
    parallel: bool,

    /// Hide words shorter than this
    #[arg(long)]
    min_len: Option<usize>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_config(args: &Args) -> Result<Config> {
    let mut cfg = match &args.config {
        Some(path) => Config::load_toml(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => Config::default(),
    };
    if let Some(d) = &args.dict {
        cfg.dictionary_path = d.clone();
    }
    if let Some(w) = args.width {
        cfg.width = w;
    }
    if let Some(h) = args.height {
        cfg.height = h;
    }
    if let Some(m) = args.min_len {
        cfg.min_word_length = m;
    }
    cfg.parallel |= args.parallel;
    cfg.validate()?;
    Ok(cfg)
}

fn read_board(args: &Args, cfg: &Config) -> Result<Board> {
    if let Some(text) = &args.board {
        return parse_board(text, cfg.width, cfg.height).context("invalid --board");
    }
    if args.random {
        let mut rng = rng_from_seed(args.seed);
        return Ok(TileSampler::new().board(&mut rng, cfg.width, cfg.height)?);
    }
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompt = io::stderr();
    prompt_board(&mut input, &mut prompt, cfg.width, cfg.height)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let cfg = build_config(&args)?;
    let (trie, stats) = load_dictionary_file(&cfg.dictionary_path)?;
    tracing::info!(words = stats.inserted, "dictionary ready");

    let board = read_board(&args, &cfg)?;
    let solver = Solver::new(trie, cfg);
    let solution = solver.solve(&board)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let report = SolveReport::new(&board, &solution);
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    write!(out, "{}", render_board(&board))?;
    writeln!(out, "Executed in {} milliseconds", solution.elapsed_ms())?;
    writeln!(out, "Words found: {}", solution.words.len())?;
    write!(out, "{}", render_words(&solution.words))?;
    Ok(())
}
