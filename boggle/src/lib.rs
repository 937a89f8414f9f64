//! boggle crate root
//!
//! The pieces around `boggle-core` that a runnable solver needs: board entry
//! from text or an interactive prompt, board and result rendering, and
//! frequency-weighted random boards.
//!
//! Public API exported here:
//! - `parse_board` / `prompt_board` from `entry`
//! - `render_board` / `render_words` from `render`
//! - `TileSampler` from `random`
//! - `SolveReport` for machine-readable output

pub mod entry;
pub mod random;
pub mod render;

use serde::Serialize;

pub use boggle_core::{Board, Config, Solution, Solver};
pub use entry::{parse_board, prompt_board};
pub use random::{rng_from_seed, TileSampler};
pub use render::{render_board, render_words};

/// JSON shape printed by `boggle --json`.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub board: Vec<Vec<String>>,
    pub words: Vec<String>,
    pub raw_hits: usize,
    pub elapsed_ms: u64,
}

impl SolveReport {
    /// Snapshot a solved board for serialization.
    pub fn new(board: &Board, solution: &Solution) -> Self {
        Self {
            board: render::board_rows(board),
            words: solution.words.clone(),
            raw_hits: solution.raw_hits,
            elapsed_ms: solution.elapsed_ms() as u64,
        }
    }
}
