//! End-to-end tests for the boggle crate: entry -> solver -> report.

use boggle::{parse_board, prompt_board, rng_from_seed, SolveReport, TileSampler};
use boggle_core::{load_dictionary, Config, Solver};
use std::io::Cursor;

const WORDS: &[&str] = &["sat", "seat", "eats", "east", "tea", "teas", "quest", "quiet", "set"];

fn solver() -> Solver {
    Solver::new(load_dictionary(WORDS), Config::default())
}

#[test]
fn typed_board_matches_parsed_board() {
    // one tile per line, as a pipe into the binary would deliver it
    let typed = "s\ne\na\nt\nq\ni\ne\nt\nx\nx\nx\nx\nx\nx\nx\nx\n";
    let mut out = Vec::new();
    let from_prompt = prompt_board(&mut Cursor::new(typed), &mut out, 4, 4).unwrap();
    let from_text = parse_board("SEAT QUIET XXXX XXXX", 4, 4).unwrap();
    assert_eq!(from_prompt, from_text);
}

#[test]
fn solve_text_board() {
    // S  E A T
    // Qu I E T
    // X  X X X
    // X  X X X
    let board = parse_board("SEAT QUIET XXXX XXXX", 4, 4).unwrap();
    let solution = solver().solve(&board).unwrap();
    // S never touches A or T
    assert_eq!(solution.words, vec!["QUIET", "SEAT", "TEA"]);
    // each word has one path per T
    assert_eq!(solution.raw_hits, 6);
}

#[test]
fn report_serializes() {
    let board = parse_board("SEAT QUIET XXXX XXXX", 4, 4).unwrap();
    let solution = solver().solve(&board).unwrap();
    let report = SolveReport::new(&board, &solution);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["board"][1][0], "Qu");
    assert_eq!(json["words"].as_array().unwrap().len(), solution.words.len());
}

#[test]
fn random_boards_solve_in_parallel_and_sequentially_alike() {
    let sampler = TileSampler::new();
    let mut rng = rng_from_seed(Some(42));
    let seq = solver();
    let par = Solver::new(
        load_dictionary(WORDS),
        Config {
            parallel: true,
            ..Config::default()
        },
    );
    for _ in 0..10 {
        let board = sampler.board(&mut rng, 4, 4).unwrap();
        assert_eq!(
            seq.solve(&board).unwrap().words,
            par.solve(&board).unwrap().words
        );
    }
}
