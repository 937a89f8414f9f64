// core/src/solver.rs
//
// Solver facade: a loaded dictionary plus configuration.
//
// The trie is built before the solver exists and is never mutated afterwards,
// so `solve` takes `&self` and can be called from several threads at once.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::board::{Board, BoardError};
use crate::results::rank_words;
use crate::search::{find_words, find_words_parallel};
use crate::trie::Trie;
use crate::Config;

/// Outcome of solving one board.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Distinct words, longest first, ties alphabetical.
    pub words: Vec<String>,
    /// Hits reported by the search before dedup and filtering.
    pub raw_hits: usize,
    /// Wall-clock time spent in the search and ranking.
    pub elapsed: Duration,
}

impl Solution {
    /// Wall-clock solve time in whole milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Board solver over a loaded dictionary.
#[derive(Debug, Clone)]
pub struct Solver {
    trie: Arc<Trie>,
    config: Config,
}

impl Solver {
    /// Create a solver from a finished trie.
    pub fn new(trie: Trie, config: Config) -> Self {
        Self {
            trie: Arc::new(trie),
            config,
        }
    }

    /// The shared, read-only dictionary.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Configuration this solver was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Raw search hits in discovery order, duplicates included.
    pub fn find_words(&self, board: &Board) -> Result<Vec<String>, BoardError> {
        self.check_board(board)?;
        let root = self.trie.root();
        Ok(if self.config.parallel {
            find_words_parallel(board, root)
        } else {
            find_words(board, root)
        })
    }

    /// Solve a board: search, dedup, order and apply `min_word_length`.
    ///
    /// # Example
    /// ```
    /// use boggle_core::{dictionary::load_dictionary, Board, Config, Solver, Token};
    ///
    /// let cfg = Config { width: 2, height: 2, ..Config::default() };
    /// let solver = Solver::new(load_dictionary(["at", "ats", "sat"]), cfg);
    ///
    /// let rows = ["AT", "TS"]
    ///     .iter()
    ///     .map(|r| r.chars().filter_map(Token::from_char).collect())
    ///     .collect();
    /// let board = Board::from_rows(rows).unwrap();
    ///
    /// let solution = solver.solve(&board).unwrap();
    /// assert_eq!(solution.words, vec!["ATS", "SAT", "AT"]);
    /// assert_eq!(solution.raw_hits, 6);
    /// ```
    pub fn solve(&self, board: &Board) -> Result<Solution, BoardError> {
        let start = Instant::now();
        let raw = self.find_words(board)?;
        let raw_hits = raw.len();
        let min = self.config.min_word_length;
        let words: Vec<String> = rank_words(raw)
            .into_iter()
            .filter(|w| w.chars().count() >= min)
            .collect();
        let elapsed = start.elapsed();
        tracing::debug!(
            raw_hits,
            words = words.len(),
            elapsed_us = elapsed.as_micros() as u64,
            "board solved"
        );
        Ok(Solution {
            words,
            raw_hits,
            elapsed,
        })
    }

    fn check_board(&self, board: &Board) -> Result<(), BoardError> {
        let expected = (self.config.width, self.config.height);
        let found = (board.width(), board.height());
        if expected != found {
            return Err(BoardError::Mismatch { expected, found });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::load_dictionary;
    use crate::token::Token;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(
            rows.iter()
                .map(|r| r.chars().filter_map(Token::from_char).collect())
                .collect(),
        )
        .unwrap()
    }

    fn solver(words: &[&str], cfg: Config) -> Solver {
        Solver::new(load_dictionary(words.iter().copied()), cfg)
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let s = solver(&["at"], Config::default());
        let err = s.solve(&board(&["AT", "TS"])).unwrap_err();
        assert_eq!(
            err,
            BoardError::Mismatch {
                expected: (4, 4),
                found: (2, 2)
            }
        );
    }

    #[test]
    fn min_word_length_filters_after_ranking() {
        let cfg = Config {
            width: 2,
            height: 2,
            min_word_length: 3,
            ..Config::default()
        };
        let s = solver(&["at", "ats", "sat"], cfg);
        let sol = s.solve(&board(&["AT", "TS"])).unwrap();
        assert_eq!(sol.words, vec!["ATS", "SAT"]);
        assert_eq!(sol.raw_hits, 6);
    }

    #[test]
    fn parallel_config_gives_same_solution() {
        let b = board(&["SERS", "PATG", "LINE", "SERS"]);
        let words = ["pate", "tine", "lines", "sat", "ears", "gate", "pale", "spat"];
        let seq = solver(&words, Config::default()).solve(&b).unwrap();
        let par = solver(
            &words,
            Config {
                parallel: true,
                ..Config::default()
            },
        )
        .solve(&b)
        .unwrap();
        assert_eq!(seq.words, par.words);
        assert_eq!(seq.raw_hits, par.raw_hits);
    }
}
