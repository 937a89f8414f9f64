//! boggle-core
//!
//! Dictionary trie, dictionary-line normalization and trie-pruned board
//! search shared by the `boggle` CLI and the benchmarking tool.
//!
//! Public API:
//! - `Token` - one tile's content (a letter or "QU")
//! - `Trie` / `TrieNode` - prefix tree over tokens
//! - `load_dictionary` / `DictionaryLoader` - raw lines to trie
//! - `Board` / `Visited` - the tile grid and per-path visited set
//! - `find_words` - pruned depth-first search, raw hits
//! - `rank_words` - dedup and display ordering
//! - `Solver` - trie + config, one call per board
//! - `Config` - board shape, dictionary path and search options
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod token;
pub use token::{Letter, Token};

pub mod normalizer;
pub use normalizer::normalize_line;

pub mod trie;
pub use trie::{Trie, TrieNode};

pub mod dictionary;
pub use dictionary::{load_dictionary, DictionaryLoader, LoadStats};

pub mod board;
pub use board::{Board, BoardError, Cell, Visited};

pub mod search;
pub use search::{find_word_paths, find_words, find_words_parallel, WordPath};

pub mod results;
pub use results::rank_words;

pub mod solver;
pub use solver::{Solution, Solver};

/// Solver configuration.
///
/// Board dimensions are fixed for the lifetime of a solver; boards of any
/// other shape are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Tiles per row.
    pub width: usize,
    /// Rows.
    pub height: usize,
    /// Word list, one word per line.
    pub dictionary_path: PathBuf,
    /// Search each start cell on the rayon pool.
    pub parallel: bool,
    /// Hide words shorter than this many characters ("QU" counts as two).
    pub min_word_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 4,
            height: 4,
            dictionary_path: PathBuf::from("/usr/share/dict/words"),
            parallel: false,
            min_word_length: 1,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    ///
    /// The board shape is validated, so a parsed config is always usable.
    pub fn from_toml_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check that the configured board shape is searchable.
    pub fn validate(&self) -> Result<(), BoardError> {
        board::check_dimensions(self.width, self.height)
    }

    /// Number of tiles on a configured board.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_four_by_four() {
        let cfg = Config::default();
        assert_eq!((cfg.width, cfg.height), (4, 4));
        assert_eq!(cfg.cell_count(), 16);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = Config {
            width: 5,
            height: 5,
            parallel: true,
            ..Config::default()
        };
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let cfg = Config::from_toml_str("width = 3\nheight = 3\n").unwrap();
        assert_eq!(cfg.cell_count(), 9);
        assert_eq!(cfg.dictionary_path, PathBuf::from("/usr/share/dict/words"));
        assert!(!cfg.parallel);
    }

    #[test]
    fn oversized_board_fails_validation() {
        let cfg = Config {
            width: 10,
            height: 10,
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(BoardError::TooLarge { .. })));
    }

    #[test]
    fn toml_board_shape_is_validated() {
        let err = Config::from_toml_str("width = 0\n").unwrap_err();
        assert_eq!(err.downcast_ref::<BoardError>(), Some(&BoardError::Empty));
        let err = Config::from_toml_str("width = 9\nheight = 9\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BoardError>(),
            Some(BoardError::TooLarge { .. })
        ));
        assert!(Config::from_toml_str("width = \"four\"\n").is_err());
    }

    #[test]
    fn oversized_file_is_rejected() {
        let tmp = std::env::temp_dir().join(format!(
            "boggle_core_config_oversized_{}.toml",
            std::process::id()
        ));
        std::fs::write(&tmp, "width = 10\nheight = 10\n").unwrap();
        let loaded = Config::load_toml(&tmp);
        let _ = std::fs::remove_file(&tmp);
        assert!(loaded.is_err());
    }

    #[test]
    fn save_and_load_file() {
        let tmp = std::env::temp_dir().join(format!(
            "boggle_core_config_test_{}.toml",
            std::process::id()
        ));
        let cfg = Config {
            min_word_length: 3,
            ..Config::default()
        };
        cfg.save_toml(&tmp).unwrap();
        assert_eq!(Config::load_toml(&tmp).unwrap(), cfg);
        let _ = std::fs::remove_file(tmp);
    }
}
