//! Dictionary loading for boggle-core
//!
//! Turns a stream of raw text lines into a populated [`Trie`]. Each line is
//! one candidate word; `#` comment lines, lines without letters and lines
//! that need a bare "Q" tile are skipped.
//!
//! Public API:
//! - `load_dictionary` - lines in, trie out
//! - `DictionaryLoader` - incremental loading with `LoadStats`
//! - `read_dictionary_file` - line source backed by a file on disk

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::normalizer::{is_comment, normalize_line};
use crate::trie::Trie;

/// Counters collected while loading a dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines offered to the loader.
    pub lines: usize,
    /// Lines that were normalized and inserted.
    pub inserted: usize,
    /// Comment lines.
    pub comments: usize,
    /// Lines the normalizer rejected (no letters, or a bare Q).
    pub rejected: usize,
}

/// Incremental dictionary builder.
#[derive(Debug, Default)]
pub struct DictionaryLoader {
    trie: Trie,
    stats: LoadStats,
}

impl DictionaryLoader {
    /// Loader with an empty trie and zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw line.
    pub fn push_line(&mut self, line: &str) {
        self.stats.lines += 1;
        if is_comment(line) {
            self.stats.comments += 1;
            return;
        }
        let tokens = normalize_line(line);
        if tokens.is_empty() {
            tracing::trace!(line, "rejected dictionary line");
            self.stats.rejected += 1;
            return;
        }
        self.trie.insert(&tokens);
        self.stats.inserted += 1;
    }

    /// Feed every line from an iterator.
    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref());
        }
    }

    /// Counters for the lines pushed so far.
    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// Finish loading. The returned trie is never mutated again by the
    /// solver.
    pub fn finish(self) -> (Trie, LoadStats) {
        tracing::info!(
            lines = self.stats.lines,
            inserted = self.stats.inserted,
            comments = self.stats.comments,
            rejected = self.stats.rejected,
            nodes = self.trie.node_count(),
            "dictionary loaded"
        );
        (self.trie, self.stats)
    }
}

/// Build a trie from raw dictionary lines.
///
/// # Example
/// ```
/// use boggle_core::dictionary::load_dictionary;
/// use boggle_core::normalizer::normalize_line;
///
/// let trie = load_dictionary(["# words", "at", "sat", "Qat"]);
/// assert!(trie.contains(&normalize_line("sat")));
/// assert_eq!(trie.word_count(), 2);
/// ```
pub fn load_dictionary<I, S>(lines: I) -> Trie
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut loader = DictionaryLoader::new();
    loader.extend(lines);
    loader.finish().0
}

/// Read all lines of a dictionary file.
///
/// An unreadable file is returned as an error; callers treat it as fatal.
/// Bytes that are not valid UTF-8 (Latin-1 word lists, stray binary) are
/// replaced lossily, so a bad line only loses its non-ASCII letters and
/// never aborts the load.
pub fn read_dictionary_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open dictionary {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for raw in reader.split(b'\n') {
        let mut raw =
            raw.with_context(|| format!("failed to read dictionary {}", path.display()))?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        lines.push(String::from_utf8_lossy(&raw).into_owned());
    }
    Ok(lines)
}

/// Read a dictionary file and load it, returning the trie and load counters.
pub fn load_dictionary_file<P: AsRef<Path>>(path: P) -> Result<(Trie, LoadStats)> {
    let lines = read_dictionary_file(path)?;
    let mut loader = DictionaryLoader::new();
    loader.extend(&lines);
    Ok(loader.finish())
}
