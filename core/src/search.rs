// core/src/search.rs
//
// Trie-pruned depth-first search over a board.
//
// Every start cell launches a walk that carries three things: the visited set
// for the current path, the rendered prefix, and the trie node reached by that
// prefix. A step onto a tile whose token has no child under the current node
// ends the branch immediately; nothing under it can spell a word.
//
// The trie is only read here, so per-cell walks are independent and
// `find_words_parallel` can hand them to rayon without any locking.

use rayon::prelude::*;

use crate::board::{Board, Cell, Visited};
use crate::trie::TrieNode;

/// A found word together with the tiles that spell it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPath {
    pub word: String,
    /// Coordinates in spelling order; pairwise distinct, consecutive cells
    /// adjacent.
    pub path: Vec<Cell>,
}

/// Walk state shared by one start cell's search.
struct Walker<'a, F> {
    board: &'a Board,
    prefix: String,
    path: Vec<Cell>,
    sink: F,
}

impl<'a, F> Walker<'a, F>
where
    F: FnMut(&str, &[Cell]),
{
    fn new(board: &'a Board, sink: F) -> Self {
        Self {
            board,
            prefix: String::new(),
            path: Vec::with_capacity(board.len()),
            sink,
        }
    }

    /// Step onto `cell` from `node` with `visited` describing the path so far.
    fn step(&mut self, cell: Cell, visited: Visited, node: &TrieNode) {
        let (row, col) = cell;
        let tok = self.board.get(row, col);
        let Some(child) = node.find_child(tok) else {
            return;
        };

        let visited = visited.with(self.board.index(row, col));
        let mark = self.prefix.len();
        self.prefix.push_str(tok.as_str());
        self.path.push(cell);

        if child.is_word() {
            (self.sink)(&self.prefix, &self.path);
        }

        for next in self.board.neighbors(row, col) {
            if !visited.contains(self.board.index(next.0, next.1)) {
                self.step(next, visited, child);
            }
        }

        self.path.pop();
        self.prefix.truncate(mark);
    }
}

/// Run the search from a single start cell, reporting each hit to `sink`.
pub fn search_from<F>(board: &Board, root: &TrieNode, start: Cell, sink: F)
where
    F: FnMut(&str, &[Cell]),
{
    let mut walker = Walker::new(board, sink);
    walker.step(start, Visited::new(), root);
}

/// Find every word in `root`'s trie that can be traced on `board`.
///
/// Results are in discovery order (row-major start cell, then depth-first)
/// and may repeat a word that has more than one tile path.
///
/// # Example
/// ```
/// use boggle_core::{dictionary::load_dictionary, search::find_words, Board, Token};
///
/// let a = Token::letter(b'A').unwrap();
/// let t = Token::letter(b'T').unwrap();
/// let s = Token::letter(b'S').unwrap();
/// let board = Board::from_rows(vec![vec![a, t], vec![t, s]]).unwrap();
/// let trie = load_dictionary(["at", "ats"]);
///
/// let words = find_words(&board, trie.root());
/// assert_eq!(words, vec!["AT", "ATS", "AT", "ATS"]);
/// ```
pub fn find_words(board: &Board, root: &TrieNode) -> Vec<String> {
    let mut found = Vec::new();
    for start in board.cells() {
        search_from(board, root, start, |word, _| found.push(word.to_string()));
    }
    tracing::debug!(hits = found.len(), "board search finished");
    found
}

/// Like [`find_words`], but each hit carries its tile path.
pub fn find_word_paths(board: &Board, root: &TrieNode) -> Vec<WordPath> {
    let mut found = Vec::new();
    for start in board.cells() {
        search_from(board, root, start, |word, path| {
            found.push(WordPath {
                word: word.to_string(),
                path: path.to_vec(),
            })
        });
    }
    found
}

/// [`find_words`] with one rayon task per start cell.
///
/// Output is identical to the sequential search: per-cell results are
/// concatenated in row-major start order.
pub fn find_words_parallel(board: &Board, root: &TrieNode) -> Vec<String> {
    let starts: Vec<Cell> = board.cells().collect();
    let per_cell: Vec<Vec<String>> = starts
        .par_iter()
        .map(|&start| {
            let mut found = Vec::new();
            search_from(board, root, start, |word, _| found.push(word.to_string()));
            found
        })
        .collect();
    let found: Vec<String> = per_cell.into_iter().flatten().collect();
    tracing::debug!(hits = found.len(), "parallel board search finished");
    found
}
