// boggle/src/entry.rs
//
// Board entry: turning user text into a `Board`.
//
// Two sources:
// - `parse_board` for a whole board given at once ("SEAT QUIT ..." or
//   "seatquit...")
// - `prompt_board` for one tile per line, prompting on a writer
//
// A lone "Q" always becomes a "QU" tile.

use anyhow::{bail, Context, Result};
use boggle_core::{Board, BoardError, Token};
use std::io::{BufRead, Write};

/// Split board text into tile tokens.
///
/// Whitespace, commas and slashes separate tiles but are optional; "QU" or
/// "Q" each produce one tile. Any other non-letter is an error.
pub fn parse_tiles(text: &str) -> Result<Vec<Token>, BoardError> {
    let upper: Vec<char> = text.chars().map(|c| c.to_ascii_uppercase()).collect();
    let mut tiles = Vec::new();
    let mut i = 0;
    while i < upper.len() {
        let ch = upper[i];
        if ch.is_whitespace() || ch == ',' || ch == '/' {
            i += 1;
            continue;
        }
        let tok = Token::from_char(ch).ok_or_else(|| BoardError::InvalidTile(ch.to_string()))?;
        i += 1;
        if tok == Token::Qu && upper.get(i) == Some(&'U') {
            i += 1;
        }
        tiles.push(tok);
    }
    Ok(tiles)
}

/// Parse a complete `width` x `height` board from text, row-major.
///
/// # Example
/// ```
/// use boggle::entry::parse_board;
/// use boggle_core::Token;
///
/// let board = parse_board("at/qs", 2, 2).unwrap();
/// assert_eq!(board.get(1, 0), Token::Qu);
/// ```
pub fn parse_board(text: &str, width: usize, height: usize) -> Result<Board, BoardError> {
    Board::new(width, height, parse_tiles(text)?)
}

/// Ask for every tile on `output`, reading answers line by line from `input`.
///
/// Blank or invalid answers are re-prompted. Running out of input before the
/// board is full is an error.
pub fn prompt_board<R, W>(input: &mut R, output: &mut W, width: usize, height: usize) -> Result<Board>
where
    R: BufRead,
    W: Write,
{
    let mut cells = Vec::with_capacity(width * height);
    let mut line = String::new();
    for row in 0..height {
        for col in 0..width {
            loop {
                write!(output, "Tile at row {}, column {}: ", row + 1, col + 1)?;
                output.flush()?;
                line.clear();
                let n = input.read_line(&mut line).context("failed to read board tile")?;
                if n == 0 {
                    bail!(
                        "input ended after {} of {} tiles",
                        cells.len(),
                        width * height
                    );
                }
                match Token::parse(&line) {
                    Some(tok) => {
                        cells.push(tok);
                        break;
                    }
                    None => {
                        tracing::debug!(input = line.trim(), "rejected tile");
                        writeln!(output, "Enter a single letter (Q means QU).")?;
                    }
                }
            }
        }
    }
    Ok(Board::new(width, height, cells)?)
}
