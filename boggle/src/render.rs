//! Text rendering for boards and results.

use boggle_core::{Board, Token};

/// Tile label as printed on the physical cube ("Qu" rather than "QU").
pub fn tile_label(tok: Token) -> String {
    match tok {
        Token::Qu => "Qu".to_string(),
        other => other.as_str().to_string(),
    }
}

/// Render the board as a boxed grid.
///
/// ```text
/// +----+----+
/// | A  | Qu |
/// +----+----+
/// | T  | S  |
/// +----+----+
/// ```
pub fn render_board(board: &Board) -> String {
    let rule = format!("+{}\n", "----+".repeat(board.width()));
    let mut out = rule.clone();
    for row in board.rows() {
        out.push('|');
        for &tok in row {
            out.push_str(&format!(" {:<2} |", tile_label(tok)));
        }
        out.push('\n');
        out.push_str(&rule);
    }
    out
}

/// Board rows as plain strings, used for JSON output.
pub fn board_rows(board: &Board) -> Vec<Vec<String>> {
    board
        .rows()
        .map(|row| row.iter().map(|&t| tile_label(t)).collect())
        .collect()
}

/// One word per line, already ranked.
pub fn render_words(words: &[String]) -> String {
    let mut out = String::new();
    for w in words {
        out.push_str(w);
        out.push('\n');
    }
    out
}
