// core/src/normalizer.rs
//
// Raw dictionary line -> token sequence.
//
// Steps:
// - comment lines (first non-blank char '#') are rejected
// - letters are ASCII-uppercased, everything outside A-Z is dropped
// - "QU" collapses to one token; a Q not followed by U rejects the line
//
// An empty result always means "skip this line"; it is never an error.

use crate::token::Token;

/// True if the line is a dictionary comment.
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Normalize one raw dictionary line into board tokens.
///
/// Returns an empty vector for comments, lines with no letters, and lines
/// containing a `Q` that is not immediately followed by `U` once the line has
/// been cleaned.
///
/// # Example
/// ```
/// use boggle_core::normalizer::normalize_line;
/// use boggle_core::Token;
///
/// assert_eq!(
///     normalize_line("quilt"),
///     vec![
///         Token::Qu,
///         Token::letter(b'I').unwrap(),
///         Token::letter(b'L').unwrap(),
///         Token::letter(b'T').unwrap(),
///     ]
/// );
/// assert!(normalize_line("Qat").is_empty());
/// ```
pub fn normalize_line(line: &str) -> Vec<Token> {
    if is_comment(line) {
        return Vec::new();
    }

    let cleaned: Vec<u8> = line
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase())
        .map(|c| c as u8)
        .collect();

    let mut tokens = Vec::with_capacity(cleaned.len());
    let mut i = 0;
    while i < cleaned.len() {
        let b = cleaned[i];
        if b == b'Q' {
            if cleaned.get(i + 1) != Some(&b'U') {
                return Vec::new();
            }
            tokens.push(Token::Qu);
            i += 2;
        } else {
            // cleaned bytes are uppercase and not Q, so this always yields
            tokens.extend(Token::letter(b));
            i += 1;
        }
    }
    tokens
}
