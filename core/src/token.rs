//! Board tile tokens.
//!
//! A token is the content of one physical tile: a single uppercase letter, or
//! the merged unit "QU". There is no bare "Q" token; anything that would
//! produce one is either expanded (board entry) or rejected (dictionary
//! normalization).

use std::fmt;

const LETTERS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

/// An uppercase ASCII letter other than `Q`.
///
/// The byte is private; build one with [`Letter::new`] or [`Token::letter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Checked constructor. Rejects lowercase, non-letters and `b'Q'`.
    pub fn new(byte: u8) -> Option<Self> {
        if byte.is_ascii_uppercase() && byte != b'Q' {
            Some(Letter(byte))
        } else {
            None
        }
    }
}

/// One tile's content unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    /// A single letter tile.
    Letter(Letter),
    /// The two-letter unit "QU".
    Qu,
}

impl Token {
    /// Token for an uppercase ASCII letter byte other than `b'Q'`.
    pub fn letter(byte: u8) -> Option<Self> {
        Letter::new(byte).map(Token::Letter)
    }

    /// Token for a single ASCII letter (either case).
    ///
    /// `'Q'` maps to [`Token::Qu`], matching the physical tile. Returns `None`
    /// for anything that is not an ASCII letter.
    pub fn from_char(ch: char) -> Option<Self> {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let up = ch.to_ascii_uppercase() as u8;
        if up == b'Q' {
            Some(Token::Qu)
        } else {
            Self::letter(up)
        }
    }

    /// Parse tile text such as `"a"`, `"Q"`, `"Qu"` or `"QU"`.
    ///
    /// Surrounding whitespace is ignored; anything else yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let t = text.trim();
        if t.eq_ignore_ascii_case("qu") {
            return Some(Token::Qu);
        }
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch),
            _ => None,
        }
    }

    /// The uppercase text of this token ("A", "QU", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Letter(l) => LETTERS[(l.0 - b'A') as usize],
            Token::Qu => "QU",
        }
    }

    /// Number of characters this token contributes to a rendered word.
    pub fn char_len(&self) -> usize {
        match self {
            Token::Letter(_) => 1,
            Token::Qu => 2,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a token sequence as a word.
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.len() + 1);
    for t in tokens {
        out.push_str(t.as_str());
    }
    out
}
