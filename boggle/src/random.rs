// boggle/src/random.rs
//
// Random boards with English letter frequencies, for demos and benchmarks.
//
// Weights: Cornell Math Explorer's Project English letter frequency table.

use boggle_core::{Board, Token};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Letter weights in percent, most frequent first.
pub const LETTER_WEIGHTS: [(char, f64); 26] = [
    ('E', 12.02),
    ('T', 9.1),
    ('A', 8.12),
    ('O', 7.68),
    ('I', 7.31),
    ('N', 6.95),
    ('S', 6.28),
    ('R', 6.02),
    ('H', 5.92),
    ('D', 4.32),
    ('L', 3.98),
    ('U', 2.88),
    ('C', 2.71),
    ('M', 2.61),
    ('F', 2.3),
    ('Y', 2.11),
    ('W', 2.09),
    ('G', 2.03),
    ('P', 1.82),
    ('B', 1.49),
    ('V', 1.11),
    ('K', 0.69),
    ('X', 0.17),
    ('Q', 0.11),
    ('J', 0.1),
    ('Z', 0.07),
];

/// Draws tiles by letter frequency. A drawn Q becomes a QU tile.
#[derive(Debug, Clone)]
pub struct TileSampler {
    tiles: Vec<Token>,
    dist: WeightedIndex<f64>,
}

impl TileSampler {
    /// Sampler over the English letter frequency table.
    pub fn new() -> Self {
        let tiles = LETTER_WEIGHTS
            .iter()
            .filter_map(|&(c, _)| Token::from_char(c))
            .collect();
        // weights are constant and positive
        let dist = WeightedIndex::new(LETTER_WEIGHTS.iter().map(|&(_, w)| w))
            .expect("letter weights are valid");
        Self { tiles, dist }
    }

    /// Draw one tile.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Token {
        self.tiles[self.dist.sample(rng)]
    }

    /// A full `width` x `height` board.
    pub fn board<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        width: usize,
        height: usize,
    ) -> Result<Board, boggle_core::BoardError> {
        let cells = (0..width * height).map(|_| self.sample(rng)).collect();
        Board::new(width, height, cells)
    }
}

impl Default for TileSampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Seeded generator, or an entropy-seeded one when `seed` is `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}
