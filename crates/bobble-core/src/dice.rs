//! Letter dice and the pooling rules used to deal them onto a board.
//!
//! The catalog is a fixed arena of 16 dice. A [`DicePool`] never moves dice
//! around inside the arena; it keeps two lists of catalog indices:
//! - `available`: dice that can still be placed on the board
//! - `overflow`: dice that can be pulled into `available` when it runs short
//!
//! Boards larger than the catalog reuse dice by refilling `overflow` from the
//! full catalog whenever it empties.

use rand::Rng;

/// Faces on every die
pub const FACES: usize = 6;

/// Board size that starts from a fixed subset of the catalog
const SMALL_BOARD_SIZE: usize = 3;

/// Number of leading catalog dice the small board starts with
const SMALL_BOARD_DICE: usize = 6;

/// A single letter die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die {
    faces: [u8; FACES],
}

impl Die {
    /// Create a die from its six faces
    pub const fn new(faces: &[u8; FACES]) -> Self {
        Self { faces: *faces }
    }

    /// The letters printed on this die
    pub fn faces(&self) -> impl Iterator<Item = char> + '_ {
        self.faces.iter().map(|&face| face as char)
    }

    /// Roll the die, picking one face uniformly at random
    pub fn roll<R: Rng>(&self, rng: &mut R) -> char {
        self.faces[rng.gen_range(0..FACES)] as char
    }
}

/// The standard dice set, in catalog order
pub const CATALOG: [Die; 16] = [
    Die::new(b"AAEEGN"),
    Die::new(b"ABBJOO"),
    Die::new(b"ACHOPS"),
    Die::new(b"AFFKPS"),
    Die::new(b"AOOTTW"),
    Die::new(b"CIMOTU"),
    Die::new(b"DEILRX"),
    Die::new(b"DELRVY"),
    Die::new(b"DISTTY"),
    Die::new(b"EEGHNW"),
    Die::new(b"EEINSU"),
    Die::new(b"EHRTVW"),
    Die::new(b"EIOSST"),
    Die::new(b"ELRTTY"),
    Die::new(b"HIMNQU"),
    Die::new(b"HLNNRZ"),
];

/// Check whether a letter appears on any die in the catalog
pub fn is_catalog_letter(letter: char) -> bool {
    CATALOG.iter().any(|die| die.faces().any(|face| face == letter))
}

fn full_catalog() -> Vec<usize> {
    (0..CATALOG.len()).collect()
}

/// Working pools of catalog indices used while dealing one board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DicePool {
    available: Vec<usize>,
    overflow: Vec<usize>,
}

impl DicePool {
    /// Seed the pools for a board of the given size
    pub fn for_board(size: usize) -> Self {
        if size == SMALL_BOARD_SIZE {
            Self {
                available: (0..SMALL_BOARD_DICE).collect(),
                overflow: (SMALL_BOARD_DICE..CATALOG.len()).collect(),
            }
        } else {
            Self {
                available: full_catalog(),
                overflow: full_catalog(),
            }
        }
    }

    /// Dice that can still be placed
    pub fn available(&self) -> &[usize] {
        &self.available
    }

    /// Dice waiting to be recycled into the available pool
    pub fn overflow(&self) -> &[usize] {
        &self.overflow
    }

    /// Top up the available pool until it holds at least `needed` dice.
    ///
    /// Dice are pulled from the overflow pool without replacement; an empty
    /// overflow pool is reset to the full catalog.
    pub fn replenish<R: Rng>(&mut self, needed: usize, rng: &mut R) {
        while self.available.len() < needed {
            if self.overflow.is_empty() {
                self.overflow = full_catalog();
            }
            let pick = rng.gen_range(0..self.overflow.len());
            self.available.push(self.overflow.swap_remove(pick));
        }
    }

    /// Take one die out of the available pool, uniformly at random
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.available.is_empty() {
            return None;
        }
        let pick = rng.gen_range(0..self.available.len());
        Some(self.available.swap_remove(pick))
    }

    /// Deal `count` letters: one fresh die per letter, one random face per die
    pub fn deal<R: Rng>(&mut self, count: usize, rng: &mut R) -> Vec<char> {
        self.replenish(count, rng);

        let mut letters = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(die) = self.draw(rng) else {
                break;
            };
            letters.push(CATALOG[die].roll(rng));
        }
        letters
    }
}
