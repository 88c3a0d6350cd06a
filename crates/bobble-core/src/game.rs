//! A single board together with its dictionary and search results.
//!
//! Searching is lazy: nothing is looked up until [`Game::find_all_words`] or
//! [`Game::has_word`] is called. Each search fully replaces the previous
//! results.

use crate::dictionary::Dictionary;
use crate::finder::{SearchReport, Word, WordFinder};
use crate::grid::{Grid, GridError};
use rand::Rng;

/// Results held by a game
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordCache {
    /// No search has run on this board yet
    #[default]
    Stale,
    /// Results of exactly one search
    Fresh {
        /// `None` for an all-words search, otherwise the upper-case target
        target: Option<String>,
        words: Vec<Word>,
        failed_lookups: usize,
    },
}

/// A board and the words found on it
#[derive(Debug, Clone)]
pub struct Game<D> {
    grid: Grid,
    dictionary: D,
    words: WordCache,
}

impl<D: Dictionary> Game<D> {
    /// Start a game on a freshly rolled board
    pub fn new(size: usize, dictionary: D) -> Result<Self, GridError> {
        let mut rng = rand::thread_rng();
        Self::new_with_rng(size, dictionary, &mut rng)
    }

    /// Start a game on a board rolled with the provided RNG
    pub fn new_with_rng<R: Rng>(size: usize, dictionary: D, rng: &mut R) -> Result<Self, GridError> {
        Ok(Self::with_grid(Grid::generate(size, rng)?, dictionary))
    }

    /// Replay a board from its flattened letters
    pub fn from_board_string(size: usize, board: &str, dictionary: D) -> Result<Self, GridError> {
        Ok(Self::with_grid(Grid::from_board_string(size, board)?, dictionary))
    }

    /// Start a game on an existing board
    pub fn with_grid(grid: Grid, dictionary: D) -> Self {
        Self {
            grid,
            dictionary,
            words: WordCache::Stale,
        }
    }

    /// Rows (and columns) on the board
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// The board
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The flattened board string, for replaying this board later
    pub fn board_string(&self) -> String {
        self.grid.board_string()
    }

    /// Current search results
    pub fn cache(&self) -> &WordCache {
        &self.words
    }

    /// Words from the last search, or `None` if no search has run
    pub fn words(&self) -> Option<&[Word]> {
        match &self.words {
            WordCache::Stale => None,
            WordCache::Fresh { words, .. } => Some(words),
        }
    }

    /// Dictionary lookups that failed during the last search
    pub fn failed_lookups(&self) -> usize {
        match &self.words {
            WordCache::Stale => 0,
            WordCache::Fresh { failed_lookups, .. } => *failed_lookups,
        }
    }

    /// Find every word on the board, replacing any earlier results
    pub fn find_all_words(&mut self) -> &[Word] {
        let report = WordFinder::new(&self.grid, &self.dictionary).find_all();
        self.store(None, report)
    }

    /// Look for a specific word on the board, ignoring case.
    ///
    /// Results of an earlier all-words search, or of an earlier search for the
    /// same word, are reused. Otherwise a targeted search runs and replaces
    /// them. Returns the first walk that spells the word.
    pub fn has_word(&mut self, target: &str) -> Option<&Word> {
        let target = target.to_ascii_uppercase();

        let searched = match &self.words {
            WordCache::Stale => false,
            WordCache::Fresh { target: None, .. } => true,
            WordCache::Fresh {
                target: Some(previous),
                ..
            } => *previous == target,
        };
        if !searched {
            let report = WordFinder::new(&self.grid, &self.dictionary).find_target(&target);
            self.store(Some(target.clone()), report);
        }

        self.words()?
            .iter()
            .find(|word| word.text.eq_ignore_ascii_case(&target))
    }

    /// The board as text: one row per line, letters separated by spaces
    pub fn render(&self) -> String {
        self.grid.to_string()
    }

    fn store(&mut self, target: Option<String>, report: SearchReport) -> &[Word] {
        self.words = WordCache::Fresh {
            target,
            words: report.words,
            failed_lookups: report.failed_lookups,
        };
        self.words().unwrap_or_default()
    }
}
