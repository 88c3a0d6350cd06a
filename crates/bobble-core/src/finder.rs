//! Depth-first word search over a grid.
//!
//! Every cell is tried as the first letter of a word. From there the search
//! walks to neighboring cells, never reusing a cell within one walk, and asks
//! the dictionary about each prefix of three or more letters. A prefix that
//! no stored word starts with ends the walk.

use crate::dictionary::{Dictionary, Lookup, MIN_WORD_LENGTH};
use crate::grid::{Cell, Grid, Path};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A word found on the board together with the cells that spell it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    #[serde(rename = "word")]
    pub text: String,
    pub path: Path,
}

impl Word {
    /// Create a new word result
    pub fn new(text: impl Into<String>, path: Path) -> Self {
        Self {
            text: text.into(),
            path,
        }
    }
}

/// What a search is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode<'t> {
    /// Every dictionary word on the board
    AllWords,
    /// Only walks spelling this (upper-case) word
    Target(&'t str),
}

impl SearchMode<'_> {
    /// Whether a walk with this prefix can be abandoned without asking the dictionary
    fn rejects(&self, prefix: &str) -> bool {
        match self {
            SearchMode::AllWords => false,
            SearchMode::Target(target) => !target.starts_with(prefix),
        }
    }
}

/// Outcome of one search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Every walk that spells a word; the same text may appear with different paths
    pub words: Vec<Word>,
    /// Dictionary queries issued
    pub lookups: usize,
    /// Dictionary queries that failed and were treated as "no match"
    pub failed_lookups: usize,
}

/// State owned by the walks starting from one root cell
struct Traversal {
    visited: Vec<bool>,
    prefix: String,
    path: Path,
}

impl Traversal {
    fn new(cell_count: usize) -> Self {
        Self {
            visited: vec![false; cell_count],
            prefix: String::new(),
            path: Vec::new(),
        }
    }

    fn push(&mut self, letter: char, cell: Cell) {
        self.prefix.push(letter);
        self.path.push(cell);
    }

    fn pop(&mut self) {
        self.prefix.pop();
        self.path.pop();
    }
}

/// Finds dictionary words on a grid
pub struct WordFinder<'a, D: ?Sized> {
    grid: &'a Grid,
    dictionary: &'a D,
}

impl<'a, D: Dictionary + ?Sized> WordFinder<'a, D> {
    /// Create a finder over a grid and dictionary
    pub fn new(grid: &'a Grid, dictionary: &'a D) -> Self {
        Self { grid, dictionary }
    }

    /// Find every dictionary word on the board
    pub fn find_all(&self) -> SearchReport {
        self.search(SearchMode::AllWords)
    }

    /// Find every walk spelling `target`, ignoring case
    pub fn find_target(&self, target: &str) -> SearchReport {
        let target = target.to_ascii_uppercase();
        self.search(SearchMode::Target(&target))
    }

    /// Run a search from every cell, in row-major order
    pub fn search(&self, mode: SearchMode<'_>) -> SearchReport {
        let mut report = SearchReport::default();

        for root in self.grid.cells() {
            let mut traversal = Traversal::new(self.grid.cell_count());
            self.visit(root, mode, &mut traversal, &mut report);
            trace!(
                row = root.row,
                col = root.col,
                found = report.words.len(),
                "Finished root"
            );
        }

        debug!(
            ?mode,
            words = report.words.len(),
            lookups = report.lookups,
            failed_lookups = report.failed_lookups,
            "Search complete"
        );
        report
    }

    fn visit(
        &self,
        cell: Cell,
        mode: SearchMode<'_>,
        traversal: &mut Traversal,
        report: &mut SearchReport,
    ) {
        let Some(index) = self.grid.index_of(cell) else {
            return;
        };
        if traversal.visited[index] {
            return;
        }

        traversal.push(self.grid.letter_at(index), cell);
        if mode.rejects(&traversal.prefix) {
            traversal.pop();
            return;
        }

        traversal.visited[index] = true;

        let lookup = self.check(mode, &traversal.prefix, report);
        if lookup.is_word {
            debug_assert!(self.grid.traces(&traversal.path, &traversal.prefix));
            report
                .words
                .push(Word::new(traversal.prefix.clone(), traversal.path.clone()));
        }

        if lookup.has_prefix {
            for neighbor in cell.neighbors(self.grid.size()) {
                self.visit(neighbor, mode, traversal, report);
            }
        }

        traversal.visited[index] = false;
        traversal.pop();
    }

    /// Decide whether the current prefix is a word and whether to keep walking
    fn check(&self, mode: SearchMode<'_>, prefix: &str, report: &mut SearchReport) -> Lookup {
        let keep_walking = Lookup {
            is_word: false,
            has_prefix: true,
        };

        if prefix.len() < MIN_WORD_LENGTH {
            return keep_walking;
        }

        match mode {
            SearchMode::AllWords => self.lookup(prefix, report),
            // Reaching the full target still has to be confirmed by the dictionary
            SearchMode::Target(target) if target == prefix => self.lookup(prefix, report),
            SearchMode::Target(_) => keep_walking,
        }
    }

    /// Query the dictionary, treating failures as "no match"
    fn lookup(&self, candidate: &str, report: &mut SearchReport) -> Lookup {
        report.lookups += 1;
        match self.dictionary.lookup(candidate) {
            Ok(lookup) => lookup,
            Err(e) => {
                report.failed_lookups += 1;
                trace!(candidate, error = %e, "Dictionary lookup failed");
                Lookup::default()
            }
        }
    }
}
