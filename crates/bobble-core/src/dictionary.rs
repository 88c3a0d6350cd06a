//! Dictionary oracle used to validate and prune candidate words.
//!
//! The word finder only ever asks one question: "what is the shortest stored
//! word starting with this prefix?". Both checks it needs follow from the
//! answer:
//! - the candidate is a word when the answer equals the candidate
//! - the candidate is a live prefix when there is any answer at all

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Bound;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Shortest word that can be scored
pub const MIN_WORD_LENGTH: usize = 3;

/// Errors raised by a dictionary backend
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Dictionary unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of checking one candidate against the dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lookup {
    /// The candidate is itself a stored word
    pub is_word: bool,
    /// Some stored word starts with the candidate
    pub has_prefix: bool,
}

/// Word membership and prefix queries over a corpus.
pub trait Dictionary {
    /// The shortest stored word starting with `prefix`, ties broken
    /// alphabetically. Matching ignores ASCII case and the returned word is
    /// upper case. `Ok(None)` means no stored word has this prefix.
    fn find_shortest_with_prefix(&self, prefix: &str) -> Result<Option<String>, DictionaryError>;

    /// Check a candidate with a single prefix query
    fn lookup(&self, candidate: &str) -> Result<Lookup, DictionaryError> {
        let shortest = self.find_shortest_with_prefix(candidate)?;
        Ok(Lookup {
            is_word: shortest
                .as_deref()
                .is_some_and(|word| word.eq_ignore_ascii_case(candidate)),
            has_prefix: shortest.is_some(),
        })
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn find_shortest_with_prefix(&self, prefix: &str) -> Result<Option<String>, DictionaryError> {
        (**self).find_shortest_with_prefix(prefix)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    fn find_shortest_with_prefix(&self, prefix: &str) -> Result<Option<String>, DictionaryError> {
        (**self).find_shortest_with_prefix(prefix)
    }
}

/// In-memory word list, bucketed by length and sorted within each bucket
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    by_length: BTreeMap<usize, BTreeSet<String>>,
}

impl WordList {
    /// Build a word list from words as given, normalised to upper case.
    /// Blank entries are skipped; no length filter is applied.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                list.insert(word.to_ascii_uppercase());
            }
        }
        list
    }

    /// Import a word list with one word per line.
    ///
    /// Lines are trimmed and upper-cased. Words shorter than
    /// [`MIN_WORD_LENGTH`] or containing anything other than ASCII letters
    /// are dropped, and duplicates collapse.
    pub fn import<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut list = Self::default();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.len() >= MIN_WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic()) {
                list.insert(word.to_ascii_uppercase());
            }
        }
        Ok(list)
    }

    /// Import a word list file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let file = File::open(path)?;
        Self::import(BufReader::new(file))
    }

    /// Number of stored words
    pub fn len(&self) -> usize {
        self.by_length.values().map(BTreeSet::len).sum()
    }

    /// Whether the list holds no words
    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }

    /// Exact membership, ignoring case
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_ascii_uppercase();
        self.by_length
            .get(&word.len())
            .is_some_and(|bucket| bucket.contains(&word))
    }

    fn insert(&mut self, word: String) {
        self.by_length.entry(word.len()).or_default().insert(word);
    }
}

impl Dictionary for WordList {
    fn find_shortest_with_prefix(&self, prefix: &str) -> Result<Option<String>, DictionaryError> {
        let prefix = prefix.to_ascii_uppercase();
        // Buckets are visited shortest first; within one, the first word not
        // below the prefix is the alphabetically smallest possible match.
        let shortest = self
            .by_length
            .range(prefix.len()..)
            .find_map(|(_, bucket)| {
                bucket
                    .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
                    .next()
                    .filter(|word| word.starts_with(&prefix))
            })
            .cloned();
        Ok(shortest)
    }
}
