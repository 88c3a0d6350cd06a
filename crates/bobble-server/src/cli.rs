//! One-shot command-line mode: print a board, then check a word on it or
//! list every word found.

use bobble_core::{Cell, Dictionary, Game, Word};
use std::fmt::Write;
use tracing::{info, warn};

/// Words printed before a long listing is cut short
const LISTED_WORDS: usize = 21;
/// Listings up to this many words are printed in full
const FULL_LISTING: usize = 25;

/// Build the full CLI output for a game
pub fn report<D: Dictionary>(game: &mut Game<D>, word: Option<&str>) -> String {
    let mut out = game.render();
    out.push('\n');

    match word {
        Some(word) => {
            let found = game.has_word(word);
            info!(word, found = found.is_some(), "Checked word");
            out.push_str(&check_result(word, found));
        }
        None => {
            let words = game.find_all_words();
            info!(count = words.len(), "Found words");
            out.push_str(&word_listing(words));
        }
    }

    let failed = game.failed_lookups();
    if failed > 0 {
        warn!(failed, "Dictionary lookups failed; results may be incomplete");
    }
    out
}

/// Outcome of checking one word
pub fn check_result(word: &str, found: Option<&Word>) -> String {
    match found {
        Some(found) => format!(
            "Word '{}' found on the board!\nPath: {}\n",
            word,
            format_path(&found.path)
        ),
        None => format!("Word '{}' not found on the board.\n", word),
    }
}

/// Found words, one per line. Long listings end with a count of the rest.
pub fn word_listing(words: &[Word]) -> String {
    let mut out = format!("Found {} words on the board:\n", words.len());

    let shown = if words.len() > FULL_LISTING {
        LISTED_WORDS
    } else {
        words.len()
    };
    for word in &words[..shown] {
        let _ = writeln!(out, "{}", word.text);
    }
    if shown < words.len() {
        let _ = writeln!(out, "... and {} more words", words.len() - shown);
    }
    out
}

fn format_path(path: &[Cell]) -> String {
    path.iter()
        .map(|cell| format!("({},{})", cell.row, cell.col))
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bobble_core::WordList;

    fn abc_game(words: &[&str]) -> Game<WordList> {
        Game::from_board_string(3, "ABCDEFGHI", WordList::new(words)).unwrap()
    }

    fn numbered_words(count: usize) -> Vec<Word> {
        (0..count)
            .map(|i| Word::new(format!("W{:02}", i), vec![]))
            .collect()
    }

    #[test]
    fn test_report_checks_word() {
        let mut game = abc_game(&["ABE"]);
        assert_eq!(
            report(&mut game, Some("abe")),
            "A B C\nD E F\nG H I\nWord 'abe' found on the board!\nPath: (0,0) -> (0,1) -> (1,1)\n"
        );
    }

    #[test]
    fn test_report_word_not_found() {
        let mut game = abc_game(&["CAT"]);
        assert_eq!(
            report(&mut game, Some("CAT")),
            "A B C\nD E F\nG H I\nWord 'CAT' not found on the board.\n"
        );
    }

    #[test]
    fn test_report_lists_words() {
        let mut game = abc_game(&["ABE", "FED"]);
        assert_eq!(
            report(&mut game, None),
            "A B C\nD E F\nG H I\nFound 2 words on the board:\nABE\nFED\n"
        );
    }

    #[test]
    fn test_short_listing_is_complete() {
        let listing = word_listing(&numbered_words(25));
        assert_eq!(listing.lines().count(), 26);
        assert!(listing.ends_with("W24\n"));
        assert!(!listing.contains("more words"));
    }

    #[test]
    fn test_long_listing_is_cut_short() {
        let listing = word_listing(&numbered_words(30));
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 23);
        assert_eq!(lines[0], "Found 30 words on the board:");
        assert_eq!(lines[21], "W20");
        assert_eq!(lines[22], "... and 9 more words");
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!(word_listing(&[]), "Found 0 words on the board:\n");
    }
}
