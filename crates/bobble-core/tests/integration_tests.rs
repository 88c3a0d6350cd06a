//! Integration tests for the Bobble engine.
//!
//! These tests drive whole games: rolling or replaying a board, finding
//! words on it and checking every result against the board.

use bobble_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// Board used by the fixed scenarios:
///
/// ```text
/// A B C
/// D E F
/// G H I
/// ```
fn abc_game(words: &[&str]) -> Game<WordList> {
    Game::from_board_string(3, "ABCDEFGHI", WordList::new(words)).unwrap()
}

/// Assert every structural property a found word must have
fn assert_traceable(grid: &Grid, word: &Word) {
    assert!(word.text.len() >= MIN_WORD_LENGTH, "{:?} is too short", word);
    assert_eq!(word.text.len(), word.path.len(), "{:?}", word);
    assert!(
        word.path.iter().all(|cell| cell.row < grid.size() && cell.col < grid.size()),
        "{:?} leaves the board",
        word
    );
    assert!(grid.traces(&word.path, &word.text), "{:?} does not trace the board", word);
}

/// A word list with many short words, enough to find plenty on a random board
fn common_words() -> WordList {
    WordList::new([
        "AND", "ANT", "ARE", "ART", "ATE", "DEN", "DOE", "DOG", "EAR", "EAT", "END", "ERA",
        "GET", "HEN", "HER", "HIS", "HIT", "ICE", "INN", "ION", "ITS", "NET", "NIT", "NOD",
        "NOT", "NOW", "ODE", "ONE", "ORE", "OWE", "RAT", "RED", "ROD", "ROE", "ROT", "SAT",
        "SEA", "SET", "SIT", "SON", "TAN", "TEA", "TEN", "THE", "TIE", "TIN", "TOE", "TON",
        "TOO", "TWO", "USE", "WET", "WIN", "YES", "YET", "REST", "NEST", "TONE", "STONE",
        "NOTE", "SENT", "TENT", "TEST", "RISE", "SITE", "TIRE", "TIDE", "SIDE", "DIET",
    ])
}

#[test]
fn test_single_word_is_found_with_its_path() {
    let mut game = abc_game(&["ABE"]);
    let words = game.find_all_words().to_vec();

    assert_eq!(
        words,
        vec![Word::new(
            "ABE",
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
        )]
    );
}

#[test]
fn test_word_needing_non_adjacent_cells_is_not_found() {
    let mut game = abc_game(&["ACI"]);
    assert!(game.find_all_words().is_empty());
}

#[test]
fn test_empty_dictionary_finds_nothing() {
    let mut rng = StdRng::seed_from_u64(17);
    for size in [3, 4, 5] {
        let mut game = Game::new_with_rng(size, WordList::default(), &mut rng).unwrap();
        assert!(game.find_all_words().is_empty());
        assert_eq!(game.failed_lookups(), 0);
    }
}

#[test]
fn test_dictionary_word_missing_from_board() {
    let mut game = abc_game(&["CAT", "ABE"]);
    assert!(game.has_word("CAT").is_none());
}

#[test]
fn test_two_letter_words_are_ignored() {
    let mut game = abc_game(&["AB", "ABE"]);
    let texts: Vec<String> = game.find_all_words().iter().map(|w| w.text.clone()).collect();
    assert_eq!(texts, vec!["ABE".to_string()]);
}

#[test]
fn test_check_word_against_replayed_board() {
    // Roll a board, then check a word against the same board rebuilt from its string
    let dictionary = common_words();
    let mut rng = StdRng::seed_from_u64(31);
    let mut rolled = Game::new_with_rng(5, &dictionary, &mut rng).unwrap();
    let all: Vec<Word> = rolled.find_all_words().to_vec();

    let mut replayed = Game::from_board_string(5, &rolled.board_string(), &dictionary).unwrap();
    assert_eq!(replayed.grid(), rolled.grid());

    for word in &all {
        let found = replayed
            .has_word(&word.text.to_lowercase())
            .cloned()
            .unwrap_or_else(|| panic!("{} should be on the replayed board", word.text));
        assert_eq!(found.text, word.text);
        assert_traceable(replayed.grid(), &found);
    }
}

#[test]
fn test_random_boards_yield_traceable_words() {
    let dictionary = common_words();
    let mut rng = StdRng::seed_from_u64(2025);
    let mut total = 0;

    for size in [3, 4, 5, 6] {
        for _ in 0..5 {
            let mut game = Game::new_with_rng(size, &dictionary, &mut rng).unwrap();
            let grid = game.grid().clone();
            for word in game.find_all_words() {
                assert_traceable(&grid, word);
                assert!(dictionary.contains(&word.text));
                total += 1;
            }
        }
    }

    assert!(total > 0, "Expected at least one word across 20 random boards");
}

#[test]
fn test_find_all_words_is_idempotent() {
    let dictionary = common_words();
    let mut game = Game::from_board_string(4, "STONEARTDIESNEWT", &dictionary).unwrap();

    let count = |words: &[Word]| {
        let mut counts: HashMap<Word, usize> = HashMap::new();
        for word in words {
            *counts.entry(word.clone()).or_default() += 1;
        }
        counts
    };

    let first = count(game.find_all_words());
    let second = count(game.find_all_words());
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_targeted_and_full_search_agree() {
    let dictionary = common_words();
    let board = "STONEARTDIESNEWT";
    let mut full = Game::from_board_string(4, board, &dictionary).unwrap();
    let all: Vec<Word> = full.find_all_words().to_vec();

    for word in &all {
        let mut targeted = Game::from_board_string(4, board, &dictionary).unwrap();
        targeted.has_word(&word.text);
        let expected: Vec<&Word> = all.iter().filter(|w| w.text == word.text).collect();
        let actual: Vec<&Word> = targeted.words().unwrap_or_default().iter().collect();
        assert_eq!(actual, expected, "paths for {}", word.text);
    }
}

#[test]
fn test_words_serialize_with_row_and_col() {
    let mut game = abc_game(&["ABE"]);
    let word = game.has_word("ABE").unwrap();

    let json = serde_json::to_value(word).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "word": "ABE",
            "path": [
                {"row": 0, "col": 0},
                {"row": 0, "col": 1},
                {"row": 1, "col": 1}
            ]
        })
    );
}
