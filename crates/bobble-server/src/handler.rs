//! Request handling. Every request gets its own game; only the dictionary is shared.

use bobble_core::{Game, GridError, WordList};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::BoardLimits;
use crate::protocol::{ClientMessage, ServerMessage};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Invalid size {size}. Must be between {min} and {max}")]
    InvalidSize { size: usize, min: usize, max: usize },

    #[error("Missing 'word' parameter")]
    MissingWord,

    #[error("Invalid board: {0}")]
    InvalidBoard(#[from] GridError),
}

type SharedGame = Game<Arc<WordList>>;

/// Turns client requests into replies
pub struct RequestHandler {
    dictionary: Arc<WordList>,
    limits: BoardLimits,
}

impl RequestHandler {
    pub fn new(dictionary: Arc<WordList>, limits: BoardLimits) -> Self {
        Self { dictionary, limits }
    }

    /// Handle one client message, reporting failures as an error reply
    pub fn handle(&self, msg: ClientMessage) -> ServerMessage {
        let result = match msg {
            ClientMessage::NewGame { size } => self.new_game(size),
            ClientMessage::FindWords { size, board } => self.find_words(size, board.as_deref()),
            ClientMessage::CheckWord { word, size, board } => {
                self.check_word(&word, size, board.as_deref())
            }
            ClientMessage::Ping => Ok(ServerMessage::Pong),
        };

        result.unwrap_or_else(|e| {
            debug!("Rejected request: {}", e);
            ServerMessage::Error {
                message: e.to_string(),
            }
        })
    }

    pub fn new_game(&self, size: Option<usize>) -> Result<ServerMessage, RequestError> {
        let game = self.game(size, None)?;
        let grid = game.grid().to_json_friendly();

        Ok(ServerMessage::NewGame {
            size: grid.size,
            board: grid.board,
            letters: game.board_string(),
        })
    }

    pub fn find_words(
        &self,
        size: Option<usize>,
        board: Option<&str>,
    ) -> Result<ServerMessage, RequestError> {
        let mut game = self.game(size, board)?;
        let words = game.find_all_words().to_vec();
        self.report_failures(&game);

        Ok(ServerMessage::Words {
            size: game.size(),
            letters: game.board_string(),
            words,
        })
    }

    pub fn check_word(
        &self,
        word: &str,
        size: Option<usize>,
        board: Option<&str>,
    ) -> Result<ServerMessage, RequestError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(RequestError::MissingWord);
        }

        let mut game = self.game(size, board)?;
        let found = game.has_word(word).cloned();
        self.report_failures(&game);

        Ok(match found {
            Some(found) => ServerMessage::CheckResult {
                found: true,
                word: found.text,
                path: Some(found.path),
                letters: game.board_string(),
            },
            None => ServerMessage::CheckResult {
                found: false,
                word: word.to_string(),
                path: None,
                letters: game.board_string(),
            },
        })
    }

    fn resolve_size(&self, size: Option<usize>) -> Result<usize, RequestError> {
        let limits = self.limits;
        let size = size.unwrap_or(limits.default_size);
        if size < limits.min_size || size > limits.max_size {
            return Err(RequestError::InvalidSize {
                size,
                min: limits.min_size,
                max: limits.max_size,
            });
        }
        Ok(size)
    }

    /// Build the game for a request: replay `board` if given, otherwise roll one
    fn game(&self, size: Option<usize>, board: Option<&str>) -> Result<SharedGame, RequestError> {
        let size = self.resolve_size(size)?;
        let dictionary = Arc::clone(&self.dictionary);

        let game = match board.map(str::trim).filter(|b| !b.is_empty()) {
            Some(board) => Game::from_board_string(size, board, dictionary)?,
            None => Game::new(size, dictionary)?,
        };
        Ok(game)
    }

    fn report_failures(&self, game: &SharedGame) {
        let failed = game.failed_lookups();
        if failed > 0 {
            warn!(
                failed,
                board = %game.board_string(),
                "Dictionary lookups failed; results may be incomplete"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bobble_core::Cell;

    fn handler() -> RequestHandler {
        let words = WordList::new(["ABE", "FED", "CAT"]);
        RequestHandler::new(
            Arc::new(words),
            BoardLimits {
                default_size: 4,
                min_size: 3,
                max_size: 7,
            },
        )
    }

    #[test]
    fn test_new_game_uses_default_size() {
        match handler().new_game(None).unwrap() {
            ServerMessage::NewGame {
                size,
                board,
                letters,
            } => {
                assert_eq!(size, 4);
                assert_eq!(board.len(), 4);
                assert_eq!(letters.len(), 16);
                assert_eq!(board.concat().into_iter().collect::<String>(), letters);
            }
            other => panic!("unexpected reply {:?}", other),
        }
    }

    #[test]
    fn test_size_out_of_range() {
        assert_eq!(
            handler().new_game(Some(8)),
            Err(RequestError::InvalidSize {
                size: 8,
                min: 3,
                max: 7
            })
        );
        assert!(handler().find_words(Some(2), None).is_err());
    }

    #[test]
    fn test_check_word_on_given_board() {
        let reply = handler()
            .check_word("abe", Some(3), Some("ABCDEFGHI"))
            .unwrap();

        assert_eq!(
            reply,
            ServerMessage::CheckResult {
                found: true,
                word: "ABE".to_string(),
                path: Some(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]),
                letters: "ABCDEFGHI".to_string(),
            }
        );
    }

    #[test]
    fn test_check_word_not_on_board() {
        let reply = handler()
            .check_word("CAT", Some(3), Some("ABCDEFGHI"))
            .unwrap();

        assert!(matches!(
            reply,
            ServerMessage::CheckResult {
                found: false,
                path: None,
                ..
            }
        ));
    }

    #[test]
    fn test_check_word_requires_word() {
        assert_eq!(
            handler().check_word("  ", None, None),
            Err(RequestError::MissingWord)
        );
    }

    #[test]
    fn test_board_length_must_match_size() {
        let err = handler()
            .check_word("ABE", Some(4), Some("ABCDEFGHI"))
            .unwrap_err();
        assert_eq!(
            err,
            RequestError::InvalidBoard(GridError::LengthMismatch {
                expected: 16,
                actual: 9
            })
        );
    }

    #[test]
    fn test_find_words_on_given_board() {
        match handler().find_words(Some(3), Some("ABCDEFGHI")).unwrap() {
            ServerMessage::Words { words, letters, .. } => {
                assert_eq!(letters, "ABCDEFGHI");
                let texts: Vec<_> = words.iter().map(|w| w.text.as_str()).collect();
                assert_eq!(texts, vec!["ABE", "FED"]);
            }
            other => panic!("unexpected reply {:?}", other),
        }
    }

    #[test]
    fn test_handle_reports_errors_as_messages() {
        let reply = handler().handle(ClientMessage::NewGame { size: Some(1) });
        assert_eq!(
            reply,
            ServerMessage::Error {
                message: "Invalid size 1. Must be between 3 and 7".to_string()
            }
        );
        assert_eq!(handler().handle(ClientMessage::Ping), ServerMessage::Pong);
    }
}
