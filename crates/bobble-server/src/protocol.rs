//! WebSocket protocol messages for the Bobble server.

use bobble_core::{Cell, Word};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Messages sent from client to server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ClientMessage {
    /// Roll a new board
    NewGame {
        #[serde(default)]
        size: Option<usize>,
    },

    /// List every word on a board (a fresh one unless `board` is given)
    FindWords {
        #[serde(default)]
        size: Option<usize>,
        #[serde(default)]
        board: Option<String>,
    },

    /// Check whether a word can be traced on a board
    CheckWord {
        word: String,
        #[serde(default)]
        size: Option<usize>,
        #[serde(default)]
        board: Option<String>,
    },

    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ServerMessage {
    /// Welcome message with the connection's ID
    Welcome { connection_id: Uuid },

    /// A freshly rolled board
    NewGame {
        size: usize,
        board: Vec<Vec<char>>,
        /// Flattened board, for replaying it in later requests
        letters: String,
    },

    /// Every word found on a board
    Words {
        size: usize,
        letters: String,
        words: Vec<Word>,
    },

    /// Result of checking one word
    CheckResult {
        found: bool,
        word: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<Vec<Cell>>,
        letters: String,
    },

    /// Error occurred
    Error { message: String },

    /// Pong response
    Pong,
}
