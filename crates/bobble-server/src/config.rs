//! Server configuration loaded from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_WORDLIST: &str = "words.txt";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Board sizes a client may ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLimits {
    /// Size used when a request does not name one
    pub default_size: usize,
    pub min_size: usize,
    pub max_size: usize,
}

impl Default for BoardLimits {
    fn default() -> Self {
        Self {
            default_size: 5,
            min_size: 4,
            max_size: 7,
        }
    }
}

/// What the binary does once configured (`BOBBLE_MODE`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Serve the WebSocket protocol
    #[default]
    Server,
    /// Roll one board, print it, then check `word` (`BOBBLE_WORD`) or list
    /// every word found
    Cli { word: Option<String> },
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the WebSocket listener binds to (`SERVER_ADDR`)
    pub addr: SocketAddr,
    /// Word list file, one word per line (`BOBBLE_WORDLIST`)
    pub wordlist: PathBuf,
    /// `BOBBLE_DEFAULT_SIZE`, `BOBBLE_MIN_SIZE`, `BOBBLE_MAX_SIZE`
    pub limits: BoardLimits,
    pub mode: Mode,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = BoardLimits::default();

        let config = Self {
            addr: parse_or(&lookup, "SERVER_ADDR", || SocketAddr::from(([0, 0, 0, 0], 8080)))?,
            wordlist: lookup("BOBBLE_WORDLIST")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDLIST)),
            limits: BoardLimits {
                default_size: parse_or(&lookup, "BOBBLE_DEFAULT_SIZE", || defaults.default_size)?,
                min_size: parse_or(&lookup, "BOBBLE_MIN_SIZE", || defaults.min_size)?,
                max_size: parse_or(&lookup, "BOBBLE_MAX_SIZE", || defaults.max_size)?,
            },
            mode: parse_mode(&lookup)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Check that the size limits are consistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = self.limits;
        if limits.min_size == 0 {
            return Err(ConfigError::Invalid {
                var: "BOBBLE_MIN_SIZE".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }
        if limits.max_size < limits.min_size {
            return Err(ConfigError::Invalid {
                var: "BOBBLE_MAX_SIZE".to_string(),
                reason: format!("Must be at least the minimum size ({})", limits.min_size),
            });
        }
        if !(limits.min_size..=limits.max_size).contains(&limits.default_size) {
            return Err(ConfigError::Invalid {
                var: "BOBBLE_DEFAULT_SIZE".to_string(),
                reason: format!(
                    "Must be between {} and {}",
                    limits.min_size, limits.max_size
                ),
            });
        }
        Ok(())
    }
}

fn parse_mode<F>(lookup: &F) -> Result<Mode, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mode = lookup("BOBBLE_MODE").map(|m| m.trim().to_ascii_lowercase());
    match mode.as_deref() {
        None | Some("") | Some("server") => Ok(Mode::Server),
        Some("cli") => Ok(Mode::Cli {
            word: lookup("BOBBLE_WORD")
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty()),
        }),
        Some(other) => Err(ConfigError::Invalid {
            var: "BOBBLE_MODE".to_string(),
            reason: format!("'{}': expected 'server' or 'cli'", other),
        }),
    }
}

fn parse_or<T, F, D>(lookup: &F, var: &str, default: D) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
    D: FnOnce() -> T,
{
    match lookup(var) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var: var.to_string(),
            reason: format!("'{}': {}", value, e),
        }),
        None => Ok(default()),
    }
}
