//! Error types for the pokedex explorer
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the cache, the catch simulator and the REPL.
///
/// A cache miss is not represented here: lookups return `Option`.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Caller passed a value outside the accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote API answered with a non-success status
    #[error("Failed request: {url} returned status {status}")]
    HttpStatus { status: u16, url: String },

    /// Payload could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Paging cursor has nothing in the requested direction
    #[error("No {0} page of locations")]
    NoPage(&'static str),

    /// Input did not match any command in the table
    #[error("Command {0} not found")]
    UnknownCommand(String),

    /// Terminal I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the pokedex explorer.
pub type Result<T> = std::result::Result<T, PokedexError>;
