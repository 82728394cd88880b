//! Pokedex - an interactive explorer for the PokeAPI
//!
//! Pages through location areas, lists encounters and catches Pokemon into a
//! session-scoped collection. Remote responses are memoized in per-category
//! caches with passive TTL expiry.

pub mod api;
pub mod cache;
pub mod catch;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;

pub use cache::ExpiringCache;
pub use catch::{attempt_catch, CatchOutcome, CatchResult, RandomSource, RngSource};
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
