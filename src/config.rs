//! Configuration Module
//!
//! Handles loading explorer configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::api::DEFAULT_API_BASE;

/// Explorer configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults,
/// and overridden from the command line (see [`crate::cli::Cli`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root URL of the remote API
    pub api_base: String,
    /// Locations listed per `map` page
    pub page_size: u32,
    /// TTL in seconds of the location page cache
    pub locations_ttl: u64,
    /// TTL in seconds of the encounter cache
    pub encounters_ttl: u64,
    /// TTL in seconds of the pokemon cache
    pub pokemon_ttl: u64,
    /// HTTP request timeout in seconds, must be non-zero
    pub http_timeout: u64,
    /// Fixed seed for the catch simulator, entropy when unset
    pub seed: Option<u64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_BASE` - API root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_PAGE_SIZE` - Locations per page (default: 20)
    /// - `POKEDEX_LOCATIONS_TTL` - Location page cache TTL in seconds (default: 10)
    /// - `POKEDEX_ENCOUNTERS_TTL` - Encounter cache TTL in seconds (default: 30)
    /// - `POKEDEX_POKEMON_TTL` - Pokemon cache TTL in seconds (default: 60)
    /// - `POKEDEX_HTTP_TIMEOUT` - Request timeout in seconds (default: 10)
    /// - `POKEDEX_SEED` - Catch simulator seed (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base: env::var("POKEDEX_API_BASE").unwrap_or(defaults.api_base),
            page_size: parse_var("POKEDEX_PAGE_SIZE").unwrap_or(defaults.page_size),
            locations_ttl: parse_var("POKEDEX_LOCATIONS_TTL").unwrap_or(defaults.locations_ttl),
            encounters_ttl: parse_var("POKEDEX_ENCOUNTERS_TTL")
                .unwrap_or(defaults.encounters_ttl),
            pokemon_ttl: parse_var("POKEDEX_POKEMON_TTL").unwrap_or(defaults.pokemon_ttl),
            http_timeout: parse_var("POKEDEX_HTTP_TIMEOUT").unwrap_or(defaults.http_timeout),
            seed: parse_var("POKEDEX_SEED"),
        }
    }

    pub fn locations_ttl(&self) -> Duration {
        Duration::from_secs(self.locations_ttl)
    }

    pub fn encounters_ttl(&self) -> Duration {
        Duration::from_secs(self.encounters_ttl)
    }

    pub fn pokemon_ttl(&self) -> Duration {
        Duration::from_secs(self.pokemon_ttl)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: 20,
            locations_ttl: 10,
            encounters_ttl: 30,
            pokemon_ttl: 60,
            http_timeout: 10,
            seed: None,
        }
    }
}
