//! Command-line interface parsing
//!
//! Flags override the values loaded from the environment.

use clap::Parser;

use crate::config::Config;

/// Pokedex - page through locations, explore encounters and catch Pokemon
#[derive(Parser, Debug, Default)]
#[command(name = "pokedex")]
#[command(about = "Interactive PokeAPI explorer")]
#[command(version)]
pub struct Cli {
    /// Root URL of the API
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Locations listed per map page
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,

    /// Seconds a location page stays cached
    #[arg(long, value_name = "SECS")]
    pub locations_ttl: Option<u64>,

    /// Seconds an encounter listing stays cached
    #[arg(long, value_name = "SECS")]
    pub encounters_ttl: Option<u64>,

    /// Seconds a pokemon stays cached
    #[arg(long, value_name = "SECS")]
    pub pokemon_ttl: Option<u64>,

    /// Seed for reproducible catches
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Applies every flag that was given on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(api_base) = &self.api_base {
            config.api_base = api_base.clone();
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(ttl) = self.locations_ttl {
            config.locations_ttl = ttl;
        }
        if let Some(ttl) = self.encounters_ttl {
            config.encounters_ttl = ttl;
        }
        if let Some(ttl) = self.pokemon_ttl {
            config.pokemon_ttl = ttl;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["pokedex"]);
        assert_eq!(cli.apply(Config::default()), Config::default());
    }

    #[test]
    fn test_cli_overrides_ttls() {
        let cli = Cli::parse_from(["pokedex", "--locations-ttl", "5", "--pokemon-ttl", "120"]);
        let config = cli.apply(Config::default());

        assert_eq!(config.locations_ttl, 5);
        assert_eq!(config.encounters_ttl, 30);
        assert_eq!(config.pokemon_ttl, 120);
    }

    #[test]
    fn test_cli_seed_and_base() {
        let cli = Cli::parse_from(["pokedex", "--seed", "7", "--api-base", "http://localhost:9000"]);
        let config = cli.apply(Config::default());

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.api_base, "http://localhost:9000");
    }

    #[test]
    fn test_cli_rejects_non_numeric_page_size() {
        assert!(Cli::try_parse_from(["pokedex", "--page-size", "many"]).is_err());
    }
}
