//! REPL Session
//!
//! Holds the paging cursor, one response cache per resource category and
//! the caught collection, and runs commands against them.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{Endpoints, Fetch};
use crate::cache::{Clock, ExpiringCache, SystemClock};
use crate::catch::{attempt_catch, RandomSource, RngSource};
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{CaughtPokemon, LocationArea, LocationPage, PokedexLine, Pokemon};
use crate::repl::commands::{lookup, parse_input, CommandKind, Input, COMMANDS};

// == Caches ==
/// One cache per resource category, each with its own ttl.
#[derive(Debug)]
pub struct Caches {
    /// Location listing pages, keyed by page URL
    pub locations: ExpiringCache,
    /// Location area bodies, keyed by area name
    pub encounters: ExpiringCache,
    /// Pokemon bodies, keyed by pokemon name
    pub pokemon: ExpiringCache,
}

impl Caches {
    // == Constructor ==
    /// Builds the three caches on the system clock with the configured ttls.
    ///
    /// # Errors
    /// `InvalidArgument` if any ttl is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Builds the three caches on a shared `clock`.
    pub fn with_clock(config: &Config, clock: Arc<dyn Clock>) -> Result<Self> {
        Ok(Self {
            locations: ExpiringCache::with_clock(config.locations_ttl(), clock.clone())?,
            encounters: ExpiringCache::with_clock(config.encounters_ttl(), clock.clone())?,
            pokemon: ExpiringCache::with_clock(config.pokemon_ttl(), clock)?,
        })
    }
}

// == Reply ==
/// What a command prints, and whether the loop should stop afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub output: String,
    pub exit: bool,
}

impl Reply {
    fn text(output: String) -> Self {
        Self {
            output,
            exit: false,
        }
    }
}

// == Session ==
/// State of one interactive run: the location paging cursor, the response
/// caches and the creatures caught so far. Nothing outlives the process.
pub struct Session<F: Fetch> {
    fetcher: F,
    endpoints: Endpoints,
    caches: Caches,
    next: Option<String>,
    previous: Option<String>,
    pokedex: BTreeMap<String, CaughtPokemon>,
    rng: Box<dyn RandomSource + Send>,
}

impl<F: Fetch> Session<F> {
    /// Creates a session positioned before the first location page.
    pub fn new(
        fetcher: F,
        config: &Config,
        caches: Caches,
        rng: Box<dyn RandomSource + Send>,
    ) -> Self {
        let endpoints = Endpoints::new(config.api_base.clone());
        let next = Some(endpoints.first_locations_page(config.page_size));
        Self {
            fetcher,
            endpoints,
            caches,
            next,
            previous: None,
            pokedex: BTreeMap::new(),
            rng,
        }
    }

    /// Wires a session from configuration alone: system clock caches and a
    /// seeded or entropy-backed random source.
    pub fn from_config(fetcher: F, config: &Config) -> Result<Self> {
        let caches = Caches::from_config(config)?;
        let rng: Box<dyn RandomSource + Send> = match config.seed {
            Some(seed) => Box::new(RngSource::seeded(seed)),
            None => Box::new(RngSource::from_entropy()),
        };
        Ok(Self::new(fetcher, config, caches, rng))
    }

    // == Accessors ==
    /// The per-category response caches.
    pub fn caches(&self) -> &Caches {
        &self.caches
    }

    /// Whether `name` is in the caught collection.
    pub fn has_caught(&self, name: &str) -> bool {
        self.pokedex.contains_key(name)
    }

    // == Execute ==
    /// Parses and runs one input line.
    pub async fn execute(&mut self, line: &str) -> Result<Reply> {
        match parse_input(line) {
            Some(input) => self.run(&input).await,
            None => Ok(Reply::default()),
        }
    }

    /// Dispatches a parsed input through the command table.
    pub async fn run(&mut self, input: &Input) -> Result<Reply> {
        let command =
            lookup(&input.name).ok_or_else(|| PokedexError::UnknownCommand(input.name.clone()))?;
        debug!(command = command.name, args = ?input.args, "dispatch");

        let output = match command.kind {
            CommandKind::Help => help(),
            CommandKind::Exit => {
                return Ok(Reply {
                    output: "Closing the Pokedex... Goodbye!\n".to_string(),
                    exit: true,
                })
            }
            CommandKind::Map => {
                let url = self.next.clone().ok_or(PokedexError::NoPage("next"))?;
                self.show_page(&url).await?
            }
            CommandKind::MapBack => {
                let url = self
                    .previous
                    .clone()
                    .ok_or(PokedexError::NoPage("previous"))?;
                self.show_page(&url).await?
            }
            CommandKind::Explore => self.explore(required_arg(input, "area")?).await?,
            CommandKind::Catch => self.catch(required_arg(input, "pokemon")?).await?,
            CommandKind::Inspect => self.inspect(required_arg(input, "pokemon")?),
            CommandKind::Pokedex => self.list_pokedex(),
            CommandKind::Cache => self.cache_report(),
        };

        Ok(Reply::text(output))
    }

    // == Cached Load ==
    /// Serves `key` from `cache` or fetches `url`. Only bodies that decode
    /// are added to the cache.
    async fn load<T: DeserializeOwned>(
        &self,
        cache: &ExpiringCache,
        key: &str,
        url: &str,
    ) -> Result<T> {
        if let Some(body) = cache.get(key) {
            return Ok(serde_json::from_slice(&body)?);
        }

        let body = self.fetcher.fetch(url).await?;
        let parsed = serde_json::from_slice(&body)?;
        cache.add(key, body);
        Ok(parsed)
    }

    async fn show_page(&mut self, url: &str) -> Result<String> {
        let page: LocationPage = self.load(&self.caches.locations, url, url).await?;

        let mut output = String::new();
        for location in &page.results {
            let _ = writeln!(output, "{}", location.name);
        }

        self.next = page.next.filter(|u| !u.is_empty());
        self.previous = page.previous.filter(|u| !u.is_empty());
        Ok(output)
    }

    async fn explore(&self, area_name: &str) -> Result<String> {
        let url = self.endpoints.location_area_url(area_name);
        let area: LocationArea = self.load(&self.caches.encounters, area_name, &url).await?;

        let mut output = format!("Exploring {}...\nFound Pokemon:\n", area.name);
        for name in area.pokemon_names() {
            let _ = writeln!(output, " - {}", name);
        }
        Ok(output)
    }

    async fn catch(&mut self, name: &str) -> Result<String> {
        let url = self.endpoints.pokemon_url(name);
        let pokemon: Pokemon = self.load(&self.caches.pokemon, name, &url).await?;

        let outcome = attempt_catch(pokemon.base_experience(), self.rng.as_mut())?;

        let mut output = format!("{} found!\n", pokemon.name);
        let mut remaining = pokemon.base_experience();
        for (i, draw) in outcome.draws.iter().enumerate() {
            let _ = writeln!(
                output,
                "Attempt {}. Base experience: {}. Random: {}.",
                i + 1,
                remaining,
                draw
            );
            remaining -= i64::from(*draw);
        }

        if outcome.is_caught() {
            let _ = writeln!(output, "{} caught!", pokemon.name);
            output.push_str("You may now inspect it with the inspect command.\n");
            self.pokedex
                .insert(pokemon.name.clone(), CaughtPokemon::new(pokemon));
        } else {
            let _ = writeln!(output, "{} escaped!", pokemon.name);
        }
        Ok(output)
    }

    fn inspect(&self, name: &str) -> String {
        let Some(caught) = self.pokedex.get(name) else {
            return format!("You haven't caught a {}\n", name);
        };
        let pokemon = &caught.pokemon;

        let mut output = String::new();
        let _ = writeln!(output, "Name: {}", pokemon.name);
        let _ = writeln!(output, "Height: {}", pokemon.height);
        let _ = writeln!(output, "Weight: {}", pokemon.weight);
        output.push_str("Stats:\n");
        for stat in &pokemon.stats {
            let _ = writeln!(output, "  -{}: {}", stat.stat.name, stat.base_stat);
        }
        output.push_str("Types:\n");
        for kind in &pokemon.types {
            let _ = writeln!(output, "  - {}", kind.kind.name);
        }
        output
    }

    fn list_pokedex(&self) -> String {
        if self.pokedex.is_empty() {
            return "Your Pokedex is empty.\n".to_string();
        }

        let mut output = String::from("Your Pokedex:\n");
        for line in self.pokedex.values().map(PokedexLine::from) {
            let _ = writeln!(output, " - {} (caught {})", line.name, line.caught_at);
        }
        output
    }

    fn cache_report(&self) -> String {
        let mut output = String::new();
        for (label, cache) in [
            ("locations", &self.caches.locations),
            ("encounters", &self.caches.encounters),
            ("pokemon", &self.caches.pokemon),
        ] {
            let stats = cache.stats();
            let _ = writeln!(
                output,
                "{}: {} entries, {} hits, {} misses, {} reaped (ttl {}s)",
                label,
                stats.total_entries,
                stats.hits,
                stats.misses,
                stats.reaped,
                cache.ttl().as_secs()
            );
        }
        output
    }
}

fn help() -> String {
    let mut output = String::from("Welcome to the Pokedex!\nUsage:\n\n");
    for command in COMMANDS {
        let _ = writeln!(output, "{}: {}", command.usage, command.description);
    }
    output
}

fn required_arg<'a>(input: &'a Input, what: &str) -> Result<&'a str> {
    input.args.first().map(String::as_str).ok_or_else(|| {
        PokedexError::InvalidArgument(format!("{} requires a <{}> argument", input.name, what))
    })
}
