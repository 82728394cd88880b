//! Pokemon payload and the session-local record of a catch

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::NamedResource;

/// `GET /pokemon/{name}`, reduced to what `catch` and `inspect` need.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Some species carry `null` here; treated as zero
    #[serde(default)]
    pub base_experience: Option<i64>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl Pokemon {
    pub fn base_experience(&self) -> i64 {
        self.base_experience.unwrap_or(0)
    }
}

/// A creature held in the session's collection.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

impl CaughtPokemon {
    pub fn new(pokemon: Pokemon) -> Self {
        Self {
            pokemon,
            caught_at: Utc::now(),
        }
    }
}

/// Short listing line used by `pokedex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokedexLine {
    pub name: String,
    pub caught_at: String,
}

impl From<&CaughtPokemon> for PokedexLine {
    fn from(caught: &CaughtPokemon) -> Self {
        Self {
            name: caught.pokemon.name.clone(),
            caught_at: caught.caught_at.format("%H:%M:%S").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = r#"{
        "name": "pikachu",
        "base_experience": 112,
        "height": 4,
        "weight": 60,
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "u"}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": "u"}}
        ],
        "types": [
            {"slot": 1, "type": {"name": "electric", "url": "u"}}
        ]
    }"#;

    #[test]
    fn test_pokemon_deserialize() {
        let pokemon: Pokemon = serde_json::from_str(PIKACHU).unwrap();

        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience(), 112);
        assert_eq!(pokemon.height, 4);
        assert_eq!(pokemon.weight, 60);
        assert_eq!(pokemon.stats[1].stat.name, "speed");
        assert_eq!(pokemon.stats[1].effort, 2);
        assert_eq!(pokemon.types[0].kind.name, "electric");
    }

    #[test]
    fn test_pokemon_null_base_experience() {
        let pokemon: Pokemon =
            serde_json::from_str(r#"{"name": "missingno", "base_experience": null}"#).unwrap();
        assert_eq!(pokemon.base_experience(), 0);
        assert!(pokemon.stats.is_empty());
    }

    #[test]
    fn test_pokedex_line_from_caught() {
        let pokemon: Pokemon = serde_json::from_str(PIKACHU).unwrap();
        let line = PokedexLine::from(&CaughtPokemon::new(pokemon));
        assert_eq!(line.name, "pikachu");
        assert_eq!(line.caught_at.len(), 8);
    }
}
