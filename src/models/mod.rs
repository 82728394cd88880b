//! Data Models Module
//!
//! Payload types of the remote API and the records kept by a session.

mod location;
mod pokemon;

pub use location::{LocationArea, LocationPage, NamedResource, PokemonEncounter};
pub use pokemon::{CaughtPokemon, PokedexLine, Pokemon, PokemonStat, PokemonType};
