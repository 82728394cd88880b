//! API Module
//!
//! HTTP access to the remote creature catalog.
//!
//! # Resources
//! - `GET /location-area/?offset&limit` - paged location listing
//! - `GET /location-area/{name}` - encounters of one area
//! - `GET /pokemon/{name}` - one creature

pub mod client;

pub use client::{Endpoints, Fetch, PokeApiClient, DEFAULT_API_BASE};
