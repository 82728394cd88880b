//! PokeAPI HTTP Client
//!
//! Thin GET wrapper returning raw response bodies. Decoding is left to the
//! caller so bodies can be cached exactly as received.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{PokedexError, Result};

/// Default public API root.
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

// == Fetch Trait ==
/// Anything that can turn a URL into a response body.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

// == Endpoints ==
/// Builds resource URLs under an API root.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// First page of the location-area listing.
    pub fn first_locations_page(&self, page_size: u32) -> String {
        format!("{}/location-area/?offset=0&limit={}", self.base, page_size)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base, name)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

// == PokeApi Client ==
/// reqwest-backed [`Fetch`] implementation.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
}

impl PokeApiClient {
    /// Creates a client whose requests give up after `timeout`.
    ///
    /// # Errors
    /// `InvalidArgument` if `timeout` is zero.
    pub fn new(timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(PokedexError::InvalidArgument(
                "HTTP timeout must be greater than zero".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for PokeApiClient {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.as_u16() > 299 {
            warn!(url = %url, status = status.as_u16(), "request failed");
            return Err(PokedexError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
