//! PokeAPI client
//!
//! Every GET goes through [`PokeApiClient::fetch`], which consults the cache
//! first and stores successful response bodies keyed by the full request URL.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Client for the PokeAPI REST endpoints.
#[derive(Debug)]
pub struct PokeApiClient {
    http: Client,
    base_url: Url,
    cache: Cache,
}

impl PokeApiClient {
    /// Builds the HTTP client and the response cache from configuration.
    ///
    /// Must be called inside a Tokio runtime, since the cache starts its reaper.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().timeout(config.http_timeout()).build()?;
        let cache = Cache::new(config.cache_interval())?;
        Self::with_parts(http, &config.base_url, cache)
    }

    /// Assembles a client from an existing HTTP client and cache.
    pub fn with_parts(http: Client, base_url: &str, cache: Cache) -> Result<Self> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
            cache,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Resolves `path` against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    // == Fetch ==
    /// Returns the body for `url`, from the cache when possible.
    ///
    /// On a miss the body is requested, checked for `200 OK`, and added to
    /// the cache before being returned. Failed responses are never cached.
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url.as_str()).await {
            return Ok(body);
        }

        debug!("GET {}", url);
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(PokedexError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url.as_str(), body.clone()).await;
        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Location Areas ==
    /// Fetches a page of location areas.
    ///
    /// `page_url` is a `next`/`previous` link from an earlier page; `None`
    /// requests the first page.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(link) => Url::parse(link)?,
            None => self.endpoint("location-area")?,
        };
        self.fetch_json(&url).await
    }

    /// Fetches one location area by name or id.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        if name.is_empty() {
            return Err(PokedexError::MissingArgument("location area lookup", "a name"));
        }
        let url = self.endpoint(&format!("location-area/{}", name))?;
        self.fetch_json(&url).await
    }

    // == Pokemon ==
    /// Fetches one Pokémon by name or id.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        if name.is_empty() {
            return Err(PokedexError::MissingArgument("pokemon lookup", "a name"));
        }
        let url = self.endpoint(&format!("pokemon/{}", name))?;
        self.fetch_json(&url).await
    }

    /// Stops the cache reaper. Call once, at shutdown.
    pub async fn shutdown(&self) -> Result<()> {
        let stats = self.cache.stats().await;
        debug!(
            "Cache at shutdown: {} entries, {} hits, {} misses ({:.0}% hit rate), {} reaped",
            stats.total_entries,
            stats.hits,
            stats.misses,
            stats.hit_rate() * 100.0,
            stats.reaped
        );
        self.cache.stop().await?;
        Ok(())
    }
}

/// Parses `raw` and guarantees a trailing slash so relative joins append.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
