//! App state: outbound client and metadata cache.

use std::time::Duration;

use reqwest::Client;

use crate::cache::MetaCache;
use crate::config::config::AppConfig;
use crate::fetch_meta::build_client;

/// Shared per-process state, built once at startup and injected into the
/// handlers via axum state. The cache lives until shutdown.
pub struct AppState {
    pub client: Client,
    pub cache: MetaCache,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(&config.http_client)?,
            cache: MetaCache::new(
                config.cache.max_entries,
                Duration::from_secs(config.cache.ttl_secs),
            ),
        })
    }
}
