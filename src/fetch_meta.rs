use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, info};

use crate::cache::MetaCache;
use crate::config::config::HttpClientConfig;
use crate::error::FetchError;
use crate::scraping::{
    extract_head::extract_head, extract_meta_description::extract_meta_description,
    extract_og_description::extract_og_description, extract_og_image::extract_og_image,
    extract_og_title::extract_og_title, extract_title::extract_title,
};

/// Normalized link metadata. Open Graph values win over the plain
/// `<title>`/description; the image has no fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetaRecord {
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Builds the shared outbound client: one per process, reused by every
/// request task. Certificate validation is disabled so that pages behind
/// self-signed or broken TLS still yield a preview.
pub fn build_client(config: &HttpClientConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .danger_accept_invalid_certs(true)
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_secs))
        .build()
}

/// Fetches and extracts metadata for `url`, consulting the cache first.
///
/// One GET per cache miss, no retries. The URL must carry a literal
/// `http://` or `https://` prefix (case-sensitive); anything else fails
/// before any network I/O.
pub async fn fetch_meta(
    client: &Client,
    cache: &MetaCache,
    url: &str,
) -> Result<MetaRecord, FetchError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(FetchError::InvalidUrl);
    }

    if let Some(record) = cache.get(url) {
        debug!(url, "cache hit");
        return Ok(record);
    }

    info!(url, "fetching metadata");

    let response = client.get(url).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Upstream {
            status: status.as_u16(),
        });
    }

    let html = response.text().await?;
    let head = extract_head(&html);

    let title = extract_title(head);
    let description = extract_meta_description(head);
    let og_title = extract_og_title(head);
    let og_description = extract_og_description(head);
    let og_image = extract_og_image(head);

    let record = MetaRecord {
        title: if og_title.is_empty() { title } else { og_title },
        description: if og_description.is_empty() {
            description
        } else {
            og_description
        },
        image: og_image,
    };

    cache.insert(url.to_string(), record.clone());
    Ok(record)
}
