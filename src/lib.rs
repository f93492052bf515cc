//! URL metadata extraction service.
//!
//! Exposes `GET /meta?url=<urlencoded-url>`: fetches the page, slices out
//! the `<head>` section, extracts title/description/image (Open Graph
//! preferred) and answers with JSON. Results are kept in a bounded TTL
//! cache so recently-seen URLs are not refetched.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch_meta;
pub mod scraping;
pub mod server;
