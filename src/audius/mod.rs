//! # Audius Integration Module
//!
//! This module is the integration layer between the mood radio and the public
//! Audius API. It exposes the two upstream operations the radio depends on and
//! hides the HTTP details behind the [`Catalog`] trait so the aggregation logic
//! can run against any catalog, including in-memory ones in tests.
//!
//! ## Architecture
//!
//! ```text
//! Radio (mood aggregation)
//!          ↓
//! Catalog trait
//!          ↓
//! AudiusClient
//!     ├── tracks  (search by tag)
//!     └── resolve (permalink → stream URL)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Audius API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /tracks?app_name=..&tag=..&limit=..&api_key=..` - tracks tagged with a keyword
//! - `GET /resolve?url=..&api_key=..` - resolves a canonical track URL; the playable
//!   stream URL is read from `data.stream.url`
//!
//! ## Error Handling
//!
//! Both operations return [`CatalogError`]. No retries are attempted at this
//! layer; whether a failure is absorbed or surfaced is decided by the caller.
//! A per-call timeout is applied through the underlying `reqwest::Client`.

use std::{error::Error, fmt};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{config, types::RawTrack};

mod client;
pub mod resolve;
pub mod tracks;

pub use client::AudiusClient;

#[derive(Debug)]
pub enum CatalogError {
    /// The request never produced a response: connect failure, timeout, broken body.
    Transport(reqwest::Error),
    /// The upstream answered with a non-success status.
    Status(StatusCode),
    /// The body was not the JSON shape we expect.
    Decode(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Transport(e) => write!(f, "request to Audius failed: {e}"),
            CatalogError::Status(status) => write!(f, "Audius responded with {status}"),
            CatalogError::Decode(e) => write!(f, "unexpected response from Audius: {e}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CatalogError::Transport(e) => Some(e),
            CatalogError::Status(_) => None,
            CatalogError::Decode(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => CatalogError::Status(status),
            None => CatalogError::Transport(err),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err)
    }
}

/// A track catalog that can be searched by tag and can resolve stream URLs.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Returns the tracks tagged with `tag`. A response without a `data` list is empty.
    async fn search_by_tag(&self, tag: &str) -> Result<Vec<RawTrack>, CatalogError>;

    /// Resolves a track permalink to a playable stream URL, `None` if there is none.
    async fn resolve_stream(&self, permalink: &str) -> Result<Option<String>, CatalogError>;

    /// Site that permalinks and embed URLs are relative to.
    fn site_url(&self) -> &str {
        config::DEFAULT_AUDIUS_SITE_URL
    }
}
