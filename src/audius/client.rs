use async_trait::async_trait;
use reqwest::Client;

use crate::{
    audius::{Catalog, CatalogError, resolve, tracks},
    config::AudiusConfig,
    types::RawTrack,
};

/// [`Catalog`] backed by the Audius HTTP API.
#[derive(Debug, Clone)]
pub struct AudiusClient {
    client: Client,
    config: AudiusConfig,
}

impl AudiusClient {
    pub fn new(config: AudiusConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { client, config })
    }

    /// Uses an already configured HTTP client; `config.timeout` is not applied.
    pub fn with_client(client: Client, config: AudiusConfig) -> Self {
        Self { client, config }
    }

    pub fn from_env() -> Result<Self, CatalogError> {
        Self::new(AudiusConfig::from_env())
    }

    pub fn config(&self) -> &AudiusConfig {
        &self.config
    }
}

#[async_trait]
impl Catalog for AudiusClient {
    async fn search_by_tag(&self, tag: &str) -> Result<Vec<RawTrack>, CatalogError> {
        tracks::search_by_tag(&self.client, &self.config, tag).await
    }

    async fn resolve_stream(&self, permalink: &str) -> Result<Option<String>, CatalogError> {
        resolve::resolve_stream(&self.client, &self.config, permalink).await
    }

    fn site_url(&self) -> &str {
        &self.config.site_url
    }
}
