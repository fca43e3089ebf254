use reqwest::Client;

use crate::{audius::CatalogError, config::AudiusConfig, types::ResolveResponse, utils};

/// Resolves a track permalink to a playable stream URL.
///
/// The permalink is turned into the canonical site URL (`{site}{permalink}`) and
/// passed to the `/resolve` endpoint. The stream URL is taken from
/// `data.stream.url`; stream URLs are time-limited and should not be cached.
///
/// # Returns
///
/// - `Ok(Some(url))` - A usable stream URL
/// - `Ok(None)` - The track resolved but carries no stream URL
/// - `Err(CatalogError)` - Any request, status or decode failure
pub async fn resolve_stream(
    client: &Client,
    config: &AudiusConfig,
    permalink: &str,
) -> Result<Option<String>, CatalogError> {
    let api_url = format!(
        "{uri}/resolve",
        uri = config.api_url.trim_end_matches('/')
    );
    let track_url = utils::track_url(&config.site_url, permalink);

    let response = client
        .get(&api_url)
        .query(&[
            ("url", track_url.as_str()),
            ("api_key", config.api_key.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let body = response.text().await?;
    let json = serde_json::from_str::<ResolveResponse>(&body)?;

    Ok(json
        .data
        .and_then(|d| d.stream)
        .and_then(|s| s.url)
        .filter(|url| !url.is_empty()))
}
