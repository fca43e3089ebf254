use reqwest::Client;

use crate::{
    audius::CatalogError,
    config::AudiusConfig,
    types::{RawTrack, SearchResponse},
};

/// Retrieves one page of tracks tagged with `tag` from the Audius API.
///
/// Issues a single request to the `/tracks` endpoint carrying the configured
/// `app_name`, `limit` and `api_key` alongside the tag. No retry is attempted.
///
/// # Arguments
///
/// * `client` - Shared HTTP client; its timeout applies to this call
/// * `config` - Upstream base URL and request parameters
/// * `tag` - Search keyword, e.g. `lo-fi` or `feel good`
///
/// # Returns
///
/// - `Ok(Vec<RawTrack>)` - The tracks in upstream order. A body without a `data`
///   list yields an empty vector, and entries that are not track records (no
///   `id`, wrong field types) are dropped one by one.
/// - `Err(CatalogError::Status)` - The upstream answered with a non-success status
/// - `Err(CatalogError::Transport)` - Network failure or timeout
/// - `Err(CatalogError::Decode)` - The body is not JSON, or `data` is not a list
///
/// # Example
///
/// ```
/// let client = reqwest::Client::new();
/// let tracks = search_by_tag(&client, &AudiusConfig::default(), "ambient").await?;
/// println!("Found {} ambient tracks", tracks.len());
/// ```
pub async fn search_by_tag(
    client: &Client,
    config: &AudiusConfig,
    tag: &str,
) -> Result<Vec<RawTrack>, CatalogError> {
    let api_url = format!("{uri}/tracks", uri = config.api_url.trim_end_matches('/'));
    let limit = config.search_limit.to_string();

    let response = client
        .get(&api_url)
        .query(&[
            ("app_name", config.app_name.as_str()),
            ("tag", tag),
            ("limit", limit.as_str()),
            ("api_key", config.api_key.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status));
    }

    let body = response.text().await?;
    let json = serde_json::from_str::<SearchResponse>(&body)?;

    Ok(json
        .data
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<RawTrack>(entry).ok())
        .collect())
}
