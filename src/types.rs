use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tabled::Tabled;

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whole seconds from a possibly fractional or `null` duration.
fn lenient_seconds<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = Option::<f64>::deserialize(deserializer)?.unwrap_or_default();
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds.round() as u64)
    } else {
        Ok(0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(rename = "150x150", default)]
    pub small: Option<String>,
    #[serde(rename = "480x480", default)]
    pub medium: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTrack {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub duration: u64,
    #[serde(default)]
    pub artwork: Option<Artwork>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub permalink: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Entries stay raw so one malformed track cannot spoil the page.
    #[serde(default)]
    pub data: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    #[serde(default)]
    pub data: Option<ResolvedTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedTrack {
    #[serde(default)]
    pub stream: Option<Stream>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stream {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedTrack {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration: u64,
    pub artwork: Option<String>,
    pub genre: Option<String>,
    pub mood: Option<String>,
    pub permalink: String,
    pub embed_url: String,
    pub stream_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksResponse {
    pub success: bool,
    pub mood: String,
    pub count: usize,
    pub tracks: Vec<EnrichedTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodsResponse {
    pub moods: Vec<MoodEntry>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub duration: String,
}

#[derive(Tabled)]
pub struct MoodTableRow {
    pub mood: String,
    pub tags: String,
}
