//! Mood aggregation.
//!
//! Builds a mood mix from a [`Catalog`]:
//!
//! 1. resolve the mood to its search tags (unknown moods use chill)
//! 2. search each tag in order and collect everything returned
//! 3. drop duplicate track ids, first occurrence wins
//! 4. resolve up to [`CANDIDATE_LIMIT`] candidates to stream URLs, stopping once
//!    `count` tracks resolved
//! 5. shuffle
//!
//! Calls are made one at a time, so the early stop in step 4 is exact. A tag
//! whose search is answered with an error status contributes nothing, and a
//! candidate that fails to resolve is skipped. Any other search failure aborts
//! the whole mix with a [`RadioError`].

use std::{error::Error, fmt};

use crate::{
    audius::{Catalog, CatalogError},
    mood,
    types::{EnrichedTrack, RawTrack},
    utils,
};

/// Most candidates that are sent to the resolve endpoint per mix.
pub const CANDIDATE_LIMIT: usize = 20;

#[derive(Debug)]
pub enum RadioError {
    Search { tag: String, source: CatalogError },
}

impl fmt::Display for RadioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadioError::Search { tag, source } => {
                write!(f, "searching tag '{tag}' failed: {source}")
            }
        }
    }
}

impl Error for RadioError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RadioError::Search { source, .. } => Some(source),
        }
    }
}

/// Builds a shuffled mix of at most `count` playable tracks for `mood`.
pub async fn mix<C>(catalog: &C, mood: &str, count: i64) -> Result<Vec<EnrichedTrack>, RadioError>
where
    C: Catalog + ?Sized,
{
    let tags = mood::tags_for(mood);

    let mut candidates = collect_tracks(catalog, tags).await?;
    utils::remove_duplicate_tracks(&mut candidates);

    let mut tracks = resolve_candidates(catalog, candidates, count).await;
    utils::shuffle_tracks(&mut tracks, &mut rand::rng());

    Ok(tracks)
}

/// Searches every tag in order and concatenates the results.
pub async fn collect_tracks<C>(catalog: &C, tags: &[&str]) -> Result<Vec<RawTrack>, RadioError>
where
    C: Catalog + ?Sized,
{
    let mut all_tracks = Vec::new();

    for tag in tags {
        match catalog.search_by_tag(tag).await {
            Ok(tracks) => all_tracks.extend(tracks),
            Err(CatalogError::Status(_)) => continue,
            Err(source) => {
                return Err(RadioError::Search {
                    tag: tag.to_string(),
                    source,
                });
            }
        }
    }

    Ok(all_tracks)
}

/// Resolves candidates in order until `count` tracks have stream URLs.
///
/// Only the first [`CANDIDATE_LIMIT`] candidates are considered. A `count` of
/// zero or less resolves nothing.
pub async fn resolve_candidates<C>(
    catalog: &C,
    candidates: Vec<RawTrack>,
    count: i64,
) -> Vec<EnrichedTrack>
where
    C: Catalog + ?Sized,
{
    let wanted = usize::try_from(count.max(0)).unwrap_or(usize::MAX);
    let mut tracks = Vec::new();
    if wanted == 0 {
        return tracks;
    }

    for candidate in candidates.into_iter().take(CANDIDATE_LIMIT) {
        if let Some(track) = enrich_candidate(catalog, candidate).await {
            tracks.push(track);
        }
        if tracks.len() >= wanted {
            break;
        }
    }

    tracks
}

async fn enrich_candidate<C>(catalog: &C, track: RawTrack) -> Option<EnrichedTrack>
where
    C: Catalog + ?Sized,
{
    if track.permalink.is_empty() {
        return None;
    }

    match catalog.resolve_stream(&track.permalink).await {
        Ok(Some(stream_url)) => Some(utils::enrich_track(track, stream_url, catalog.site_url())),
        Ok(None) | Err(_) => None,
    }
}
