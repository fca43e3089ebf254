use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::types::{EnrichedTrack, RawTrack};

pub const DEFAULT_COUNT: i64 = 10;
pub const UNKNOWN_ARTIST: &str = "Unknown";

/// Drops every track whose id was already seen, keeping first occurrences in order.
pub fn remove_duplicate_tracks(tracks: &mut Vec<RawTrack>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| seen_ids.insert(track.id.clone()));
}

/// Parses the `count` query value. Missing or non-integer values give the default.
pub fn parse_count(count: Option<&str>) -> i64 {
    count
        .and_then(|c| c.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_COUNT)
}

pub fn shuffle_tracks<R: Rng + ?Sized>(tracks: &mut [EnrichedTrack], rng: &mut R) {
    tracks.shuffle(rng);
}

/// Canonical web URL of a track, the form the resolve endpoint expects.
pub fn track_url(site_url: &str, permalink: &str) -> String {
    format!("{}{}", site_url.trim_end_matches('/'), permalink)
}

pub fn embed_url(site_url: &str, track_id: &str) -> String {
    format!(
        "{}/embed/track/{}",
        site_url.trim_end_matches('/'),
        track_id
    )
}

/// Projects an upstream track plus its resolved stream into the response shape.
pub fn enrich_track(track: RawTrack, stream_url: String, site_url: &str) -> EnrichedTrack {
    let artist = track
        .user
        .and_then(|u| u.name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());
    let artwork = track.artwork.and_then(|a| {
        a.medium
            .filter(|url| !url.is_empty())
            .or(a.small.filter(|url| !url.is_empty()))
    });
    let embed_url = embed_url(site_url, &track.id);

    EnrichedTrack {
        id: track.id,
        title: track.title,
        artist,
        duration: track.duration,
        artwork,
        genre: track.genre,
        mood: track.mood,
        permalink: track.permalink,
        embed_url,
        stream_url,
    }
}

/// Formats a duration in seconds as `m:ss`, or `h:mm:ss` past the hour.
pub fn format_duration(seconds: u64) -> String {
    let (h, m, s) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}
