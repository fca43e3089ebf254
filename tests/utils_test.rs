use audius_radio::types::{Artwork, EnrichedTrack, RawTrack, User};
use audius_radio::utils::*;
use std::collections::HashSet;

// Helper function to create a test track
fn create_test_track(id: &str, title: &str, artist: Option<&str>) -> RawTrack {
    RawTrack {
        id: id.to_string(),
        title: title.to_string(),
        user: artist.map(|name| User {
            name: Some(name.to_string()),
        }),
        duration: 180,
        artwork: None,
        genre: Some("Electronic".to_string()),
        mood: Some("Peaceful".to_string()),
        permalink: format!("/artist/{}", id),
    }
}

// Helper function to create an enriched track
fn create_enriched_track(id: &str) -> EnrichedTrack {
    enrich_track(
        create_test_track(id, id, Some("Artist")),
        format!("https://stream.example/{}", id),
        "https://audius.co",
    )
}

#[test]
fn test_remove_duplicate_tracks() {
    let mut tracks = vec![
        create_test_track("id1", "Track 1", Some("Artist A")),
        create_test_track("id2", "Track 2", Some("Artist B")),
        create_test_track("id1", "Track 1 Duplicate", Some("Artist A")), // Duplicate
        create_test_track("id3", "Track 3", Some("Artist C")),
        create_test_track("id2", "Track 2 Duplicate", Some("Artist B")), // Duplicate
    ];

    remove_duplicate_tracks(&mut tracks);

    // Should have 3 unique tracks
    assert_eq!(tracks.len(), 3);

    // Should contain the first occurrence of each unique ID, in order
    let ids: Vec<&String> = tracks.iter().map(|t| &t.id).collect();
    assert_eq!(ids, vec!["id1", "id2", "id3"]);
    assert_eq!(tracks[0].title, "Track 1");
    assert_eq!(tracks[1].title, "Track 2");
}

#[test]
fn test_remove_duplicate_tracks_empty() {
    let mut tracks: Vec<RawTrack> = Vec::new();
    remove_duplicate_tracks(&mut tracks);
    assert!(tracks.is_empty());
}

#[test]
fn test_parse_count() {
    // Missing value uses the default
    assert_eq!(parse_count(None), DEFAULT_COUNT);
    assert_eq!(parse_count(None), 10);

    // Integer values are taken as given
    assert_eq!(parse_count(Some("5")), 5);
    assert_eq!(parse_count(Some(" 25 ")), 25);
    assert_eq!(parse_count(Some("0")), 0);
    assert_eq!(parse_count(Some("-3")), -3);

    // Anything else falls back to the default
    assert_eq!(parse_count(Some("abc")), DEFAULT_COUNT);
    assert_eq!(parse_count(Some("")), DEFAULT_COUNT);
    assert_eq!(parse_count(Some("2.5")), DEFAULT_COUNT);
}

#[test]
fn test_track_and_embed_urls() {
    assert_eq!(
        track_url("https://audius.co", "/artist/some-track"),
        "https://audius.co/artist/some-track"
    );
    // Trailing slash on the site is not doubled
    assert_eq!(
        track_url("https://audius.co/", "/artist/some-track"),
        "https://audius.co/artist/some-track"
    );
    assert_eq!(
        embed_url("https://audius.co", "D7KyD"),
        "https://audius.co/embed/track/D7KyD"
    );
}

#[test]
fn test_enrich_track_projects_fields() {
    let mut raw = create_test_track("abc", "Night Drive", Some("Synth Kid"));
    raw.artwork = Some(Artwork {
        small: Some("https://img/150.jpg".to_string()),
        medium: Some("https://img/480.jpg".to_string()),
    });

    let track = enrich_track(
        raw,
        "https://stream/abc".to_string(),
        "https://audius.co",
    );

    assert_eq!(track.id, "abc");
    assert_eq!(track.title, "Night Drive");
    assert_eq!(track.artist, "Synth Kid");
    assert_eq!(track.duration, 180);
    assert_eq!(track.artwork.as_deref(), Some("https://img/480.jpg"));
    assert_eq!(track.genre.as_deref(), Some("Electronic"));
    assert_eq!(track.mood.as_deref(), Some("Peaceful"));
    assert_eq!(track.permalink, "/artist/abc");
    assert_eq!(track.embed_url, "https://audius.co/embed/track/abc");
    assert_eq!(track.stream_url, "https://stream/abc");
}

#[test]
fn test_enrich_track_fallbacks() {
    // Missing user gives the unknown artist
    let track = enrich_track(
        create_test_track("x", "X", None),
        "s".to_string(),
        "https://audius.co",
    );
    assert_eq!(track.artist, UNKNOWN_ARTIST);
    assert_eq!(track.artwork, None);

    // Artwork falls back to the small variant
    let mut raw = create_test_track("y", "Y", Some("Someone"));
    raw.artwork = Some(Artwork {
        small: Some("https://img/150.jpg".to_string()),
        medium: None,
    });
    let track = enrich_track(raw, "s".to_string(), "https://audius.co");
    assert_eq!(track.artwork.as_deref(), Some("https://img/150.jpg"));

    // An empty 480 variant falls back too
    let mut raw = create_test_track("z", "Z", Some("Someone"));
    raw.artwork = Some(Artwork {
        small: Some("https://img/150.jpg".to_string()),
        medium: Some(String::new()),
    });
    let track = enrich_track(raw, "s".to_string(), "https://audius.co");
    assert_eq!(track.artwork.as_deref(), Some("https://img/150.jpg"));

    // Both empty gives no artwork at all
    let mut raw = create_test_track("w", "W", Some("Someone"));
    raw.artwork = Some(Artwork {
        small: Some(String::new()),
        medium: Some(String::new()),
    });
    let track = enrich_track(raw, "s".to_string(), "https://audius.co");
    assert_eq!(track.artwork, None);
}

#[test]
fn test_enriched_track_serializes_camel_case() {
    let json = serde_json::to_value(create_enriched_track("abc")).unwrap();

    for key in [
        "id",
        "title",
        "artist",
        "duration",
        "artwork",
        "genre",
        "mood",
        "permalink",
        "embedUrl",
        "streamUrl",
    ] {
        assert!(json.get(key).is_some(), "missing key {}", key);
    }
    assert!(json.get("embed_url").is_none());
    assert_eq!(json["streamUrl"], "https://stream.example/abc");
}

#[test]
fn test_raw_track_deserializes_audius_shape() {
    let json = r#"{
        "id": "D7KyD",
        "title": "Lo-fi Morning",
        "user": { "name": "Beat Maker", "handle": "beatmaker" },
        "duration": 143,
        "artwork": { "150x150": "https://a/150", "480x480": "https://a/480" },
        "genre": "Lo-Fi",
        "mood": null,
        "permalink": "/beatmaker/lo-fi-morning",
        "play_count": 1200
    }"#;

    let track: RawTrack = serde_json::from_str(json).unwrap();
    assert_eq!(track.id, "D7KyD");
    assert_eq!(track.user.unwrap().name.as_deref(), Some("Beat Maker"));
    assert_eq!(track.duration, 143);
    let artwork = track.artwork.unwrap();
    assert_eq!(artwork.medium.as_deref(), Some("https://a/480"));
    assert_eq!(track.mood, None);
}

#[test]
fn test_raw_track_tolerates_nulls_and_fractions() {
    let json = r#"{
        "id": "n1",
        "title": null,
        "user": null,
        "duration": null,
        "artwork": null,
        "genre": null,
        "permalink": null
    }"#;

    let track: RawTrack = serde_json::from_str(json).unwrap();
    assert_eq!(track.id, "n1");
    assert_eq!(track.title, "");
    assert!(track.user.is_none());
    assert_eq!(track.duration, 0);
    assert_eq!(track.permalink, "");

    // Fractional durations are rounded to whole seconds
    let track: RawTrack =
        serde_json::from_str(r#"{ "id": "f1", "duration": 211.6 }"#).unwrap();
    assert_eq!(track.duration, 212);

    // A record without an id is still rejected
    assert!(serde_json::from_str::<RawTrack>(r#"{ "title": "no id" }"#).is_err());
}

#[test]
fn test_shuffle_tracks_keeps_elements() {
    let mut tracks: Vec<EnrichedTrack> = (0..15)
        .map(|i| create_enriched_track(&format!("t{}", i)))
        .collect();
    let before: HashSet<String> = tracks.iter().map(|t| t.id.clone()).collect();

    shuffle_tracks(&mut tracks, &mut rand::rng());

    let after: HashSet<String> = tracks.iter().map(|t| t.id.clone()).collect();
    assert_eq!(tracks.len(), 15);
    assert_eq!(before, after);
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(59), "0:59");
    assert_eq!(format_duration(143), "2:23");
    assert_eq!(format_duration(3600), "1:00:00");
    assert_eq!(format_duration(3725), "1:02:05");
}
