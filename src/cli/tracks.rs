use tabled::Table;

use crate::{
    audius::AudiusClient,
    cli::spinner,
    error, info,
    mood::Mood,
    radio, success,
    types::TrackTableRow,
    utils, warning,
};

pub async fn tracks(mood: String, count: i64, open: bool) {
    let catalog = match AudiusClient::from_env() {
        Ok(client) => client,
        Err(e) => error!("Failed to create Audius client. Err: {}", e),
    };

    let resolved = Mood::resolve(&mood);
    if Mood::lookup(&mood).is_none() {
        warning!("Unknown mood '{}', using {}", mood, resolved);
    }

    let pb = spinner(format!("Gathering {} tracks...", resolved));
    let result = radio::mix(&catalog, &mood, count).await;
    pb.finish_and_clear();

    let tracks = match result {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to gather tracks. Err: {}", e),
    };

    if tracks.is_empty() {
        warning!("No playable tracks found for {}", resolved);
        return;
    }

    success!("{} playable tracks for {}", tracks.len(), resolved);

    let table_rows: Vec<TrackTableRow> = tracks
        .iter()
        .map(|t| TrackTableRow {
            title: t.title.clone(),
            artist: t.artist.clone(),
            genre: t.genre.clone().unwrap_or_default(),
            duration: utils::format_duration(t.duration),
        })
        .collect();
    println!("{}", Table::new(table_rows));

    if open {
        if let Some(first) = tracks.first() {
            info!("Opening {}", first.embed_url);
            if webbrowser::open(&first.embed_url).is_err() {
                warning!(
                    "Failed to open browser. Please navigate to the following URL manually:\n{}",
                    first.embed_url
                );
            }
        }
    }
}
