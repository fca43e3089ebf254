use axum::response::Json;

use crate::{
    mood::MOOD_TABLE,
    types::{MoodEntry, MoodsResponse},
};

pub async fn moods() -> Json<MoodsResponse> {
    let moods = MOOD_TABLE
        .iter()
        .map(|(mood, tags)| MoodEntry {
            mood: mood.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
        .collect();

    Json(MoodsResponse { moods })
}
