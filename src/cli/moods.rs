use tabled::Table;

use crate::{mood::MOOD_TABLE, types::MoodTableRow};

pub fn moods() {
    let table_rows: Vec<MoodTableRow> = MOOD_TABLE
        .iter()
        .map(|(mood, tags)| MoodTableRow {
            mood: mood.to_string(),
            tags: tags.join(", "),
        })
        .collect();

    println!("{}", Table::new(table_rows));
}
