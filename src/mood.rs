//! Mood table and mood resolution.
//!
//! A mood is a coarse category that maps to an ordered list of Audius search
//! tags. The table is fixed at compile time. Lookups are case-insensitive and
//! anything unknown resolves to [`Mood::Chill`].

use std::fmt;

/// Moods understood by the radio, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Chill,
    Focus,
    Happy,
    Energetic,
    Party,
    Sad,
}

/// Mood used when the requested one is not in the table.
pub const DEFAULT_MOOD: Mood = Mood::Chill;

/// Every mood with its search tags, in the order they are queried.
pub static MOOD_TABLE: [(Mood, &[&str]); 6] = [
    (Mood::Chill, &["chill", "lo-fi", "ambient"]),
    (Mood::Focus, &["study", "instrumental", "lo-fi"]),
    (Mood::Happy, &["happy", "feel good", "uplifting"]),
    (Mood::Energetic, &["trap", "bass", "hard"]),
    (Mood::Party, &["dance", "edm", "hip-hop"]),
    (Mood::Sad, &["sad", "melancholy", "emotional"]),
];

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Chill => "chill",
            Mood::Focus => "focus",
            Mood::Happy => "happy",
            Mood::Energetic => "energetic",
            Mood::Party => "party",
            Mood::Sad => "sad",
        }
    }

    /// Looks up a mood by name, ignoring case. Returns `None` for unknown names.
    pub fn lookup(name: &str) -> Option<Mood> {
        let name = name.to_lowercase();
        MOOD_TABLE
            .iter()
            .map(|(mood, _)| *mood)
            .find(|mood| mood.as_str() == name)
    }

    /// Resolves a requested mood name, silently falling back to chill.
    pub fn resolve(name: &str) -> Mood {
        Self::lookup(name).unwrap_or(DEFAULT_MOOD)
    }

    pub fn tags(&self) -> &'static [&'static str] {
        MOOD_TABLE
            .iter()
            .find(|(mood, _)| mood == self)
            .map(|(_, tags)| *tags)
            .unwrap_or(&[])
    }

    pub fn all() -> impl Iterator<Item = Mood> {
        MOOD_TABLE.iter().map(|(mood, _)| *mood)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tags to search for a requested mood name.
pub fn tags_for(name: &str) -> &'static [&'static str] {
    Mood::resolve(name).tags()
}
