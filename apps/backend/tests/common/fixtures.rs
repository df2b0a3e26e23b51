//! Catalog fixtures for API tests.

use vocab_core::{Gender, Level, Noun};

pub fn noun(id: &str, gender: Gender, level: Level) -> Noun {
    Noun {
        id: id.to_string(),
        word: id.to_string(),
        gender,
        meaning: format!("arti {id}"),
        level,
        topic: "umum".to_string(),
        tip: None,
        emoji: None,
    }
}

/// Small fixed catalog spanning all three levels.
pub fn sample_catalog() -> Vec<Noun> {
    vec![
        noun("tisch", Gender::Der, Level::A1),
        noun("lampe", Gender::Die, Level::A1),
        noun("haus", Gender::Das, Level::A1),
        noun("arbeit", Gender::Die, Level::A2),
        noun("erfahrung", Gender::Die, Level::B1),
    ]
}
