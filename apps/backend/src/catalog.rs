//! Built-in noun catalog.
//!
//! Ordered and immutable at runtime: ids are stable, and levels draw from
//! the same closed set the settings use. Meanings, topics, and tips are in
//! Indonesian.

use vocab_core::{Gender, Level, Noun};

/// Default emoji per topic, for entries without their own.
const TOPIC_VISUALS: &[(&str, &str)] = &[
    ("rumah", "🏠"),
    ("belanja", "🛒"),
    ("kota", "🏙️"),
    ("kesehatan", "🏥"),
    ("pekerjaan", "💼"),
    ("kampus", "🎓"),
    ("alam", "🌿"),
    ("orang", "👤"),
    ("waktu", "⏳"),
    ("umum", "💡"),
];

/// Emoji for a noun: its own if set, otherwise the topic default,
/// otherwise a generic sparkle.
pub fn visual_for(noun: &Noun) -> &str {
    if let Some(emoji) = noun.emoji.as_deref() {
        if !emoji.trim().is_empty() {
            return emoji;
        }
    }
    let topic = noun.topic.to_lowercase();
    TOPIC_VISUALS
        .iter()
        .find(|(key, _)| topic == *key)
        .map(|(_, visual)| *visual)
        .unwrap_or("✨")
}

struct Entry(
    &'static str,         // id
    &'static str,         // word
    Gender,
    &'static str,         // meaning
    Level,
    &'static str,         // topic
    Option<&'static str>, // tip
    Option<&'static str>, // emoji
);

#[rustfmt::skip]
const ENTRIES: &[Entry] = &[
    // A1
    Entry("tisch", "Tisch", Gender::Der, "meja", Level::A1, "rumah", None, None),
    Entry("stuhl", "Stuhl", Gender::Der, "kursi", Level::A1, "rumah", None, Some("🪑")),
    Entry("lampe", "Lampe", Gender::Die, "lampu", Level::A1, "rumah", Some("Akhiran -e sering kali die."), Some("💡")),
    Entry("tuer", "Tür", Gender::Die, "pintu", Level::A1, "rumah", None, Some("🚪")),
    Entry("fenster", "Fenster", Gender::Das, "jendela", Level::A1, "rumah", None, Some("🪟")),
    Entry("haus", "Haus", Gender::Das, "rumah", Level::A1, "rumah", None, None),
    Entry("bett", "Bett", Gender::Das, "tempat tidur", Level::A1, "rumah", None, Some("🛏️")),
    Entry("apfel", "Apfel", Gender::Der, "apel", Level::A1, "belanja", None, Some("🍎")),
    Entry("kaese", "Käse", Gender::Der, "keju", Level::A1, "belanja", None, Some("🧀")),
    Entry("milch", "Milch", Gender::Die, "susu", Level::A1, "belanja", None, Some("🥛")),
    Entry("brot", "Brot", Gender::Das, "roti", Level::A1, "belanja", None, Some("🍞")),
    Entry("mann", "Mann", Gender::Der, "laki-laki", Level::A1, "orang", None, None),
    Entry("frau", "Frau", Gender::Die, "perempuan", Level::A1, "orang", None, None),
    Entry("kind", "Kind", Gender::Das, "anak", Level::A1, "orang", None, None),
    Entry("tag", "Tag", Gender::Der, "hari", Level::A1, "waktu", None, None),
    Entry("woche", "Woche", Gender::Die, "minggu", Level::A1, "waktu", None, None),
    Entry("uhr", "Uhr", Gender::Die, "jam", Level::A1, "waktu", None, Some("🕐")),
    Entry("jahr", "Jahr", Gender::Das, "tahun", Level::A1, "waktu", None, None),
    // A2
    Entry("beruf", "Beruf", Gender::Der, "profesi", Level::A2, "pekerjaan", None, None),
    Entry("termin", "Termin", Gender::Der, "janji temu", Level::A2, "pekerjaan", None, Some("📅")),
    Entry("arbeit", "Arbeit", Gender::Die, "pekerjaan", Level::A2, "pekerjaan", None, None),
    Entry("rechnung", "Rechnung", Gender::Die, "tagihan", Level::A2, "pekerjaan", Some("Akhiran -ung selalu die."), Some("🧾")),
    Entry("buero", "Büro", Gender::Das, "kantor", Level::A2, "pekerjaan", None, None),
    Entry("gehalt", "Gehalt", Gender::Das, "gaji", Level::A2, "pekerjaan", None, Some("💶")),
    Entry("arzt", "Arzt", Gender::Der, "dokter", Level::A2, "kesehatan", None, Some("🧑‍⚕️")),
    Entry("apotheke", "Apotheke", Gender::Die, "apotek", Level::A2, "kesehatan", None, Some("💊")),
    Entry("krankenhaus", "Krankenhaus", Gender::Das, "rumah sakit", Level::A2, "kesehatan", Some("Kata majemuk mengikuti kata terakhir: das Haus."), None),
    Entry("rezept", "Rezept", Gender::Das, "resep", Level::A2, "kesehatan", None, None),
    Entry("bahnhof", "Bahnhof", Gender::Der, "stasiun", Level::A2, "kota", None, Some("🚉")),
    Entry("haltestelle", "Haltestelle", Gender::Die, "halte", Level::A2, "kota", None, Some("🚏")),
    Entry("rathaus", "Rathaus", Gender::Das, "balai kota", Level::A2, "kota", None, None),
    // B1
    Entry("vorschlag", "Vorschlag", Gender::Der, "usulan", Level::B1, "umum", None, None),
    Entry("eindruck", "Eindruck", Gender::Der, "kesan", Level::B1, "umum", None, None),
    Entry("erfahrung", "Erfahrung", Gender::Die, "pengalaman", Level::B1, "umum", Some("Akhiran -ung selalu die."), None),
    Entry("entscheidung", "Entscheidung", Gender::Die, "keputusan", Level::B1, "umum", Some("Akhiran -ung selalu die."), None),
    Entry("gesellschaft", "Gesellschaft", Gender::Die, "masyarakat", Level::B1, "umum", Some("Akhiran -schaft selalu die."), None),
    Entry("verhaeltnis", "Verhältnis", Gender::Das, "hubungan", Level::B1, "umum", Some("Akhiran -nis biasanya das."), None),
    Entry("gesetz", "Gesetz", Gender::Das, "undang-undang", Level::B1, "umum", None, Some("⚖️")),
    Entry("umwelt", "Umwelt", Gender::Die, "lingkungan", Level::B1, "alam", None, None),
    Entry("gewitter", "Gewitter", Gender::Das, "badai petir", Level::B1, "alam", Some("Awalan Ge- sering kali das."), Some("⛈️")),
];

/// The full catalog, in a stable order.
pub fn builtin_catalog() -> Vec<Noun> {
    ENTRIES
        .iter()
        .map(|Entry(id, word, gender, meaning, level, topic, tip, emoji)| Noun {
            id: (*id).to_string(),
            word: (*word).to_string(),
            gender: *gender,
            meaning: (*meaning).to_string(),
            level: *level,
            topic: (*topic).to_string(),
            tip: tip.map(str::to_string),
            emoji: emoji.map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let catalog = builtin_catalog();
        let ids: HashSet<&str> = catalog.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn every_level_is_represented() {
        let catalog = builtin_catalog();
        for level in Level::ALL {
            assert!(catalog.iter().any(|n| n.level == level));
        }
    }

    #[test]
    fn visual_prefers_own_emoji_over_topic() {
        let catalog = builtin_catalog();
        let apfel = catalog.iter().find(|n| n.id == "apfel").unwrap();
        assert_eq!(visual_for(apfel), "🍎");

        let tisch = catalog.iter().find(|n| n.id == "tisch").unwrap();
        assert_eq!(visual_for(tisch), "🏠");
    }

    #[test]
    fn unknown_topic_falls_back_to_sparkle() {
        let mut noun = builtin_catalog().remove(0);
        noun.emoji = None;
        noun.topic = "misteri".to_string();
        assert_eq!(visual_for(&noun), "✨");
    }
}
