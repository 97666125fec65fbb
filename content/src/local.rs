//! Deterministic local content generator
//!
//! Stands in for the text-generation API when no credential is configured.
//! Template selection is keyed off keyword heuristics in the title and
//! notes, and the whole generation is deterministic for a given request so
//! tests and demos are reproducible.

use crate::types::{AgendaEntry, ContentRequest, EventContent};

/// Adjectives rotated into the technology template
const ADJECTIVES: [&str; 6] = [
    "Groundbreaking",
    "Immersive",
    "Exclusive",
    "Transformative",
    "Global",
    "Next-Gen",
];

/// Keywords selecting the technology template
const TECH_KEYWORDS: [&str; 3] = ["tech", "code", "summit"];

/// Keywords selecting the music template
const MUSIC_KEYWORDS: [&str; 3] = ["concert", "music", "festival"];

/// Deterministic local content generator
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalGenerator;

impl LocalGenerator {
    /// Creates a new local generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate content from title/notes heuristics
    #[must_use]
    pub fn generate(&self, request: &ContentRequest) -> EventContent {
        let haystack = format!(
            "{} {}",
            request.title.to_lowercase(),
            request.notes.to_lowercase()
        );

        if TECH_KEYWORDS.iter().any(|k| haystack.contains(k)) {
            Self::tech_content(&request.title)
        } else if MUSIC_KEYWORDS.iter().any(|k| haystack.contains(k)) {
            Self::music_content(&request.title)
        } else {
            Self::community_content(&request.title)
        }
    }

    /// Pick an adjective deterministically from the title
    fn adjective(title: &str) -> &'static str {
        ADJECTIVES[title.len() % ADJECTIVES.len()]
    }

    fn tech_content(title: &str) -> EventContent {
        let adjective = Self::adjective(title);
        EventContent {
            description: format!(
                "Join us for {title}, a {adjective} technology experience designed for \
                 developers, innovators, and visionaries.\n\n\
                 Over the course of this event, you will dive deep into the latest \
                 advancements in AI, Cloud Computing, and Web3. Connect with industry \
                 leaders, participate in interactive coding sessions, and discover tools \
                 that will shape the future. Whether you are a startup founder or a senior \
                 engineer, this is the place to be."
            ),
            tags: vec![
                "Technology".to_string(),
                "Innovation".to_string(),
                "Networking".to_string(),
                "AI".to_string(),
                "Future".to_string(),
            ],
            agenda: vec![
                AgendaEntry::new("09:00 AM", "Opening Keynote: The Future of Code"),
                AgendaEntry::new("11:00 AM", "Workshop: Building Scalable Systems"),
                AgendaEntry::new("01:00 PM", "Networking Lunch"),
                AgendaEntry::new("03:00 PM", "Panel: AI Ethics & Safety"),
            ],
        }
    }

    fn music_content(title: &str) -> EventContent {
        EventContent {
            description: format!(
                "Get ready to lose yourself in the music at {title}! This isn't just a \
                 concert; it's a sonic journey featuring world-class artists, mesmerizing \
                 light shows, and an energy you have to feel to believe.\n\n\
                 Experience a curated lineup of genres ranging from indie rock to \
                 electronic beats. Located in an iconic venue with state-of-the-art sound \
                 systems, prepare for a night of dancing, connection, and pure euphoria."
            ),
            tags: vec![
                "Music".to_string(),
                "Live Performance".to_string(),
                "Festival".to_string(),
                "Nightlife".to_string(),
            ],
            agenda: vec![
                AgendaEntry::new("06:00 PM", "Doors Open & Pre-Show Mixer"),
                AgendaEntry::new("07:30 PM", "Opening Act: The Rising Stars"),
                AgendaEntry::new("09:00 PM", "Headliner Performance"),
                AgendaEntry::new("11:30 PM", "After Party with DJ Pulse"),
            ],
        }
    }

    fn community_content(title: &str) -> EventContent {
        EventContent {
            description: format!(
                "Welcome to {title}, a premier gathering for enthusiasts and professionals \
                 alike. This event brings together the best minds and most passionate \
                 spirits for a day of learning, sharing, and growth.\n\n\
                 Expect engaging discussions, hands-on demonstrations, and opportunities \
                 to meet like-minded individuals. We've curated an environment that \
                 fosters creativity and collaboration. Don't miss this opportunity to be \
                 part of something special."
            ),
            tags: vec![
                "Community".to_string(),
                "Gathering".to_string(),
                "Lifestyle".to_string(),
                "Education".to_string(),
            ],
            agenda: vec![
                AgendaEntry::new("10:00 AM", "Welcome & Introduction"),
                AgendaEntry::new("10:30 AM", "Session 1: Core Concepts"),
                AgendaEntry::new("12:30 PM", "Community Lunch"),
                AgendaEntry::new("02:00 PM", "Interactive Breakout Rooms"),
            ],
        }
    }
}
