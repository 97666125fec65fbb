//! Request and response types for event content generation

use serde::{Deserialize, Serialize};

/// Facts about an event used to generate its marketing copy
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRequest {
    /// Event title
    pub title: String,
    /// Free-text notes from the host
    pub notes: String,
    /// Date of the event, as entered
    pub date: String,
    /// Venue or online link
    pub location: String,
}

impl ContentRequest {
    /// Creates a new content request
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        notes: impl Into<String>,
        date: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            notes: notes.into(),
            date: date.into(),
            location: location.into(),
        }
    }
}

/// One agenda line of generated content
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaEntry {
    /// Time label, free text (e.g. "09:00 AM")
    pub time: String,
    /// What happens at that time
    pub activity: String,
}

impl AgendaEntry {
    /// Creates a new agenda entry
    #[must_use]
    pub fn new(time: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            activity: activity.into(),
        }
    }
}

/// Generated marketing copy for an event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventContent {
    /// Marketing description, a few paragraphs
    pub description: String,
    /// Category tags
    pub tags: Vec<String>,
    /// Proposed agenda
    pub agenda: Vec<AgendaEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn event_content_round_trips_through_json() {
        let content = EventContent {
            description: "A premier gathering.".to_string(),
            tags: vec!["Community".to_string()],
            agenda: vec![AgendaEntry::new("10:00 AM", "Welcome")],
        };

        let json = serde_json::to_string(&content).unwrap();
        let parsed: EventContent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, content);
    }
}
