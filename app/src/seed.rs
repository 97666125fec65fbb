//! Built-in default dataset.
//!
//! Returned whenever the persisted events blob is missing, so a fresh
//! install has something to browse. Identifiers are fixed so repeated
//! loads agree with each other.

use crate::types::{
    AgendaItem, AgendaItemId, Event, EventDate, EventId, EventStatus, Money, TicketType,
    TicketTypeId,
};
use uuid::Uuid;

/// Deterministic id for a seed entity
fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// Parse a seed date
///
/// Seed timestamps are hardcoded literals, so failures cannot happen.
#[allow(clippy::expect_used)]
fn date(s: &str) -> EventDate {
    EventDate::parse(s).expect("seed dates are valid")
}

fn ticket(
    n: u128,
    name: &str,
    price: u64,
    capacity: u32,
    sold: u32,
) -> TicketType {
    TicketType {
        id: TicketTypeId::from_uuid(id(n)),
        name: name.to_string(),
        price: Money::from_dollars(price),
        capacity,
        sold,
        description: None,
    }
}

fn agenda_item(n: u128, time: &str, title: &str, speaker: &str, description: &str) -> AgendaItem {
    AgendaItem {
        id: AgendaItemId::from_uuid(id(n)),
        time: time.to_string(),
        title: title.to_string(),
        speaker: Some(speaker.to_string()),
        description: Some(description.to_string()),
    }
}

/// The default event collection for a fresh install
#[must_use]
pub fn initial_events() -> Vec<Event> {
    vec![
        Event {
            id: EventId::from_uuid(id(0x01)),
            title: "Tech Summit 2025".to_string(),
            date: date("2025-11-15"),
            location: "San Francisco, CA".to_string(),
            description: "The premier technology conference bringing together industry \
                          leaders, innovators, and developers for three days of \
                          cutting-edge discussions on AI, Cloud Computing, and the future \
                          of software."
                .to_string(),
            short_description: Some(
                "Join industry leaders for a 3-day summit on AI, Cloud Computing, and the \
                 future of software."
                    .to_string(),
            ),
            image_url: "https://picsum.photos/seed/techsummit/800/400".to_string(),
            ticket_types: vec![
                ticket(0x11, "Early Bird", 199, 100, 100),
                ticket(0x12, "General Admission", 299, 300, 150),
                ticket(0x13, "VIP", 599, 50, 20),
            ],
            status: EventStatus::Published,
            tags: vec!["Tech".to_string(), "AI".to_string(), "Networking".to_string()],
            agenda: vec![
                agenda_item(
                    0xa1,
                    "09:00 AM",
                    "Keynote Speech",
                    "Jane Doe",
                    "Opening remarks on the future of AI.",
                ),
                agenda_item(
                    0xa2,
                    "11:00 AM",
                    "Cloud Architectures",
                    "John Smith",
                    "Scaling systems in 2025.",
                ),
            ],
        },
        Event {
            id: EventId::from_uuid(id(0x02)),
            title: "Sustainable Living Expo".to_string(),
            date: date("2025-12-01"),
            location: "Austin, TX".to_string(),
            description: "Discover the latest in green technology, sustainable home \
                          building, and organic gardening. A family-friendly event with \
                          workshops and demonstrations."
                .to_string(),
            short_description: Some(
                "Discover green technology and sustainable living at this family-friendly \
                 expo."
                    .to_string(),
            ),
            image_url: "https://picsum.photos/seed/green/800/400".to_string(),
            ticket_types: vec![ticket(0x14, "General Entry", 25, 200, 45)],
            status: EventStatus::Published,
            tags: vec![
                "Sustainability".to_string(),
                "Green".to_string(),
                "Lifestyle".to_string(),
            ],
            agenda: vec![agenda_item(
                0xb1,
                "10:00 AM",
                "Solar Basics",
                "Green Energy Co.",
                "Intro to home solar.",
            )],
        },
        Event {
            id: EventId::from_uuid(id(0x03)),
            title: "Global Marketing Retreat".to_string(),
            date: date("2026-01-20"),
            location: "Bali, Indonesia".to_string(),
            description: "An exclusive retreat for marketing executives to brainstorm, \
                          network, and relax in a tropical paradise."
                .to_string(),
            short_description: Some(
                "Network and brainstorm with top marketing executives in a tropical \
                 paradise."
                    .to_string(),
            ),
            image_url: "https://picsum.photos/seed/bali/800/400".to_string(),
            ticket_types: vec![ticket(0x15, "All Access Retreat", 1500, 50, 50)],
            status: EventStatus::Completed,
            tags: vec![
                "Business".to_string(),
                "Marketing".to_string(),
                "Travel".to_string(),
            ],
            agenda: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory;

    #[test]
    fn seed_is_deterministic() {
        assert_eq!(initial_events(), initial_events());
    }

    #[test]
    fn seed_respects_capacity_invariant() {
        for event in initial_events() {
            for tier in &event.ticket_types {
                assert!(tier.sold <= tier.capacity, "{} violates invariant", tier.name);
            }
        }
    }

    #[test]
    fn seed_contains_a_sold_out_tier() {
        let events = initial_events();
        let early_bird = &events[0].ticket_types[0];
        assert!(early_bird.is_sold_out());
        assert_eq!(inventory::total_capacity(&events[0].ticket_types), 450);
    }

    #[test]
    fn date_helper_is_midnight_utc() {
        let d = date("2025-11-15");
        assert_eq!(d.to_string(), "2025-11-15 00:00 UTC");
    }
}
