//! Event query/filter: narrow the catalog to the events matching a
//! [`FilterSpec`].
//!
//! The filter is a stable subsequence selection: input order is preserved
//! and nothing is re-sorted. Every active clause must match (logical AND),
//! and the operation is total - it never fails, because lenient
//! `FilterSpec` construction already turned unparsable inputs into absent
//! constraints.

use crate::inventory;
use crate::types::{Event, FilterSpec};

/// Return the ordered subsequence of events satisfying every active clause
#[must_use]
pub fn filter_events<'a>(events: &'a [Event], spec: &FilterSpec) -> Vec<&'a Event> {
    events.iter().filter(|event| matches(event, spec)).collect()
}

/// The set of available categories: the union of all tags, first-seen order
#[must_use]
pub fn categories(events: &[Event]) -> Vec<String> {
    let mut seen = Vec::new();
    for event in events {
        for tag in &event.tags {
            if !seen.contains(tag) {
                seen.push(tag.clone());
            }
        }
    }
    seen
}

/// Check a single event against every active clause of the spec
#[must_use]
pub fn matches(event: &Event, spec: &FilterSpec) -> bool {
    matches_query(event, spec)
        && matches_category(event, spec)
        && matches_dates(event, spec)
        && matches_prices(event, spec)
}

/// Text clause: case-insensitive substring of title, description, or location
fn matches_query(event: &Event, spec: &FilterSpec) -> bool {
    let Some(query) = spec.query.as_deref() else {
        return true;
    };
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }

    event.title.to_lowercase().contains(&needle)
        || event.description.to_lowercase().contains(&needle)
        || event.location.to_lowercase().contains(&needle)
}

/// Category clause: the tag list must contain the category
/// (case-insensitive)
fn matches_category(event: &Event, spec: &FilterSpec) -> bool {
    let Some(category) = spec.category.as_deref() else {
        return true;
    };

    event.tags.iter().any(|tag| tag.eq_ignore_ascii_case(category))
}

/// Date clauses: both bounds are inclusive
fn matches_dates(event: &Event, spec: &FilterSpec) -> bool {
    if let Some(start) = spec.start_date {
        if event.date < start {
            return false;
        }
    }
    if let Some(end) = spec.end_date {
        if event.date > end {
            return false;
        }
    }
    true
}

/// Price clauses: a range-overlap test, not an exact-match test
///
/// A minimum bound checks the event's *maximum* price and a maximum bound
/// checks the event's *minimum* price, so an event matches whenever some
/// ticket type could fall inside the bounds. An event with no ticket
/// types has a zero price band.
fn matches_prices(event: &Event, spec: &FilterSpec) -> bool {
    let (event_min, event_max) = inventory::price_band(&event.ticket_types);

    if let Some(min) = spec.min_price {
        if event_max < min {
            return false;
        }
    }
    if let Some(max) = spec.max_price {
        if event_min > max {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventDate, EventId, EventStatus, Money, TicketType};

    fn event(title: &str, location: &str, tags: &[&str], prices: &[u64], date: &str) -> Event {
        Event {
            id: EventId::new(),
            title: title.to_string(),
            date: EventDate::parse(date).unwrap_or_else(|| {
                EventDate::new(chrono::DateTime::UNIX_EPOCH)
            }),
            location: location.to_string(),
            description: format!("All about {title}."),
            short_description: None,
            image_url: String::new(),
            ticket_types: prices
                .iter()
                .map(|p| TicketType::new("Tier", Money::from_dollars(*p), 100))
                .collect(),
            status: EventStatus::Published,
            tags: tags.iter().map(ToString::to_string).collect(),
            agenda: Vec::new(),
        }
    }

    fn sample() -> Vec<Event> {
        vec![
            event(
                "Tech Summit",
                "San Francisco, CA",
                &["Tech", "AI"],
                &[199],
                "2025-11-15",
            ),
            event("Jazz Night", "Berlin", &["Music", "Live"], &[0], "2025-12-01"),
            event(
                "Marketing Retreat",
                "Bali, Indonesia",
                &["Business"],
                &[1500],
                "2026-01-20",
            ),
        ]
    }

    #[test]
    fn unconstrained_spec_is_identity() {
        let events = sample();
        let filtered = filter_events(&events, &FilterSpec::default());

        assert_eq!(filtered.len(), events.len());
        // Original order preserved
        assert!(filtered.iter().zip(&events).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let events = sample();
        let filtered = filter_events(&events, &FilterSpec::with_query("jazz"));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Jazz Night");
    }

    #[test]
    fn query_matches_location_and_description() {
        let events = sample();

        let by_location = filter_events(&events, &FilterSpec::with_query("bali"));
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].title, "Marketing Retreat");

        let by_description = filter_events(&events, &FilterSpec::with_query("about tech"));
        assert_eq!(by_description.len(), 1);
    }

    #[test]
    fn category_requires_tag_membership() {
        let events = sample();
        let spec = FilterSpec {
            category: Some("Music".to_string()),
            ..FilterSpec::default()
        };

        let filtered = filter_events(&events, &spec);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Jazz Night");
    }

    #[test]
    fn category_match_ignores_case() {
        let events = sample();
        let spec = FilterSpec {
            category: Some("music".to_string()),
            ..FilterSpec::default()
        };

        assert_eq!(filter_events(&events, &spec).len(), 1);
    }

    #[test]
    fn min_price_uses_event_maximum() {
        let events = sample();
        let spec = FilterSpec {
            min_price: Some(Money::from_dollars(50)),
            ..FilterSpec::default()
        };

        // Tech Summit (max 199) and the retreat (1500) qualify; the free
        // Jazz Night (max 0) does not
        let filtered = filter_events(&events, &spec);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|e| e.title != "Jazz Night"));
    }

    #[test]
    fn max_price_uses_event_minimum() {
        let events = sample();
        let spec = FilterSpec {
            max_price: Some(Money::from_dollars(200)),
            ..FilterSpec::default()
        };

        // The retreat's cheapest ticket is 1500, above the cap
        let filtered = filter_events(&events, &spec);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|e| e.title != "Marketing Retreat"));
    }

    #[test]
    fn no_ticket_event_has_zero_price_band() {
        let events = vec![event("Meetup", "Online", &[], &[], "2025-10-01")];

        let min_spec = FilterSpec {
            min_price: Some(Money::from_dollars(1)),
            ..FilterSpec::default()
        };
        assert!(filter_events(&events, &min_spec).is_empty());

        let max_spec = FilterSpec {
            max_price: Some(Money::from_dollars(1)),
            ..FilterSpec::default()
        };
        assert_eq!(filter_events(&events, &max_spec).len(), 1);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let events = sample();
        let spec = FilterSpec {
            start_date: EventDate::parse("2025-12-01"),
            end_date: EventDate::parse("2026-01-20"),
            ..FilterSpec::default()
        };

        let filtered = filter_events(&events, &spec);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "Jazz Night");
        assert_eq!(filtered[1].title, "Marketing Retreat");
    }

    #[test]
    fn clauses_combine_with_and() {
        let events = sample();
        let spec = FilterSpec {
            query: Some("night".to_string()),
            min_price: Some(Money::from_dollars(50)),
            ..FilterSpec::default()
        };

        // "night" matches Jazz Night but its max price fails the bound
        assert!(filter_events(&events, &spec).is_empty());
    }

    #[test]
    fn categories_dedupe_in_first_seen_order() {
        let mut events = sample();
        events.push(event("AI Forum", "Online", &["AI", "Tech"], &[10], "2026-02-01"));

        assert_eq!(
            categories(&events),
            vec!["Tech", "AI", "Music", "Live", "Business"]
        );
    }
}
