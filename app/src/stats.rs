//! Dashboard statistics derived from the event collection.

use crate::inventory;
use crate::types::{Event, EventStatus, Money};
use chrono::{DateTime, Utc};

/// Counts of events per lifecycle status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusBreakdown {
    /// Events still being authored
    pub draft: usize,
    /// Live events
    pub published: usize,
    /// Past events
    pub completed: usize,
    /// Called-off events
    pub cancelled: usize,
}

/// Aggregate numbers shown on the dashboard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Number of events in the collection
    pub total_events: usize,
    /// Total registrations across all events
    pub total_attendees: u64,
    /// Gross revenue across all events
    pub total_revenue: Money,
    /// Published events dated now or later
    pub upcoming_events: usize,
    /// Per-status counts for the status chart
    pub status_breakdown: StatusBreakdown,
}

impl DashboardStats {
    /// Compute dashboard statistics over the full collection
    ///
    /// Read-only: derives everything from the events passed in.
    #[must_use]
    pub fn compute(events: &[Event], now: DateTime<Utc>) -> Self {
        let mut stats = Self {
            total_events: events.len(),
            ..Self::default()
        };

        for event in events {
            stats.total_attendees +=
                u64::from(inventory::total_registered(&event.ticket_types));
            stats.total_revenue = stats
                .total_revenue
                .saturating_add(inventory::revenue(&event.ticket_types));

            match event.status {
                EventStatus::Draft => stats.status_breakdown.draft += 1,
                EventStatus::Published => stats.status_breakdown.published += 1,
                EventStatus::Completed => stats.status_breakdown.completed += 1,
                EventStatus::Cancelled => stats.status_breakdown.cancelled += 1,
            }

            if event.status == EventStatus::Published && event.date.inner() >= now {
                stats.upcoming_events += 1;
            }
        }

        stats
    }
}
