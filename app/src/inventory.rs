//! Inventory accounting over an event's ticket types.
//!
//! Pure, read-only derivations: aggregate counts, revenue, and the price
//! summary shown on cards and detail views. Nothing here mutates its input.
//!
//! Out-of-range inputs (sold above capacity) indicate an invariant
//! violation upstream; the derivations saturate instead of panicking so the
//! bug surfaces in tests rather than as a crash.

use crate::types::{Money, TicketType};
use std::fmt;

impl TicketType {
    /// Tickets still available in this tier, never negative
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.sold)
    }

    /// True once every ticket in this tier is sold
    #[must_use]
    pub const fn is_sold_out(&self) -> bool {
        self.sold >= self.capacity
    }
}

/// Sum of capacities across ticket types; 0 for an empty list
#[must_use]
pub fn total_capacity(ticket_types: &[TicketType]) -> u32 {
    ticket_types
        .iter()
        .fold(0u32, |acc, t| acc.saturating_add(t.capacity))
}

/// Sum of sold counts across ticket types; 0 for an empty list
#[must_use]
pub fn total_registered(ticket_types: &[TicketType]) -> u32 {
    ticket_types
        .iter()
        .fold(0u32, |acc, t| acc.saturating_add(t.sold))
}

/// Gross revenue across ticket types: Σ price × sold
#[must_use]
pub fn revenue(ticket_types: &[TicketType]) -> Money {
    ticket_types.iter().fold(Money::ZERO, |acc, t| {
        acc.saturating_add(t.price.saturating_mul(t.sold))
    })
}

/// The event's price band: (minimum, maximum) ticket price
///
/// Both are zero for an event with no ticket types. The filter's price
/// clauses compare against this band.
#[must_use]
pub fn price_band(ticket_types: &[TicketType]) -> (Money, Money) {
    let mut prices = ticket_types.iter().map(|t| t.price);
    let Some(first) = prices.next() else {
        return (Money::ZERO, Money::ZERO);
    };

    prices.fold((first, first), |(min, max), price| {
        (min.min(price), max.max(price))
    })
}

/// Price summary for display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceDisplay {
    /// The event has no ticket types at all
    NoTickets,
    /// Every tier costs the same; zero renders as "Free"
    Single(Money),
    /// Tiers span a price range
    Range {
        /// Cheapest tier
        min: Money,
        /// Most expensive tier
        max: Money,
    },
}

impl fmt::Display for PriceDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTickets => write!(f, "No tickets available"),
            Self::Single(price) if price.is_zero() => write!(f, "Free"),
            Self::Single(price) => write!(f, "{price}"),
            Self::Range { min, max } => write!(f, "{min} – {max}"),
        }
    }
}

/// Derive the price summary for an event's ticket list
#[must_use]
pub fn price_display(ticket_types: &[TicketType]) -> PriceDisplay {
    if ticket_types.is_empty() {
        return PriceDisplay::NoTickets;
    }

    let (min, max) = price_band(ticket_types);
    if min == max {
        PriceDisplay::Single(min)
    } else {
        PriceDisplay::Range { min, max }
    }
}
