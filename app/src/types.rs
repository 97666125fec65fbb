//! Domain types for the event discovery and ticketing demo.
//!
//! This module contains the value objects and entities of the catalog: events
//! with their ticket tiers and agendas, the filter specification applied when
//! browsing, and the working copy used while authoring a new event.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use eventhub_content::EventContent;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub use eventhub_auth::{Role, User, UserId};

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for an event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random `EventId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an `EventId` from a `Uuid`
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a ticket type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeId(Uuid);

impl TicketTypeId {
    /// Creates a new random `TicketTypeId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a `TicketTypeId` from a `Uuid`
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TicketTypeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicketTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an agenda item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgendaItemId(Uuid);

impl AgendaItemId {
    /// Creates a new random `AgendaItemId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an `AgendaItemId` from a `Uuid`
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for AgendaItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AgendaItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money Value Object (cents-based to avoid floating point errors)
// ============================================================================

/// Represents money in cents to avoid floating-point arithmetic errors
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(u64);

impl Money {
    /// The zero amount, displayed as "Free"
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from cents
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates a `Money` value from whole dollars
    ///
    /// # Panics
    ///
    /// Panics if the conversion would overflow (dollars * 100 > `u64::MAX`).
    /// Use `checked_from_dollars` for non-panicking conversion.
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn from_dollars(dollars: u64) -> Self {
        match dollars.checked_mul(100) {
            Some(cents) => Self(cents),
            None => panic!("Money::from_dollars overflow"),
        }
    }

    /// Creates a `Money` value from whole dollars with overflow checking
    #[must_use]
    pub const fn checked_from_dollars(dollars: u64) -> Option<Self> {
        match dollars.checked_mul(100) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Leniently parse a dollar amount typed into a filter field
    ///
    /// Unparsable or negative input yields `None`, which callers treat as
    /// "no constraint" rather than an error.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn parse_dollars(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let value: f64 = trimmed.parse().ok()?;
        // Bounded well below u64::MAX cents, so the cast cannot truncate
        if !value.is_finite() || value < 0.0 || value > 1e15 {
            return None;
        }

        Some(Self((value * 100.0).round() as u64))
    }

    /// Returns the amount in cents
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the amount in whole dollars (rounded down)
    #[must_use]
    pub const fn dollars(&self) -> u64 {
        self.0 / 100
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two money amounts with overflow checking
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Adds two money amounts, saturating at the maximum representable value
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Multiplies money by a quantity, saturating at the maximum representable value
    #[must_use]
    pub const fn saturating_mul(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.0 % 100)
    }
}

// ============================================================================
// Time Value Object
// ============================================================================

/// Wrapper for event date with ordering and comparison
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventDate(DateTime<Utc>);

impl EventDate {
    /// Creates a new `EventDate`
    #[must_use]
    pub const fn new(date: DateTime<Utc>) -> Self {
        Self(date)
    }

    /// Returns the inner `DateTime`
    #[must_use]
    pub const fn inner(&self) -> DateTime<Utc> {
        self.0
    }

    /// Leniently parse a date typed into a form or filter field
    ///
    /// Accepts RFC 3339, `YYYY-MM-DDTHH:MM` (datetime-local inputs), and
    /// bare `YYYY-MM-DD` dates (taken as midnight UTC). Unparsable input
    /// yields `None`, which filter callers treat as "no constraint".
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(Self(parsed.with_timezone(&Utc)));
        }

        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
            return Some(Self(parsed.and_utc()));
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|datetime| Self(datetime.and_utc()))
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M UTC"))
    }
}

// ============================================================================
// Entities
// ============================================================================

/// Lifecycle status of an event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    /// Authored but not yet published
    Draft,
    /// Visible and purchasable
    Published,
    /// Already happened
    Completed,
    /// Called off
    Cancelled,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Published => write!(f, "published"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A priced, capacity-bounded purchasable tier within an event
///
/// Invariant: `sold <= capacity`. The purchase operation enforces it; the
/// derivations in [`crate::inventory`] saturate rather than panic if an
/// upstream bug violates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketType {
    /// Unique identifier
    pub id: TicketTypeId,
    /// Tier name (e.g. "General Admission", "VIP")
    pub name: String,
    /// Unit price; zero means free
    pub price: Money,
    /// Maximum number of tickets in this tier
    pub capacity: u32,
    /// Number of tickets sold so far
    pub sold: u32,
    /// Optional tier description
    pub description: Option<String>,
}

impl TicketType {
    /// Creates a new unsold ticket type
    #[must_use]
    pub fn new(name: impl Into<String>, price: Money, capacity: u32) -> Self {
        Self {
            id: TicketTypeId::new(),
            name: name.into(),
            price,
            capacity,
            sold: 0,
            description: None,
        }
    }
}

/// One line of an event's agenda
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    /// Unique identifier
    pub id: AgendaItemId,
    /// Time label, free text (e.g. "09:00 AM"), not a real timestamp
    pub time: String,
    /// What happens at that time
    pub title: String,
    /// Optional speaker
    pub speaker: Option<String>,
    /// Optional description
    pub description: Option<String>,
}

impl AgendaItem {
    /// Creates a new agenda item with no speaker or description
    #[must_use]
    pub fn new(time: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: AgendaItemId::new(),
            time: time.into(),
            title: title.into(),
            speaker: None,
            description: None,
        }
    }
}

/// A schedulable happening with one or more purchasable ticket types
///
/// An event exclusively owns its ticket types and agenda items; nothing is
/// shared between events and nothing is ever deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier
    pub id: EventId,
    /// Event title
    pub title: String,
    /// Start timestamp
    pub date: EventDate,
    /// Venue or online link
    pub location: String,
    /// Full free-text description
    pub description: String,
    /// Optional short description for card views
    pub short_description: Option<String>,
    /// Cover image URL
    pub image_url: String,
    /// Purchasable tiers, in display order
    pub ticket_types: Vec<TicketType>,
    /// Lifecycle status
    pub status: EventStatus,
    /// Category tags, in display order
    pub tags: Vec<String>,
    /// Agenda, in display order
    pub agenda: Vec<AgendaItem>,
}

impl Event {
    /// Find a ticket type by id
    #[must_use]
    pub fn ticket_type(&self, id: &TicketTypeId) -> Option<&TicketType> {
        self.ticket_types.iter().find(|t| &t.id == id)
    }
}

// ============================================================================
// Filter Specification
// ============================================================================

/// The set of optional constraints applied to narrow the visible event collection
///
/// Every field is optional; absence means "no constraint". An all-absent
/// spec matches every event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Free-text query matched against title, description, and location
    pub query: Option<String>,
    /// Category that must appear in the event's tag list
    pub category: Option<String>,
    /// Lower price bound; matches events whose maximum ticket price reaches it
    pub min_price: Option<Money>,
    /// Upper price bound; matches events whose minimum ticket price fits it
    pub max_price: Option<Money>,
    /// Earliest admissible event date (inclusive)
    pub start_date: Option<EventDate>,
    /// Latest admissible event date (inclusive)
    pub end_date: Option<EventDate>,
}

impl FilterSpec {
    /// Build a spec from raw form inputs
    ///
    /// Lenient by design: empty strings and unparsable numbers or dates
    /// become absent constraints, keeping filtering total over all inputs.
    #[must_use]
    pub fn from_raw(
        query: &str,
        category: &str,
        min_price: &str,
        max_price: &str,
        start_date: &str,
        end_date: &str,
    ) -> Self {
        Self {
            query: non_empty(query),
            category: non_empty(category),
            min_price: Money::parse_dollars(min_price),
            max_price: Money::parse_dollars(max_price),
            start_date: EventDate::parse(start_date),
            end_date: EventDate::parse(end_date),
        }
    }

    /// Build a spec carrying only a free-text query
    #[must_use]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: non_empty(&query.into()),
            ..Self::default()
        }
    }

    /// True when no constraint is active
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.query.is_none()
            && self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

/// Normalize a raw form field: whitespace-only input means "absent"
fn non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ============================================================================
// Event Draft (create-event working copy)
// ============================================================================

/// Default cover image for newly authored events
const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1540575467063-178a50c2df87?auto=format&fit=crop&q=80";

/// Maximum length of the derived short description
const SHORT_DESCRIPTION_LEN: usize = 150;

/// Working copy edited in the create-event flow
///
/// Starts with a single free general-admission tier; ticket editing keeps
/// at least one tier so an event can never be authored without tickets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    /// Event title
    pub title: String,
    /// Start timestamp, once a valid date has been entered
    pub date: Option<EventDate>,
    /// Venue or online link
    pub location: String,
    /// Free-text notes handed to content generation
    pub notes: String,
    /// Full description (typed or generated)
    pub description: String,
    /// Short description derived from the full one
    pub short_description: Option<String>,
    /// Cover image URL
    pub image_url: String,
    /// Category tags
    pub tags: Vec<String>,
    /// Agenda
    pub agenda: Vec<AgendaItem>,
    /// Ticket tiers, never empty
    pub tickets: Vec<TicketType>,
}

impl EventDraft {
    /// Creates an empty draft with one free general-admission tier
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            date: None,
            location: String::new(),
            notes: String::new(),
            description: String::new(),
            short_description: None,
            image_url: DEFAULT_IMAGE_URL.to_string(),
            tags: Vec::new(),
            agenda: Vec::new(),
            tickets: vec![TicketType::new("General Admission", Money::ZERO, 100)],
        }
    }

    /// Append a ticket tier
    pub fn add_ticket(&mut self, ticket: TicketType) {
        self.tickets.push(ticket);
    }

    /// Remove a ticket tier, keeping at least one
    ///
    /// Returns false when the tier was not found or is the last one left.
    pub fn remove_ticket(&mut self, id: &TicketTypeId) -> bool {
        if self.tickets.len() <= 1 {
            return false;
        }
        let before = self.tickets.len();
        self.tickets.retain(|t| &t.id != id);
        self.tickets.len() < before
    }

    /// Merge generated content into the draft
    ///
    /// Replaces the description (deriving the short form), tags, and agenda.
    pub fn apply_content(&mut self, content: EventContent) {
        self.short_description = Some(shorten(&content.description));
        self.description = content.description;
        self.tags = content.tags;
        self.agenda = content
            .agenda
            .into_iter()
            .map(|entry| AgendaItem::new(entry.time, entry.activity))
            .collect();
    }

    /// Validate the draft before it becomes an event
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }
        if self.date.is_none() {
            return Err("Event date is required".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("Event location is required".to_string());
        }
        if self.tickets.is_empty() {
            return Err("At least one ticket type is required".to_string());
        }
        if self.tickets.iter().any(|t| t.capacity == 0) {
            return Err("Ticket capacity must be positive".to_string());
        }
        Ok(())
    }

    /// Build the event this draft describes
    ///
    /// Call [`EventDraft::validate`] first; `build` does not re-check.
    #[must_use]
    pub fn build(&self, id: EventId, date: EventDate) -> Event {
        Event {
            id,
            title: self.title.clone(),
            date,
            location: self.location.clone(),
            description: self.description.clone(),
            short_description: self.short_description.clone(),
            image_url: self.image_url.clone(),
            ticket_types: self.tickets.clone(),
            status: EventStatus::Draft,
            tags: self.tags.clone(),
            agenda: self.agenda.clone(),
        }
    }
}

impl Default for EventDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive a card-sized description from the full one
fn shorten(description: &str) -> String {
    if description.chars().count() <= SHORT_DESCRIPTION_LEN {
        description.to_string()
    } else {
        let mut short: String = description.chars().take(SHORT_DESCRIPTION_LEN).collect();
        short.push_str("...");
        short
    }
}
