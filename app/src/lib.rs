//! Event discovery and ticketing demo built on the EventHub architecture.
//!
//! Users browse a catalog of events, authenticate against a mocked auth
//! collaborator, author events with optional AI-assisted copy, and purchase
//! tickets against an in-memory collection mirrored to a key-value store.
//! There is no server and no real payment processing; the single store
//! runtime is the only writer.
//!
//! # Architecture
//!
//! ```text
//!               ┌─────────────────────────────┐
//!               │           Store             │
//!  commands ──▶ │  AppReducer (pure)          │ ──▶ effects
//!               │  AppState                   │       │
//!               └─────────────────────────────┘       │
//!                      ▲                              ▼
//!                      │            ┌─────────────────────────────┐
//!                  events (facts) ◀─│ auth · content · storage    │
//!                                   └─────────────────────────────┘
//! ```
//!
//! The pure pieces are ordinary functions over the data model:
//!
//! - [`inventory`]: capacity, registrations, revenue, and price display
//!   derived from an event's ticket types.
//! - [`query`]: the catalog filter - a stable subsequence selection over
//!   the collection for a [`types::FilterSpec`].
//! - [`stats`]: dashboard aggregates over the whole collection.
//!
//! The stateful shell is the reducer in [`reducer`], driven through
//! `eventhub_runtime::Store`, with collaborators injected via
//! [`reducer::AppEnvironment`].
//!
//! # Quick Start
//!
//! ```no_run
//! use eventhub_app::{AppAction, AppEnvironment, AppReducer, AppState, AppStorage};
//! use eventhub_auth::MockAuthService;
//! use eventhub_content::ContentService;
//! use eventhub_core::environment::SystemClock;
//! use eventhub_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = AppEnvironment::new(
//!     Arc::new(SystemClock),
//!     MockAuthService::shared(),
//!     ContentService::shared(),
//!     AppStorage::in_memory(),
//! );
//! let store = Store::new(AppState::new(), AppReducer::new(), env);
//!
//! // Load the persisted collection (or the seed dataset)
//! let mut handle = store.send(AppAction::Start).await?;
//! handle.wait().await;
//!
//! let count = store.state(|s| s.events.len()).await;
//! println!("{count} events loaded");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod inventory;
pub mod query;
pub mod reducer;
pub mod seed;
pub mod stats;
pub mod storage;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::Config;
pub use reducer::{AppAction, AppEnvironment, AppReducer, AppState};
pub use stats::DashboardStats;
pub use storage::{AppStorage, JsonFileStore, KeyValueStore, MemoryStore, StorageError};
pub use types::{
    AgendaItem, Event, EventDate, EventDraft, EventId, EventStatus, FilterSpec, Money, Role,
    TicketType, TicketTypeId, User, UserId,
};
pub use view::{NavTarget, ViewState};
