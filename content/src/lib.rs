//! Event content generation collaborator for the EventHub demo.
//!
//! Given the facts a host typed into the create-event form (title, notes,
//! date, location), this crate produces marketing copy for the event: a
//! description, category tags, and an agenda.
//!
//! Two generators exist behind the [`ContentProvider`] trait:
//!
//! - [`GenerationClient`]: calls an external text-generation API.
//! - [`LocalGenerator`]: a deterministic template generator keyed off
//!   keyword heuristics in the title and notes, used whenever no API
//!   credential is configured.
//!
//! [`ContentService`] wraps both and never fails: an API error is recovered
//! by returning minimal placeholder content rather than propagating.

pub mod client;
pub mod error;
pub mod local;
pub mod types;

pub use client::GenerationClient;
pub use error::ContentError;
pub use local::LocalGenerator;
pub use types::{AgendaEntry, ContentRequest, EventContent};

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future returned by [`ContentProvider::generate`]
pub type ContentFuture = Pin<Box<dyn Future<Output = EventContent> + Send>>;

/// Content generation abstraction injected into reducer environments
///
/// Generation is total: implementations recover from failures internally
/// and always return non-empty content.
pub trait ContentProvider: Send + Sync {
    /// Generate event content for the given request
    fn generate(&self, request: ContentRequest) -> ContentFuture;
}

/// Minimal non-empty content returned when the external call fails
#[must_use]
pub fn fallback_content() -> EventContent {
    EventContent {
        description: "Join us for this exciting event! Detailed description coming soon."
            .to_string(),
        tags: vec!["Event".to_string(), "Gathering".to_string()],
        agenda: Vec::new(),
    }
}

/// Content service selecting between the API client and the local generator
///
/// The API backend is used when a credential is configured; otherwise the
/// service runs in mock mode on the local generator. API failures degrade
/// to [`fallback_content`] and are logged, never surfaced.
#[derive(Clone, Debug)]
pub struct ContentService {
    backend: Backend,
}

#[derive(Clone, Debug)]
enum Backend {
    Api(GenerationClient),
    Local(LocalGenerator),
}

impl ContentService {
    /// Create a service from the environment
    ///
    /// Uses the API client when `ANTHROPIC_API_KEY` is set, otherwise the
    /// local generator.
    #[must_use]
    pub fn from_env() -> Self {
        GenerationClient::from_env().map_or_else(
            |_| {
                tracing::warn!("content API key not found, running in mock mode");
                Self::local()
            },
            Self::with_client,
        )
    }

    /// Create a service backed by the local generator only
    #[must_use]
    pub const fn local() -> Self {
        Self {
            backend: Backend::Local(LocalGenerator::new()),
        }
    }

    /// Create a service backed by the given API client
    #[must_use]
    pub fn with_client(client: GenerationClient) -> Self {
        Self {
            backend: Backend::Api(client),
        }
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn ContentProvider> {
        Arc::new(Self::from_env())
    }
}

impl ContentProvider for ContentService {
    fn generate(&self, request: ContentRequest) -> ContentFuture {
        let backend = self.backend.clone();

        Box::pin(async move {
            match backend {
                Backend::Local(generator) => generator.generate(&request),
                Backend::Api(client) => match client.generate(&request).await {
                    Ok(content) => content,
                    Err(error) => {
                        tracing::error!(%error, "content generation failed, using fallback");
                        fallback_content()
                    },
                },
            }
        })
    }
}
