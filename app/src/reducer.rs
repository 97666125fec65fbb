//! The app reducer: session, navigation, catalog, and purchases.
//!
//! All state lives in [`AppState`] behind a single store; every mutation
//! produces effects for the imperative shell (persistence writes, the auth
//! and content-generation collaborators). Commands validate and apply;
//! events are facts applied to state, and arrive either inline from a
//! command or through the effect feedback loop.

use crate::query;
use crate::stats::DashboardStats;
use crate::storage::AppStorage;
use crate::types::{Event, EventDraft, EventId, FilterSpec, TicketTypeId, User};
use crate::view::{self, NavTarget, ViewState};
use chrono::{DateTime, Utc};
use eventhub_auth::AuthService;
use eventhub_content::{ContentProvider, ContentRequest, EventContent};
use eventhub_core::{SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec};
use eventhub_macros::Action;
use std::sync::Arc;

/// Environment dependencies for the app reducer
#[derive(Clone)]
pub struct AppEnvironment {
    /// Clock for time-dependent derivations (dashboard stats)
    pub clock: Arc<dyn Clock>,
    /// Authentication collaborator
    pub auth: Arc<dyn AuthService>,
    /// Content-generation collaborator
    pub content: Arc<dyn ContentProvider>,
    /// Persistence facade
    pub storage: AppStorage,
}

impl AppEnvironment {
    /// Creates a new `AppEnvironment`
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        auth: Arc<dyn AuthService>,
        content: Arc<dyn ContentProvider>,
        storage: AppStorage,
    ) -> Self {
        Self {
            clock,
            auth,
            content,
            storage,
        }
    }
}

/// State of the whole app: session, current view, and the event collection
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// The authenticated user, if any
    pub session: Option<User>,
    /// The screen currently shown
    pub view: ViewState,
    /// The full event collection, in display order
    pub events: Vec<Event>,
    /// Last user-facing error (if any)
    pub last_error: Option<String>,
}

impl AppState {
    /// Creates the initial app state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a user is logged in
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Find an event by id
    #[must_use]
    pub fn find_event(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// The event selected on the details view
    ///
    /// `None` either when no details view is open or when the id no longer
    /// resolves; the latter renders as a not-found placeholder.
    #[must_use]
    pub fn selected_event(&self) -> Option<&Event> {
        match &self.view {
            ViewState::EventDetails { event_id } => self.find_event(event_id),
            _ => None,
        }
    }

    /// The events visible on the current view
    ///
    /// On the catalog view this applies the active filter; elsewhere it is
    /// the full collection.
    #[must_use]
    pub fn visible_events(&self) -> Vec<&Event> {
        match &self.view {
            ViewState::Events { filter } => query::filter_events(&self.events, filter),
            _ => self.events.iter().collect(),
        }
    }

    /// Dashboard statistics over the full collection
    #[must_use]
    pub fn dashboard_stats(&self, now: DateTime<Utc>) -> DashboardStats {
        DashboardStats::compute(&self.events, now)
    }
}

/// Actions processed by the app reducer
///
/// Commands express intent and are validated; events record facts and are
/// applied to state.
#[derive(Action, Clone, Debug)]
pub enum AppAction {
    // ========== Commands ==========
    /// Command: Load persisted state at startup
    #[command]
    Start,

    /// Command: Navigate to another screen
    #[command]
    Navigate {
        /// Where to go
        target: NavTarget,
    },

    /// Command: Authenticate an existing user
    #[command]
    Login {
        /// Email address
        email: String,
        /// Password (ignored by the mock)
        password: String,
    },

    /// Command: Register a new user
    #[command]
    Signup {
        /// Display name
        name: String,
        /// Email address
        email: String,
        /// Password (ignored by the mock)
        password: String,
    },

    /// Command: End the session
    #[command]
    Logout,

    /// Command: Open an event's detail view
    #[command]
    OpenEvent {
        /// The event to show
        event_id: EventId,
    },

    /// Command: Replace the catalog filter
    #[command]
    SetFilter {
        /// The new filter
        filter: FilterSpec,
    },

    /// Command: Drop every filter constraint
    #[command]
    ClearFilters,

    /// Command: Replace the create-event working copy
    #[command]
    EditDraft {
        /// The edited draft
        draft: Box<EventDraft>,
    },

    /// Command: Generate description, tags, and agenda for the draft
    #[command]
    GenerateContent,

    /// Command: Turn the draft into an event
    #[command]
    SubmitEvent {
        /// Identity for the new event
        event_id: EventId,
    },

    /// Command: Buy one ticket of the given type
    #[command]
    PurchaseTicket {
        /// The event purchased against
        event_id: EventId,
        /// The tier purchased
        ticket_type_id: TicketTypeId,
    },

    // ========== Events ==========
    /// Event: The persisted collection was loaded
    #[event]
    EventsLoaded {
        /// The loaded collection
        events: Vec<Event>,
    },

    /// Event: A persisted session was restored at startup
    #[event]
    SessionRestored {
        /// The restored user
        user: User,
    },

    /// Event: Authentication succeeded
    #[event]
    LoggedIn {
        /// The authenticated user
        user: User,
    },

    /// Event: Authentication failed (recoverable, user may retry)
    #[event]
    AuthFailed {
        /// User-facing message
        error: String,
    },

    /// Event: The session ended
    #[event]
    LoggedOut,

    /// Event: Content generation finished
    #[event]
    ContentGenerated {
        /// The generated copy
        content: EventContent,
    },

    /// Event: A new event joined the collection
    #[event]
    EventCreated {
        /// The new event
        event: Event,
    },

    /// Event: One ticket was sold
    #[event]
    TicketPurchased {
        /// The event purchased against
        event_id: EventId,
        /// The tier purchased
        ticket_type_id: TicketTypeId,
    },

    /// Event: A purchase was refused
    #[event]
    PurchaseRejected {
        /// User-facing reason
        reason: String,
    },

    /// Event: Command validation failed
    #[event]
    ValidationFailed {
        /// User-facing message
        error: String,
    },
}

/// Reducer for the app
#[derive(Clone, Debug, Default)]
pub struct AppReducer;

impl AppReducer {
    /// Creates a new `AppReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies an event to state
    #[allow(clippy::too_many_lines)]
    fn apply_event(state: &mut AppState, action: &AppAction) {
        match action {
            AppAction::EventsLoaded { events } => {
                state.events = events.clone();
                state.last_error = None;
            },
            AppAction::SessionRestored { user } => {
                state.session = Some(user.clone());
            },
            AppAction::LoggedIn { user } => {
                state.session = Some(user.clone());
                state.view = ViewState::Dashboard;
                state.last_error = None;
            },
            AppAction::AuthFailed { error } => {
                state.last_error = Some(error.clone());
            },
            AppAction::LoggedOut => {
                state.session = None;
                state.view = ViewState::Home;
                state.last_error = None;
            },
            AppAction::ContentGenerated { content } => {
                // Only meaningful while the user is still authoring
                if let ViewState::CreateEvent { draft } = &mut state.view {
                    draft.apply_content(content.clone());
                }
            },
            AppAction::EventCreated { event } => {
                state.events.push(event.clone());
                state.view = ViewState::Events {
                    filter: FilterSpec::default(),
                };
                state.last_error = None;
            },
            AppAction::TicketPurchased {
                event_id,
                ticket_type_id,
            } => {
                if let Some(event) = state.events.iter_mut().find(|e| &e.id == event_id) {
                    if let Some(ticket) = event
                        .ticket_types
                        .iter_mut()
                        .find(|t| &t.id == ticket_type_id)
                    {
                        // Guarded on replay too, keeping sold <= capacity
                        if ticket.sold < ticket.capacity {
                            ticket.sold += 1;
                        }
                    }
                }
                state.last_error = None;
            },
            AppAction::PurchaseRejected { reason } => {
                state.last_error = Some(reason.clone());
            },
            AppAction::ValidationFailed { error } => {
                state.last_error = Some(error.clone());
            },
            // Commands are not applied to state
            _ => {},
        }
    }

    /// Persistence effect: write the full collection back as one blob
    fn save_events_effect(env: &AppEnvironment, events: Vec<Event>) -> Effect<AppAction> {
        let storage = env.storage.clone();
        Effect::future(async move {
            if let Err(error) = storage.save_events(&events) {
                tracing::error!(%error, "failed to persist event collection");
            }
            None
        })
    }

    /// Persistence effect: write the session blob
    fn save_session_effect(env: &AppEnvironment, user: User) -> Effect<AppAction> {
        let storage = env.storage.clone();
        Effect::future(async move {
            if let Err(error) = storage.save_session(&user) {
                tracing::error!(%error, "failed to persist session");
            }
            None
        })
    }

    /// Persistence effect: drop the session blob
    fn clear_session_effect(env: &AppEnvironment) -> Effect<AppAction> {
        let storage = env.storage.clone();
        Effect::future(async move {
            if let Err(error) = storage.clear_session() {
                tracing::error!(%error, "failed to clear session");
            }
            None
        })
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    #[allow(clippy::too_many_lines)]
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        tracing::debug!(action = action.label(), view = state.view.name(), "reducing");

        match action {
            // ========== Commands ==========
            AppAction::Start => {
                tracing::info!(at = %env.clock.now(), "loading persisted state");
                let events_storage = env.storage.clone();
                let session_storage = env.storage.clone();

                smallvec![
                    Effect::future(async move {
                        Some(AppAction::EventsLoaded {
                            events: events_storage.load_events(),
                        })
                    }),
                    Effect::future(async move {
                        session_storage
                            .load_session()
                            .map(|user| AppAction::SessionRestored { user })
                    }),
                ]
            },

            AppAction::Navigate { target } => {
                state.view = view::transition(target, state.is_authenticated());
                SmallVec::new()
            },

            AppAction::Login { email, password } => {
                let auth = Arc::clone(&env.auth);
                smallvec![Effect::future(async move {
                    match auth.login(&email, &password).await {
                        Ok(user) => Some(AppAction::LoggedIn { user }),
                        Err(error) => Some(AppAction::AuthFailed {
                            error: error.to_string(),
                        }),
                    }
                })]
            },

            AppAction::Signup {
                name,
                email,
                password,
            } => {
                let auth = Arc::clone(&env.auth);
                smallvec![Effect::future(async move {
                    match auth.signup(&name, &email, &password).await {
                        Ok(user) => Some(AppAction::LoggedIn { user }),
                        Err(error) => Some(AppAction::AuthFailed {
                            error: error.to_string(),
                        }),
                    }
                })]
            },

            AppAction::Logout => self.reduce(state, AppAction::LoggedOut, env),

            AppAction::OpenEvent { event_id } => {
                state.view = ViewState::EventDetails { event_id };
                SmallVec::new()
            },

            AppAction::SetFilter { filter } => {
                if matches!(state.view, ViewState::Events { .. }) {
                    state.view = ViewState::Events { filter };
                }
                SmallVec::new()
            },

            AppAction::ClearFilters => {
                if matches!(state.view, ViewState::Events { .. }) {
                    state.view = ViewState::Events {
                        filter: FilterSpec::default(),
                    };
                }
                SmallVec::new()
            },

            AppAction::EditDraft { draft } => {
                if matches!(state.view, ViewState::CreateEvent { .. }) {
                    state.view = ViewState::CreateEvent { draft };
                }
                SmallVec::new()
            },

            AppAction::GenerateContent => {
                let ViewState::CreateEvent { draft } = &state.view else {
                    return SmallVec::new();
                };

                if draft.title.trim().is_empty() {
                    return self.reduce(
                        state,
                        AppAction::ValidationFailed {
                            error: "Add a title before generating content".to_string(),
                        },
                        env,
                    );
                }

                let request = ContentRequest::new(
                    draft.title.clone(),
                    draft.notes.clone(),
                    draft.date.map(|d| d.to_string()).unwrap_or_default(),
                    draft.location.clone(),
                );

                let content = Arc::clone(&env.content);
                smallvec![Effect::future(async move {
                    let generated = content.generate(request).await;
                    Some(AppAction::ContentGenerated { content: generated })
                })]
            },

            AppAction::SubmitEvent { event_id } => {
                if state.session.is_none() {
                    state.view = ViewState::Login;
                    return SmallVec::new();
                }

                let ViewState::CreateEvent { draft } = &state.view else {
                    return SmallVec::new();
                };

                let built = match draft.validate() {
                    Err(error) => Err(error),
                    Ok(()) => draft
                        .date
                        .ok_or_else(|| "Event date is required".to_string())
                        .map(|date| draft.build(event_id, date)),
                };

                match built {
                    Ok(event) => self.reduce(state, AppAction::EventCreated { event }, env),
                    Err(error) => {
                        self.reduce(state, AppAction::ValidationFailed { error }, env)
                    },
                }
            },

            AppAction::PurchaseTicket {
                event_id,
                ticket_type_id,
            } => {
                // An anonymous buyer is sent to the login screen instead
                if state.session.is_none() {
                    state.view = ViewState::Login;
                    return SmallVec::new();
                }

                let refusal = match state.find_event(&event_id) {
                    None => Some("Event not found".to_string()),
                    Some(event) => match event.ticket_type(&ticket_type_id) {
                        None => Some("Ticket type not found".to_string()),
                        Some(ticket) if ticket.is_sold_out() => {
                            Some(format!("{} is sold out", ticket.name))
                        },
                        Some(_) => None,
                    },
                };

                match refusal {
                    Some(reason) => {
                        self.reduce(state, AppAction::PurchaseRejected { reason }, env)
                    },
                    None => self.reduce(
                        state,
                        AppAction::TicketPurchased {
                            event_id,
                            ticket_type_id,
                        },
                        env,
                    ),
                }
            },

            // ========== Events ==========
            AppAction::LoggedIn { ref user } => {
                let user = user.clone();
                Self::apply_event(state, &action);
                smallvec![Self::save_session_effect(env, user)]
            },

            AppAction::LoggedOut => {
                Self::apply_event(state, &action);
                smallvec![Self::clear_session_effect(env)]
            },

            AppAction::TicketPurchased { .. } | AppAction::EventCreated { .. } => {
                Self::apply_event(state, &action);
                smallvec![Self::save_events_effect(env, state.events.clone())]
            },

            AppAction::EventsLoaded { .. }
            | AppAction::SessionRestored { .. }
            | AppAction::AuthFailed { .. }
            | AppAction::ContentGenerated { .. }
            | AppAction::PurchaseRejected { .. }
            | AppAction::ValidationFailed { .. } => {
                Self::apply_event(state, &action);
                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::types::Role;
    use eventhub_auth::{MockAuthService, UserId};
    use eventhub_content::ContentService;
    use eventhub_testing::{ReducerTest, assertions, test_clock};
    use std::time::Duration;

    fn test_env() -> AppEnvironment {
        AppEnvironment::new(
            Arc::new(test_clock()),
            Arc::new(MockAuthService::with_latency(Duration::ZERO)),
            Arc::new(ContentService::local()),
            AppStorage::in_memory(),
        )
    }

    fn test_user() -> User {
        User {
            id: UserId::new(),
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role: Role::User,
        }
    }

    fn seeded_state() -> AppState {
        AppState {
            events: seed::initial_events(),
            ..AppState::default()
        }
    }

    fn seeded_session_state() -> AppState {
        AppState {
            session: Some(test_user()),
            ..seeded_state()
        }
    }

    #[test]
    fn start_loads_events_and_session() {
        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(AppState::new())
            .when_action(AppAction::Start)
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 2);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn events_loaded_replaces_collection() {
        let expected = seed::initial_events();

        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(AppState::new())
            .when_action(AppAction::EventsLoaded {
                events: expected.clone(),
            })
            .then_state(move |state| {
                assert_eq!(state.events, expected);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn login_command_produces_auth_effect() {
        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(AppState::new())
            .when_action(AppAction::Login {
                email: "alice@example.com".to_string(),
                password: "pw".to_string(),
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn logged_in_opens_dashboard_and_persists_session() {
        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(AppState::new())
            .when_action(AppAction::LoggedIn { user: test_user() })
            .then_state(|state| {
                assert!(state.is_authenticated());
                assert_eq!(state.view, ViewState::Dashboard);
                assert!(state.last_error.is_none());
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn auth_failure_keeps_login_view_and_surfaces_error() {
        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(AppState {
                view: ViewState::Login,
                ..AppState::new()
            })
            .when_action(AppAction::AuthFailed {
                error: "Invalid credentials".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.view, ViewState::Login);
                assert_eq!(state.last_error.as_deref(), Some("Invalid credentials"));
            })
            .run();
    }

    #[test]
    fn logout_lands_on_home() {
        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(seeded_session_state())
            .when_action(AppAction::Logout)
            .then_state(|state| {
                assert!(!state.is_authenticated());
                assert_eq!(state.view, ViewState::Home);
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn purchase_without_session_redirects_to_login() {
        let state = seeded_state();
        let event_id = state.events[0].id;
        let ticket_type_id = state.events[0].ticket_types[1].id;

        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(AppAction::PurchaseTicket {
                event_id,
                ticket_type_id,
            })
            .then_state(|state| {
                assert_eq!(state.view, ViewState::Login);
                // Nothing was sold
                assert_eq!(state.events[0].ticket_types[1].sold, 150);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn purchase_increments_exactly_one_sold_counter() {
        let state = seeded_session_state();
        let before = state.events.clone();
        let event_id = before[0].id;
        let ticket_type_id = before[0].ticket_types[1].id;

        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(AppAction::PurchaseTicket {
                event_id,
                ticket_type_id,
            })
            .then_state(move |state| {
                // The purchased tier gained exactly one sale
                assert_eq!(state.events[0].ticket_types[1].sold, 151);

                // Every other tier and every other event is untouched
                let mut expected = before.clone();
                expected[0].ticket_types[1].sold += 1;
                assert_eq!(state.events, expected);
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn purchase_of_sold_out_tier_is_rejected() {
        let state = seeded_session_state();
        let event_id = state.events[0].id;
        // Early Bird is seeded fully sold
        let sold_out_id = state.events[0].ticket_types[0].id;

        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(AppAction::PurchaseTicket {
                event_id,
                ticket_type_id: sold_out_id,
            })
            .then_state(|state| {
                assert_eq!(state.events[0].ticket_types[0].sold, 100);
                assert_eq!(
                    state.last_error.as_deref(),
                    Some("Early Bird is sold out")
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn purchase_against_unknown_event_is_rejected() {
        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(seeded_session_state())
            .when_action(AppAction::PurchaseTicket {
                event_id: EventId::new(),
                ticket_type_id: TicketTypeId::new(),
            })
            .then_state(|state| {
                assert_eq!(state.last_error.as_deref(), Some("Event not found"));
            })
            .run();
    }

    #[test]
    fn navigation_to_gated_screen_redirects_anonymous_users() {
        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(AppState::new())
            .when_action(AppAction::Navigate {
                target: NavTarget::CreateEvent,
            })
            .then_state(|state| {
                assert_eq!(state.view, ViewState::Login);
            })
            .run();
    }

    #[test]
    fn set_filter_applies_only_on_catalog_view() {
        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(seeded_state())
            .when_action(AppAction::Navigate {
                target: NavTarget::Events,
            })
            .when_action(AppAction::SetFilter {
                filter: FilterSpec::with_query("jazz"),
            })
            .then_state(|state| {
                assert!(matches!(
                    &state.view,
                    ViewState::Events { filter } if filter.query.as_deref() == Some("jazz")
                ));
            })
            .run();
    }

    #[test]
    fn submit_event_appends_and_returns_to_catalog() {
        let mut draft = EventDraft::new();
        draft.title = "Rust Meetup".to_string();
        draft.date = crate::types::EventDate::parse("2026-09-01");
        draft.location = "Berlin".to_string();

        let mut state = seeded_session_state();
        state.view = ViewState::CreateEvent {
            draft: Box::new(draft),
        };

        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(AppAction::SubmitEvent {
                event_id: EventId::new(),
            })
            .then_state(|state| {
                assert_eq!(state.events.len(), 4);
                assert_eq!(state.events[3].title, "Rust Meetup");
                assert!(matches!(state.view, ViewState::Events { .. }));
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn submit_of_invalid_draft_surfaces_validation_error() {
        let mut state = seeded_session_state();
        state.view = ViewState::CreateEvent {
            draft: Box::new(EventDraft::new()),
        };

        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(AppAction::SubmitEvent {
                event_id: EventId::new(),
            })
            .then_state(|state| {
                assert_eq!(state.events.len(), 3);
                assert_eq!(
                    state.last_error.as_deref(),
                    Some("Event title cannot be empty")
                );
                assert!(matches!(state.view, ViewState::CreateEvent { .. }));
            })
            .run();
    }

    #[test]
    fn generated_content_lands_in_the_draft() {
        let mut draft = EventDraft::new();
        draft.title = "Tech Days".to_string();

        let mut state = seeded_session_state();
        state.view = ViewState::CreateEvent {
            draft: Box::new(draft),
        };

        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(AppAction::ContentGenerated {
                content: EventContent {
                    description: "A deep dive.".to_string(),
                    tags: vec!["Technology".to_string()],
                    agenda: vec![],
                },
            })
            .then_state(|state| {
                let ViewState::CreateEvent { draft } = &state.view else {
                    panic!("expected create view");
                };
                assert_eq!(draft.description, "A deep dive.");
                assert_eq!(draft.tags, vec!["Technology".to_string()]);
            })
            .run();
    }

    #[test]
    fn generate_content_requires_a_title() {
        let mut state = seeded_session_state();
        state.view = ViewState::CreateEvent {
            draft: Box::new(EventDraft::new()),
        };

        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(AppAction::GenerateContent)
            .then_state(|state| {
                assert!(state.last_error.is_some());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn open_event_with_unknown_id_renders_not_found() {
        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(seeded_state())
            .when_action(AppAction::OpenEvent {
                event_id: EventId::new(),
            })
            .then_state(|state| {
                assert!(matches!(state.view, ViewState::EventDetails { .. }));
                assert!(state.selected_event().is_none());
            })
            .run();
    }
}
