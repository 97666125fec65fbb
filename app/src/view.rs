//! View state machine.
//!
//! A single tagged union replaces the original open string-keyed view
//! switch. Transitions are explicit: navigation goes through
//! [`transition`], which gates the session-only screens, and the
//! authentication screens exit to the dashboard only via a successful
//! login or signup event handled by the reducer.

use crate::types::{EventDraft, EventId, FilterSpec};

/// The screen currently shown, with its screen-local state
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    /// Landing page with featured events
    Home,
    /// Login form; exits to `Dashboard` on success
    Login,
    /// Signup form; exits to `Dashboard` on success
    Signup,
    /// Organizer dashboard (requires a session)
    Dashboard,
    /// Browsable catalog with its active filter
    Events {
        /// Filter applied to the collection on every change
        filter: FilterSpec,
    },
    /// Create-event wizard with its working copy (requires a session)
    CreateEvent {
        /// The draft being edited
        draft: Box<EventDraft>,
    },
    /// Detail page for one event; an unknown id renders a not-found
    /// placeholder rather than failing
    EventDetails {
        /// The selected event
        event_id: EventId,
    },
}

impl ViewState {
    /// Short name for logging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Dashboard => "dashboard",
            Self::Events { .. } => "events",
            Self::CreateEvent { .. } => "create_event",
            Self::EventDetails { .. } => "event_details",
        }
    }

    /// True for screens only reachable with an active session
    #[must_use]
    pub const fn requires_session(&self) -> bool {
        matches!(self, Self::Dashboard | Self::CreateEvent { .. })
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Home
    }
}

/// Navigation targets exposed to the UI
///
/// Screens with payloads (event details) are entered through dedicated
/// commands instead, so navigation stays payload-free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Landing page
    Home,
    /// Login form
    Login,
    /// Signup form
    Signup,
    /// Organizer dashboard
    Dashboard,
    /// Event catalog
    Events,
    /// Create-event wizard
    CreateEvent,
}

/// Resolve a navigation request against the session state
///
/// Session-gated targets redirect to the login screen when no session is
/// active; the auth screens bounce an already-authenticated user straight
/// to the dashboard.
#[must_use]
pub fn transition(target: NavTarget, authenticated: bool) -> ViewState {
    match target {
        NavTarget::Home => ViewState::Home,
        NavTarget::Login | NavTarget::Signup if authenticated => ViewState::Dashboard,
        NavTarget::Login => ViewState::Login,
        NavTarget::Signup => ViewState::Signup,
        NavTarget::Dashboard | NavTarget::CreateEvent if !authenticated => ViewState::Login,
        NavTarget::Dashboard => ViewState::Dashboard,
        NavTarget::Events => ViewState::Events {
            filter: FilterSpec::default(),
        },
        NavTarget::CreateEvent => ViewState::CreateEvent {
            draft: Box::new(EventDraft::new()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_navigation_to_gated_screens_redirects_to_login() {
        assert_eq!(transition(NavTarget::Dashboard, false), ViewState::Login);
        assert_eq!(transition(NavTarget::CreateEvent, false), ViewState::Login);
    }

    #[test]
    fn authenticated_navigation_reaches_gated_screens() {
        assert_eq!(transition(NavTarget::Dashboard, true), ViewState::Dashboard);
        assert!(matches!(
            transition(NavTarget::CreateEvent, true),
            ViewState::CreateEvent { .. }
        ));
    }

    #[test]
    fn auth_screens_bounce_logged_in_users_to_dashboard() {
        assert_eq!(transition(NavTarget::Login, true), ViewState::Dashboard);
        assert_eq!(transition(NavTarget::Signup, true), ViewState::Dashboard);
    }

    #[test]
    fn auth_screens_toggle_when_anonymous() {
        assert_eq!(transition(NavTarget::Login, false), ViewState::Login);
        assert_eq!(transition(NavTarget::Signup, false), ViewState::Signup);
    }

    #[test]
    fn events_navigation_starts_unfiltered() {
        let view = transition(NavTarget::Events, false);
        assert!(matches!(
            view,
            ViewState::Events { ref filter } if filter.is_unconstrained()
        ));
    }

    #[test]
    fn session_requirements() {
        assert!(ViewState::Dashboard.requires_session());
        assert!(!ViewState::Home.requires_session());
        assert!(
            !ViewState::Events {
                filter: FilterSpec::default()
            }
            .requires_session()
        );
    }
}
