//! Mocked authentication collaborator for the EventHub demo.
//!
//! This crate provides a simplified authentication interface compatible with
//! session-based identity providers. In production, this would be replaced
//! with a real identity service; here login and signup simulate network
//! latency and derive user records locally.
//!
//! The mock has one deliberate failure hook: login fails whenever the email
//! contains the substring `"error"`. This is a test hook, not validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random `UserId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `UserId` derived deterministically from an email address
    ///
    /// Logging in twice with the same email yields the same identity.
    #[must_use]
    pub fn derived_from_email(email: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, email.as_bytes()))
    }

    /// Create a `UserId` from a `Uuid`
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

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role attached to a user record
///
/// Used only for view gating, never for authorization logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Administrative user
    Admin,
    /// Regular user
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
        }
    }
}

/// An authenticated user record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Role for view gating
    pub role: Role,
}

/// Errors produced by the authentication collaborator
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The supplied credentials were rejected
    ///
    /// User-facing and recoverable; the user may retry.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Result alias for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Boxed future returned by [`AuthService`] operations
pub type AuthFuture<T> = Pin<Box<dyn Future<Output = AuthResult<T>> + Send>>;

/// Authentication service abstraction
///
/// Both operations are plain request/await calls with no cancellation,
/// retry, or timeout logic.
pub trait AuthService: Send + Sync {
    /// Authenticate an existing user
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the credentials are
    /// rejected.
    fn login(&self, email: &str, password: &str) -> AuthFuture<User>;

    /// Register a new user
    ///
    /// # Errors
    ///
    /// Returns an error when registration is rejected. The mock never does.
    fn signup(&self, name: &str, email: &str, password: &str) -> AuthFuture<User>;
}

/// Mock authentication service
///
/// Simulates network latency, then derives a user record locally:
///
/// - `login` names the user after the email local part and derives a
///   stable id from the email, so repeated logins agree.
/// - `signup` uses the supplied name and a fresh random id.
/// - `login` fails when the email contains `"error"` (test hook).
#[derive(Clone, Debug)]
pub struct MockAuthService {
    latency: Duration,
}

impl MockAuthService {
    /// Default simulated network latency
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

    /// Creates a mock service with the default simulated latency
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latency: Self::DEFAULT_LATENCY,
        }
    }

    /// Creates a mock service with a custom simulated latency
    ///
    /// Tests pass `Duration::ZERO` to keep runs fast.
    #[must_use]
    pub const fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn AuthService> {
        Arc::new(Self::new())
    }

    /// Derive a display name from the email local part
    fn name_from_email(email: &str) -> String {
        email.split('@').next().unwrap_or(email).to_string()
    }
}

impl Default for MockAuthService {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthService for MockAuthService {
    fn login(&self, email: &str, _password: &str) -> AuthFuture<User> {
        let latency = self.latency;
        let email = email.to_string();

        Box::pin(async move {
            // Simulate network delay
            tokio::time::sleep(latency).await;

            if email.contains("error") {
                tracing::warn!(email = %email, "mock login rejected");
                return Err(AuthError::InvalidCredentials);
            }

            let user = User {
                id: UserId::derived_from_email(&email),
                name: MockAuthService::name_from_email(&email),
                email,
                role: Role::User,
            };

            tracing::info!(user_id = %user.id, "mock login succeeded");
            Ok(user)
        })
    }

    fn signup(&self, name: &str, email: &str, _password: &str) -> AuthFuture<User> {
        let latency = self.latency;
        let name = name.to_string();
        let email = email.to_string();

        Box::pin(async move {
            tokio::time::sleep(latency).await;

            let user = User {
                id: UserId::new(),
                name,
                email,
                role: Role::User,
            };

            tracing::info!(user_id = %user.id, "mock signup succeeded");
            Ok(user)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service() -> MockAuthService {
        MockAuthService::with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn login_names_user_from_email_local_part() {
        let user = service().login("alice@example.com", "hunter2").await.unwrap();

        assert_eq!(user.name, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, Role::User);
    }

    #[tokio::test]
    async fn login_is_stable_across_calls() {
        let first = service().login("bob@example.com", "pw").await.unwrap();
        let second = service().login("bob@example.com", "other").await.unwrap();

        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn login_fails_for_error_emails() {
        let result = service().login("error@example.com", "pw").await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn signup_uses_supplied_name_and_fresh_id() {
        let svc = service();
        let first = svc.signup("Carol", "carol@example.com", "pw").await.unwrap();
        let second = svc.signup("Carol", "carol@example.com", "pw").await.unwrap();

        assert_eq!(first.name, "Carol");
        assert_ne!(first.id, second.id);
    }
}
