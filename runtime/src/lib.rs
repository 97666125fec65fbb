//! # EventHub Runtime
//!
//! Runtime implementation for the EventHub architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Effect Executor**: Executes effect descriptions and feeds actions back to reducers
//! - **`EffectHandle`**: Allows waiting for an action's effect cascade to complete
//!
//! ## Example
//!
//! ```ignore
//! use eventhub_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! let handle = store.send(Action::DoSomething).await?;
//! handle.wait().await;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use eventhub_core::{effect::Effect, reducer::Reducer};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, broadcast, watch};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after shutdown initiated.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete
        ///
        /// Some effects were still running when the timeout elapsed.
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),

        /// Timeout waiting for terminal action
        ///
        /// Returned by `send_and_wait_for` when the timeout expires before
        /// a matching action is received.
        #[error("Timeout waiting for action")]
        Timeout,

        /// Action broadcast channel closed
        ///
        /// The action broadcast channel was closed, typically because the
        /// store is shutting down.
        #[error("Action broadcast channel closed")]
        ChannelClosed,
    }
}

pub use error::StoreError;

/// Handle for tracking effect completion
///
/// Returned by [`Store::send()`] to allow waiting for effects to complete.
/// Tracking is cascading: actions fed back by effects are processed before
/// the handle resolves, so waiting on the handle observes the full
/// consequence of the original action.
///
/// # Example
///
/// ```ignore
/// let mut handle = store.send(Action::Start).await?;
/// handle.wait_with_timeout(Duration::from_secs(5)).await?;
/// // All effects from Action::Start are now complete
/// ```
#[derive(Clone)]
pub struct EffectHandle {
    effects: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    /// Create a new effect handle together with its internal tracking half
    fn new(pending: Arc<AtomicUsize>) -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = watch::channel(());

        let handle = Self {
            effects: Arc::clone(&counter),
            completion: rx,
        };

        let tracking = EffectTracking {
            counter,
            notifier: Arc::new(tx),
            pending,
        };

        (handle, tracking)
    }

    /// Create a handle that's already complete
    ///
    /// Useful for initialization in loops where you need a `last_handle`.
    #[must_use]
    pub fn completed() -> Self {
        let (tx, rx) = watch::channel(());
        let _ = tx.send(());

        Self {
            effects: Arc::new(AtomicUsize::new(0)),
            completion: rx,
        }
    }

    /// Wait for all effects to complete
    ///
    /// Blocks until the effect counter reaches zero.
    pub async fn wait(&mut self) {
        while self.effects.load(Ordering::SeqCst) > 0 {
            let _ = self.completion.changed().await;
        }
    }

    /// Wait for all effects to complete with a timeout
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if the timeout expires before all
    /// effects complete.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), StoreError> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| StoreError::Timeout)
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending_effects", &self.effects.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

/// Internal: Effect tracking context passed through effect execution
///
/// Carries the handle counter plus the store-wide pending counter used by
/// graceful shutdown.
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: Arc<watch::Sender<()>>,
    pending: Arc<AtomicUsize>,
}

impl EffectTracking {
    /// Increment the effect counters (effect started)
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
        self.pending.fetch_add(1, Ordering::SeqCst);
    }

    /// Decrement the effect counters (effect completed)
    fn decrement(&self) {
        self.pending.fetch_sub(1, Ordering::SeqCst);
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            // Counter reached zero, notify waiters
            let _ = self.notifier.send(());
        }
    }
}

impl Clone for EffectTracking {
    fn clone(&self) -> Self {
        Self {
            counter: Arc::clone(&self.counter),
            notifier: Arc::clone(&self.notifier),
            pending: Arc::clone(&self.pending),
        }
    }
}

/// Internal: RAII guard that decrements effect counters on drop
///
/// Ensures the effect counters are always decremented, even if the effect panics.
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Internal: shared store state referenced by the public handle and by
/// spawned effect tasks (for the action feedback loop).
struct Inner<S, A, E, R> {
    state: RwLock<S>,
    reducer: R,
    environment: E,
    shutdown: AtomicBool,
    pending_effects: Arc<AtomicUsize>,
    action_broadcast: broadcast::Sender<A>,
}

impl<S, A, E, R> Inner<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    A: Send + Clone + 'static,
    S: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Run the reducer for one action and start its effects
    ///
    /// Returned boxed so the effect feedback loop can re-enter it without
    /// creating an infinitely sized future type.
    fn process(
        self: Arc<Self>,
        action: A,
        tracking: EffectTracking,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        Box::pin(async move {
            let effects = {
                let mut state = self.state.write().await;
                tracing::trace!("acquired write lock on state");
                self.reducer.reduce(&mut state, action, &self.environment)
            };

            tracing::trace!("reducer completed, returned {} effects", effects.len());
            for effect in effects {
                Self::execute(Arc::clone(&self), effect, tracking.clone());
            }
        })
    }

    /// Feed an effect-produced action back into the reducer
    ///
    /// The action is applied to state first and broadcast to observers
    /// after, so an observer woken by the broadcast always sees the
    /// action's state change.
    fn feedback(
        self: Arc<Self>,
        action: A,
        tracking: EffectTracking,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        Box::pin(async move {
            let observed = action.clone();
            Self::process(Arc::clone(&self), action, tracking).await;
            // No receivers is fine; broadcast errors are not failures here
            let _ = self.action_broadcast.send(observed);
        })
    }

    /// Start executing a single effect
    ///
    /// Leaf effects run on spawned tasks; the tracking counters cover the
    /// task until its entire feedback cascade has been processed.
    fn execute(self: Arc<Self>, effect: Effect<A>, tracking: EffectTracking) {
        match effect {
            Effect::None => {},
            Effect::Parallel(effects) => {
                for effect in effects {
                    Self::execute(Arc::clone(&self), effect, tracking.clone());
                }
            },
            Effect::Sequential(effects) => {
                tracking.increment();
                tokio::spawn(async move {
                    let _guard = DecrementGuard(tracking.clone());
                    for effect in effects {
                        Self::run(Arc::clone(&self), effect, tracking.clone()).await;
                    }
                });
            },
            Effect::Delay { duration, action } => {
                tracking.increment();
                tokio::spawn(async move {
                    let _guard = DecrementGuard(tracking.clone());
                    tokio::time::sleep(duration).await;
                    self.feedback(*action, tracking).await;
                });
            },
            Effect::Future(future) => {
                tracking.increment();
                tokio::spawn(async move {
                    let _guard = DecrementGuard(tracking.clone());
                    if let Some(action) = future.await {
                        self.feedback(action, tracking).await;
                    }
                });
            },
        }
    }

    /// Await a single effect inline, preserving ordering
    ///
    /// Used for the elements of `Effect::Sequential`.
    fn run(
        self: Arc<Self>,
        effect: Effect<A>,
        tracking: EffectTracking,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        Box::pin(async move {
            match effect {
                Effect::None => {},
                Effect::Parallel(effects) | Effect::Sequential(effects) => {
                    for effect in effects {
                        Self::run(Arc::clone(&self), effect, tracking.clone()).await;
                    }
                },
                Effect::Delay { duration, action } => {
                    tokio::time::sleep(duration).await;
                    self.feedback(*action, tracking).await;
                },
                Effect::Future(future) => {
                    if let Some(action) = future.await {
                        self.feedback(action, tracking).await;
                    }
                },
            }
        })
    }
}

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent access)
/// 2. Reducer (business logic)
/// 3. Environment (injected dependencies)
/// 4. Effect execution (with feedback loop)
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Example
///
/// ```ignore
/// let store = Store::new(
///     AppState::default(),
///     AppReducer::new(),
///     production_environment(),
/// );
///
/// store.send(AppAction::Start).await?;
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    inner: Arc<Inner<S, A, E, R>>,
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    A: Send + Clone + 'static,
    S: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// Creates a Store with the default action broadcast capacity of 16
    /// (increase with [`Store::with_broadcast_capacity`]).
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_broadcast_capacity(initial_state, reducer, environment, 16)
    }

    /// Create a new Store with custom action broadcast capacity
    ///
    /// Use this constructor when observers may lag behind a burst of
    /// actions (e.g., a slow consumer of `subscribe_actions`).
    #[must_use]
    pub fn with_broadcast_capacity(
        initial_state: S,
        reducer: R,
        environment: E,
        capacity: usize,
    ) -> Self {
        let (action_broadcast, _) = broadcast::channel(capacity);

        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(initial_state),
                reducer,
                environment,
                shutdown: AtomicBool::new(false),
                pending_effects: Arc::new(AtomicUsize::new(0)),
                action_broadcast,
            }),
        }
    }

    /// Send an action to the store
    ///
    /// This is the primary way to interact with the store:
    /// 1. Acquires write lock on state
    /// 2. Calls reducer with (state, action, environment)
    /// 3. Executes returned effects asynchronously
    /// 4. Effects may produce more actions (feedback loop)
    ///
    /// `send()` returns after starting effect execution, not completion.
    /// Multiple concurrent `send()` calls serialize at the reducer level.
    /// Use the returned [`EffectHandle`] to wait for the effect cascade.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<EffectHandle, StoreError> {
        if self.inner.shutdown.load(Ordering::Acquire) {
            tracing::warn!("rejected action: store is shutting down");
            return Err(StoreError::ShutdownInProgress);
        }

        tracing::debug!("processing action");

        let (handle, tracking) = EffectHandle::new(Arc::clone(&self.inner.pending_effects));
        Inner::process(Arc::clone(&self.inner), action, tracking).await;

        Ok(handle)
    }

    /// Send an action and wait for a matching result action
    ///
    /// This method is designed for request-response flows: subscribe to the
    /// action broadcast BEFORE sending (avoids race conditions), send the
    /// initial action, then wait for an action matching the predicate.
    ///
    /// Only actions produced by effects are broadcast, not the initial action.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Timeout`]: Timeout expired before matching action received
    /// - [`StoreError::ChannelClosed`]: Action broadcast channel closed
    /// - [`StoreError::ShutdownInProgress`]: Store is shutting down
    ///
    /// # Example
    ///
    /// ```ignore
    /// let result = store.send_and_wait_for(
    ///     AppAction::Login { email, password },
    ///     |a| matches!(a, AppAction::LoggedIn { .. } | AppAction::AuthFailed { .. }),
    ///     Duration::from_secs(5),
    /// ).await?;
    /// ```
    pub async fn send_and_wait_for<F>(
        &self,
        action: A,
        predicate: F,
        timeout: Duration,
    ) -> Result<A, StoreError>
    where
        F: Fn(&A) -> bool,
    {
        // Subscribe BEFORE sending to avoid race condition
        let mut rx = self.inner.action_broadcast.subscribe();

        self.send(action).await?;

        tokio::time::timeout(timeout, async {
            loop {
                match rx.recv().await {
                    Ok(action) if predicate(&action) => return Ok(action),
                    Ok(_) => {}, // Not the action we want, keep waiting
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // Slow consumer, some actions were dropped.
                        // Keep waiting; the timeout catches a dropped terminal action.
                        tracing::warn!(skipped, "action observer lagged");
                    },
                    Err(broadcast::error::RecvError::Closed) => {
                        return Err(StoreError::ChannelClosed);
                    },
                }
            }
        })
        .await
        .map_err(|_| StoreError::Timeout)?
    }

    /// Subscribe to all actions produced by effects in this store
    ///
    /// Returns a receiver that gets a clone of every action fed back into
    /// the reducer. Initial actions sent via [`Store::send`] are not broadcast.
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
        self.inner.action_broadcast.subscribe()
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure to ensure the lock is released promptly:
    ///
    /// ```ignore
    /// let event_count = store.state(|s| s.events.len()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.inner.state.read().await;
        f(&state)
    }

    /// Initiate graceful shutdown of the store
    ///
    /// Sets the shutdown flag (rejecting new actions), then waits for
    /// pending effects to complete.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if the timeout expires before
    /// all pending effects complete.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        tracing::info!("initiating graceful shutdown");

        self.inner.shutdown.store(true, Ordering::Release);

        let start = tokio::time::Instant::now();
        let poll_interval = Duration::from_millis(100);

        loop {
            let pending = self.inner.pending_effects.load(Ordering::Acquire);

            if pending == 0 {
                tracing::info!("all effects completed, shutdown successful");
                return Ok(());
            }

            if start.elapsed() >= timeout {
                tracing::error!(pending_effects = pending, "shutdown timeout");
                return Err(StoreError::ShutdownTimeout(pending));
            }

            tokio::time::sleep(poll_interval).await;
        }
    }
}
