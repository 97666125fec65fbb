//! End-to-end flows through the Store runtime.

#![allow(clippy::unwrap_used)]

use eventhub_app::{
    AppAction, AppEnvironment, AppReducer, AppState, AppStorage, EventDraft, MemoryStore,
    ViewState,
};
use eventhub_auth::MockAuthService;
use eventhub_content::ContentService;
use eventhub_runtime::Store;
use eventhub_testing::test_clock;
use std::sync::Arc;
use std::time::Duration;

type AppStore = Store<AppState, AppAction, AppEnvironment, AppReducer>;

const WAIT: Duration = Duration::from_secs(5);

fn store_with_storage(storage: AppStorage) -> AppStore {
    let env = AppEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(MockAuthService::with_latency(Duration::ZERO)),
        Arc::new(ContentService::local()),
        storage,
    );
    Store::new(AppState::new(), AppReducer::new(), env)
}

fn app_store() -> AppStore {
    store_with_storage(AppStorage::in_memory())
}

async fn start(store: &AppStore) {
    let mut handle = store.send(AppAction::Start).await.unwrap();
    handle.wait().await;
}

/// Log in and wait for the whole cascade, including the session write
async fn login(store: &AppStore, email: &str) {
    let mut handle = store
        .send(AppAction::Login {
            email: email.to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap();
    handle.wait().await;
}

#[tokio::test]
async fn start_loads_seed_dataset() {
    let store = app_store();
    start(&store).await;

    let (count, logged_in) = store
        .state(|s| (s.events.len(), s.is_authenticated()))
        .await;
    assert_eq!(count, 3);
    assert!(!logged_in);
}

#[tokio::test]
async fn login_flow_reaches_dashboard() {
    let store = app_store();
    start(&store).await;

    let outcome = store
        .send_and_wait_for(
            AppAction::Login {
                email: "alice@example.com".to_string(),
                password: "pw".to_string(),
            },
            |a| matches!(a, AppAction::LoggedIn { .. } | AppAction::AuthFailed { .. }),
            WAIT,
        )
        .await
        .unwrap();

    assert!(matches!(outcome, AppAction::LoggedIn { .. }));

    let (view, name) = store
        .state(|s| (s.view.clone(), s.session.as_ref().map(|u| u.name.clone())))
        .await;
    assert_eq!(view, ViewState::Dashboard);
    assert_eq!(name.as_deref(), Some("alice"));
}

#[tokio::test]
async fn failed_login_surfaces_error_and_keeps_user_out() {
    let store = app_store();
    start(&store).await;

    let outcome = store
        .send_and_wait_for(
            AppAction::Login {
                email: "error@example.com".to_string(),
                password: "pw".to_string(),
            },
            |a| matches!(a, AppAction::LoggedIn { .. } | AppAction::AuthFailed { .. }),
            WAIT,
        )
        .await
        .unwrap();

    assert!(matches!(outcome, AppAction::AuthFailed { .. }));

    let (logged_in, error) = store
        .state(|s| (s.is_authenticated(), s.last_error.clone()))
        .await;
    assert!(!logged_in);
    assert_eq!(error.as_deref(), Some("Invalid credentials"));
}

#[tokio::test]
async fn purchase_persists_the_collection() {
    let kv = Arc::new(MemoryStore::new());
    let storage = AppStorage::new(kv);
    let store = store_with_storage(storage.clone());
    start(&store).await;
    login(&store, "buyer@example.com").await;

    let (event_id, tier_id, sold_before) = store
        .state(|s| {
            let event = &s.events[0];
            let tier = &event.ticket_types[1];
            (event.id, tier.id, tier.sold)
        })
        .await;

    let mut handle = store
        .send(AppAction::PurchaseTicket {
            event_id,
            ticket_type_id: tier_id,
        })
        .await
        .unwrap();
    handle.wait().await;

    // The in-memory state advanced
    let sold_after = store
        .state(|s| s.find_event(&event_id).unwrap().ticket_types[1].sold)
        .await;
    assert_eq!(sold_after, sold_before + 1);

    // ...and the persisted blob agrees (whole-collection overwrite)
    let persisted = storage.load_events();
    let persisted_sold = persisted
        .iter()
        .find(|e| e.id == event_id)
        .unwrap()
        .ticket_types[1]
        .sold;
    assert_eq!(persisted_sold, sold_after);
}

#[tokio::test]
async fn session_survives_restart() {
    let kv = Arc::new(MemoryStore::new());
    let storage = AppStorage::new(kv);

    {
        let store = store_with_storage(storage.clone());
        start(&store).await;
        login(&store, "carol@example.com").await;
    }

    // A fresh store over the same storage restores the session at start
    let store = store_with_storage(storage);
    start(&store).await;

    let name = store
        .state(|s| s.session.as_ref().map(|u| u.name.clone()))
        .await;
    assert_eq!(name.as_deref(), Some("carol"));
}

#[tokio::test]
async fn logout_clears_the_persisted_session() {
    let kv = Arc::new(MemoryStore::new());
    let storage = AppStorage::new(kv);
    let store = store_with_storage(storage.clone());
    start(&store).await;
    login(&store, "dave@example.com").await;
    assert!(storage.load_session().is_some());

    let mut handle = store.send(AppAction::Logout).await.unwrap();
    handle.wait().await;

    assert!(storage.load_session().is_none());
    let view = store.state(|s| s.view.clone()).await;
    assert_eq!(view, ViewState::Home);
}

#[tokio::test]
async fn create_event_flow_with_generated_content() {
    let store = app_store();
    start(&store).await;
    login(&store, "host@example.com").await;

    store
        .send(AppAction::Navigate {
            target: eventhub_app::NavTarget::CreateEvent,
        })
        .await
        .unwrap();

    let mut draft = EventDraft::new();
    draft.title = "Music by the River".to_string();
    draft.notes = "festival lineup announcement".to_string();
    draft.date = eventhub_app::EventDate::parse("2026-08-01");
    draft.location = "Vienna".to_string();
    store
        .send(AppAction::EditDraft {
            draft: Box::new(draft),
        })
        .await
        .unwrap();

    // The local generator answers through the feedback loop
    let generated = store
        .send_and_wait_for(
            AppAction::GenerateContent,
            |a| matches!(a, AppAction::ContentGenerated { .. }),
            WAIT,
        )
        .await
        .unwrap();
    let AppAction::ContentGenerated { content } = generated else {
        unreachable!("predicate only matches ContentGenerated");
    };
    assert!(content.tags.contains(&"Music".to_string()));

    let mut handle = store
        .send(AppAction::SubmitEvent {
            event_id: eventhub_app::EventId::new(),
        })
        .await
        .unwrap();
    handle.wait().await;

    let (count, last_title, view) = store
        .state(|s| {
            (
                s.events.len(),
                s.events.last().map(|e| e.title.clone()),
                s.view.clone(),
            )
        })
        .await;
    assert_eq!(count, 4);
    assert_eq!(last_title.as_deref(), Some("Music by the River"));
    assert!(matches!(view, ViewState::Events { .. }));
}
