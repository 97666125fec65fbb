//! Demo binary: drives the app through a full scenario.
//!
//! Loads the catalog, browses with filters, authenticates, purchases a
//! ticket (including a sold-out rejection), and authors a new event with
//! generated content.

use anyhow::Result;
use eventhub_app::{
    AppAction, AppEnvironment, AppReducer, AppState, AppStorage, Config, EventDraft, FilterSpec,
    JsonFileStore, NavTarget, inventory, query,
};
use eventhub_auth::MockAuthService;
use eventhub_content::ContentService;
use eventhub_core::environment::{Clock, SystemClock};
use eventhub_runtime::Store;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How long the demo waits for auth and content round-trips
const WAIT: Duration = Duration::from_secs(10);

#[tokio::main]
#[allow(clippy::too_many_lines)]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventhub_app=info,eventhub_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let storage = match &config.data_dir {
        Some(dir) => AppStorage::new(Arc::new(JsonFileStore::open(dir)?)),
        None => AppStorage::in_memory(),
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let env = AppEnvironment::new(
        Arc::clone(&clock),
        Arc::new(MockAuthService::with_latency(config.auth_latency)),
        Arc::new(ContentService::from_env()),
        storage,
    );

    let store = Store::new(AppState::new(), AppReducer::new(), env);

    println!("=== EventHub: event discovery and ticketing demo ===\n");

    // Load persisted state (or the seed dataset)
    let mut handle = store.send(AppAction::Start).await?;
    handle.wait().await;

    let events = store.state(|s| s.events.clone()).await;
    println!("Catalog ({} events):", events.len());
    for event in &events {
        println!(
            "  {:<26} {:<20} {:<10} {}",
            event.title,
            event.location,
            event.status.to_string(),
            inventory::price_display(&event.ticket_types)
        );
    }

    println!("Categories: {:?}", query::categories(&events));

    // Browse with a text filter
    store.send(AppAction::Navigate { target: NavTarget::Events }).await?;
    store
        .send(AppAction::SetFilter {
            filter: FilterSpec::with_query("tech"),
        })
        .await?;
    let visible = store
        .state(|s| s.visible_events().iter().map(|e| e.title.clone()).collect::<Vec<_>>())
        .await;
    println!("\nFiltered by \"tech\": {visible:?}");

    // Purchasing anonymously bounces to the login screen
    let (event_id, tier_id, sold_out_id) = {
        let event = &events[0];
        (event.id, event.ticket_types[1].id, event.ticket_types[0].id)
    };
    store
        .send(AppAction::PurchaseTicket {
            event_id,
            ticket_type_id: tier_id,
        })
        .await?;
    let view = store.state(|s| s.view.name()).await;
    println!("\nAnonymous purchase attempt leads to: {view}");

    // Log in and retry
    let outcome = store
        .send_and_wait_for(
            AppAction::Login {
                email: "alice@example.com".to_string(),
                password: "hunter2".to_string(),
            },
            |a| matches!(a, AppAction::LoggedIn { .. } | AppAction::AuthFailed { .. }),
            WAIT,
        )
        .await?;
    if let AppAction::LoggedIn { user } = outcome {
        println!("Logged in as {} <{}>", user.name, user.email);
    }

    let mut handle = store
        .send(AppAction::PurchaseTicket {
            event_id,
            ticket_type_id: tier_id,
        })
        .await?;
    handle.wait().await;
    let sold = store
        .state(|s| s.find_event(&event_id).map(|e| e.ticket_types[1].sold))
        .await;
    println!("Purchased one General Admission ticket; sold is now {sold:?}");

    // A sold-out tier refuses the purchase
    let mut handle = store
        .send(AppAction::PurchaseTicket {
            event_id,
            ticket_type_id: sold_out_id,
        })
        .await?;
    handle.wait().await;
    let refusal = store.state(|s| s.last_error.clone()).await;
    println!("Sold-out tier refusal: {refusal:?}");

    // Author a new event with generated copy
    store
        .send(AppAction::Navigate { target: NavTarget::CreateEvent })
        .await?;
    let mut draft = EventDraft::new();
    draft.title = "Harbor Music Festival".to_string();
    draft.notes = "open air, three stages, local food".to_string();
    draft.date = eventhub_app::EventDate::parse("2026-07-18");
    draft.location = "Hamburg".to_string();
    store
        .send(AppAction::EditDraft { draft: Box::new(draft) })
        .await?;

    let generated = store
        .send_and_wait_for(
            AppAction::GenerateContent,
            |a| matches!(a, AppAction::ContentGenerated { .. }),
            WAIT,
        )
        .await?;
    if let AppAction::ContentGenerated { content } = generated {
        println!("\nGenerated {} tags and {} agenda items", content.tags.len(), content.agenda.len());
    }

    let mut handle = store
        .send(AppAction::SubmitEvent {
            event_id: eventhub_app::EventId::new(),
        })
        .await?;
    handle.wait().await;

    // Dashboard over the final collection
    let now = clock.now();
    let stats = store.state(move |s| s.dashboard_stats(now)).await;
    println!("\nDashboard:");
    println!("  Total events:   {}", stats.total_events);
    println!("  Registrations:  {}", stats.total_attendees);
    println!("  Revenue:        {}", stats.total_revenue);
    println!("  Upcoming:       {}", stats.upcoming_events);

    store.shutdown(Duration::from_secs(5)).await?;
    println!("\n=== Demo complete ===");

    Ok(())
}
