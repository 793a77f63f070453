//! Roster Server - HTTP host for the skills list page.
//!
//! Serves the tenant-scoped skills table, validates row edits with the
//! roster-engine rules and queues committed rows into an in-memory store.

mod config;
mod error;
mod handlers;
mod routes;
mod store;

use crate::config::Config;
use crate::store::{spawn_command_worker, CommandQueue, SkillStore};
use axum::Router;
use roster_engine::{
    skill::{skill_columns, skill_defaults_with_page_size, skill_filter_keys},
    Skill, TablePage,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SkillStore>,
    pub commands: CommandQueue,
    pub table: Arc<TablePage<Skill>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the state and start the command worker.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: Config) -> Self {
        let store = SkillStore::new_shared();
        store.seed(config.default_tenant_id, config.seed_skills.iter().cloned());
        if !store.is_empty() {
            tracing::info!(
                seeded = store.len(),
                tenant_id = config.default_tenant_id,
                "Seeded skills"
            );
        }

        let (commands, _worker) = spawn_command_worker(store.clone());
        let table = TablePage::new(
            skill_columns(),
            skill_defaults_with_page_size(config.default_items_per_page),
            skill_filter_keys,
        );

        Self {
            store,
            commands,
            table: Arc::new(table),
            config: Arc::new(config),
        }
    }
}

/// Build the router with its middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting Roster Server on {}:{}", config.host, config.port);

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
