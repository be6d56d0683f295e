//! Daily Diet API server.
//!
//! A small HTTP service for tracking meals and whether each meal complies
//! with a diet, scoped per user. Exposes CRUD endpoints for users and meals
//! plus two aggregates over a user's meal history: the current/longest
//! on-diet streak and a totals summary.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use std::sync::Arc;

use axum::Router;
use meal_store::MealStore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::state::AppState;

/// Creates the application router with all routes configured.
pub fn create_app<S: MealStore + 'static>(state: Arc<AppState<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Creates the application state with the given configuration and store.
pub fn create_state<S: MealStore>(config: Config, store: S) -> Arc<AppState<S>> {
    Arc::new(AppState::new(config, store))
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
