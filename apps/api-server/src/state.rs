//! Application state.

use std::sync::Arc;

use meal_store::MealStore;

use crate::config::Config;

/// Shared application state.
pub struct AppState<S: MealStore> {
    /// Server configuration.
    pub config: Config,
    /// Meal store.
    pub store: S,
}

impl<S: MealStore> AppState<S> {
    /// Creates new application state.
    pub fn new(config: Config, store: S) -> Self {
        Self { config, store }
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;
