//! API endpoints.

pub mod meals;
pub mod users;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use meal_store::MealStore;

use crate::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<S: MealStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        // User endpoints
        .route("/users", post(users::create_user).get(users::list_users))
        .route("/users/:id", get(users::get_user))
        // Meal endpoints; the aggregate routes use static segments so they
        // never collide with /meals/:id
        .route("/meals", post(meals::create_meal).get(meals::list_meals))
        .route("/meals/streak", get(meals::get_streak))
        .route("/meals/totals", get(meals::get_totals))
        .route(
            "/meals/:id",
            get(meals::get_meal)
                .put(meals::update_meal)
                .delete(meals::delete_meal),
        )
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
