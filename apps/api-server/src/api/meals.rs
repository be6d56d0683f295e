//! Meal API endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use entities::{Meal, MealUpdate, diet_streaks, meal_totals};
use meal_store::MealStore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Request body for creating a meal.
#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub name: String,
    pub description: String,
    pub meal_date_time: DateTime<Utc>,
    pub is_included_on_diet: bool,
    pub user_id: Uuid,
}

/// Query parameters identifying the owning user.
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub user_id: Uuid,
}

/// Response body for listing meals.
#[derive(Debug, Serialize)]
pub struct ListMealsResponse {
    pub meals: Vec<Meal>,
}

/// Response body for the streak endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResponse {
    pub highest_streak: u32,
    pub current_streak: u32,
}

/// Response body for the totals endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsResponse {
    pub total_number_of_meals: u32,
    pub number_of_meals_on_diet: u32,
    pub number_of_meals_off_diet: u32,
}

/// Creates a new meal for a user.
///
/// The owner is not looked up first; an unknown `user_id` fails the foreign
/// key constraint at the store boundary and surfaces as a 400.
pub async fn create_meal<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<CreateMealRequest>,
) -> ServerResult<(StatusCode, Json<Meal>)> {
    let meal = state
        .store
        .create_meal(Meal::new(
            request.user_id,
            request.name,
            request.description,
            request.meal_date_time,
            request.is_included_on_diet,
        ))
        .await?;

    tracing::info!(meal_id = %meal.id, user_id = %meal.user_id, "Meal created");

    Ok((StatusCode::CREATED, Json(meal)))
}

/// Lists a user's meals in store order.
pub async fn list_meals<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<OwnerQuery>,
) -> ServerResult<Json<ListMealsResponse>> {
    let meals = state.store.list_meals(query.user_id).await?;

    Ok(Json(ListMealsResponse { meals }))
}

/// Gets a meal by ID, scoped to the owning user.
pub async fn get_meal<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<Uuid>,
    Query(query): Query<OwnerQuery>,
) -> ServerResult<Json<Meal>> {
    let meal = state
        .store
        .get_meal(id, query.user_id)
        .await?
        .ok_or(ServerError::NotFound)?;

    Ok(Json(meal))
}

/// Applies a partial update to a meal, scoped to the owning user.
pub async fn update_meal<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<Uuid>,
    Query(query): Query<OwnerQuery>,
    Json(changes): Json<MealUpdate>,
) -> ServerResult<StatusCode> {
    let matched = state.store.update_meal(id, query.user_id, changes).await?;
    if !matched {
        return Err(ServerError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a meal, scoped to the owning user.
pub async fn delete_meal<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<Uuid>,
    Query(query): Query<OwnerQuery>,
) -> ServerResult<StatusCode> {
    let removed = state.store.delete_meal(id, query.user_id).await?;
    if !removed {
        return Err(ServerError::NotFound);
    }

    tracing::info!(meal_id = %id, user_id = %query.user_id, "Meal deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Computes the user's current and highest on-diet streaks.
///
/// Meals are taken in the order the store lists them (insertion order). A
/// user with no meals gets a 404 rather than zeroed streaks; that policy
/// lives here, the calculator itself is total.
pub async fn get_streak<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<OwnerQuery>,
) -> ServerResult<Json<StreakResponse>> {
    let meals = state.store.list_meals(query.user_id).await?;
    if meals.is_empty() {
        return Err(ServerError::NotFound);
    }

    let streaks = diet_streaks(&meals);

    Ok(Json(StreakResponse {
        highest_streak: streaks.highest_streak,
        current_streak: streaks.current_streak,
    }))
}

/// Summarizes the user's meal counts. Same empty-list policy as the streak
/// endpoint.
pub async fn get_totals<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<OwnerQuery>,
) -> ServerResult<Json<TotalsResponse>> {
    let meals = state.store.list_meals(query.user_id).await?;
    if meals.is_empty() {
        return Err(ServerError::NotFound);
    }

    let totals = meal_totals(&meals);

    Ok(Json(TotalsResponse {
        total_number_of_meals: totals.total,
        number_of_meals_on_diet: totals.on_diet,
        number_of_meals_off_diet: totals.off_diet,
    }))
}
