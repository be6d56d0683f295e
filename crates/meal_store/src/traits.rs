//! Meal store trait definition.

use async_trait::async_trait;
use entities::{Meal, MealUpdate, User};
use uuid::Uuid;

use crate::MealStoreResult;

/// Trait for user and meal storage operations.
///
/// Every operation that targets a single meal matches on both the meal id and
/// the owning user id, so a meal owned by a different user behaves exactly
/// like a missing one.
#[async_trait]
pub trait MealStore: Send + Sync {
    // =========================================================================
    // User operations
    // =========================================================================

    /// Creates a new user.
    async fn create_user(&self, user: User) -> MealStoreResult<User>;

    /// Lists all users in store-native order.
    async fn list_users(&self) -> MealStoreResult<Vec<User>>;

    /// Gets a user by ID.
    async fn get_user(&self, id: Uuid) -> MealStoreResult<Option<User>>;

    // =========================================================================
    // Meal operations
    // =========================================================================

    /// Creates a new meal. The owning user is not checked in application
    /// logic; an unknown owner fails the foreign key constraint at the store
    /// boundary.
    async fn create_meal(&self, meal: Meal) -> MealStoreResult<Meal>;

    /// Lists a user's meals in insertion order.
    async fn list_meals(&self, user_id: Uuid) -> MealStoreResult<Vec<Meal>>;

    /// Gets a meal by ID, scoped to the owning user.
    async fn get_meal(&self, id: Uuid, user_id: Uuid) -> MealStoreResult<Option<Meal>>;

    /// Applies the provided fields to a meal, scoped to the owning user.
    /// Returns whether a row matched.
    async fn update_meal(
        &self,
        id: Uuid,
        user_id: Uuid,
        changes: MealUpdate,
    ) -> MealStoreResult<bool>;

    /// Deletes a meal, scoped to the owning user. Returns whether a row was
    /// removed.
    async fn delete_meal(&self, id: Uuid, user_id: Uuid) -> MealStoreResult<bool>;
}
