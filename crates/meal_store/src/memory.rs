//! In-memory meal store implementation for testing.

use std::sync::Arc;

use async_trait::async_trait;
use entities::{Meal, MealUpdate, User};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{MealStore, MealStoreError, MealStoreResult};

/// In-memory meal store for testing purposes.
///
/// Entities are kept in vectors so listing preserves insertion order, matching
/// the SQLite implementation. The foreign key from meals to users is enforced
/// by hand for the same reason.
#[derive(Debug, Default)]
pub struct MemoryMealStore {
    users: Arc<RwLock<Vec<User>>>,
    meals: Arc<RwLock<Vec<Meal>>>,
}

impl MemoryMealStore {
    /// Creates a new in-memory meal store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MealStore for MemoryMealStore {
    async fn create_user(&self, user: User) -> MealStoreResult<User> {
        let mut users = self.users.write().await;
        users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> MealStoreResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn get_user(&self, id: Uuid) -> MealStoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create_meal(&self, meal: Meal) -> MealStoreResult<Meal> {
        let users = self.users.read().await;
        if !users.iter().any(|u| u.id == meal.user_id) {
            return Err(MealStoreError::ForeignKeyViolation(format!(
                "no such user: {}",
                meal.user_id
            )));
        }
        drop(users);

        let mut meals = self.meals.write().await;
        meals.push(meal.clone());
        Ok(meal)
    }

    async fn list_meals(&self, user_id: Uuid) -> MealStoreResult<Vec<Meal>> {
        let meals = self.meals.read().await;
        Ok(meals.iter().filter(|m| m.user_id == user_id).cloned().collect())
    }

    async fn get_meal(&self, id: Uuid, user_id: Uuid) -> MealStoreResult<Option<Meal>> {
        let meals = self.meals.read().await;
        Ok(meals
            .iter()
            .find(|m| m.id == id && m.user_id == user_id)
            .cloned())
    }

    async fn update_meal(
        &self,
        id: Uuid,
        user_id: Uuid,
        changes: MealUpdate,
    ) -> MealStoreResult<bool> {
        let mut meals = self.meals.write().await;
        match meals.iter_mut().find(|m| m.id == id && m.user_id == user_id) {
            Some(meal) => {
                changes.apply(meal);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_meal(&self, id: Uuid, user_id: Uuid) -> MealStoreResult<bool> {
        let mut meals = self.meals.write().await;
        match meals.iter().position(|m| m.id == id && m.user_id == user_id) {
            Some(index) => {
                meals.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    async fn store_with_user() -> (MemoryMealStore, User) {
        let store = MemoryMealStore::new();
        let user = store.create_user(User::new("Test User")).await.unwrap();
        (store, user)
    }

    fn meal_for(user: &User, name: &str, on_diet: bool) -> Meal {
        Meal::new(user.id, name, "Test meal description", Utc::now(), on_diet)
    }

    #[tokio::test]
    async fn test_user_crud() {
        let (store, user) = store_with_user().await;

        let retrieved = store.get_user(user.id).await.unwrap();
        assert_eq!(retrieved, Some(user.clone()));

        let users = store.list_users().await.unwrap();
        assert_eq!(users.len(), 1);

        let missing = store.get_user(Uuid::new_v4()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_meal_crud() {
        let (store, user) = store_with_user().await;

        let meal = store
            .create_meal(meal_for(&user, "Lunch", true))
            .await
            .unwrap();

        let retrieved = store.get_meal(meal.id, user.id).await.unwrap().unwrap();
        assert_eq!(retrieved.name, "Lunch");

        let removed = store.delete_meal(meal.id, user.id).await.unwrap();
        assert!(removed);

        assert!(store.get_meal(meal.id, user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_meal_for_unknown_user_is_rejected() {
        let store = MemoryMealStore::new();
        let orphan = Meal::new(Uuid::new_v4(), "Lunch", "No owner", Utc::now(), true);

        let result = store.create_meal(orphan).await;
        assert!(matches!(result, Err(MealStoreError::ForeignKeyViolation(_))));
    }

    #[tokio::test]
    async fn test_ownership_isolation() {
        let (store, owner) = store_with_user().await;
        let other = store.create_user(User::new("Other User")).await.unwrap();

        let meal = store
            .create_meal(meal_for(&owner, "Lunch", true))
            .await
            .unwrap();

        assert!(store.get_meal(meal.id, other.id).await.unwrap().is_none());
        assert!(
            !store
                .update_meal(meal.id, other.id, MealUpdate::default())
                .await
                .unwrap()
        );
        assert!(!store.delete_meal(meal.id, other.id).await.unwrap());

        // The meal is still intact under its real owner.
        assert!(store.get_meal(meal.id, owner.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_second_delete_reports_no_match() {
        let (store, user) = store_with_user().await;
        let meal = store
            .create_meal(meal_for(&user, "Lunch", true))
            .await
            .unwrap();

        assert!(store.delete_meal(meal.id, user.id).await.unwrap());
        assert!(!store.delete_meal(meal.id, user.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_partial_update_applies_only_provided_fields() {
        let (store, user) = store_with_user().await;
        let meal = store
            .create_meal(meal_for(&user, "Lunch", true))
            .await
            .unwrap();

        let changes = MealUpdate {
            is_included_on_diet: Some(false),
            ..Default::default()
        };
        assert!(store.update_meal(meal.id, user.id, changes).await.unwrap());

        let updated = store.get_meal(meal.id, user.id).await.unwrap().unwrap();
        assert!(!updated.is_included_on_diet);
        assert_eq!(updated.name, "Lunch");
        assert_eq!(updated.description, "Test meal description");
    }

    #[tokio::test]
    async fn test_list_meals_preserves_insertion_order() {
        let (store, user) = store_with_user().await;

        for name in ["Breakfast", "Lunch", "Dinner"] {
            store.create_meal(meal_for(&user, name, true)).await.unwrap();
        }

        let meals = store.list_meals(user.id).await.unwrap();
        let names: Vec<&str> = meals.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Breakfast", "Lunch", "Dinner"]);
    }

    #[tokio::test]
    async fn test_list_meals_is_scoped_to_user() {
        let (store, owner) = store_with_user().await;
        let other = store.create_user(User::new("Other User")).await.unwrap();

        store
            .create_meal(meal_for(&owner, "Lunch", true))
            .await
            .unwrap();

        assert!(store.list_meals(other.id).await.unwrap().is_empty());
    }
}
