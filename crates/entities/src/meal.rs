//! Meal entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A meal logged by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning user. Immutable after creation.
    pub user_id: Uuid,
    /// Short label.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// When the meal was consumed (caller-supplied, not auto-generated).
    pub meal_date_time: DateTime<Utc>,
    /// Whether the meal complies with the user's diet.
    pub is_included_on_diet: bool,
}

impl Meal {
    /// Creates a new meal with a generated id.
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        description: impl Into<String>,
        meal_date_time: DateTime<Utc>,
        is_included_on_diet: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            description: description.into(),
            meal_date_time,
            is_included_on_diet,
        }
    }
}

/// Partial update for a meal.
///
/// `None` means the field was not provided and is left unchanged. Presence is
/// carried by the `Option`, never by testing the value itself, so an explicit
/// `false` for `is_included_on_diet` is applied like any other value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealUpdate {
    /// New label, if provided.
    pub name: Option<String>,
    /// New description, if provided.
    pub description: Option<String>,
    /// New consumption time, if provided.
    pub meal_date_time: Option<DateTime<Utc>>,
    /// New diet flag, if provided.
    pub is_included_on_diet: Option<bool>,
}

impl MealUpdate {
    /// Applies the provided fields to a meal, leaving absent fields untouched.
    pub fn apply(&self, meal: &mut Meal) {
        if let Some(name) = &self.name {
            meal.name = name.clone();
        }
        if let Some(description) = &self.description {
            meal.description = description.clone();
        }
        if let Some(meal_date_time) = self.meal_date_time {
            meal.meal_date_time = meal_date_time;
        }
        if let Some(is_included_on_diet) = self.is_included_on_diet {
            meal.is_included_on_diet = is_included_on_diet;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_leaves_absent_fields_untouched() {
        let mut meal = Meal::new(Uuid::new_v4(), "Lunch", "Grilled chicken", Utc::now(), true);

        let update = MealUpdate {
            description: Some("Fried chicken".to_string()),
            is_included_on_diet: Some(false),
            ..Default::default()
        };
        update.apply(&mut meal);

        assert_eq!(meal.name, "Lunch");
        assert_eq!(meal.description, "Fried chicken");
        assert!(!meal.is_included_on_diet);
    }

    #[test]
    fn test_empty_update_is_a_no_op() {
        let mut meal = Meal::new(Uuid::new_v4(), "Lunch", "Grilled chicken", Utc::now(), true);
        let original = meal.clone();

        MealUpdate::default().apply(&mut meal);

        assert_eq!(meal, original);
    }
}
