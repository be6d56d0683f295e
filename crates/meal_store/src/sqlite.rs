//! SQLite-backed meal store.

use std::str::FromStr;

use async_trait::async_trait;
use entities::{Meal, MealUpdate, User};
use sqlx::{
    FromRow, Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use uuid::Uuid;

use crate::{MealStore, MealStoreError, MealStoreResult};

const CREATE_USERS_SQL: &str = "
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL
)";

const CREATE_MEALS_SQL: &str = "
CREATE TABLE IF NOT EXISTS meals (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    meal_date_time TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    is_included_on_diet INTEGER NOT NULL
)";

/// Database row for User.
#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    name: String,
    created_at: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: Uuid::parse_str(&row.id).unwrap_or_else(|_| Uuid::nil()),
            name: row.name,
            created_at: chrono::DateTime::parse_from_rfc3339(&row.created_at)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
        }
    }
}

/// Database row for Meal.
#[derive(Debug, FromRow)]
struct MealRow {
    id: String,
    user_id: String,
    name: String,
    description: String,
    meal_date_time: String,
    is_included_on_diet: bool,
}

impl From<MealRow> for Meal {
    fn from(row: MealRow) -> Self {
        Meal {
            id: Uuid::parse_str(&row.id).unwrap_or_else(|_| Uuid::nil()),
            user_id: Uuid::parse_str(&row.user_id).unwrap_or_else(|_| Uuid::nil()),
            name: row.name,
            description: row.description,
            meal_date_time: chrono::DateTime::parse_from_rfc3339(&row.meal_date_time)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
            is_included_on_diet: row.is_included_on_diet,
        }
    }
}

/// SQLite-backed meal store.
///
/// Timestamps are stored as RFC 3339 text and ids as hyphenated UUID text.
/// `list_meals` orders by rowid so the streak calculator sees meals in
/// insertion order regardless of their `meal_date_time`.
pub struct SqliteMealStore {
    pool: Pool<Sqlite>,
}

impl SqliteMealStore {
    /// Connects to the database and bootstraps the schema.
    ///
    /// Foreign keys are switched on per connection so that deleting a user
    /// cascades to that user's meals.
    pub async fn connect(database_url: &str) -> MealStoreResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(MealStoreError::Database)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.run_migrations().await?;

        tracing::info!(database_url, "Meal store ready");

        Ok(store)
    }

    /// Runs database migrations.
    async fn run_migrations(&self) -> MealStoreResult<()> {
        sqlx::query(CREATE_USERS_SQL).execute(&self.pool).await?;
        sqlx::query(CREATE_MEALS_SQL).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl MealStore for SqliteMealStore {
    async fn create_user(&self, user: User) -> MealStoreResult<User> {
        sqlx::query("INSERT INTO users (id, name, created_at) VALUES (?, ?, ?)")
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(user.created_at.to_rfc3339())
            .execute(&self.pool)
            .await?;

        Ok(user)
    }

    async fn list_users(&self) -> MealStoreResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            "SELECT id, name, created_at
             FROM users
             ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_user(&self, id: Uuid) -> MealStoreResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, name, created_at
             FROM users
             WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn create_meal(&self, meal: Meal) -> MealStoreResult<Meal> {
        sqlx::query(
            "INSERT INTO meals (id, user_id, name, description, meal_date_time, \
             is_included_on_diet)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(meal.id.to_string())
        .bind(meal.user_id.to_string())
        .bind(&meal.name)
        .bind(&meal.description)
        .bind(meal.meal_date_time.to_rfc3339())
        .bind(meal.is_included_on_diet)
        .execute(&self.pool)
        .await?;

        Ok(meal)
    }

    async fn list_meals(&self, user_id: Uuid) -> MealStoreResult<Vec<Meal>> {
        let rows: Vec<MealRow> = sqlx::query_as(
            "SELECT id, user_id, name, description, meal_date_time, is_included_on_diet
             FROM meals
             WHERE user_id = ?
             ORDER BY rowid",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Meal::from).collect())
    }

    async fn get_meal(&self, id: Uuid, user_id: Uuid) -> MealStoreResult<Option<Meal>> {
        let row: Option<MealRow> = sqlx::query_as(
            "SELECT id, user_id, name, description, meal_date_time, is_included_on_diet
             FROM meals
             WHERE id = ? AND user_id = ?",
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Meal::from))
    }

    async fn update_meal(
        &self,
        id: Uuid,
        user_id: Uuid,
        changes: MealUpdate,
    ) -> MealStoreResult<bool> {
        // COALESCE keeps the stored value for fields that were not provided,
        // so the whole partial update is a single statement matched by both
        // id and owner.
        let result = sqlx::query(
            "UPDATE meals
             SET name = COALESCE(?, name),
                 description = COALESCE(?, description),
                 meal_date_time = COALESCE(?, meal_date_time),
                 is_included_on_diet = COALESCE(?, is_included_on_diet)
             WHERE id = ? AND user_id = ?",
        )
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(changes.meal_date_time.map(|dt| dt.to_rfc3339()))
        .bind(changes.is_included_on_diet)
        .bind(id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_meal(&self, id: Uuid, user_id: Uuid) -> MealStoreResult<bool> {
        let result = sqlx::query("DELETE FROM meals WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
