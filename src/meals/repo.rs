use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::debug;
use uuid::Uuid;

use super::repo_types::{Meal, MealPatch, NewMeal, SortOrder};
use super::store::{MealStore, StoreError, StoreResult};

const MEAL_COLUMNS: &str =
    "id, user_id, name, description, occurred_at, is_on_diet, created_at, updated_at";

/// `seq` follows insertion, so meals sharing a timestamp keep a fixed order
/// that flips exactly when the direction does.
fn order_by(order: SortOrder) -> String {
    let dir = order.as_sql();
    format!("ORDER BY occurred_at {dir}, seq {dir}")
}

/// PostgreSQL-backed store over the `meals` table.
#[derive(Clone)]
pub struct PgMealStore {
    db: PgPool,
}

impl PgMealStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(db))
    }

    pub fn pool(&self) -> &PgPool {
        &self.db
    }
}

#[async_trait]
impl MealStore for PgMealStore {
    async fn create(&self, owner: Uuid, meal: NewMeal) -> StoreResult<Uuid> {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO meals (id, user_id, name, description, occurred_at, is_on_diet)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(owner)
        .bind(&meal.name)
        .bind(&meal.description)
        .bind(meal.occurred_at)
        .bind(meal.is_on_diet)
        .execute(&self.db)
        .await?;
        Ok(id)
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> StoreResult<Meal> {
        let sql = format!("SELECT {MEAL_COLUMNS} FROM meals WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Meal>(&sql)
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.db)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self, owner: Uuid, order: SortOrder) -> StoreResult<Vec<Meal>> {
        let sql = format!(
            "SELECT {MEAL_COLUMNS} FROM meals WHERE user_id = $1 {}",
            order_by(order)
        );
        let rows = sqlx::query_as::<_, Meal>(&sql)
            .bind(owner)
            .fetch_all(&self.db)
            .await?;
        debug!(%owner, count = rows.len(), "listed meals");
        Ok(rows)
    }

    async fn update(&self, owner: Uuid, id: Uuid, patch: MealPatch) -> StoreResult<()> {
        let mut tx = self.db.begin().await?;

        let sql = format!(
            "SELECT {MEAL_COLUMNS} FROM meals WHERE id = $1 AND user_id = $2 FOR UPDATE"
        );
        let mut meal = sqlx::query_as::<_, Meal>(&sql)
            .bind(id)
            .bind(owner)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(StoreError::NotFound)?;

        patch.apply(&mut meal);

        sqlx::query(
            r#"
            UPDATE meals
               SET name = $3, description = $4, occurred_at = $5, is_on_diet = $6,
                   updated_at = now()
             WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .bind(&meal.name)
        .bind(&meal.description)
        .bind(meal.occurred_at)
        .bind(meal.is_on_diet)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM meals WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.db)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn close(&self) {
        self.db.close().await;
    }
}
