use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::repo_types::{Meal, MealPatch, NewMeal, SortOrder};

#[derive(Debug, Error)]
pub enum StoreError {
    /// Missing, or owned by someone else. The two are never told apart.
    #[error("meal not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Owner-scoped meal persistence.
#[async_trait]
pub trait MealStore: Send + Sync {
    async fn create(&self, owner: Uuid, meal: NewMeal) -> StoreResult<Uuid>;
    async fn get(&self, owner: Uuid, id: Uuid) -> StoreResult<Meal>;
    /// Ties on `occurred_at` keep insertion order (reversed for `Desc`).
    async fn list(&self, owner: Uuid, order: SortOrder) -> StoreResult<Vec<Meal>>;
    async fn update(&self, owner: Uuid, id: Uuid, patch: MealPatch) -> StoreResult<()>;
    async fn delete(&self, owner: Uuid, id: Uuid) -> StoreResult<()>;
    async fn close(&self) {}
}

/// Vec-backed store. Insertion order is the Vec order.
#[derive(Default)]
pub struct InMemoryMealStore {
    meals: RwLock<Vec<Meal>>,
}

impl InMemoryMealStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.meals.read().await.len()
    }
}

#[async_trait]
impl MealStore for InMemoryMealStore {
    async fn create(&self, owner: Uuid, meal: NewMeal) -> StoreResult<Uuid> {
        let now = OffsetDateTime::now_utc();
        let id = Uuid::new_v4();
        self.meals.write().await.push(Meal {
            id,
            user_id: owner,
            name: meal.name,
            description: meal.description,
            occurred_at: meal.occurred_at,
            is_on_diet: meal.is_on_diet,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> StoreResult<Meal> {
        self.meals
            .read()
            .await
            .iter()
            .find(|m| m.id == id && m.user_id == owner)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self, owner: Uuid, order: SortOrder) -> StoreResult<Vec<Meal>> {
        let mut rows: Vec<Meal> = self
            .meals
            .read()
            .await
            .iter()
            .filter(|m| m.user_id == owner)
            .cloned()
            .collect();
        // stable sort keeps insertion order among equal timestamps
        rows.sort_by_key(|m| m.occurred_at);
        if order == SortOrder::Desc {
            rows.reverse();
        }
        Ok(rows)
    }

    async fn update(&self, owner: Uuid, id: Uuid, patch: MealPatch) -> StoreResult<()> {
        let mut meals = self.meals.write().await;
        let meal = meals
            .iter_mut()
            .find(|m| m.id == id && m.user_id == owner)
            .ok_or(StoreError::NotFound)?;
        patch.apply(meal);
        meal.updated_at = OffsetDateTime::now_utc();
        Ok(())
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> StoreResult<()> {
        let mut meals = self.meals.write().await;
        let pos = meals
            .iter()
            .position(|m| m.id == id && m.user_id == owner)
            .ok_or(StoreError::NotFound)?;
        meals.remove(pos);
        Ok(())
    }
}
