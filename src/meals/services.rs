use uuid::Uuid;

use super::repo_types::SortOrder;
use super::store::{MealStore, StoreResult};
use super::summary::{summarize, MealSummary};

/// Reads the owner's full history oldest-first and summarizes it.
pub async fn summary_for(store: &dyn MealStore, owner: Uuid) -> StoreResult<MealSummary> {
    let meals = store.list(owner, SortOrder::Asc).await?;
    Ok(summarize(&meals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meals::repo_types::NewMeal;
    use crate::meals::store::InMemoryMealStore;
    use time::macros::datetime;

    #[tokio::test]
    async fn summary_uses_chronological_order_not_insertion_order() {
        let store = InMemoryMealStore::new();
        let owner = Uuid::new_v4();
        // inserted out of order: chronologically [on, on, off, on]
        let history = [
            (datetime!(2024-05-01 19:00 UTC), true),
            (datetime!(2024-05-01 08:00 UTC), true),
            (datetime!(2024-05-01 13:00 UTC), true),
            (datetime!(2024-05-01 16:00 UTC), false),
        ];
        for (occurred_at, is_on_diet) in history {
            store
                .create(
                    owner,
                    NewMeal {
                        name: "meal".into(),
                        description: String::new(),
                        occurred_at,
                        is_on_diet,
                    },
                )
                .await
                .unwrap();
        }

        let s = summary_for(&store, owner).await.unwrap();
        assert_eq!(s.total_meals, 4);
        assert_eq!(s.on_diet_meals, 3);
        assert_eq!(s.off_diet_meals, 1);
        assert_eq!(s.best_streak, 2);
    }

    #[tokio::test]
    async fn summary_for_unknown_owner_is_empty() {
        let store = InMemoryMealStore::new();
        let s = summary_for(&store, Uuid::new_v4()).await.unwrap();
        assert_eq!(s, MealSummary::default());
    }
}
