use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates::DateInput;
use super::repo_types::{Meal, SortOrder};
use super::summary::MealSummary;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "occurredAt")]
    pub date: Option<DateInput>,
    pub is_on_diet: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMealRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "occurredAt")]
    pub date: Option<DateInput>,
    pub is_on_diet: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub order: SortOrder,
}

#[derive(Debug, Serialize)]
pub struct CreatedMealResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub meal: Meal,
}

#[derive(Debug, Serialize)]
pub struct MealListResponse {
    pub meals: Vec<Meal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub total_meals: u64,
    pub on_diet_meals: u64,
    pub off_diet_meals: u64,
    pub best_streak: u64,
}

impl From<MealSummary> for SummaryResponse {
    fn from(s: MealSummary) -> Self {
        Self {
            total_meals: s.total_meals,
            on_diet_meals: s.on_diet_meals,
            off_diet_meals: s.off_diet_meals,
            best_streak: s.best_streak,
        }
    }
}
