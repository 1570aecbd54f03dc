use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Meal record as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub user_id: Uuid, // owner, immutable
    pub name: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub occurred_at: OffsetDateTime,
    pub is_on_diet: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Fields of a meal that passed create validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMeal {
    pub name: String,
    pub description: String,
    pub occurred_at: OffsetDateTime,
    pub is_on_diet: bool,
}

/// Partial update: `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub occurred_at: Option<OffsetDateTime>,
    pub is_on_diet: Option<bool>,
}

impl MealPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.occurred_at.is_none()
            && self.is_on_diet.is_none()
    }

    /// Merges the provided fields over `meal`. Identity fields are never touched.
    pub fn apply(self, meal: &mut Meal) {
        if let Some(name) = self.name {
            meal.name = name;
        }
        if let Some(description) = self.description {
            meal.description = description;
        }
        if let Some(occurred_at) = self.occurred_at {
            meal.occurred_at = occurred_at;
        }
        if let Some(is_on_diet) = self.is_on_diet {
            meal.is_on_diet = is_on_diet;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[serde(alias = "ascending")]
    Asc,
    #[default]
    #[serde(alias = "descending")]
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn meal() -> Meal {
        Meal {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Oatmeal".into(),
            description: "with berries".into(),
            occurred_at: datetime!(2023-12-25 08:00 UTC),
            is_on_diet: true,
            created_at: datetime!(2023-12-25 08:05 UTC),
            updated_at: datetime!(2023-12-25 08:05 UTC),
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let original = meal();
        let mut patched = original.clone();
        let patch = MealPatch::default();
        assert!(patch.is_empty());
        patch.apply(&mut patched);
        assert_eq!(patched, original);
    }

    #[test]
    fn patch_with_only_flag_keeps_other_fields() {
        let original = meal();
        let mut patched = original.clone();
        MealPatch {
            is_on_diet: Some(false),
            ..Default::default()
        }
        .apply(&mut patched);

        assert!(!patched.is_on_diet);
        assert_eq!(patched.name, original.name);
        assert_eq!(patched.description, original.description);
        assert_eq!(patched.occurred_at, original.occurred_at);
        assert_eq!(patched.id, original.id);
        assert_eq!(patched.user_id, original.user_id);
    }

    #[test]
    fn patch_overwrites_every_provided_field() {
        let mut m = meal();
        MealPatch {
            name: Some("Burger".into()),
            description: Some("cheat day".into()),
            occurred_at: Some(datetime!(2023-12-26 19:30 UTC)),
            is_on_diet: Some(false),
        }
        .apply(&mut m);

        assert_eq!(m.name, "Burger");
        assert_eq!(m.description, "cheat day");
        assert_eq!(m.occurred_at, datetime!(2023-12-26 19:30 UTC));
        assert!(!m.is_on_diet);
    }

    #[test]
    fn meal_serializes_camel_case_without_owner() {
        let json = serde_json::to_value(meal()).unwrap();
        assert_eq!(json["occurredAt"], "2023-12-25T08:00:00Z");
        assert_eq!(json["isOnDiet"], true);
        assert!(json.get("userId").is_none());
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn sort_order_defaults_to_desc() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
        let asc: SortOrder = serde_json::from_str("\"ascending\"").unwrap();
        assert_eq!(asc, SortOrder::Asc);
    }
}
