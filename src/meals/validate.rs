use super::dto::{CreateMealRequest, UpdateMealRequest};
use super::repo_types::{MealPatch, NewMeal};

/// Outcome of validating a request body. Nothing touches the store unless `Valid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated<T> {
    Valid(T),
    Invalid(Vec<String>),
}

impl<T> Validated<T> {
    pub fn into_result(self) -> Result<T, Vec<String>> {
        match self {
            Validated::Valid(v) => Ok(v),
            Validated::Invalid(reasons) => Err(reasons),
        }
    }
}

pub fn validate_create(req: CreateMealRequest) -> Validated<NewMeal> {
    let mut reasons = Vec::new();

    if req.name.is_none() {
        reasons.push("name is required".to_string());
    }
    if req.description.is_none() {
        reasons.push("description is required".to_string());
    }
    if req.is_on_diet.is_none() {
        reasons.push("isOnDiet is required".to_string());
    }
    let occurred_at = match req.date.as_ref().map(|d| d.to_instant()) {
        Some(Ok(dt)) => Some(dt),
        Some(Err(reason)) => {
            reasons.push(reason);
            None
        }
        None => {
            reasons.push("date is required".to_string());
            None
        }
    };

    match (req.name, req.description, occurred_at, req.is_on_diet) {
        (Some(name), Some(description), Some(occurred_at), Some(is_on_diet))
            if reasons.is_empty() =>
        {
            Validated::Valid(NewMeal {
                name,
                description,
                occurred_at,
                is_on_diet,
            })
        }
        _ => Validated::Invalid(reasons),
    }
}

pub fn validate_update(req: UpdateMealRequest) -> Validated<MealPatch> {
    let occurred_at = match req.date.as_ref().map(|d| d.to_instant()).transpose() {
        Ok(dt) => dt,
        Err(reason) => return Validated::Invalid(vec![reason]),
    };
    Validated::Valid(MealPatch {
        name: req.name,
        description: req.description,
        occurred_at,
        is_on_diet: req.is_on_diet,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meals::dates::DateInput;
    use time::macros::datetime;

    fn full_request() -> CreateMealRequest {
        CreateMealRequest {
            name: Some("Salad".into()),
            description: Some("greens and tuna".into()),
            date: Some(DateInput::Text("25/12/2023".into())),
            is_on_diet: Some(true),
        }
    }

    #[test]
    fn complete_create_request_is_valid() {
        let Validated::Valid(meal) = validate_create(full_request()) else {
            panic!("expected valid");
        };
        assert_eq!(meal.name, "Salad");
        assert_eq!(meal.occurred_at, datetime!(2023-12-25 00:00 UTC));
        assert!(meal.is_on_diet);
    }

    #[test]
    fn every_missing_field_is_reported() {
        let Validated::Invalid(reasons) = validate_create(CreateMealRequest::default()) else {
            panic!("expected invalid");
        };
        assert_eq!(reasons.len(), 4);
        assert!(reasons.iter().any(|r| r.contains("name")));
        assert!(reasons.iter().any(|r| r.contains("description")));
        assert!(reasons.iter().any(|r| r.contains("date")));
        assert!(reasons.iter().any(|r| r.contains("isOnDiet")));
    }

    #[test]
    fn unparseable_date_rejects_create() {
        let req = CreateMealRequest {
            date: Some(DateInput::Text("next tuesday".into())),
            ..full_request()
        };
        let reasons = validate_create(req).into_result().unwrap_err();
        assert_eq!(reasons.len(), 1);
        assert!(reasons[0].contains("next tuesday"));
    }

    #[test]
    fn empty_update_is_an_empty_patch() {
        let patch = validate_update(UpdateMealRequest::default())
            .into_result()
            .unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn update_parses_date() {
        let req = UpdateMealRequest {
            date: Some(DateInput::Text("2023-12-25T00:00:00Z".into())),
            ..Default::default()
        };
        let patch = validate_update(req).into_result().unwrap();
        assert_eq!(patch.occurred_at, Some(datetime!(2023-12-25 00:00 UTC)));
        assert_eq!(patch.name, None);
    }

    #[test]
    fn update_with_bad_date_is_invalid() {
        let req = UpdateMealRequest {
            is_on_diet: Some(false),
            date: Some(DateInput::Text("99/99/2023".into())),
            ..Default::default()
        };
        assert!(matches!(validate_update(req), Validated::Invalid(_)));
    }

    #[test]
    fn request_accepts_occurred_at_alias() {
        let req: CreateMealRequest = serde_json::from_str(
            r#"{"name":"a","description":"b","occurredAt":"2023-12-25","isOnDiet":false}"#,
        )
        .unwrap();
        assert!(matches!(validate_create(req), Validated::Valid(_)));
    }
}
