use super::document::{deserialize_nullable, ExtraFields, Nullable};
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// `food_quantity` is sent either as a number or as free text ("3 boxes").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum Quantity {
    Count(i64),
    Amount(f64),
    Text(String),
}

impl Quantity {
    fn is_blank(&self) -> bool {
        match self {
            Quantity::Count(n) => *n == 0,
            Quantity::Amount(n) => *n == 0.0 || n.is_nan(),
            Quantity::Text(s) => s.is_empty(),
        }
    }
}

/// Body of `POST /food`. No field is required on create, and `null` is stored as sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewFood {
    #[serde(default, deserialize_with = "deserialize_nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub food_name: Nullable<String>,
    #[serde(default, deserialize_with = "deserialize_nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Quantity>)]
    pub food_quantity: Nullable<Quantity>,
    /// Donor email, used by `GET /food?email=`.
    #[serde(default, deserialize_with = "deserialize_nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub email: Nullable<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: ExtraFields,
}

/// Body of `PATCH /food/{id}`; every field present is `$set` on the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FoodUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_quantity: Option<Quantity>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: ExtraFields,
}

impl FoodUpdate {
    /// `food_name` and `food_quantity` must both be present and non-empty.
    pub fn validate(&self) -> AppResult<()> {
        let has_name = self.food_name.as_deref().is_some_and(|name| !name.is_empty());
        let has_quantity = self.food_quantity.as_ref().is_some_and(|q| !q.is_blank());

        if has_name && has_quantity {
            Ok(())
        } else {
            Err(AppError::Validation("Required fields missing".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update(body: serde_json::Value) -> FoodUpdate {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_quantity_accepts_numbers_and_text() {
        assert_eq!(serde_json::from_value::<Quantity>(json!(3)).unwrap(), Quantity::Count(3));
        assert_eq!(serde_json::from_value::<Quantity>(json!(1.5)).unwrap(), Quantity::Amount(1.5));
        assert_eq!(
            serde_json::from_value::<Quantity>(json!("2 boxes")).unwrap(),
            Quantity::Text("2 boxes".to_string())
        );
    }

    #[test]
    fn test_validate_requires_name_and_quantity() {
        assert!(update(json!({ "food_name": "Rice", "food_quantity": 2 })).validate().is_ok());
        assert!(update(json!({ "food_name": "Rice", "food_quantity": "2kg" })).validate().is_ok());

        assert!(update(json!({ "food_name": "Rice" })).validate().is_err());
        assert!(update(json!({ "food_quantity": 2 })).validate().is_err());
        assert!(update(json!({ "food_name": "", "food_quantity": 2 })).validate().is_err());
        assert!(update(json!({ "food_name": "Rice", "food_quantity": 0 })).validate().is_err());
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let food: NewFood = serde_json::from_value(json!({
            "food_name": "Rice",
            "pickup_location": "Dock 4",
            "expired_date": "2024-05-01",
        }))
        .unwrap();

        assert_eq!(food.extra.len(), 2);
        assert_eq!(food.extra["pickup_location"], json!("Dock 4"));
    }

    #[test]
    fn test_new_food_keeps_null_fields() {
        let food: NewFood = serde_json::from_value(json!({
            "food_name": "Soup",
            "food_quantity": null,
            "email": null,
        }))
        .unwrap();

        assert_eq!(food.food_name, Some(Some("Soup".to_string())));
        assert_eq!(food.food_quantity, Some(None));
        assert_eq!(food.email, Some(None));
        assert!(food.extra.is_empty());
    }
}
