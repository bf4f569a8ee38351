use super::document::{deserialize_nullable, ExtraFields, Nullable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Donator {
    /// Lookup key for `GET /request/{email}`.
    #[serde(default, deserialize_with = "deserialize_nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub email: Nullable<String>,
    #[serde(default, deserialize_with = "deserialize_nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub name: Nullable<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: ExtraFields,
}

/// Body of `POST /request`: a pickup request against a donator's listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewDonationRequest {
    #[serde(default, deserialize_with = "deserialize_nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Donator>)]
    pub donator: Nullable<Donator>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: ExtraFields,
}

impl NewDonationRequest {
    pub fn donator_email(&self) -> Option<&str> {
        self.donator
            .as_ref()
            .and_then(Option::as_ref)
            .and_then(|d| d.email.as_ref())
            .and_then(Option::as_deref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::to_document;
    use serde_json::json;

    #[test]
    fn test_donator_email_lands_at_dotted_path() {
        let request: NewDonationRequest = serde_json::from_value(json!({
            "food_id": "abc",
            "donator": { "email": "d@x.org", "name": "Dee", "phone": "555" },
        }))
        .unwrap();

        let document = to_document(&request).unwrap();
        let donator = document.get_document("donator").unwrap();
        assert_eq!(donator.get_str("email").unwrap(), "d@x.org");
        assert_eq!(donator.get_str("phone").unwrap(), "555");
        assert_eq!(document.get_str("food_id").unwrap(), "abc");
    }

    #[test]
    fn test_null_donator_is_stored() {
        let request: NewDonationRequest = serde_json::from_value(json!({ "donator": null })).unwrap();
        assert_eq!(request.donator_email(), None);

        let document = to_document(&request).unwrap();
        assert_eq!(document.get("donator"), Some(&mongodb::bson::Bson::Null));
    }
}
