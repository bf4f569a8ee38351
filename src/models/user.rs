use super::document::{deserialize_nullable, ExtraFields, Nullable};
use serde::{Deserialize, Serialize};

/// Body of `POST /users`. Nothing is required and emails are not deduplicated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewUser {
    #[serde(default, deserialize_with = "deserialize_nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub name: Nullable<String>,
    #[serde(default, deserialize_with = "deserialize_nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub email: Nullable<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: ExtraFields,
}

impl NewUser {
    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().and_then(Option::as_deref)
    }
}
