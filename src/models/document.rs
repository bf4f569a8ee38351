use crate::database::{DeleteOutcome, InsertOutcome};
use crate::utils::error::AppResult;
use mongodb::bson::{self, Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Extra fields accepted alongside the typed ones in a request body.
pub type ExtraFields = Map<String, Value>;

/// A typed body field that is absent (`None`), sent as `null` (`Some(None)`) or set.
pub type Nullable<T> = Option<Option<T>>;

/// Keeps an explicit `null` as `Some(None)` so it is stored like any other value.
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Nullable<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Shape of a MongoDB `insertOne` result, as the front end consumes it.
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl From<InsertOutcome> for InsertResponse {
    fn from(outcome: InsertOutcome) -> Self {
        let inserted_id = match outcome.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        };
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteOutcome> for DeleteResponse {
    fn from(outcome: DeleteOutcome) -> Self {
        Self {
            acknowledged: true,
            deleted_count: outcome.deleted_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Serializes a typed body into a document ready for insertion.
///
/// A client-supplied `_id` is dropped: identifiers are always store-assigned.
pub fn to_document<T: Serialize>(body: &T) -> AppResult<Document> {
    let mut document = bson::to_document(body)?;
    document.remove("_id");
    Ok(document)
}

/// Renders a stored document as plain JSON with `_id` as a hex string.
pub fn document_to_json(document: Document) -> Value {
    bson_to_json(Bson::Document(document))
}

pub fn documents_to_json(documents: Vec<Document>) -> Value {
    Value::Array(documents.into_iter().map(document_to_json).collect())
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(document) => Value::Object(
            document
                .into_iter()
                .map(|(key, value)| (key, bson_to_json(value)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn test_document_to_json_flattens_object_ids() {
        let oid = ObjectId::new();
        let nested = ObjectId::new();
        let rendered = document_to_json(doc! {
            "_id": oid,
            "food_name": "Apples",
            "food_quantity": 4,
            "tags": [nested, "fresh"],
            "donator": { "email": "d@x.org" },
        });

        assert_eq!(
            rendered,
            json!({
                "_id": oid.to_hex(),
                "food_name": "Apples",
                "food_quantity": 4,
                "tags": [nested.to_hex(), "fresh"],
                "donator": { "email": "d@x.org" },
            })
        );
    }

    #[test]
    fn test_insert_response_uses_hex_id() {
        let oid = ObjectId::new();
        let response = InsertResponse::from(InsertOutcome {
            inserted_id: Bson::ObjectId(oid),
        });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "acknowledged": true, "insertedId": oid.to_hex() })
        );
    }

    #[derive(Serialize, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "deserialize_nullable", skip_serializing_if = "Option::is_none")]
        email: Nullable<String>,
    }

    #[test]
    fn test_nullable_keeps_explicit_null() {
        let absent: Sample = serde_json::from_value(json!({})).unwrap();
        let null: Sample = serde_json::from_value(json!({ "email": null })).unwrap();
        let set: Sample = serde_json::from_value(json!({ "email": "a@x.org" })).unwrap();

        assert_eq!(absent.email, None);
        assert_eq!(null.email, Some(None));
        assert_eq!(set.email, Some(Some("a@x.org".to_string())));

        assert!(to_document(&absent).unwrap().get("email").is_none());
        assert_eq!(to_document(&null).unwrap().get("email"), Some(&Bson::Null));
    }

    #[test]
    fn test_to_document_drops_client_id() {
        let body = json!({ "_id": "mine", "name": "x" });
        let document = to_document(&body).unwrap();
        assert!(document.get("_id").is_none());
        assert_eq!(document.get_str("name").unwrap(), "x");
    }
}
