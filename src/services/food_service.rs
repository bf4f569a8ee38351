// ==================== FOOD LISTINGS ====================
// One store call per operation against the "food" collection.

use crate::{
    database::{id_filter, CollectionName, DocumentStore},
    models::{to_document, DeleteResponse, FoodUpdate, InsertResponse, NewFood},
    utils::error::{AppError, AppResult},
};
use mongodb::bson::{doc, Document};

/// All food, or only the listings of one donor when `email` is non-empty.
pub async fn list_food(store: &dyn DocumentStore, email: Option<&str>) -> AppResult<Vec<Document>> {
    let filter = match email.filter(|e| !e.is_empty()) {
        Some(email) => doc! { "email": email },
        None => doc! {},
    };
    store.find(CollectionName::Food, filter).await
}

pub async fn add_food(store: &dyn DocumentStore, food: &NewFood) -> AppResult<InsertResponse> {
    let document = to_document(food)?;
    let outcome = store.insert_one(CollectionName::Food, document).await?;
    Ok(outcome.into())
}

pub async fn get_food(store: &dyn DocumentStore, id: &str) -> AppResult<Option<Document>> {
    store.find_one(CollectionName::Food, id_filter(id)?).await
}

/// Validates before touching the store, so a rejected body never reaches it.
pub async fn update_food(store: &dyn DocumentStore, id: &str, update: &FoodUpdate) -> AppResult<()> {
    update.validate()?;

    let changes = to_document(update)?;
    let outcome = store
        .update_one(CollectionName::Food, id_filter(id)?, changes)
        .await?;

    if outcome.matched_count == 0 {
        return Err(AppError::NotFound("Food not found".to_string()));
    }
    Ok(())
}

pub async fn delete_food(store: &dyn DocumentStore, id: &str) -> AppResult<DeleteResponse> {
    let outcome = store.delete_one(CollectionName::Food, id_filter(id)?).await?;
    Ok(outcome.into())
}
