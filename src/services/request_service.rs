// ==================== DONATION REQUESTS ====================

use crate::{
    database::{id_filter, CollectionName, DocumentStore},
    models::{to_document, DeleteResponse, InsertResponse, NewDonationRequest},
    utils::error::{AppError, AppResult},
};
use mongodb::bson::{doc, Document};

pub async fn list_requests(store: &dyn DocumentStore) -> AppResult<Vec<Document>> {
    store.find(CollectionName::Request, doc! {}).await
}

/// Requests made against one donator. An empty result is a 404, not `[]`.
pub async fn requests_for_donator(store: &dyn DocumentStore, email: &str) -> AppResult<Vec<Document>> {
    if email.trim().is_empty() {
        return Err(AppError::Validation("Email parameter is missing".to_string()));
    }

    let requests = store
        .find(CollectionName::Request, doc! { "donator.email": email })
        .await?;

    if requests.is_empty() {
        return Err(AppError::NotFound("No requests found for this email".to_string()));
    }
    Ok(requests)
}

pub async fn add_request(store: &dyn DocumentStore, request: &NewDonationRequest) -> AppResult<InsertResponse> {
    let document = to_document(request)?;
    let outcome = store.insert_one(CollectionName::Request, document).await?;
    Ok(outcome.into())
}

pub async fn delete_request(store: &dyn DocumentStore, id: &str) -> AppResult<DeleteResponse> {
    let outcome = store.delete_one(CollectionName::Request, id_filter(id)?).await?;
    Ok(outcome.into())
}
