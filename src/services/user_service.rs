use crate::{
    database::{CollectionName, DocumentStore},
    models::{to_document, InsertResponse, NewUser},
    utils::error::AppResult,
};
use mongodb::bson::{doc, Document};

pub async fn list_users(store: &dyn DocumentStore) -> AppResult<Vec<Document>> {
    store.find(CollectionName::Users, doc! {}).await
}

pub async fn add_user(store: &dyn DocumentStore, user: &NewUser) -> AppResult<InsertResponse> {
    let document = to_document(user)?;
    let outcome = store.insert_one(CollectionName::Users, document).await?;
    Ok(outcome.into())
}
