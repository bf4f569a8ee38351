//! In-process document store.
//!
//! Mirrors the parts of MongoDB the router relies on: store-assigned
//! `ObjectId`s, insertion-ordered reads, equality filters over dotted paths
//! and top-level `$set` updates. Used by the test suites and by
//! `STORE_BACKEND=memory` for running without a database.

use super::{CollectionName, DeleteOutcome, DocumentStore, InsertOutcome, UpdateOutcome};
use crate::utils::error::AppResult;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<CollectionName, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

fn lookup<'a>(document: &'a Document, path: &str) -> Option<&'a Bson> {
    let mut segments = path.split('.');
    let mut current = document.get(segments.next()?)?;
    for segment in segments {
        current = match current {
            Bson::Document(inner) => inner.get(segment)?,
            _ => return None,
        };
    }
    Some(current)
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(path, expected)| lookup(document, path) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: CollectionName, filter: Document) -> AppResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|docs| docs.iter().filter(|d| matches(d, &filter)).cloned().collect())
            .unwrap_or_default())
    }

    async fn find_one(&self, collection: CollectionName, filter: Document) -> AppResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| matches(d, &filter)).cloned()))
    }

    async fn insert_one(&self, collection: CollectionName, mut document: Document) -> AppResult<InsertOutcome> {
        let inserted_id = match document.get("_id") {
            Some(id) => id.clone(),
            None => {
                let id = Bson::ObjectId(ObjectId::new());
                document.insert("_id", id.clone());
                id
            }
        };

        let mut collections = self.collections.write().await;
        collections.entry(collection).or_default().push(document);

        Ok(InsertOutcome { inserted_id })
    }

    async fn update_one(
        &self,
        collection: CollectionName,
        filter: Document,
        changes: Document,
    ) -> AppResult<UpdateOutcome> {
        let mut collections = self.collections.write().await;
        let target = collections
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|d| matches(d, &filter)));

        let Some(document) = target else {
            return Ok(UpdateOutcome {
                matched_count: 0,
                modified_count: 0,
            });
        };

        let mut modified = false;
        for (key, value) in changes {
            if document.get(&key) != Some(&value) {
                document.insert(key, value);
                modified = true;
            }
        }

        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }

    async fn delete_one(&self, collection: CollectionName, filter: Document) -> AppResult<DeleteOutcome> {
        let mut collections = self.collections.write().await;
        let deleted_count = match collections.get_mut(&collection) {
            Some(docs) => match docs.iter().position(|d| matches(d, &filter)) {
                Some(index) => {
                    docs.remove(index);
                    1
                }
                None => 0,
            },
            None => 0,
        };

        Ok(DeleteOutcome { deleted_count })
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_insert_assigns_object_id() {
        let store = MemoryStore::new();
        let outcome = store
            .insert_one(CollectionName::Food, doc! { "food_name": "Bread" })
            .await
            .unwrap();

        let oid = outcome.inserted_id.as_object_id().unwrap();
        let found = store
            .find_one(CollectionName::Food, doc! { "_id": oid })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get_str("food_name").unwrap(), "Bread");
    }

    #[tokio::test]
    async fn test_dotted_path_filter() {
        let store = MemoryStore::new();
        store
            .insert_one(CollectionName::Request, doc! { "donator": { "email": "a@x.org" } })
            .await
            .unwrap();
        store
            .insert_one(CollectionName::Request, doc! { "donator": { "email": "b@x.org" } })
            .await
            .unwrap();
        store
            .insert_one(CollectionName::Request, doc! { "donator": "a@x.org" })
            .await
            .unwrap();

        let found = store
            .find(CollectionName::Request, doc! { "donator.email": "a@x.org" })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryStore::new();
        store
            .insert_one(CollectionName::Users, doc! { "email": "a@x.org" })
            .await
            .unwrap();

        assert!(store.find(CollectionName::Food, doc! {}).await.unwrap().is_empty());
        assert_eq!(store.find(CollectionName::Users, doc! {}).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_counts() {
        let store = MemoryStore::new();
        let id = store
            .insert_one(CollectionName::Food, doc! { "food_name": "Rice", "food_quantity": 2 })
            .await
            .unwrap()
            .inserted_id;

        let changed = store
            .update_one(CollectionName::Food, doc! { "_id": id.clone() }, doc! { "food_quantity": 3 })
            .await
            .unwrap();
        assert_eq!(changed, UpdateOutcome { matched_count: 1, modified_count: 1 });

        let unchanged = store
            .update_one(CollectionName::Food, doc! { "_id": id }, doc! { "food_quantity": 3 })
            .await
            .unwrap();
        assert_eq!(unchanged, UpdateOutcome { matched_count: 1, modified_count: 0 });

        let missing = store
            .update_one(CollectionName::Food, doc! { "_id": ObjectId::new() }, doc! { "food_quantity": 3 })
            .await
            .unwrap();
        assert_eq!(missing.matched_count, 0);
    }

    #[tokio::test]
    async fn test_delete_removes_one() {
        let store = MemoryStore::new();
        for _ in 0..2 {
            store
                .insert_one(CollectionName::Food, doc! { "email": "same@x.org" })
                .await
                .unwrap();
        }

        let first = store
            .delete_one(CollectionName::Food, doc! { "email": "same@x.org" })
            .await
            .unwrap();
        assert_eq!(first.deleted_count, 1);
        assert_eq!(store.find(CollectionName::Food, doc! {}).await.unwrap().len(), 1);
    }
}
