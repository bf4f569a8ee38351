pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::utils::error::AppResult;
use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};

/// The three collections of the `foodStation` database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionName {
    Users,
    Food,
    Request,
}

impl CollectionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionName::Users => "users",
            CollectionName::Food => "food",
            CollectionName::Request => "request",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertOutcome {
    pub inserted_id: Bson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

/// Data-access seam between the router and the document engine.
///
/// Filters are equality matches on (possibly dotted) field paths. Each call
/// is exactly one collection operation; nothing is retried.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find(&self, collection: CollectionName, filter: Document) -> AppResult<Vec<Document>>;

    async fn find_one(&self, collection: CollectionName, filter: Document) -> AppResult<Option<Document>>;

    async fn insert_one(&self, collection: CollectionName, document: Document) -> AppResult<InsertOutcome>;

    /// Applies `changes` with field-set (`$set`) semantics to the first match.
    async fn update_one(
        &self,
        collection: CollectionName,
        filter: Document,
        changes: Document,
    ) -> AppResult<UpdateOutcome>;

    async fn delete_one(&self, collection: CollectionName, filter: Document) -> AppResult<DeleteOutcome>;

    async fn ping(&self) -> AppResult<()>;

    fn backend_name(&self) -> &'static str;
}

/// `{ _id: ObjectId(id) }`. A malformed id fails here as a store error.
pub fn id_filter(id: &str) -> AppResult<Document> {
    let oid = ObjectId::parse_str(id)?;
    Ok(doc! { "_id": oid })
}
