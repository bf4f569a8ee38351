use super::{CollectionName, DeleteOutcome, DocumentStore, InsertOutcome, UpdateOutcome};
use crate::utils::error::AppResult;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database, IndexModel};
use std::time::Duration;

#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn new(uri: &str, db_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri).await?;

        client_options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
        client_options.app_name = Some("food-station".to_string());

        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(2);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // Test connection
        db.run_command(doc! { "ping": 1 }).await?;

        let store = Self { db };
        store.ensure_indexes().await;

        Ok(store)
    }

    /// Lookup indexes for the two filter keys the router queries by.
    async fn ensure_indexes(&self) {
        log::info!("🔧 Creating database indexes...");

        let indexes = [
            (CollectionName::Food, "email"),
            (CollectionName::Request, "donator.email"),
        ];

        for (collection, key) in indexes {
            let mut keys = Document::new();
            keys.insert(key, 1);
            let model = IndexModel::builder().keys(keys).build();
            match self.collection(collection).create_index(model).await {
                Ok(_) => log::info!("   ✅ Index ready: {}({})", collection.as_str(), key),
                Err(e) => log::warn!("   ⚠️  Could not create index {}({}): {}", collection.as_str(), key, e),
            }
        }
    }

    fn collection(&self, name: CollectionName) -> Collection<Document> {
        self.db.collection(name.as_str())
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, collection: CollectionName, filter: Document) -> AppResult<Vec<Document>> {
        let cursor = self.collection(collection).find(filter).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_one(&self, collection: CollectionName, filter: Document) -> AppResult<Option<Document>> {
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn insert_one(&self, collection: CollectionName, document: Document) -> AppResult<InsertOutcome> {
        let result = self.collection(collection).insert_one(document).await?;
        Ok(InsertOutcome {
            inserted_id: result.inserted_id,
        })
    }

    async fn update_one(
        &self,
        collection: CollectionName,
        filter: Document,
        changes: Document,
    ) -> AppResult<UpdateOutcome> {
        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$set": changes })
            .await?;
        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete_one(&self, collection: CollectionName, filter: Document) -> AppResult<DeleteOutcome> {
        let result = self.collection(collection).delete_one(filter).await?;
        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::id_filter;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_roundtrip() {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let store = MongoStore::new(&uri, "foodStation_test").await.unwrap();
        store.ping().await.unwrap();

        let inserted = store
            .insert_one(CollectionName::Food, doc! { "food_name": "Rice", "email": "a@b.c" })
            .await
            .unwrap();
        let id = inserted.inserted_id.as_object_id().unwrap().to_hex();

        let found = store
            .find_one(CollectionName::Food, id_filter(&id).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get_str("food_name").unwrap(), "Rice");

        let deleted = store
            .delete_one(CollectionName::Food, id_filter(&id).unwrap())
            .await
            .unwrap();
        assert_eq!(deleted.deleted_count, 1);
    }
}
