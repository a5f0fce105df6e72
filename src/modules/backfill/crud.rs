use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use std::future::Future;

use crate::config::database;
use crate::modules::backfill::model::UpdateOutcome;

/// The handful of queries a backfill needs from a collection.
pub trait FieldStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn ping(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;

    fn count_all(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    fn count_missing(&self, field: &str) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    fn count_equal(
        &self,
        field: &str,
        value: &Bson,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Counts documents whose field differs from `value`, absent fields included.
    fn count_not_equal(
        &self,
        field: &str,
        value: &Bson,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Set `field = value` on every document lacking `field`, in one bulk write.
    fn set_where_missing(
        &self,
        field: &str,
        value: &Bson,
    ) -> impl Future<Output = Result<UpdateOutcome, Self::Error>> + Send;
}

pub struct BackfillCrud {
    db: Database,
    collection: Collection<Document>,
}

impl BackfillCrud {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            db: db.clone(),
            collection: db.collection(collection_name),
        }
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    pub async fn samples_with(
        &self,
        field: &str,
        value: &Bson,
        limit: i64,
    ) -> Result<Vec<Document>, mongodb::error::Error> {
        let cursor = self
            .collection
            .find(doc! { field: value.clone() })
            .limit(limit)
            .await?;

        cursor.try_collect().await
    }
}

impl FieldStore for BackfillCrud {
    type Error = mongodb::error::Error;

    async fn ping(&self) -> Result<(), Self::Error> {
        database::ping(&self.db).await
    }

    async fn count_all(&self) -> Result<u64, Self::Error> {
        self.collection.count_documents(doc! {}).await
    }

    async fn count_missing(&self, field: &str) -> Result<u64, Self::Error> {
        self.collection
            .count_documents(doc! { field: { "$exists": false } })
            .await
    }

    async fn count_equal(&self, field: &str, value: &Bson) -> Result<u64, Self::Error> {
        self.collection
            .count_documents(doc! { field: value.clone() })
            .await
    }

    async fn count_not_equal(&self, field: &str, value: &Bson) -> Result<u64, Self::Error> {
        self.collection
            .count_documents(doc! { field: { "$ne": value.clone() } })
            .await
    }

    async fn set_where_missing(&self, field: &str, value: &Bson) -> Result<UpdateOutcome, Self::Error> {
        let result = self
            .collection
            .update_many(
                doc! { field: { "$exists": false } },
                doc! { "$set": { field: value.clone() } },
            )
            .await?;

        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }
}
