use bson::doc;
use mongodb::{Collection, Database};

use crate::modules::provider::model::{AdProvider, PROVIDER_COLLECTION};

#[derive(Debug)]
pub enum SeedOutcome {
    /// The collection already held this many providers; nothing was written.
    AlreadySeeded(u64),
    Inserted(Vec<AdProvider>),
}

pub struct ProviderCrud {
    collection: Collection<AdProvider>,
}

impl ProviderCrud {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(PROVIDER_COLLECTION),
        }
    }

    pub async fn count(&self) -> Result<u64, mongodb::error::Error> {
        self.collection.count_documents(doc! {}).await
    }

    /// Insert the default providers, but only into an empty collection.
    pub async fn seed_defaults(&self) -> Result<SeedOutcome, mongodb::error::Error> {
        let existing = self.count().await?;
        if existing > 0 {
            return Ok(SeedOutcome::AlreadySeeded(existing));
        }

        let providers = AdProvider::defaults();
        self.collection.insert_many(&providers).await?;

        Ok(SeedOutcome::Inserted(providers))
    }
}
