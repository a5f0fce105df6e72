use bson::doc;
use mongodb::{Collection, Database};

use crate::modules::app::model::{App, APP_COLLECTION};

pub struct AppCrud {
    collection: Collection<App>,
}

impl AppCrud {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(APP_COLLECTION),
        }
    }

    pub async fn exists(&self, id: &str) -> Result<bool, mongodb::error::Error> {
        Ok(self.collection.count_documents(doc! { "id": id }).await? > 0)
    }

    /// Insert each default app whose business id is not present yet.
    pub async fn seed_defaults(&self) -> Result<Vec<App>, mongodb::error::Error> {
        let mut inserted = Vec::new();

        for app in App::defaults() {
            if self.exists(&app.id).await? {
                continue;
            }
            self.collection.insert_one(&app).await?;
            inserted.push(app);
        }

        Ok(inserted)
    }
}
