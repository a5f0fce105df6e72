use bson::{doc, Document};
use mongodb::{Collection, Database};

use crate::modules::user::model::{AdminUser, ADMIN_COLLECTION};

pub struct UserCrud {
    collection: Collection<AdminUser>,
    raw: Collection<Document>,
}

impl UserCrud {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(ADMIN_COLLECTION),
            raw: db.collection(ADMIN_COLLECTION),
        }
    }

    pub async fn delete_by_email(&self, email: &str) -> Result<u64, mongodb::error::Error> {
        let result = self.collection.delete_many(doc! { "email": email }).await?;
        Ok(result.deleted_count)
    }

    pub async fn create(&self, user: &AdminUser) -> Result<(), mongodb::error::Error> {
        self.collection.insert_one(user).await?;
        Ok(())
    }

    /// Stored hash for `email`, read untyped so legacy documents still load.
    pub async fn password_hash(&self, email: &str) -> Result<Option<String>, mongodb::error::Error> {
        let user = self.raw.find_one(doc! { "email": email }).await?;

        Ok(user.and_then(|u| u.get_str("password").ok().map(str::to_string)))
    }
}
