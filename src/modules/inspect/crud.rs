use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::Database;

/// Collections that have held account documents at one point or another.
pub const CANDIDATE_COLLECTIONS: [&str; 4] = ["user", "users", "admin", "admins"];

const SECRET_FIELDS: [&str; 1] = ["password"];
const MASK: &str = "********";

#[derive(Debug)]
pub struct CollectionSnapshot {
    pub name: String,
    pub count: u64,
    pub samples: Vec<Document>,
}

pub async fn collection_names(db: &Database) -> Result<Vec<String>, mongodb::error::Error> {
    let mut names = db.list_collection_names().await?;
    names.sort();
    Ok(names)
}

pub async fn snapshot(db: &Database, name: &str, limit: i64) -> Result<CollectionSnapshot, mongodb::error::Error> {
    let collection = db.collection::<Document>(name);
    let count = collection.count_documents(doc! {}).await?;

    let samples: Vec<Document> = if count > 0 {
        collection.find(doc! {}).limit(limit).await?.try_collect().await?
    } else {
        Vec::new()
    };

    Ok(CollectionSnapshot {
        name: name.to_string(),
        count,
        samples,
    })
}

pub async fn find_by_email(db: &Database, name: &str, email: &str) -> Result<Option<Document>, mongodb::error::Error> {
    db.collection::<Document>(name)
        .find_one(doc! { "email": email })
        .await
}

/// Copy of `document` with secret fields replaced, safe to print.
pub fn mask_secrets(document: &Document) -> Document {
    let mut masked = document.clone();
    for field in SECRET_FIELDS {
        if masked.contains_key(field) {
            masked.insert(field, MASK);
        }
    }
    masked
}

/// Relaxed extended JSON, pretty printed, with secrets masked.
pub fn render(document: &Document) -> String {
    let json = Bson::Document(mask_secrets(document)).into_relaxed_extjson();
    serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
}
