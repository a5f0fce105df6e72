use bson::{doc, Document};
use mongodb::{options::IndexOptions, Database, IndexModel};
use tracing::info;

use crate::modules::app::model::APP_COLLECTION;
use crate::modules::user::model::ADMIN_COLLECTION;

pub const TOPIC_COLLECTION: &str = "topics_uuid_map";

pub const REQUIRED_COLLECTIONS: [&str; 3] = [ADMIN_COLLECTION, TOPIC_COLLECTION, APP_COLLECTION];

/// Create any of `names` that do not exist yet. Returns the ones created.
pub async fn ensure_collections(db: &Database, names: &[&str]) -> Result<Vec<String>, mongodb::error::Error> {
    let existing = db.list_collection_names().await?;
    let mut created = Vec::new();

    for name in names {
        if existing.iter().any(|e| e == name) {
            continue;
        }
        db.create_collection(*name).await?;
        info!(collection = name, "collection created");
        created.push(name.to_string());
    }

    Ok(created)
}

fn index(keys: Document, unique: bool) -> IndexModel {
    let options = unique.then(|| IndexOptions::builder().unique(true).build());
    IndexModel::builder().keys(keys).options(options).build()
}

/// Index definitions per collection. Creating an existing index is a no-op on the server.
pub fn index_plan() -> Vec<(&'static str, Vec<IndexModel>)> {
    vec![
        (ADMIN_COLLECTION, vec![index(doc! { "email": 1 }, true)]),
        (
            TOPIC_COLLECTION,
            vec![
                index(doc! { "id": 1 }, true),
                index(doc! { "uuid": 1 }, true),
                index(doc! { "area": 1 }, false),
                index(doc! { "enabled": 1 }, false),
                index(doc! { "rootId": 1 }, false),
                index(doc! { "area": 1, "enabled": 1 }, false),
            ],
        ),
    ]
}

pub async fn ensure_indexes(db: &Database) -> Result<usize, mongodb::error::Error> {
    let mut total = 0;

    for (collection, indexes) in index_plan() {
        let result = db
            .collection::<Document>(collection)
            .create_indexes(indexes)
            .await?;
        info!(collection, indexes = ?result.index_names, "indexes ensured");
        total += result.index_names.len();
    }

    Ok(total)
}
