use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const APP_COLLECTION: &str = "apps";

/// An app area. `id` is the business key ("1" = PN, "2" = PS); `_id` is a UUID.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct App {
    #[serde(rename = "_id")]
    pub mongo_id: String,
    pub id: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub order: i32,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl App {
    pub fn new(id: &str, name: &str, description: &str, order: i32) -> Self {
        let now = bson::DateTime::now();
        Self {
            mongo_id: Uuid::new_v4().to_string(),
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            enabled: true,
            order,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn defaults() -> Vec<App> {
        vec![
            App::new("1", "Policía Nacional", "Área policía nacional", 1),
            App::new(
                "2",
                "Policía Local/Guardia Civil",
                "Área policía local y guardia civil",
                2,
            ),
        ]
    }
}
