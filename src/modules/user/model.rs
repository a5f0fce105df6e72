use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admin accounts live in `user`; app users live in `users`.
pub const ADMIN_COLLECTION: &str = "user";
pub const APP_USER_COLLECTION: &str = "users";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub app_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<bson::DateTime>,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl AdminUser {
    pub fn new(email: String, password_hash: String, app_id: String) -> Self {
        let now = bson::DateTime::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Administrador".to_string(),
            email,
            password: password_hash,
            app_id,
            last_login: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn app_label(&self) -> &'static str {
        app_label(&self.app_id).unwrap_or("unknown")
    }
}

/// Human name of an app area id.
pub fn app_label(app_id: &str) -> Option<&'static str> {
    match app_id {
        "1" => Some("PN (Policía Nacional)"),
        "2" => Some("PS (Policía Local/Guardia Civil)"),
        _ => None,
    }
}
