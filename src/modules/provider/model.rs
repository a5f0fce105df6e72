use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const PROVIDER_COLLECTION: &str = "ad_providers";

/// An advertising network the apps can show ads from.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdProvider {
    #[serde(rename = "_id")]
    pub id: String,
    pub provider_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub enabled: bool,
    pub order: i32,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl AdProvider {
    pub fn new(provider_id: &str, name: &str, icon: &str, color: &str, order: i32) -> Self {
        let now = bson::DateTime::now();
        Self {
            id: Uuid::new_v4().to_string(),
            provider_id: provider_id.to_string(),
            name: name.to_string(),
            icon: Some(icon.to_string()),
            color: Some(color.to_string()),
            enabled: true,
            order,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn defaults() -> Vec<AdProvider> {
        vec![
            AdProvider::new("admob", "AdMob", "ads_click", "#4285f4", 1),
            AdProvider::new("facebook", "Facebook Audience Network", "campaign", "#1877f2", 2),
            AdProvider::new("unity", "Unity Ads", "videogame_asset", "#000000", 3),
            AdProvider::new("custom", "Personalizado", "settings", "#757575", 99),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn defaults_are_enabled_with_unique_ids() {
        let providers = AdProvider::defaults();

        assert_eq!(providers.len(), 4);
        assert!(providers.iter().all(|p| p.enabled));

        let ids: HashSet<_> = providers.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), providers.len());

        let slugs: Vec<_> = providers.iter().map(|p| p.provider_id.as_str()).collect();
        assert_eq!(slugs, vec!["admob", "facebook", "unity", "custom"]);
    }

    #[test]
    fn custom_provider_sorts_last() {
        let providers = AdProvider::defaults();
        let max = providers.iter().max_by_key(|p| p.order).unwrap();

        assert_eq!(max.provider_id, "custom");
        assert_eq!(max.order, 99);
    }
}
