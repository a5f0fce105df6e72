use bson::Bson;
use serde::Serialize;
use std::fmt;

use crate::modules::setup::crud::TOPIC_COLLECTION;
use crate::modules::user::model::APP_USER_COLLECTION;

/// Result of a single conditional bulk update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackfillReport {
    pub field: String,
    pub missing_before: u64,
    pub matched_count: u64,
    pub modified_count: u64,
    pub total_after: u64,
    pub with_default_after: u64,
    pub without_default_after: u64,
}

impl BackfillReport {
    /// True when every document already had the field and no write was issued.
    pub fn is_noop(&self) -> bool {
        self.missing_before == 0
    }
}

impl fmt::Display for BackfillReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Documents missing '{}': {}", self.field, self.missing_before)?;
        if self.is_noop() {
            writeln!(f, "  nothing to update")?;
        } else {
            writeln!(f, "  matched:  {}", self.matched_count)?;
            writeln!(f, "  modified: {}", self.modified_count)?;
        }
        writeln!(f, "Final counts:")?;
        writeln!(f, "  total:         {}", self.total_after)?;
        writeln!(f, "  with default:  {}", self.with_default_after)?;
        write!(f, "  other values:  {}", self.without_default_after)
    }
}

/// A field to guarantee on every document of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMigration {
    pub collection: String,
    pub field: String,
    pub default: Bson,
}

impl FieldMigration {
    pub fn new(collection: &str, field: &str, default: impl Into<Bson>) -> Self {
        Self {
            collection: collection.to_string(),
            field: field.to_string(),
            default: default.into(),
        }
    }

    /// `enabled: false` on app users that predate account toggling.
    pub fn enabled_users() -> Self {
        Self::new(APP_USER_COLLECTION, "enabled", false)
    }

    /// `premium: false` on topics that predate premium content.
    pub fn premium_topics() -> Self {
        Self::new(TOPIC_COLLECTION, "premium", false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_default_to_false() {
        let enabled = FieldMigration::enabled_users();
        assert_eq!(enabled.collection, "users");
        assert_eq!(enabled.default, Bson::Boolean(false));

        let premium = FieldMigration::premium_topics();
        assert_eq!(premium.collection, "topics_uuid_map");
        assert_eq!(premium.field, "premium");
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = BackfillReport {
            field: "enabled".to_string(),
            missing_before: 3,
            matched_count: 3,
            modified_count: 3,
            total_after: 3,
            with_default_after: 3,
            without_default_after: 0,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["missingBefore"], 3);
        assert_eq!(json["withoutDefaultAfter"], 0);
        assert!(!report.is_noop());
    }

    #[test]
    fn noop_report_says_nothing_to_update() {
        let report = BackfillReport {
            field: "premium".to_string(),
            missing_before: 0,
            matched_count: 0,
            modified_count: 0,
            total_after: 0,
            with_default_after: 0,
            without_default_after: 0,
        };

        let text = report.to_string();
        assert!(text.contains("nothing to update"));
        assert!(!text.contains("modified"));
    }
}
