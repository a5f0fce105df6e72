use bson::{Bson, Document};
use mongodb::Database;
use thiserror::Error;
use tracing::{debug, info};

use crate::modules::backfill::crud::{BackfillCrud, FieldStore};
use crate::modules::backfill::model::{BackfillReport, FieldMigration};

type Source = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum BackfillError {
    #[error("Invalid field name {0:?}: {1}")]
    InvalidField(String, &'static str),
    #[error("Database unreachable: {0}")]
    ConnectivityError(#[source] Source),
    #[error("Count failed: {0}")]
    CountError(#[source] Source),
    #[error("Bulk update failed: {0}")]
    WriteError(#[source] Source),
}

/// Field names must be usable both as a `$exists` filter key and a `$set` target.
pub fn validate_field_name(field: &str) -> Result<(), BackfillError> {
    let invalid = |reason| Err(BackfillError::InvalidField(field.to_string(), reason));

    if field.trim().is_empty() {
        return invalid("must not be empty");
    }
    if field.starts_with('$') {
        return invalid("must not start with '$'");
    }
    if field.split('.').any(str::is_empty) {
        return invalid("dotted path has an empty segment");
    }

    Ok(())
}

/// Make sure every document in `store` has `field`, setting `default` where it is absent.
///
/// Documents that already carry the field are never touched: the only write is a
/// single bulk update matching `field` missing. Running it again is a no-op.
pub async fn backfill<S: FieldStore>(
    store: &S,
    field: &str,
    default: Bson,
) -> Result<BackfillReport, BackfillError> {
    validate_field_name(field)?;

    store
        .ping()
        .await
        .map_err(|e| BackfillError::ConnectivityError(Box::new(e)))?;

    let count_err = |e: S::Error| BackfillError::CountError(Box::new(e));

    let missing_before = store.count_missing(field).await.map_err(count_err)?;

    let outcome = if missing_before == 0 {
        debug!(field, "field already present on every document, skipping write");
        Default::default()
    } else {
        debug!(field, missing_before, default = %default, "setting default on missing documents");
        store
            .set_where_missing(field, &default)
            .await
            .map_err(|e| BackfillError::WriteError(Box::new(e)))?
    };

    let total_after = store.count_all().await.map_err(count_err)?;
    let with_default_after = store.count_equal(field, &default).await.map_err(count_err)?;
    let without_default_after = store
        .count_not_equal(field, &default)
        .await
        .map_err(count_err)?;

    Ok(BackfillReport {
        field: field.to_string(),
        missing_before,
        matched_count: outcome.matched_count,
        modified_count: outcome.modified_count,
        total_after,
        with_default_after,
        without_default_after,
    })
}

/// Run `migration` against `db` and fetch a few documents now holding the default.
pub async fn run_migration(
    db: &Database,
    migration: &FieldMigration,
    sample_limit: i64,
) -> Result<(BackfillReport, Vec<Document>), BackfillError> {
    let crud = BackfillCrud::new(db, &migration.collection);
    info!(
        collection = crud.collection_name(),
        field = %migration.field,
        default = %migration.default,
        "starting backfill"
    );

    let report = backfill(&crud, &migration.field, migration.default.clone()).await?;

    let samples = if sample_limit > 0 && report.with_default_after > 0 {
        crud.samples_with(&migration.field, &migration.default, sample_limit)
            .await
            .map_err(|e| BackfillError::CountError(Box::new(e)))?
    } else {
        Vec::new()
    };

    info!(
        collection = crud.collection_name(),
        missing_before = report.missing_before,
        modified = report.modified_count,
        "backfill finished"
    );

    Ok((report, samples))
}
