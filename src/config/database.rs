use bson::doc;
use mongodb::{Client, Database};
use thiserror::Error;
use tracing::info;

use crate::config::source::{self, ConfigError, ConnectionSource, ResolvedUri};
use crate::AppState;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Could not create MongoDB client: {0}")]
    Client(#[from] mongodb::error::Error),
}

/// Resolve the connection string from `sources`, then open `DB_NAME` on it.
///
/// The driver connects lazily, so reachability is only checked by [`ping`].
pub async fn connect(sources: &[ConnectionSource]) -> Result<AppState, DatabaseError> {
    let ResolvedUri { uri, source: origin } = source::resolve_uri(sources)?;
    let db_name = source::database_name();

    info!(uri = %source::redact(&uri), from = %origin, database = %db_name, "connecting to MongoDB");

    let client = Client::with_uri_str(&uri).await?;

    Ok(AppState {
        db: client.database(&db_name),
    })
}

/// Round-trip a `ping` command to prove the server is reachable.
pub async fn ping(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await.map(|_| ())
}
