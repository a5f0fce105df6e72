use mongodb::Database;

pub mod config;
pub mod modules;
pub mod services;

/// The database handle every maintenance task runs against.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}
