pub mod app;
pub mod backfill;
pub mod inspect;
pub mod provider;
pub mod setup;
pub mod user;
