//! Run with: cargo run --bin init_db -- [DB_URL]

use clap::Parser;
use opo_maintenance::config::{database, logging, source};
use opo_maintenance::modules::app::crud::AppCrud;
use opo_maintenance::modules::setup::crud::{self, REQUIRED_COLLECTIONS};

/// Create the admin collections, their indexes and the initial apps. Safe to rerun.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// MongoDB connection string. Falls back to DB_URL/MONGO_URL in .env, then the environment.
    db_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let args = Args::parse();
    let state = database::connect(&source::default_sources(args.db_url)).await?;
    database::ping(&state.db).await?;

    let created = crud::ensure_collections(&state.db, &REQUIRED_COLLECTIONS).await?;
    if created.is_empty() {
        println!("✓ Collections already present");
    } else {
        println!("✓ Collections created: {}", created.join(", "));
    }

    let indexes = crud::ensure_indexes(&state.db).await?;
    println!("✓ {} indexes ensured", indexes);

    let apps = AppCrud::new(&state.db).seed_defaults().await?;
    if apps.is_empty() {
        println!("✓ Initial apps already present");
    } else {
        for app in &apps {
            println!("✓ App inserted: {} ({})", app.name, app.id);
        }
    }

    println!("\n✓ Database '{}' initialised", state.db.name());
    Ok(())
}
