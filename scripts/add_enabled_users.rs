//! Run with: cargo run --bin add_enabled_users -- [DB_URL]

use anyhow::Context;
use clap::Parser;
use opo_maintenance::config::{database, logging, source};
use opo_maintenance::modules::backfill::{controller, model::FieldMigration};

/// Set `enabled: false` on every app user that has no `enabled` field.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// MongoDB connection string. Falls back to DB_URL/MONGO_URL in .env, then the environment.
    db_url: Option<String>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let args = Args::parse();
    let state = database::connect(&source::default_sources(args.db_url)).await?;

    let migration = FieldMigration::enabled_users();
    let (report, samples) = controller::run_migration(&state.db, &migration, 3)
        .await
        .context("could not backfill 'enabled' on users")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n{}", report);

    if !samples.is_empty() {
        println!("\nSample users with enabled = false:");
        for (i, user) in samples.iter().enumerate() {
            println!(
                "  {}. Name: {}, Email: {}, Area: {}",
                i + 1,
                user.get_str("name").unwrap_or("-"),
                user.get_str("email").unwrap_or("-"),
                user.get("area").map(ToString::to_string).unwrap_or_else(|| "-".to_string()),
            );
        }
    }

    Ok(())
}
