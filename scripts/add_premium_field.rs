//! Run with: cargo run --bin add_premium_field -- [DB_URL]

use anyhow::Context;
use clap::Parser;
use opo_maintenance::config::{database, logging, source};
use opo_maintenance::modules::backfill::{controller, model::FieldMigration};

/// Set `premium: false` on every topic that has no `premium` field.
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

    let migration = FieldMigration::premium_topics();
    let (report, samples) = controller::run_migration(&state.db, &migration, 3)
        .await
        .context("could not backfill 'premium' on topics")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n{}", report);

    if !samples.is_empty() {
        println!("\nSample topics with premium = false:");
        for (i, topic) in samples.iter().enumerate() {
            println!(
                "  {}. ID: {}, Title: {}",
                i + 1,
                topic.get("id").map(ToString::to_string).unwrap_or_else(|| "-".to_string()),
                topic.get_str("title").unwrap_or("-"),
            );
        }
    }

    Ok(())
}
