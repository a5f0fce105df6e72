//! Run with: cargo run --bin backfill_field -- --collection users --field enabled --default false

use anyhow::Context;
use bson::Bson;
use clap::Parser;
use opo_maintenance::config::{database, logging, source};
use opo_maintenance::modules::backfill::{controller, model::FieldMigration};
use opo_maintenance::modules::inspect::crud::render;

/// Give every document in a collection a field it is missing, leaving existing values alone.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Target collection.
    #[arg(long)]
    collection: String,

    /// Field to guarantee. Dotted paths address nested fields.
    #[arg(long)]
    field: String,

    /// Default value as extended JSON, e.g. `false`, `0`, `"basic"`.
    #[arg(long)]
    default: String,

    /// MongoDB connection string. Falls back to DB_URL/MONGO_URL in .env, then the environment.
    #[arg(long)]
    db_url: Option<String>,

    /// How many updated documents to print afterwards.
    #[arg(long, default_value_t = 3)]
    samples: i64,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn parse_default(raw: &str) -> anyhow::Result<Bson> {
    let json: serde_json::Value =
        serde_json::from_str(raw).with_context(|| format!("--default {raw:?} is not valid JSON"))?;
    Bson::try_from(json).with_context(|| format!("--default {raw:?} is not a BSON value"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let args = Args::parse();
    let default = parse_default(&args.default)?;
    let migration = FieldMigration::new(&args.collection, &args.field, default);

    let state = database::connect(&source::default_sources(args.db_url)).await?;

    let (report, samples) = controller::run_migration(&state.db, &migration, args.samples)
        .await
        .with_context(|| format!("could not backfill '{}' on {}", migration.field, migration.collection))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n{}", report);
    for document in &samples {
        println!("---\n{}", render(document));
    }

    Ok(())
}
