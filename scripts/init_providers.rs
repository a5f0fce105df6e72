//! Run with: cargo run --bin init_providers -- [DB_URL]

use clap::Parser;
use opo_maintenance::config::{database, logging, source};
use opo_maintenance::modules::provider::crud::{ProviderCrud, SeedOutcome};

/// Insert the default advertising providers into an empty `ad_providers` collection.
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

    match ProviderCrud::new(&state.db).seed_defaults().await? {
        SeedOutcome::AlreadySeeded(count) => {
            println!("⚠️  {} provider(s) already exist, nothing inserted.", count);
            println!("   Remove the existing providers first to reinitialise.");
        }
        SeedOutcome::Inserted(providers) => {
            println!("✓ {} provider(s) inserted:", providers.len());
            for (i, provider) in providers.iter().enumerate() {
                println!(
                    "  {}. {} ({}) - {}",
                    i + 1,
                    provider.name,
                    provider.provider_id,
                    if provider.enabled { "enabled" } else { "disabled" }
                );
            }
        }
    }

    Ok(())
}
