//! Run with: cargo run --bin inspect_db -- [--email someone@example.com]

use clap::Parser;
use opo_maintenance::config::{database, logging, source};
use opo_maintenance::modules::inspect::crud::{self, render, CANDIDATE_COLLECTIONS};

/// List collections and dump the ones that may hold accounts. Passwords are masked.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Also look for a document with this email in each account collection.
    #[arg(long)]
    email: Option<String>,

    /// Documents to print per collection.
    #[arg(long, default_value_t = 5)]
    limit: i64,

    /// MongoDB connection string. Falls back to DB_URL/MONGO_URL in .env, then the environment.
    #[arg(long)]
    db_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let args = Args::parse();
    let state = database::connect(&source::default_sources(args.db_url)).await?;

    println!("Collections:");
    for name in crud::collection_names(&state.db).await? {
        println!("  - {}", name);
    }

    for name in CANDIDATE_COLLECTIONS {
        match crud::snapshot(&state.db, name, args.limit).await {
            Ok(snapshot) => {
                println!("\nCollection '{}': {} document(s)", snapshot.name, snapshot.count);
                for (i, document) in snapshot.samples.iter().enumerate() {
                    println!("Document {}:\n{}\n---", i + 1, render(document));
                }
            }
            Err(e) => println!("\n✗ Could not read collection '{}': {}", name, e),
        }
    }

    if let Some(email) = args.email {
        println!("\nLooking for {} in account collections:", email);
        for name in CANDIDATE_COLLECTIONS {
            match crud::find_by_email(&state.db, name, &email).await {
                Ok(Some(document)) => println!("✓ Found in '{}':\n{}", name, render(&document)),
                Ok(None) => {}
                Err(e) => tracing::warn!(collection = name, error = %e, "lookup failed"),
            }
        }
    }

    Ok(())
}
