//! Run with: cargo run --bin check_password -- --email admin@example.com admin123 12345678

use anyhow::{bail, Context};
use clap::Parser;
use opo_maintenance::config::{database, logging, source};
use opo_maintenance::modules::user::crud::UserCrud;
use opo_maintenance::services::password;

/// Test candidate passwords against a bcrypt hash, given directly or looked up by admin email.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// bcrypt hash to test against.
    #[arg(long, conflicts_with = "email")]
    hash: Option<String>,

    /// Look the hash up on the admin account with this email.
    #[arg(long)]
    email: Option<String>,

    /// Print a freshly generated hash for this password.
    #[arg(long)]
    generate: Option<String>,

    /// MongoDB connection string, only needed with --email.
    #[arg(long)]
    db_url: Option<String>,

    /// Passwords to try.
    candidates: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let args = Args::parse();

    let stored = match (args.hash, args.email) {
        (Some(hash), _) => Some(hash),
        (None, Some(email)) => {
            let state = database::connect(&source::default_sources(args.db_url)).await?;
            let hash = UserCrud::new(&state.db)
                .password_hash(&email)
                .await?
                .with_context(|| format!("no admin with email {email} or it has no password"))?;
            Some(hash)
        }
        (None, None) => None,
    };

    if let Some(stored) = stored {
        if args.candidates.is_empty() {
            bail!("give at least one candidate password");
        }

        println!("Testing {} candidate(s) against {}", args.candidates.len(), stored);
        for result in password::check_candidates(&stored, &args.candidates)? {
            let verdict = if result.matches { "✓ match" } else { "✗ no match" };
            println!("  {:?} -> {}", result.candidate, verdict);
        }
    } else if args.generate.is_none() {
        bail!("pass --hash or --email to test candidates, or --generate to hash a password");
    }

    if let Some(raw) = args.generate {
        println!("\nNew hash: {}", password::hash_password(&raw)?);
    }

    Ok(())
}
