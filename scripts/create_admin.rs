//! Run with: cargo run --bin create_admin -- --email admin@example.com --app-id 1

use std::env;

use anyhow::Context;
use clap::Parser;
use opo_maintenance::config::{database, logging, source};
use opo_maintenance::modules::user::{controller, schema::CreateAdminRequest};

/// Create (or replace) the admin account for an email address.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Admin email address.
    #[arg(long)]
    email: String,

    /// App area: 1 = PN (Policía Nacional), 2 = PS (Policía Local/Guardia Civil).
    #[arg(long)]
    app_id: String,

    /// Password. Falls back to ADMIN_PASSWORD, then an interactive prompt.
    #[arg(long)]
    password: Option<String>,

    /// MongoDB connection string. Falls back to DB_URL/MONGO_URL in .env, then the environment.
    #[arg(long)]
    db_url: Option<String>,
}

fn read_password(arg: Option<String>) -> anyhow::Result<String> {
    if let Some(password) = arg.or_else(|| env::var("ADMIN_PASSWORD").ok()) {
        return Ok(password);
    }

    let first = rpassword::prompt_password("Admin password: ").context("could not read password")?;
    let second = rpassword::prompt_password("Repeat password: ").context("could not read password")?;
    anyhow::ensure!(first == second, "passwords do not match");

    Ok(first)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let args = Args::parse();
    let request = CreateAdminRequest {
        email: args.email,
        password: read_password(args.password)?,
        app_id: args.app_id,
    };

    let state = database::connect(&source::default_sources(args.db_url)).await?;
    let user = controller::create_admin(&state.db, request).await?;

    println!("✓ Admin account created");
    println!("  Email:  {}", user.email);
    println!("  App ID: {} ({})", user.app_id, user.app_label());
    println!("  ID:     {}", user.id);

    Ok(())
}
