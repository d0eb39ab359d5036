//! Migration CLI tool.
//!
//! Runs the same migrations the API server applies on start against
//! `DATABASE_URL`. Logging is set up by the sea-orm CLI itself.

use sea_orm_migration::prelude::*;
use summit_infra::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    cli::run_cli(Migrator).await;
}
