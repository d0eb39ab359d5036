//! # Summit Social API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => fatal("Invalid configuration", &e),
    };

    tracing::info!(
        "Starting Summit Social API Server on {}:{}",
        config.host,
        config.port
    );

    // Storage is connected and migrated before the listener opens.
    let state = match AppState::new(config.database.as_ref()).await {
        Ok(state) => state,
        Err(e) => fatal("Failed to initialize storage", &e),
    };

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

/// Log a startup failure and terminate the process.
fn fatal(context: &str, err: &dyn std::error::Error) -> ! {
    tracing::error!(error = %err, "{}", context);
    std::process::exit(1);
}
