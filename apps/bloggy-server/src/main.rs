//! # Bloggy API Server
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

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(
        host = %config.host,
        port = config.port,
        "Starting Bloggy API Server"
    );

    let state = web::Data::new(AppState::new(&config).await);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
