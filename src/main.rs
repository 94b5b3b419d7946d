mod models;
mod handlers;
mod routes;
mod docs;
mod config;
mod probes;
mod state;

use axum::Router;
use config::Config;
use docs::ApiDoc;
use probes::{PgProbe, Probe, RedisProbe};
use routes::create_health_routes;
use state::AppState;
use std::panic;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main(flavor = "current_thread")]
async fn main() {

    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Load configuration before tracing so LOG_LEVEL can shape the filter
    let config_result = Config::load();
    let config = config_result.as_ref().cloned().unwrap_or_default();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.default_log_filter().into()))
        .init();

    info!("Starting server...");
    if let Err(e) = &config_result {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
    }

    // Build dependency probes
    let database: Arc<dyn Probe> = match PgProbe::new(config.db_url.as_deref(), config.probe_timeout()) {
        Ok(probe) => Arc::new(probe),
        Err(e) => {
            error!("Invalid database URL: {}", e);
            Arc::new(PgProbe::disabled(config.probe_timeout()))
        }
    };
    if config.db_url.is_none() {
        warn!("No database URL configured - readiness will report the database as down");
    }

    let cache: Arc<dyn Probe> = match RedisProbe::new(config.redis_url.as_deref(), config.probe_timeout()) {
        Ok(probe) => Arc::new(probe),
        Err(e) => {
            error!("Invalid Redis URL: {}", e);
            Arc::new(RedisProbe::disabled(config.probe_timeout()))
        }
    };
    if config.redis_url.is_none() {
        warn!("No Redis URL configured - readiness will report Redis as down");
    }

    let state = AppState::new(&config.service_name, database, cache);

    // Combine all routes
    let app_routes = Router::new()
        .merge(create_health_routes(state))
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add tracing layer
        .layer(TraceLayer::new_for_http());

    // Start the HTTP server
    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to {}", config.server_address()));

    info!("🚀 Server running on http://{}", config.server_address());
    info!("📚 Swagger UI available at http://{}/swagger", config.server_address());

    axum::serve(listener, app_routes)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed to start");

    info!("Server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
