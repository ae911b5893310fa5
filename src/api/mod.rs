pub mod config;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Result;
use tracing::{debug, error, info, instrument};

use crate::api::config::ApiConfig;
use crate::customer::CustomerStore;
use crate::validation::{ContactInfoValidator, PatternStore};

/// Registers the HTTP route table.
///
/// Shared with the integration tests so they exercise the same routing as
/// the real server.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(handlers::customer_form)))
        .service(web::resource("/customer").route(web::post().to(handlers::submit_customer)))
        .service(web::resource("/patterns").route(web::get().to(handlers::list_patterns)))
        .service(web::resource("/health").route(web::get().to(handlers::health_check)));
}

/// Starts the API server
///
/// Registers the shared state and route table, binds, and serves until
/// shutdown. The validator arrives fully initialized: misconfiguration was
/// already rejected before this point.
///
/// # Arguments
/// * `config` - Resolved API configuration
/// * `patterns` - Seeded pattern storage
/// * `customers` - Customer storage
/// * `validator` - Initialized contact info validator
///
/// # Returns
/// * `Result<()>` - Success or an error
#[instrument(skip(config, patterns, customers, validator))]
pub async fn start_server(
    config: ApiConfig,
    patterns: Arc<PatternStore>,
    customers: Arc<CustomerStore>,
    validator: Arc<ContactInfoValidator>,
) -> Result<()> {
    info!(
        "Starting contact validation API server on {}:{}",
        config.host, config.port
    );

    let host = config.host.clone();
    let port = config.port;

    let config_data = web::Data::new(config);
    let patterns_data = web::Data::new(patterns);
    let customers_data = web::Data::new(customers);
    let validator_data = web::Data::new(validator);

    debug!("Registering routes and shared state");
    let server_result = HttpServer::new(move || {
        App::new()
            .app_data(config_data.clone())
            .app_data(patterns_data.clone())
            .app_data(customers_data.clone())
            .app_data(validator_data.clone())
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))
    .map_err(|e| {
        error!("Failed to bind to {}:{}: {}", host, port, e);
        e
    })?
    .run()
    .await;

    if let Err(e) = server_result {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown complete");
    Ok(())
}
