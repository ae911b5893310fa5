use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use contact_validation_api::api::config::{load_settings, ApiConfig};
use contact_validation_api::api::start_server;
use contact_validation_api::customer::CustomerStore;
use contact_validation_api::utils::logger::init_logger;
use contact_validation_api::validation::seed::{load_default_expressions, load_seed_customers};
use contact_validation_api::validation::{ContactInfoValidator, PatternStore};

/// Command-line overrides applied on top of the layered configuration.
#[derive(Debug, Parser)]
#[command(
    name = "contact_validation_api",
    about = "Contact info validation form service"
)]
struct Cli {
    /// Host address to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Active pattern type used to validate the contact info field
    #[arg(long)]
    contact_info_type: Option<String>,
}

impl Cli {
    fn apply(self, mut config: ApiConfig) -> ApiConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(contact_info_type) = self.contact_info_type {
            config.contact_info_type = contact_info_type;
        }
        config
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize logger
    let _ = init_logger("logs");

    let cli = Cli::parse();
    let config = cli.apply(load_settings()?);
    debug!("Resolved configuration: {:?}", config);

    // Seed storage before the validator resolves the active type
    let patterns = Arc::new(PatternStore::new());
    let customers = Arc::new(CustomerStore::new());
    load_default_expressions(&patterns);
    load_seed_customers(&customers);

    // Fail closed: a blank or unknown active type aborts startup here
    let validator = Arc::new(
        ContactInfoValidator::initialize(&patterns, &config.contact_info_type)
            .context("Refusing to start with an unusable contact info validator")?,
    );
    info!(
        "Validating contact info as type: {}",
        validator.expression_type()
    );

    // Start server
    start_server(config, patterns, customers, validator).await?;

    Ok(())
}
