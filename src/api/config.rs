use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Configuration for the API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Active pattern type used to validate the contact info field
    pub contact_info_type: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            contact_info_type: "email".to_string(),
        }
    }
}

/// Loads configuration in layers: built-in defaults, then an optional
/// `config/api.toml` file, then `CONTACT_API_*` environment variables.
///
/// The resolved value must exist before the validator is built; `main`
/// guarantees that by loading settings first.
pub fn load_settings() -> Result<ApiConfig> {
    let defaults = ApiConfig::default();

    let settings = config::Config::builder()
        .set_default("host", defaults.host)?
        .set_default("port", i64::from(defaults.port))?
        .set_default("contact_info_type", defaults.contact_info_type)?
        .add_source(config::File::with_name("config/api").required(false))
        .add_source(config::Environment::with_prefix("CONTACT_API"))
        .build()
        .context("Failed to assemble configuration")?;

    let config: ApiConfig = settings
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}
