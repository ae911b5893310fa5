use serde::{Deserialize, Serialize};

/// A submitted customer form
#[derive(Debug, Deserialize, Clone)]
pub struct CustomerForm {
    /// The contact info value to validate
    pub contact_info: String,
}

/// Response for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Status indicator: always "healthy" once the server answers
    pub status: String,

    /// Active pattern type used for validation
    pub contact_info_type: String,

    /// Number of validation patterns loaded
    pub patterns_loaded: usize,

    /// Number of customer records stored
    pub customers_stored: usize,
}
