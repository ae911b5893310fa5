use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::api::config::ApiConfig;
use crate::api::models::{CustomerForm, HealthStatus};
use crate::customer::CustomerStore;
use crate::validation::{ContactInfoValidator, PatternStore};

/// Message shown on the form after a passing submission
const VALID_MESSAGE: &str = "The information is valid!";

/// Message shown on the form after a failing submission
const INVALID_MESSAGE: &str = "The information is invalid!";

/// Renders the customer form view, optionally annotated with the outcome
/// of the last submission.
fn render_customer_page(active_type: &str, message: Option<&str>) -> String {
    let message_block = match message {
        Some(text) => format!("  <p class=\"message\">{}</p>\n", text),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Customer</title></head>
<body>
  <h1>Customer contact info ({active_type})</h1>
  <form action="/customer" method="post">
    <label for="contact_info">Contact info:</label>
    <input type="text" id="contact_info" name="contact_info" />
    <button type="submit">Submit</button>
  </form>
{message_block}</body>
</html>
"#
    )
}

/// HTTP handler for the empty customer form
///
/// Stateless: always returns the form with no message attached.
///
/// # Arguments
/// * `config` - API configuration (names the active pattern type in the view)
///
/// # Returns
/// * HTML response with the empty form
#[instrument(skip(config))]
pub async fn customer_form(config: web::Data<ApiConfig>) -> impl Responder {
    debug!("Rendering empty customer form");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_customer_page(&config.contact_info_type, None))
}

/// HTTP handler for customer form submissions
///
/// Runs field-level validation on the submitted contact info (non-empty
/// check plus a whole-string match against the active pattern), stores the
/// record if it passed, and re-renders the form with the outcome message.
///
/// # Arguments
/// * `form` - Urlencoded form body with the contact info field
/// * `config` - API configuration
/// * `validator` - Shared contact info validator
/// * `customers` - Shared customer storage
///
/// # Returns
/// * HTML response with the form annotated with the validity message
#[instrument(skip(form, config, validator, customers))]
pub async fn submit_customer(
    form: web::Form<CustomerForm>,
    config: web::Data<ApiConfig>,
    validator: web::Data<Arc<ContactInfoValidator>>,
    customers: web::Data<Arc<CustomerStore>>,
) -> impl Responder {
    info!("Received customer submission");

    let contact_info = &form.contact_info;
    let valid = !contact_info.is_empty() && validator.is_valid(contact_info);

    let message = if valid {
        let customer = customers.save(contact_info);
        info!("Stored valid customer record with id: {}", customer.id);
        VALID_MESSAGE
    } else {
        warn!(
            "Rejected contact info submission for active type: {}",
            validator.expression_type()
        );
        INVALID_MESSAGE
    };

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_customer_page(&config.contact_info_type, Some(message)))
}

/// HTTP handler listing all stored validation patterns
#[instrument(skip(patterns))]
pub async fn list_patterns(patterns: web::Data<Arc<PatternStore>>) -> impl Responder {
    let records = patterns.list();
    debug!("Listing {} stored patterns", records.len());
    HttpResponse::Ok().json(records)
}

/// Health check endpoint for monitoring service status
///
/// # Returns
/// * HTTP response with the active type and store sizes
#[instrument(skip(config, patterns, customers))]
pub async fn health_check(
    config: web::Data<ApiConfig>,
    patterns: web::Data<Arc<PatternStore>>,
    customers: web::Data<Arc<CustomerStore>>,
) -> impl Responder {
    debug!("Processing health check request");
    HttpResponse::Ok().json(HealthStatus {
        status: "healthy".to_string(),
        contact_info_type: config.contact_info_type.clone(),
        patterns_loaded: patterns.len(),
        customers_stored: customers.count(),
    })
}
