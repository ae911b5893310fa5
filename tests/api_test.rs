use std::sync::Arc;

use actix_web::{test, web, App};

use contact_validation_api::api::config::ApiConfig;
use contact_validation_api::api::configure_routes;
use contact_validation_api::customer::CustomerStore;
use contact_validation_api::validation::seed::load_default_expressions;
use contact_validation_api::validation::{ContactInfoValidator, PatternRecord, PatternStore};

/// Shared state for a test app configured with the given active type.
struct TestState {
    config: ApiConfig,
    patterns: Arc<PatternStore>,
    customers: Arc<CustomerStore>,
    validator: Arc<ContactInfoValidator>,
}

fn test_state(contact_info_type: &str) -> TestState {
    let patterns = Arc::new(PatternStore::new());
    load_default_expressions(&patterns);

    let customers = Arc::new(CustomerStore::new());
    let validator = Arc::new(
        ContactInfoValidator::initialize(&patterns, contact_info_type)
            .expect("test active type must be stored"),
    );
    let config = ApiConfig {
        contact_info_type: contact_info_type.to_string(),
        ..ApiConfig::default()
    };

    TestState {
        config,
        patterns,
        customers,
        validator,
    }
}

macro_rules! init_test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.config.clone()))
                .app_data(web::Data::new($state.patterns.clone()))
                .app_data(web::Data::new($state.customers.clone()))
                .app_data(web::Data::new($state.validator.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_get_root_renders_empty_form() {
    let state = test_state("email");
    let app = init_test_app!(state);

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let page = std::str::from_utf8(&body).expect("utf8 body");

    assert!(page.contains("<form action=\"/customer\" method=\"post\">"));
    assert!(page.contains("name=\"contact_info\""));
    // No message before the first submission
    assert!(!page.contains("class=\"message\""));
}

#[actix_web::test]
async fn test_submit_valid_email_stores_customer() {
    let state = test_state("email");
    let app = init_test_app!(state);

    let req = test::TestRequest::post()
        .uri("/customer")
        .set_form(&[("contact_info", "mhussainshah79@hotmail.com")])
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let page = std::str::from_utf8(&body).expect("utf8 body");

    assert!(page.contains("The information is valid!"));
    assert_eq!(state.customers.count(), 1);
    assert_eq!(
        state.customers.list()[0].contact_info,
        "mhussainshah79@hotmail.com"
    );
}

#[actix_web::test]
async fn test_submit_invalid_email_is_rejected_and_not_stored() {
    let state = test_state("email");
    let app = init_test_app!(state);

    let req = test::TestRequest::post()
        .uri("/customer")
        .set_form(&[("contact_info", "not-an-email")])
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let page = std::str::from_utf8(&body).expect("utf8 body");

    assert!(page.contains("The information is invalid!"));
    assert_eq!(state.customers.count(), 0);
}

#[actix_web::test]
async fn test_submit_with_phone_active_type() {
    let state = test_state("phone");
    let app = init_test_app!(state);

    let req = test::TestRequest::post()
        .uri("/customer")
        .set_form(&[("contact_info", "555-123-4567")])
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert!(std::str::from_utf8(&body)
        .expect("utf8 body")
        .contains("The information is valid!"));

    let req = test::TestRequest::post()
        .uri("/customer")
        .set_form(&[("contact_info", "abc")])
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert!(std::str::from_utf8(&body)
        .expect("utf8 body")
        .contains("The information is invalid!"));

    assert_eq!(state.customers.count(), 1);
}

#[actix_web::test]
async fn test_empty_submission_is_invalid_even_if_pattern_accepts_empty() {
    let patterns = Arc::new(PatternStore::new());
    patterns.put("digits", "[0-9]*");
    let customers = Arc::new(CustomerStore::new());
    let validator = Arc::new(
        ContactInfoValidator::initialize(&patterns, "digits").expect("digits stored"),
    );
    let config = ApiConfig {
        contact_info_type: "digits".to_string(),
        ..ApiConfig::default()
    };
    let state = TestState {
        config,
        patterns,
        customers,
        validator,
    };
    let app = init_test_app!(state);

    let req = test::TestRequest::post()
        .uri("/customer")
        .set_form(&[("contact_info", "")])
        .to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert!(std::str::from_utf8(&body)
        .expect("utf8 body")
        .contains("The information is invalid!"));
    assert_eq!(state.customers.count(), 0);
}

#[actix_web::test]
async fn test_patterns_endpoint_lists_seeded_records() {
    let state = test_state("email");
    let app = init_test_app!(state);

    let req = test::TestRequest::get().uri("/patterns").to_request();
    let records: Vec<PatternRecord> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(records.len(), 3);
    assert!(records
        .iter()
        .any(|record| record.expression_type == "email"));
}

#[actix_web::test]
async fn test_health_endpoint_reports_store_sizes() {
    let state = test_state("website");
    let app = init_test_app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let health: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(health["status"], "healthy");
    assert_eq!(health["contact_info_type"], "website");
    assert_eq!(health["patterns_loaded"], 3);
    assert_eq!(health["customers_stored"], 0);
}
