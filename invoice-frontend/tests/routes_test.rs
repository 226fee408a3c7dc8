//! Route-level smoke tests for the invoice frontend.

mod common;

use axum::http::StatusCode;
use common::{assert_redirects_to_setup, body_text, get, post_form, test_app};

#[tokio::test]
async fn index_redirects_to_setup() {
    let app = test_app();

    let response = get(&app, "/").await;

    assert_redirects_to_setup(&response);
}

#[tokio::test]
async fn health_check_works() {
    let app = test_app();

    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn setup_page_renders_defaults() {
    let app = test_app();

    let response = get(&app, "/setup").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Your Company Name"));
    assert!(body.contains("Client Name"));
    assert!(body.contains(r#"name="invoice_number" value="0001""#));
    assert!(body.contains(r#"name="tax_rate" value="3""#));
    assert!(body.contains("Thank you for your business!"));
    assert!(body.contains("No items yet."));
}

#[tokio::test]
async fn invoice_page_renders_same_data() {
    let app = test_app();

    let response = get(&app, "/invoice").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Invoice #0001"));
    assert!(body.contains("Your Company Name"));
    assert!(body.contains("Bill To"));
}

#[tokio::test]
async fn metrics_endpoint_exposes_counters() {
    let app = test_app();

    // One mutation so both counter families have samples
    let response = post_form(
        &app,
        "/add_item",
        &[("quantity", "1"), ("description", "Probe"), ("unit_price", "1.00")],
    )
    .await;
    assert_redirects_to_setup(&response);

    let response = get(&app, "/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("invoice_mutations_total"));
}
