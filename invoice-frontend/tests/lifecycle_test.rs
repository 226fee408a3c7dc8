//! Full-state lifecycle: clear_all resets everything to defaults.

mod common;

use common::{assert_redirects_to_setup, body_text, get, post_form, test_app};

async fn populate(app: &axum::Router) {
    post_form(
        app,
        "/add_item",
        &[
            ("quantity", "3"),
            ("description", "Bolt"),
            ("unit_price", "2.50"),
        ],
    )
    .await;
    post_form(app, "/update_company", &[("name", "Acme Corp")]).await;
    post_form(app, "/update_client", &[("name", "Wile E. Coyote")]).await;
    post_form(
        app,
        "/update_meta",
        &[
            ("invoice_number", "INV-9"),
            ("tax_rate", "50"),
            ("notes", "net 30"),
        ],
    )
    .await;
}

#[tokio::test]
async fn clear_all_restores_every_default() {
    let app = test_app();
    populate(&app).await;

    let response = post_form(&app, "/clear_all", &[]).await;
    assert_redirects_to_setup(&response);

    let body = body_text(get(&app, "/setup").await).await;
    assert!(body.contains("Your Company Name"));
    assert!(body.contains("Client Name"));
    assert!(body.contains(r#"name="invoice_number" value="0001""#));
    assert!(body.contains(r#"name="tax_rate" value="3""#));
    assert!(body.contains("Thank you for your business!"));
    assert!(body.contains("No items yet."));
    assert!(!body.contains("Acme Corp"));
    assert!(!body.contains("Bolt"));
}

#[tokio::test]
async fn clear_all_is_idempotent() {
    let app = test_app();
    populate(&app).await;

    post_form(&app, "/clear_all", &[]).await;
    let first = body_text(get(&app, "/setup").await).await;

    post_form(&app, "/clear_all", &[]).await;
    let second = body_text(get(&app, "/setup").await).await;

    assert_eq!(first, second);
}
