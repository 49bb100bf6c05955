//! Not-found, method, store-failure and static asset handling

mod common;

use common::*;
use wastedash_core::HttpMethod;

#[tokio::test]
async fn test_missing_record_is_404() {
    let app = app().await;

    for path in [
        "/routes/999/edit",
        "/routes/999/delete",
        "/customers/999/edit",
        "/facility-waste-types/999/delete",
    ] {
        let response = app.client.get(path).await;
        assert_status(&response, 404);
        assert_html_content_type(&response);
        assert_body_contains(&response, "404 Not Found");
        assert_body_contains(&response, "does not exist");
    }
}

#[tokio::test]
async fn test_non_integer_id_is_404() {
    let app = app().await;

    let response = app.client.get("/routes/abc/edit").await;
    assert_status(&response, 404);

    let response = app.client.post_form("/vehicles/one/delete", &[]).await;
    assert_status(&response, 404);
    assert_eq!(app.count("vehicles").await, 3);
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let app = app().await;
    let response = app.client.get("/landfills").await;
    assert_status(&response, 404);
    assert_body_contains(&response, "Back to the dashboard");
}

#[tokio::test]
async fn test_wrong_method_is_405() {
    let app = app().await;

    let response = app.client.post_form("/customers", &[]).await;
    assert_status(&response, 405);

    let response = app
        .client
        .request(HttpMethod::DELETE, "/reset", Vec::new())
        .await;
    assert_status(&response, 405);
}

#[tokio::test]
async fn test_head_mirrors_get_without_body() {
    let app = app().await;

    let response = app
        .client
        .request(HttpMethod::HEAD, "/customers", Vec::new())
        .await;
    assert_status(&response, 200);
    assert!(response.body_string().is_empty());

    let response = app
        .client
        .request(HttpMethod::HEAD, "/customers/999/edit", Vec::new())
        .await;
    assert_status(&response, 404);
    assert!(response.body_string().is_empty());
}

#[tokio::test]
async fn test_not_null_violation_renders_generic_500() {
    let app = app().await;

    let response = app
        .client
        .post_form(
            "/vehicles/new",
            &[("license_plate", "WM-5005"), ("service_type", "Residential")],
        )
        .await;
    assert_status(&response, 500);
    assert_body_contains(&response, "Something went wrong");
    assert_body_lacks(&response, "NOT NULL");
    assert_eq!(app.count("vehicles").await, 3);
}

#[tokio::test]
async fn test_restrict_blocks_deleting_used_waste_type() {
    let app = app().await;

    let response = app.client.post_form("/waste-types/1/delete", &[]).await;
    assert_status(&response, 500);
    assert_body_lacks(&response, "FOREIGN KEY");
    assert_eq!(app.count("waste_types").await, 3);
    assert_eq!(app.count("facility_waste_types").await, 4);
}

#[tokio::test]
async fn test_deleting_route_clears_customer_reference() {
    let app = app().await;

    app.client.post_form("/routes/1/delete", &[]).await;
    assert_eq!(app.count("routes").await, 2);
    assert_eq!(app.count("customers").await, 4);

    let form = app.client.get("/customers/1/edit").await;
    assert_body_contains(&form, "<option value=\"\" selected>None</option>");
}

#[tokio::test]
async fn test_deleting_facility_cascades_to_links() {
    let app = app().await;

    let response = app.client.post_form("/facilities/1/delete", &[]).await;
    assert_redirect(&response, "/facilities");
    assert_eq!(app.count("disposal_facilities").await, 2);
    assert_eq!(app.count("facility_waste_types").await, 2);
}

#[tokio::test]
async fn test_unique_plate_violation_is_500() {
    let app = app().await;

    let response = app
        .client
        .post_form(
            "/vehicles/new",
            &[
                ("license_plate", "WM-1001"),
                ("service_type", "Residential"),
                ("status", "Active"),
                ("waste_type_id", "1"),
            ],
        )
        .await;
    assert_status(&response, 500);
    assert_eq!(app.count("vehicles").await, 3);
}

#[tokio::test]
async fn test_static_stylesheet_is_served() {
    let app = app().await;

    let response = app.client.get("/css/dashboard.css").await;
    assert_status(&response, 200);
    assert_eq!(response.header("Content-Type"), Some("text/css; charset=utf-8"));
    assert_body_contains(&response, "--accent");
}

#[tokio::test]
async fn test_static_path_traversal_is_404() {
    let app = app().await;
    let response = app.client.get("/css/../../Cargo.toml").await;
    assert_status(&response, 404);
    assert_body_lacks(&response, "[workspace]");
}
