//! Boolean and nullable-reference coercion as stored in the database

mod common;

use common::*;
use wastedash::entities::{Customers, Routes, WasteTypes};
use wastedash::store::Store;

#[tokio::test]
async fn test_truthy_flag_is_stored_true() {
    let app = app().await;
    let store = Store::<WasteTypes>::new(&app.state.db);

    for (id, value) in [(4, "on"), (5, "1"), (6, "true")] {
        let material = format!("Material {id}");
        app.client
            .post_form(
                "/waste-types/new",
                &[("material", material.as_str()), ("hazardous", value)],
            )
            .await;
        assert!(store.find(id).await.unwrap().unwrap().hazardous, "{value}");
    }
}

#[tokio::test]
async fn test_absent_or_falsy_flag_is_stored_false() {
    let app = app().await;
    let store = Store::<Routes>::new(&app.state.db);

    let base = [
        ("name", "Test Route"),
        ("route_type", "Residential"),
        ("schedule", "Daily"),
    ];

    app.client.post_form("/routes/new", &base).await;
    assert!(!store.find(4).await.unwrap().unwrap().active_route);

    for (id, value) in [(5, "0"), (6, "false"), (7, "off")] {
        let mut fields = base.to_vec();
        fields.push(("active_route", value));
        app.client.post_form("/routes/new", &fields).await;
        assert!(!store.find(id).await.unwrap().unwrap().active_route, "{value}");
    }
}

#[tokio::test]
async fn test_blank_and_absent_references_are_null() {
    let app = app().await;
    let store = Store::<Customers>::new(&app.state.db);

    app.client
        .post_form(
            "/customers/new",
            &[
                ("name", "Pier Market"),
                ("address", "3 Wharf Rd"),
                ("customer_type", "Commercial"),
                ("route_id", ""),
            ],
        )
        .await;
    app.client
        .post_form(
            "/customers/new",
            &[
                ("name", "Hillside School"),
                ("address", "80 Ridge Ave"),
                ("customer_type", "Institutional"),
            ],
        )
        .await;

    assert_eq!(store.find(5).await.unwrap().unwrap().route_id, None);
    assert_eq!(store.find(6).await.unwrap().unwrap().route_id, None);
}

#[tokio::test]
async fn test_clearing_a_reference_on_update() {
    let app = app().await;
    let store = Store::<Customers>::new(&app.state.db);
    assert_eq!(store.find(1).await.unwrap().unwrap().route_id, Some(1));

    app.client
        .post_form(
            "/customers/1/edit",
            &[
                ("name", "Maple Street Apartments"),
                ("address", "101 Maple St"),
                ("customer_type", "Residential"),
                ("contact_number", "555-0101"),
                ("route_id", " "),
            ],
        )
        .await;

    let customer = store.find(1).await.unwrap().unwrap();
    assert_eq!(customer.route_id, None);
    assert_eq!(customer.contact_number.as_deref(), Some("555-0101"));
}

#[tokio::test]
async fn test_non_numeric_reference_is_rejected() {
    let app = app().await;

    let response = app
        .client
        .post_form(
            "/routes/new",
            &[
                ("name", "Bad Route"),
                ("route_type", "Residential"),
                ("schedule", "Daily"),
                ("vehicle_id", "truck"),
            ],
        )
        .await;
    assert_status(&response, 400);
    assert_html_content_type(&response);
    assert_eq!(app.count("routes").await, 3);
}
