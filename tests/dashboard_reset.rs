//! Landing page and the destructive reset

mod common;

use common::*;
use wastedash::entities::RESOURCES;

#[tokio::test]
async fn test_index_links_every_entity() {
    let app = app().await;

    let response = app.client.get("/").await;
    assert_status(&response, 200);
    assert_body_contains(&response, "<h1>Waste Management Dashboard</h1>");
    assert_body_contains(&response, "4 records");
    for meta in RESOURCES {
        assert_body_contains(&response, &format!("href=\"/{}\"", meta.slug));
    }
}

#[tokio::test]
async fn test_reset_confirmation_has_no_side_effect() {
    let app = app().await;
    app.client.post_form("/customers/1/delete", &[]).await;

    let response = app.client.get("/reset").await;
    assert_status(&response, 200);
    assert_body_contains(&response, "cannot be undone");
    assert_body_contains(&response, "action=\"/reset\"");
    assert_eq!(app.count("customers").await, 3);
}

#[tokio::test]
async fn test_reset_restores_seed_rows() {
    let app = app().await;

    app.client.post_form("/facilities/1/delete", &[]).await;
    app.client.post_form("/customers/3/delete", &[]).await;
    app.client
        .post_form("/waste-types/new", &[("material", "Glass"), ("hazardous", "0")])
        .await;
    app.client
        .post_form(
            "/routes/2/edit",
            &[
                ("name", "Renamed"),
                ("route_type", "Commercial"),
                ("schedule", "Never"),
            ],
        )
        .await;

    let response = app.client.post_form("/reset", &[]).await;
    assert_status(&response, 200);
    assert_body_contains(&response, "reseeded");

    for (table, expected) in SEED_COUNTS {
        assert_eq!(app.count(table).await, expected, "{table}");
    }

    let routes = app.client.get("/routes").await;
    assert_body_contains(&routes, "Downtown Commercial");
    assert_body_lacks(&routes, "Renamed");
}

#[tokio::test]
async fn test_reset_is_repeatable() {
    let app = app().await;

    for _ in 0..2 {
        let response = app.client.post_form("/reset", &[]).await;
        assert_status(&response, 200);
    }
    assert_eq!(app.count("customers").await, 4);

    app.client
        .post_form("/waste-types/new", &[("material", "Glass")])
        .await;
    assert_eq!(app.count("waste_types").await, 4);
}
