//! Building the application from settings against a SQLite file

mod common;

use common::*;
use std::path::PathBuf;
use wastedash::entities::Customers;
use wastedash::store::Store;
use wastedash::{AppState, build_router};
use wastedash_config::Settings;
use wastedash_testing::TestClient;

fn settings_for(db_file: &std::path::Path) -> Settings {
    let mut settings = Settings::default();
    settings.database.url = format!("sqlite://{}?mode=rwc", db_file.display());
    settings.database.max_connections = 2;
    settings.views.template_dir = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"));
    settings
}

#[tokio::test]
async fn test_first_start_bootstraps_and_later_starts_keep_data() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_for(&dir.path().join("dashboard.db"));

    let state = AppState::from_settings(&settings).await.unwrap();
    assert_eq!(Store::<Customers>::new(&state.db).count().await.unwrap(), 4);

    let client = TestClient::from_router(build_router(&state, None));
    let response = client.post_form("/customers/4/delete", &[]).await;
    assert_redirect(&response, "/customers");
    state.db.close().await.unwrap();

    let state = AppState::from_settings(&settings).await.unwrap();
    assert_eq!(Store::<Customers>::new(&state.db).count().await.unwrap(), 3);
    assert_eq!(&*state.reset_procedure, "sp_reset_waste_management");
}

#[tokio::test]
async fn test_router_without_assets_has_no_static_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::from_settings(&settings_for(&dir.path().join("dashboard.db")))
        .await
        .unwrap();
    let client = TestClient::from_router(build_router(&state, None));

    let response = client.get("/css/dashboard.css").await;
    assert_status(&response, 404);
}
