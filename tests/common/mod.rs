// Shared setup for the dashboard integration tests

#![allow(dead_code)]

use wastedash::entities::RESOURCES;
use wastedash::reset::bootstrap_if_missing;
use wastedash::{AppState, build_router};
use wastedash_core::StaticAssets;
use wastedash_handlebars::{HandlebarsConfig, HandlebarsService};
use wastedash_seaorm::{Database, DatabaseConfig};
use wastedash_testing::TestClient;

pub use wastedash_testing::*;

/// Seeded row counts, in `RESOURCES` order
pub const SEED_COUNTS: [(&str, i64); 6] = [
    ("customers", 4),
    ("routes", 3),
    ("vehicles", 3),
    ("waste_types", 3),
    ("disposal_facilities", 3),
    ("facility_waste_types", 4),
];

pub struct TestApp {
    pub client: TestClient,
    pub state: AppState,
}

/// A dashboard over a private, freshly seeded in-memory SQLite database
pub async fn app() -> TestApp {
    let db = Database::connect(DatabaseConfig::in_memory_sqlite())
        .await
        .expect("connect to in-memory SQLite");
    assert!(bootstrap_if_missing(&db).await.expect("seed database"));

    let views = HandlebarsService::new(HandlebarsConfig::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/templates"
    )))
    .expect("load templates");

    let state = AppState::new(db, views, "sp_reset_waste_management");
    let assets = StaticAssets::new(concat!(env!("CARGO_MANIFEST_DIR"), "/public"));
    let client = TestClient::from_router(build_router(&state, Some(assets)));

    TestApp { client, state }
}

impl TestApp {
    pub async fn count(&self, table: &str) -> i64 {
        let meta = RESOURCES
            .iter()
            .find(|meta| meta.table == table)
            .unwrap_or_else(|| panic!("unknown table {table}"));
        wastedash::store::count_rows(&self.state.db, meta)
            .await
            .expect("count rows")
    }
}
