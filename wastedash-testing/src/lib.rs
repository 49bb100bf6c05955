//! Testing utilities for the waste management dashboard.
//!
//! ```no_run
//! use wastedash_core::{HttpResponse, Router, handler};
//! use wastedash_testing::*;
//!
//! # async fn run() {
//! let mut router = Router::new();
//! router.get("/", handler(|_req| async { Ok(HttpResponse::html("<h1>Dashboard</h1>")) }));
//!
//! let client = TestClient::from_router(router);
//! let response = client.get("/").await;
//! assert_status(&response, 200);
//! assert_body_contains(&response, "Dashboard");
//! # }
//! ```

pub mod assertions;
pub mod test_client;

pub use assertions::*;
pub use test_client::{TestClient, TestResponse};
