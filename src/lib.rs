//! # wastedash
//!
//! A server-rendered CRUD dashboard for waste management records: customers,
//! collection routes, vehicles, waste types, disposal facilities and the
//! facility/waste-type links between them.
//!
//! Every entity implements [`Resource`](resource::Resource) and gets the same
//! seven routes:
//!
//! | Method | Path | Effect |
//! |---|---|---|
//! | GET | `/{entity}` | list |
//! | GET / POST | `/{entity}/new` | blank form / insert |
//! | GET / POST | `/{entity}/:id/edit` | pre-filled form / update |
//! | GET / POST | `/{entity}/:id/delete` | confirmation / delete |
//!
//! plus `/` (landing page), `/reset` and static files from the public directory.
//!
//! ```rust,ignore
//! let state = AppState::from_settings(&settings).await?;
//! let router = build_router(&state, Some(StaticAssets::new("public")));
//! Application::new(router).listen("0.0.0.0", 6917).await?;
//! ```

pub mod coerce;
pub mod dashboard;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod reset;
pub mod resource;
pub mod store;
pub mod views;

pub use error::{DashboardError, Result};

use entities::{Customers, Facilities, FacilityWasteTypes, Routes, Vehicles, WasteTypes};
use handlers::{bind, mount};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use wastedash_config::Settings;
use wastedash_core::{ErrorHandlerFn, HttpResponse, Router, StaticAssets, error_handler};
use wastedash_handlebars::{HandlebarsConfig, HandlebarsService};
use wastedash_seaorm::{Database, DatabaseConfig};

/// Everything a handler needs, cloned into each route
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub views: HandlebarsService,
    /// Stored procedure the reset action calls on MySQL
    pub reset_procedure: Arc<str>,
}

impl AppState {
    pub fn new(db: Database, views: HandlebarsService, reset_procedure: impl Into<Arc<str>>) -> Self {
        Self {
            db,
            views,
            reset_procedure: reset_procedure.into(),
        }
    }

    /// Connect the pool, bootstrap an empty SQLite file and load the templates
    pub async fn from_settings(settings: &Settings) -> Result<Self> {
        let db_settings = &settings.database;
        let config = DatabaseConfig::new(&db_settings.url)
            .max_connections(db_settings.max_connections)
            .min_connections(db_settings.min_connections)
            .connect_timeout(Duration::from_secs(db_settings.connect_timeout_secs))
            .sqlx_logging(cfg!(feature = "sqlx-logging"));

        let db = Database::connect(config).await?;
        if reset::bootstrap_if_missing(&db).await? {
            tracing::info!("sample data loaded");
        }

        let views = HandlebarsService::new(
            HandlebarsConfig::new(&settings.views.template_dir)
                .with_dev_mode(settings.views.dev_mode),
        )?;

        Ok(Self::new(db, views, db_settings.reset_procedure.as_str()))
    }
}

/// Assemble every route. Unmatched GETs fall through to `assets` when given.
pub fn build_router(state: &AppState, assets: Option<StaticAssets>) -> Router {
    let mut router = Router::new();
    router.on_error(error_page(state.views.clone()));

    router
        .get("/", bind(state, dashboard::index))
        .get("/reset", bind(state, reset::confirm))
        .post("/reset", bind(state, reset::run));

    mount::<Customers>(&mut router, state);
    mount::<Routes>(&mut router, state);
    mount::<Vehicles>(&mut router, state);
    mount::<WasteTypes>(&mut router, state);
    mount::<Facilities>(&mut router, state);
    mount::<FacilityWasteTypes>(&mut router, state);

    if let Some(assets) = assets {
        router.fallback(assets.into_handler());
    }

    router
}

#[derive(Debug, Serialize)]
struct ErrorView {
    title: &'static str,
    status: u16,
    message: String,
}

/// Render failures through the `error` template, logging the detail
fn error_page(views: HandlebarsService) -> ErrorHandlerFn {
    error_handler(move |err: wastedash_core::Error| {
        let views = views.clone();
        async move {
            let status = err.http_status();
            if err.is_server_error() {
                tracing::error!(error = %err, status = status.code(), "request failed");
            } else {
                tracing::warn!(error = %err, status = status.code(), "request rejected");
            }

            let view = ErrorView {
                title: status.reason(),
                status: status.code(),
                message: err.public_message(),
            };

            match views.render("error", &view).await {
                Ok(html) => HttpResponse::html(html).with_status(status.code()),
                Err(render_err) => {
                    tracing::error!(error = %render_err, "error page failed to render");
                    HttpResponse::text(status.to_string()).with_status(status.code())
                }
            }
        }
    })
}
