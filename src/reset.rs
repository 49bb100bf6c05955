//! Wipe and reseed every table.
//!
//! MySQL runs the stored procedure created by `sql/mysql/schema.sql`. SQLite
//! has no stored procedures, so the equivalent script is embedded and run in
//! one transaction.

use crate::AppState;
use crate::error::Result;
use serde::Serialize;
use wastedash_core::{HttpRequest, HttpResponse, HttpStatus};
use wastedash_seaorm::{Database, DatabaseBackend, DatabaseError, DatabaseResult};

/// Drop, create and seed script for SQLite
pub const SQLITE_RESET: &str = include_str!("../sql/sqlite/reset.sql");

/// Table probed to decide whether a SQLite database needs bootstrapping
const PROBE_TABLE: &str = "customers";

pub async fn reset_database(db: &Database, procedure: &str) -> DatabaseResult<()> {
    match db.backend() {
        DatabaseBackend::MySql => db.call_procedure(procedure).await,
        DatabaseBackend::Sqlite => {
            let statements = db.run_script(SQLITE_RESET).await?;
            tracing::debug!(statements, "reset script applied");
            Ok(())
        }
        backend => Err(DatabaseError::Config(format!(
            "reset is not supported on {}",
            backend.name()
        ))),
    }
}

/// Create and seed the schema of an empty SQLite database. Returns whether it ran.
pub async fn bootstrap_if_missing(db: &Database) -> DatabaseResult<bool> {
    if !db.backend().is_sqlite() || db.table_exists(PROBE_TABLE).await? {
        return Ok(false);
    }

    tracing::info!("no schema found, creating and seeding tables");
    db.run_script(SQLITE_RESET).await?;
    Ok(true)
}

#[derive(Debug, Clone, Serialize)]
struct ResetView {
    title: &'static str,
    succeeded: bool,
    message: &'static str,
}

pub async fn confirm(state: AppState, _req: HttpRequest) -> Result<HttpResponse> {
    let view = ResetView {
        title: "Reset database",
        succeeded: false,
        message: "This drops every table and restores the sample data. It cannot be undone.",
    };
    Ok(state.views.render_response("reset", &view).await?)
}

/// Failures are reported on the result page; the driver detail only reaches the log.
pub async fn run(state: AppState, _req: HttpRequest) -> Result<HttpResponse> {
    let (view, status) = match reset_database(&state.db, &state.reset_procedure).await {
        Ok(()) => {
            tracing::warn!("database reset to sample data");
            (
                ResetView {
                    title: "Database reset",
                    succeeded: true,
                    message: "Every table was dropped, recreated and reseeded.",
                },
                HttpStatus::Ok,
            )
        }
        Err(err) => {
            tracing::error!(error = %err, "database reset failed");
            (
                ResetView {
                    title: "Reset failed",
                    succeeded: false,
                    message: "The database could not be reset. Check the server log for details.",
                },
                HttpStatus::InternalServerError,
            )
        }
    };

    let response = state.views.render_response("reset-result", &view).await?;
    Ok(response.with_status(status.code()))
}
