//! # wastedash-seaorm
//!
//! Connection pooling and raw, parameterized statements on top of SeaORM.
//!
//! The dashboard writes its SQL by hand; this crate supplies the pool, maps
//! rows through [`sea_orm::FromQueryResult`] and runs multi-statement scripts
//! atomically.
//!
//! ```rust,ignore
//! use wastedash_seaorm::{Database, DatabaseConfig};
//!
//! let db = Database::connect(DatabaseConfig::new("mysql://dash@localhost/waste")).await?;
//! let rows: Vec<Vehicle> = db.fetch_all("SELECT ... FROM vehicles", vec![]).await?;
//! ```

#![warn(clippy::all)]

mod config;
mod database;
mod error;
mod transaction;

pub use config::*;
pub use database::*;
pub use error::*;
pub use transaction::split_statements;

// Re-export sea-orm so dependents derive row types against the same version
pub use sea_orm;
