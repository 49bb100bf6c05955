//! Database connection management and raw statement helpers.

use crate::{DatabaseConfig, DatabaseError, DatabaseResult};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, ExecResult, FromQueryResult, Statement, Value,
};
use std::sync::Arc;

/// Shared pool handle passed explicitly to everything that queries.
#[derive(Clone)]
pub struct Database {
    conn: DatabaseConnection,
    config: Arc<DatabaseConfig>,
}

impl Database {
    /// Connect to the database with the given configuration.
    pub async fn connect(config: DatabaseConfig) -> DatabaseResult<Self> {
        tracing::info!(url = %config.redacted_url(), "connecting to database");

        let conn = sea_orm::Database::connect(config.to_connect_options())
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;

        let db = Self {
            conn,
            config: Arc::new(config),
        };
        tracing::info!(backend = db.backend().name(), "database connection established");
        Ok(db)
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Close the pool.
    pub async fn close(self) -> DatabaseResult<()> {
        tracing::info!("closing database connection");
        self.conn
            .close()
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))
    }

    pub fn backend(&self) -> DatabaseBackend {
        match self.conn.get_database_backend() {
            DbBackend::MySql => DatabaseBackend::MySql,
            DbBackend::Sqlite => DatabaseBackend::Sqlite,
            DbBackend::Postgres => DatabaseBackend::Postgres,
        }
    }

    /// Build a parameterized statement for this backend.
    pub fn statement(&self, sql: &str, values: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(self.conn.get_database_backend(), sql, values)
    }

    /// Run a query and map every row.
    pub async fn fetch_all<T: FromQueryResult>(
        &self,
        sql: &str,
        values: Vec<Value>,
    ) -> DatabaseResult<Vec<T>> {
        tracing::debug!(sql, "fetch_all");
        let rows = T::find_by_statement(self.statement(sql, values))
            .all(&self.conn)
            .await?;
        Ok(rows)
    }

    /// Run a query expected to match at most one row.
    pub async fn fetch_optional<T: FromQueryResult>(
        &self,
        sql: &str,
        values: Vec<Value>,
    ) -> DatabaseResult<Option<T>> {
        tracing::debug!(sql, "fetch_optional");
        let row = T::find_by_statement(self.statement(sql, values))
            .one(&self.conn)
            .await?;
        Ok(row)
    }

    /// Execute a single parameterized statement.
    pub async fn execute(&self, sql: &str, values: Vec<Value>) -> DatabaseResult<ExecResult> {
        tracing::debug!(sql, "execute");
        let result = self.conn.execute(self.statement(sql, values)).await?;
        Ok(result)
    }

    /// Whether `table` exists in the connected schema.
    pub async fn table_exists(&self, table: &str) -> DatabaseResult<bool> {
        let sql = match self.backend() {
            DatabaseBackend::Sqlite => {
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?"
            }
            DatabaseBackend::MySql => {
                "SELECT table_name FROM information_schema.tables \
                 WHERE table_schema = DATABASE() AND table_name = ?"
            }
            DatabaseBackend::Postgres => {
                "SELECT table_name FROM information_schema.tables WHERE table_name = $1"
            }
        };

        let row = self
            .conn
            .query_one(self.statement(sql, vec![Value::from(table)]))
            .await?;
        Ok(row.is_some())
    }
}

impl std::ops::Deref for Database {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

/// Database backend types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    /// MySQL/MariaDB.
    MySql,
    /// SQLite.
    Sqlite,
    /// PostgreSQL. Reachable through SeaORM but not supported by the dashboard schema.
    Postgres,
}

impl DatabaseBackend {
    pub fn name(&self) -> &'static str {
        match self {
            DatabaseBackend::MySql => "MySQL",
            DatabaseBackend::Sqlite => "SQLite",
            DatabaseBackend::Postgres => "PostgreSQL",
        }
    }

    pub fn is_sqlite(&self) -> bool {
        matches!(self, DatabaseBackend::Sqlite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, FromQueryResult)]
    struct Material {
        id: i32,
        material: String,
        hazardous: bool,
    }

    async fn memory_db() -> Database {
        let db = Database::connect(DatabaseConfig::in_memory_sqlite())
            .await
            .unwrap();
        db.execute(
            "CREATE TABLE waste_types (\
             waste_type_id INTEGER PRIMARY KEY AUTOINCREMENT, \
             material TEXT NOT NULL, \
             hazardous INTEGER NOT NULL DEFAULT 0)",
            vec![],
        )
        .await
        .unwrap();
        db
    }

    #[tokio::test]
    async fn test_connect_reports_backend() {
        let db = memory_db().await;
        assert!(db.backend().is_sqlite());
        assert_eq!(db.backend().name(), "SQLite");
        assert!(db.table_exists("waste_types").await.unwrap());
    }

    #[tokio::test]
    async fn test_execute_and_fetch() {
        let db = memory_db().await;

        let inserted = db
            .execute(
                "INSERT INTO waste_types (material, hazardous) VALUES (?, ?)",
                vec![Value::from("Batteries"), Value::from(1i32)],
            )
            .await
            .unwrap();
        assert_eq!(inserted.rows_affected(), 1);
        let id = inserted.last_insert_id() as i32;

        let rows: Vec<Material> = db
            .fetch_all(
                "SELECT waste_type_id AS id, material, hazardous FROM waste_types",
                vec![],
            )
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].material, "Batteries");
        assert!(rows[0].hazardous);
    }

    #[tokio::test]
    async fn test_fetch_optional_absent() {
        let db = memory_db().await;

        let row: Option<Material> = db
            .fetch_optional(
                "SELECT waste_type_id AS id, material, hazardous FROM waste_types \
                 WHERE waste_type_id = ?",
                vec![Value::from(404i32)],
            )
            .await
            .unwrap();
        assert!(row.is_none());
    }

    #[tokio::test]
    async fn test_table_exists() {
        let db = memory_db().await;
        assert!(db.table_exists("waste_types").await.unwrap());
        assert!(!db.table_exists("vehicles").await.unwrap());
    }

    #[tokio::test]
    async fn test_constraint_violation_is_query_error() {
        let db = memory_db().await;
        let err = db
            .execute(
                "INSERT INTO waste_types (material) VALUES (?)",
                vec![Value::String(None)],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Query(_)));
    }
}
