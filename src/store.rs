//! Parameterized queries for one [`Resource`].

use crate::resource::{Choice, IntoValues, RecordSummary, Resource, ResourceMeta};
use sea_orm::{FromQueryResult, Value};
use std::marker::PhantomData;
use wastedash_seaorm::{Database, DatabaseResult};

/// Query surface for `R` over a borrowed pool
pub struct Store<'a, R> {
    db: &'a Database,
    _resource: PhantomData<fn() -> R>,
}

impl<'a, R: Resource> Store<'a, R> {
    pub fn new(db: &'a Database) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    pub async fn list(&self) -> DatabaseResult<Vec<R::Row>> {
        self.db.fetch_all(R::LIST_SQL, vec![]).await
    }

    pub async fn find(&self, id: i32) -> DatabaseResult<Option<R::Record>> {
        self.db.fetch_optional(R::FETCH_SQL, vec![Value::from(id)]).await
    }

    pub async fn find_summary(&self, id: i32) -> DatabaseResult<Option<RecordSummary>> {
        self.db
            .fetch_optional(R::SUMMARY_SQL, vec![Value::from(id)])
            .await
    }

    /// Insert and return the generated id
    pub async fn create(&self, form: R::Form) -> DatabaseResult<u64> {
        let result = self.db.execute(R::INSERT_SQL, form.into_values()).await?;
        Ok(result.last_insert_id())
    }

    /// Overwrite by id and return the number of rows touched
    pub async fn update(&self, id: i32, form: R::Form) -> DatabaseResult<u64> {
        let mut values = form.into_values();
        values.push(Value::from(id));
        let result = self.db.execute(R::UPDATE_SQL, values).await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i32) -> DatabaseResult<u64> {
        let result = self.db.execute(R::DELETE_SQL, vec![Value::from(id)]).await?;
        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> DatabaseResult<i64> {
        count_rows(self.db, &R::META).await
    }
}

#[derive(Debug, FromQueryResult)]
struct RowCount {
    total: i64,
}

/// Rows currently in the entity's table
pub async fn count_rows(db: &Database, meta: &ResourceMeta) -> DatabaseResult<i64> {
    let sql = format!("SELECT COUNT(*) AS total FROM {}", meta.table);
    let row: Option<RowCount> = db.fetch_optional(&sql, vec![]).await?;
    Ok(row.map(|r| r.total).unwrap_or_default())
}

/// Options for a reference field
pub async fn load_choices(db: &Database, sql: &str) -> DatabaseResult<Vec<Choice>> {
    db.fetch_all(sql, vec![]).await
}
