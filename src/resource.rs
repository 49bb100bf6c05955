//! The CRUD contract every dashboard entity follows.
//!
//! An entity is a zero-sized type implementing [`Resource`]: static metadata
//! for the views, the six parameterized statements, and the row, record and
//! form types those statements read and write. Handlers, the store and the
//! views are written once against this trait.

use sea_orm::{FromQueryResult, Value};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// How a form field is rendered and coerced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, stored verbatim
    Text,
    /// Checkbox stored as 0/1
    Flag,
    /// Foreign key chosen from a `<select>`
    Reference {
        /// Query returning `id` and `label` columns
        choices: &'static str,
        /// Whether the column is NOT NULL
        required: bool,
    },
}

/// One editable column
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
        }
    }

    pub const fn flag(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Flag,
        }
    }

    pub const fn reference(
        name: &'static str,
        label: &'static str,
        choices: &'static str,
        required: bool,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Reference { choices, required },
        }
    }
}

/// One column of the list table, keyed by the list row's field name
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Static description of an entity
#[derive(Debug, Clone, Copy)]
pub struct ResourceMeta {
    /// URL segment, e.g. `waste-types`
    pub slug: &'static str,
    /// Backing table
    pub table: &'static str,
    /// Plural heading, e.g. `Waste Types`
    pub title: &'static str,
    /// Singular lowercase noun, e.g. `waste type`
    pub noun: &'static str,
    pub description: &'static str,
    pub columns: &'static [Column],
    pub fields: &'static [FieldDef],
}

impl ResourceMeta {
    pub fn list_url(&self) -> String {
        format!("/{}", self.slug)
    }

    pub fn new_url(&self) -> String {
        format!("/{}/new", self.slug)
    }

    pub fn edit_url(&self, id: impl std::fmt::Display) -> String {
        format!("/{}/{}/edit", self.slug, id)
    }

    pub fn delete_url(&self, id: impl std::fmt::Display) -> String {
        format!("/{}/{}/delete", self.slug, id)
    }
}

/// A table-backed entity
///
/// Every statement uses `?` placeholders and aliases the primary key as `id`.
/// `UPDATE_SQL` binds the form values first and the id last; `FETCH_SQL`,
/// `SUMMARY_SQL` and `DELETE_SQL` bind only the id.
pub trait Resource: Send + Sync + 'static {
    const META: ResourceMeta;

    /// Every row with reference display names joined in
    const LIST_SQL: &'static str;
    /// One row by id with the raw editable columns
    const FETCH_SQL: &'static str;
    /// One row by id as `id`, `name`, `detail`
    const SUMMARY_SQL: &'static str;
    const INSERT_SQL: &'static str;
    const UPDATE_SQL: &'static str;
    const DELETE_SQL: &'static str;

    /// Shape of a list row
    type Row: FromQueryResult + Serialize + Send + Sync;
    /// Shape of a fetched record, field names matching [`ResourceMeta::fields`]
    type Record: FromQueryResult + Serialize + Send + Sync;
    /// Submitted form, already coerced
    type Form: DeserializeOwned + IntoValues + Send;
}

/// Bind order for INSERT and UPDATE
pub trait IntoValues {
    fn into_values(self) -> Vec<Value>;
}

/// What the delete confirmation shows
#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct RecordSummary {
    pub id: i32,
    pub name: String,
    pub detail: Option<String>,
}

/// One option of a reference `<select>`
#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct Choice {
    pub id: i32,
    pub label: String,
}
