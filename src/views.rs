//! View structures handed to the templates

use crate::resource::{Choice, FieldKind, RecordSummary, ResourceMeta};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Reference options keyed by field name
pub type ChoiceSets = HashMap<&'static str, Vec<Choice>>;

/// Table of every record of one entity
#[derive(Debug, Clone, Serialize)]
pub struct ListView {
    pub title: String,
    pub noun: String,
    pub description: String,
    pub new_url: String,
    pub columns: Vec<ColumnView>,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnView {
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    pub id: String,
    pub cells: Vec<String>,
    pub edit_url: String,
    pub delete_url: String,
}

impl ListView {
    /// Build the table from serialized list rows
    pub fn new<T: Serialize>(meta: &ResourceMeta, rows: &[T]) -> Result<Self, serde_json::Error> {
        let rows = rows
            .iter()
            .map(|row| {
                let value = serde_json::to_value(row)?;
                let id = render_value(&value["id"]);
                Ok(RowView {
                    cells: meta
                        .columns
                        .iter()
                        .map(|column| render_value(&value[column.key]))
                        .collect(),
                    edit_url: meta.edit_url(&id),
                    delete_url: meta.delete_url(&id),
                    id,
                })
            })
            .collect::<Result<Vec<_>, serde_json::Error>>()?;

        Ok(Self {
            title: meta.title.to_string(),
            noun: meta.noun.to_string(),
            description: meta.description.to_string(),
            new_url: meta.new_url(),
            columns: meta
                .columns
                .iter()
                .map(|c| ColumnView {
                    label: c.label.to_string(),
                })
                .collect(),
            rows,
        })
    }
}

/// New and edit forms
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub title: String,
    pub action: String,
    pub submit_label: String,
    pub cancel_url: String,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: String,
    pub label: String,
    /// `text`, `checkbox` or `select`
    pub widget: &'static str,
    pub value: String,
    pub checked: bool,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl FormView {
    /// Blank form posting to the create route
    pub fn create(meta: &ResourceMeta, choices: &ChoiceSets) -> Self {
        Self {
            title: format!("New {}", meta.noun),
            action: meta.new_url(),
            submit_label: "Create".to_string(),
            cancel_url: meta.list_url(),
            fields: build_fields(meta, &Value::Null, choices),
        }
    }

    /// Form pre-filled from a serialized record
    pub fn edit(meta: &ResourceMeta, id: i32, record: &Value, choices: &ChoiceSets) -> Self {
        Self {
            title: format!("Edit {} #{}", meta.noun, id),
            action: meta.edit_url(id),
            submit_label: "Save".to_string(),
            cancel_url: meta.list_url(),
            fields: build_fields(meta, record, choices),
        }
    }
}

fn build_fields(meta: &ResourceMeta, record: &Value, choices: &ChoiceSets) -> Vec<FieldView> {
    meta.fields
        .iter()
        .map(|field| {
            let current = &record[field.name];
            let mut view = FieldView {
                name: field.name.to_string(),
                label: field.label.to_string(),
                widget: "text",
                value: render_value(current),
                checked: false,
                options: Vec::new(),
            };

            match field.kind {
                FieldKind::Text => {}
                FieldKind::Flag => {
                    view.widget = "checkbox";
                    view.checked = is_set(current);
                }
                FieldKind::Reference { required, .. } => {
                    view.widget = "select";
                    if !required {
                        view.options.push(OptionView {
                            value: String::new(),
                            label: "None".to_string(),
                            selected: current.is_null(),
                        });
                    }
                    let available = choices.get(field.name).map(Vec::as_slice).unwrap_or(&[]);
                    view.options.extend(available.iter().map(|choice| {
                        let value = choice.id.to_string();
                        OptionView {
                            selected: value == view.value,
                            label: choice.label.clone(),
                            value,
                        }
                    }));
                }
            }

            view
        })
        .collect()
}

/// Delete confirmation
#[derive(Debug, Clone, Serialize)]
pub struct DeleteView {
    pub title: String,
    pub noun: String,
    pub name: String,
    pub detail: Option<String>,
    pub action: String,
    pub cancel_url: String,
}

impl DeleteView {
    pub fn new(meta: &ResourceMeta, summary: RecordSummary) -> Self {
        Self {
            title: format!("Delete {}", meta.noun),
            noun: meta.noun.to_string(),
            action: meta.delete_url(summary.id),
            cancel_url: meta.list_url(),
            name: summary.name,
            detail: summary.detail,
        }
    }
}

/// Cell text for a JSON value. The template escapes it.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    }
}
