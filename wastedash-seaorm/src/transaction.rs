//! Multi-statement work: scripts run inside one transaction, and stored procedures.

use crate::{Database, DatabaseError, DatabaseResult};
use sea_orm::{ConnectionTrait, TransactionTrait};

impl Database {
    /// Execute every statement of `script` in a single transaction.
    ///
    /// Any failing statement rolls the whole script back. Returns the number
    /// of statements executed.
    pub async fn run_script(&self, script: &str) -> DatabaseResult<usize> {
        let statements = split_statements(script);
        tracing::debug!(count = statements.len(), "running script in transaction");

        let txn = self
            .connection()
            .begin()
            .await
            .map_err(|e| DatabaseError::Transaction(e.to_string()))?;

        for (index, statement) in statements.iter().enumerate() {
            if let Err(err) = txn.execute_unprepared(statement).await {
                tracing::error!(index, error = %err, "script statement failed, rolling back");
                txn.rollback()
                    .await
                    .map_err(|e| DatabaseError::Transaction(e.to_string()))?;
                return Err(DatabaseError::Transaction(format!(
                    "statement {} failed: {}",
                    index + 1,
                    err
                )));
            }
        }

        txn.commit()
            .await
            .map_err(|e| DatabaseError::Transaction(e.to_string()))?;
        Ok(statements.len())
    }

    /// `CALL` a stored procedure that takes no arguments.
    pub async fn call_procedure(&self, name: &str) -> DatabaseResult<()> {
        if !is_identifier(name) {
            return Err(DatabaseError::Config(format!(
                "invalid procedure name: {:?}",
                name
            )));
        }

        tracing::debug!(procedure = name, "calling stored procedure");
        self.connection()
            .execute_unprepared(&format!("CALL {}()", name))
            .await?;
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Split a script on `;` outside quoted strings, dropping `--` comment lines
/// and empty statements.
pub fn split_statements(script: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;

    for line in script.lines() {
        if !in_quote && line.trim_start().starts_with("--") {
            continue;
        }

        for c in line.chars() {
            match c {
                '\'' => {
                    in_quote = !in_quote;
                    current.push(c);
                }
                ';' if !in_quote => {
                    let statement = current.trim();
                    if !statement.is_empty() {
                        statements.push(statement.to_string());
                    }
                    current.clear();
                }
                _ => current.push(c),
            }
        }
        current.push('\n');
    }

    let tail = current.trim();
    if !tail.is_empty() {
        statements.push(tail.to_string());
    }

    statements
}
