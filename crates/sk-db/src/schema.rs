//! Tracking-table schema: the fixed DDL and per-column verification.

use crate::error::{DbError, DbResult};

/// Name of the bookkeeping table.
pub const TRACKING_TABLE: &str = "migrations";

/// Tracking table DDL. The literal must stay bit-compatible for interop
/// with existing deployments; do not reformat.
pub const TRACKING_TABLE_DDL: &str = "CREATE TABLE migrations (
  id_migration INTEGER AUTO_INCREMENT PRIMARY KEY,
  file VARCHAR(255) NULL,
  created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
  statements TEXT
)";

/// One introspected column of the tracking table, as reported by the
/// engine's column description query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub field: String,
    pub column_type: String,
    pub nullable: bool,
    pub key: String,
    pub default: Option<String>,
    pub extra: String,
}

/// Verify introspected columns against the expected tracking-table shape.
///
/// Only the columns the orchestrator depends on are checked; unrecognized
/// columns are ignored so newer deployments with extra columns still pass.
/// Verification is read-only: a mismatch is fatal, never repaired.
pub fn verify_columns(columns: &[ColumnInfo]) -> DbResult<()> {
    for column in columns {
        match column.field.as_str() {
            "id_migration" => {
                if column.key != "PRI" || !column.extra.contains("auto_increment") {
                    return Err(DbError::SchemaMismatch {
                        column: "id_migration",
                        expected: "KEY: PRI, EXTRA: auto_increment".to_string(),
                        actual: format!("KEY: {}, EXTRA: {}", column.key, column.extra),
                    });
                }
            }
            "file" => {
                let ty = column.column_type.to_ascii_lowercase();
                if !ty.starts_with("varchar") || !column.nullable {
                    return Err(DbError::SchemaMismatch {
                        column: "file",
                        expected: "TYPE: varchar, NULL: YES".to_string(),
                        actual: format!(
                            "TYPE: {}, NULL: {}",
                            column.column_type,
                            if column.nullable { "YES" } else { "NO" }
                        ),
                    });
                }
            }
            "created_at" => {
                let ty = column.column_type.to_ascii_lowercase();
                let default = column
                    .default
                    .as_deref()
                    .unwrap_or("")
                    .to_ascii_uppercase();
                // MySQL 8 reports the default with parentheses in some
                // configurations, so match on the function name.
                if ty != "timestamp" || !default.contains("CURRENT_TIMESTAMP") {
                    return Err(DbError::SchemaMismatch {
                        column: "created_at",
                        expected: "TYPE: timestamp, DEFAULT: CURRENT_TIMESTAMP".to_string(),
                        actual: format!(
                            "TYPE: {}, DEFAULT: {}",
                            column.column_type,
                            column.default.as_deref().unwrap_or("NULL")
                        ),
                    });
                }
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
