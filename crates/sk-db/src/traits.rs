//! Schema store trait definition

use crate::error::DbResult;
use crate::schema::ColumnInfo;
use async_trait::async_trait;

/// Minimal database surface the orchestrator needs for bootstrap and
/// verification of the tracking table.
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait SchemaStore: Send + Sync {
    /// Check whether the migrations tracking table exists. The probe must
    /// be case-insensitive to common naming.
    async fn tracking_table_exists(&self) -> DbResult<bool>;

    /// Create the tracking table with the fixed DDL.
    async fn create_tracking_table(&self) -> DbResult<()>;

    /// Introspect the tracking table's columns.
    async fn describe_tracking_table(&self) -> DbResult<Vec<ColumnInfo>>;

    /// Store type identifier for logging
    fn store_type(&self) -> &'static str;
}
