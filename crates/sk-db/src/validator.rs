//! Schema state validator: bootstrap and verify the tracking table.

use log::{debug, info};

use crate::error::DbResult;
use crate::schema::verify_columns;
use crate::traits::SchemaStore;

/// Ensure the tracking table exists and matches the expected shape.
///
/// An absent table is created from the fixed DDL. A present table gets
/// read-only verification; a mismatched table is an operator error and is
/// never repaired. The table is introspected even right after creation, so
/// a bootstrap that produced the wrong shape is caught immediately.
pub async fn ensure(store: &dyn SchemaStore) -> DbResult<()> {
    debug!("Validating tracking table via {} store", store.store_type());

    if !store.tracking_table_exists().await? {
        info!("Creating 'migrations' table...");
        store.create_tracking_table().await?;
    }

    let columns = store.describe_tracking_table().await?;
    verify_columns(&columns)
}

#[cfg(test)]
#[path = "validator_test.rs"]
mod tests;
