//! sk-db - Database layer for Skein
//!
//! This crate provides the `SchemaStore` trait, its MySQL implementation,
//! and the tracking-table schema validator. The orchestrator only ever
//! issues three statements itself: the existence probe, the tracking-table
//! DDL, and the column introspection query; everything else happens inside
//! the synthesized runner.

pub mod error;
pub mod mysql;
pub mod schema;
pub mod traits;
pub mod validator;

pub use error::{DbError, DbResult};
pub use mysql::MySqlStore;
pub use schema::{verify_columns, ColumnInfo, TRACKING_TABLE, TRACKING_TABLE_DDL};
pub use traits::SchemaStore;
pub use validator::ensure;
