//! MySQL schema store backed by sqlx.

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Row;

use crate::error::{DbError, DbResult};
use crate::schema::{ColumnInfo, TRACKING_TABLE, TRACKING_TABLE_DDL};
use crate::traits::SchemaStore;

/// MySQL implementation of [`SchemaStore`].
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Open a connection for the given URL and probe it.
    ///
    /// No pooling beyond a single connection and no retry: a failure here
    /// (unreachable host, bad credentials) is fatal to the invocation.
    pub async fn connect(url: &str) -> DbResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
            .map_err(|e| DbError::ConnectionError {
                driver: "mysql".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl SchemaStore for MySqlStore {
    async fn tracking_table_exists(&self) -> DbResult<bool> {
        let row = sqlx::query("SHOW TABLES LIKE 'migrations'")
            .fetch_optional(&self.pool)
            .await?;
        // LIKE already matches case-insensitively under the common
        // collations; the name comparison covers case-sensitive setups.
        match row {
            Some(row) => {
                let name: String = row.try_get(0)?;
                Ok(name.eq_ignore_ascii_case(TRACKING_TABLE))
            }
            None => Ok(false),
        }
    }

    async fn create_tracking_table(&self) -> DbResult<()> {
        sqlx::query(TRACKING_TABLE_DDL)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::CreateTable(e.to_string()))?;
        Ok(())
    }

    async fn describe_tracking_table(&self) -> DbResult<Vec<ColumnInfo>> {
        let rows = sqlx::query("DESC migrations")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DbError::Introspection(e.to_string()))?;
        rows.iter().map(column_from_row).collect()
    }

    fn store_type(&self) -> &'static str {
        "mysql"
    }
}

/// Map one `DESC migrations` row (Field/Type/Null/Key/Default/Extra)
/// into a [`ColumnInfo`].
fn column_from_row(row: &MySqlRow) -> DbResult<ColumnInfo> {
    let get = |name: &str| -> DbResult<String> {
        row.try_get::<String, _>(name)
            .map_err(|e| DbError::Introspection(e.to_string()))
    };
    let null: String = get("Null")?;
    let default: Option<String> = row
        .try_get::<Option<String>, _>("Default")
        .map_err(|e| DbError::Introspection(e.to_string()))?;

    Ok(ColumnInfo {
        field: get("Field")?,
        column_type: get("Type")?,
        nullable: null.eq_ignore_ascii_case("YES"),
        key: get("Key")?,
        default,
        extra: get("Extra")?,
    })
}
