use super::*;

fn expected_columns() -> Vec<ColumnInfo> {
    vec![
        ColumnInfo {
            field: "id_migration".to_string(),
            column_type: "int".to_string(),
            nullable: false,
            key: "PRI".to_string(),
            default: None,
            extra: "auto_increment".to_string(),
        },
        ColumnInfo {
            field: "file".to_string(),
            column_type: "varchar(255)".to_string(),
            nullable: true,
            key: String::new(),
            default: None,
            extra: String::new(),
        },
        ColumnInfo {
            field: "created_at".to_string(),
            column_type: "timestamp".to_string(),
            nullable: false,
            key: String::new(),
            default: Some("CURRENT_TIMESTAMP".to_string()),
            extra: String::new(),
        },
        ColumnInfo {
            field: "statements".to_string(),
            column_type: "text".to_string(),
            nullable: true,
            key: String::new(),
            default: None,
            extra: String::new(),
        },
    ]
}

#[test]
fn test_verify_matching_shape() {
    verify_columns(&expected_columns()).unwrap();
}

#[test]
fn test_verify_id_migration_missing_auto_increment() {
    let mut columns = expected_columns();
    columns[0].extra = String::new();

    let err = verify_columns(&columns).unwrap_err();
    match err {
        DbError::SchemaMismatch { column, .. } => assert_eq!(column, "id_migration"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_verify_id_migration_not_primary_key() {
    let mut columns = expected_columns();
    columns[0].key = "MUL".to_string();

    let err = verify_columns(&columns).unwrap_err();
    assert!(matches!(
        err,
        DbError::SchemaMismatch {
            column: "id_migration",
            ..
        }
    ));
}

#[test]
fn test_verify_file_not_nullable() {
    let mut columns = expected_columns();
    columns[1].nullable = false;

    let err = verify_columns(&columns).unwrap_err();
    assert!(matches!(err, DbError::SchemaMismatch { column: "file", .. }));
}

#[test]
fn test_verify_file_wrong_type() {
    let mut columns = expected_columns();
    columns[1].column_type = "text".to_string();

    let err = verify_columns(&columns).unwrap_err();
    assert!(matches!(err, DbError::SchemaMismatch { column: "file", .. }));
}

#[test]
fn test_verify_created_at_wrong_default() {
    let mut columns = expected_columns();
    columns[2].default = Some("2024-01-01 00:00:00".to_string());

    let err = verify_columns(&columns).unwrap_err();
    assert!(matches!(
        err,
        DbError::SchemaMismatch {
            column: "created_at",
            ..
        }
    ));
}

#[test]
fn test_verify_created_at_parenthesized_default() {
    // MySQL 8 can report DEFAULT_GENERATED with CURRENT_TIMESTAMP().
    let mut columns = expected_columns();
    columns[2].default = Some("current_timestamp()".to_string());

    verify_columns(&columns).unwrap();
}

#[test]
fn test_verify_ignores_unrecognized_columns() {
    let mut columns = expected_columns();
    columns.push(ColumnInfo {
        field: "checksum".to_string(),
        column_type: "char(64)".to_string(),
        nullable: true,
        key: String::new(),
        default: None,
        extra: String::new(),
    });

    verify_columns(&columns).unwrap();
}

#[test]
fn test_verify_mismatch_message_names_expectation() {
    let mut columns = expected_columns();
    columns[0].extra = String::new();

    let message = verify_columns(&columns).unwrap_err().to_string();
    assert!(message.contains("id_migration"));
    assert!(message.contains("auto_increment"));
}

#[test]
fn test_ddl_literal_is_stable() {
    assert!(TRACKING_TABLE_DDL.starts_with("CREATE TABLE migrations ("));
    assert!(TRACKING_TABLE_DDL.contains("id_migration INTEGER AUTO_INCREMENT PRIMARY KEY"));
    assert!(TRACKING_TABLE_DDL.contains("file VARCHAR(255) NULL"));
    assert!(TRACKING_TABLE_DDL.contains("created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP"));
    assert!(TRACKING_TABLE_DDL.contains("statements TEXT"));
}
