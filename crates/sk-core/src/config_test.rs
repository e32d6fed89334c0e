use super::*;
use crate::error::CoreError;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load(dir.path()).unwrap();
    assert!(config.driver.is_none());
    assert!(config.dsn.is_none());
    assert!(config.workspace_dir.is_none());
}

#[test]
fn test_load_full_config() {
    let dir = tempdir().unwrap();
    let content = r#"
driver: mysql
dsn: "root:@tcp(127.0.0.1:3306)/app?charset=utf8"
workspace_dir: .skein-tmp
"#;
    fs::write(dir.path().join(CONFIG_FILE), content).unwrap();

    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.driver.as_deref(), Some("mysql"));
    assert_eq!(
        config.dsn.as_deref(),
        Some("root:@tcp(127.0.0.1:3306)/app?charset=utf8")
    );
    assert_eq!(config.workspace_dir.as_deref(), Some(".skein-tmp"));
}

#[test]
fn test_load_partial_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "driver: mysql\n").unwrap();

    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.driver.as_deref(), Some("mysql"));
    assert!(config.dsn.is_none());
}

#[test]
fn test_load_invalid_yaml_errors() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "driver: [unclosed\n").unwrap();

    let err = Config::load(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigParse(_)));
}
