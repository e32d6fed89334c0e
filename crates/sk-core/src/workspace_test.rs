use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_create_with_parents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("temp");

    let ws = Workspace::create(&path).unwrap();
    assert!(ws.path().exists());
}

#[test]
fn test_remove_deletes_contents() {
    let dir = tempdir().unwrap();
    let mut ws = Workspace::create(dir.path().join("temp")).unwrap();
    fs::write(ws.path().join("runner.go"), "package main").unwrap();

    ws.remove().unwrap();
    assert!(!dir.path().join("temp").exists());
}

#[test]
fn test_remove_is_idempotent() {
    let dir = tempdir().unwrap();
    let mut ws = Workspace::create(dir.path().join("temp")).unwrap();

    ws.remove().unwrap();
    ws.remove().unwrap();
}

#[test]
fn test_remove_tolerates_externally_deleted_dir() {
    let dir = tempdir().unwrap();
    let mut ws = Workspace::create(dir.path().join("temp")).unwrap();

    fs::remove_dir_all(ws.path()).unwrap();
    ws.remove().unwrap();
}

#[test]
fn test_drop_removes_workspace() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("temp");
    {
        let ws = Workspace::create(&path).unwrap();
        fs::write(ws.path().join("runner.go"), "package main").unwrap();
    }
    assert!(!path.exists());
}

#[test]
fn test_drop_after_remove_is_quiet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("temp");
    {
        let mut ws = Workspace::create(&path).unwrap();
        ws.remove().unwrap();
    }
    assert!(!path.exists());
}
