//! Invariant checker scenarios over scratch artifacts.

use std::fs;
use std::path::PathBuf;

use tripwire_tests::*;

const RED: &str = "--background: #FF0000;";

fn artifact(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("globals.css");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn red_background_passes() {
    let dir = tempfile::tempdir().unwrap();
    let path = artifact(&dir, ":root { --background: #FF0000; }");
    check_invariant(&path, RED).unwrap();
}

#[test]
fn green_background_names_missing_fragment() {
    let dir = tempfile::tempdir().unwrap();
    let path = artifact(&dir, ":root { --background: #00FF00; }");

    let err = check_invariant(&path, RED).unwrap_err();
    assert!(matches!(err, CheckFailure::InvariantViolation { .. }));
    assert_eq!(err.reason(), "fragment not found");
    assert!(err.to_string().contains(RED), "{err}");
    assert_eq!(err.fragment(), Some(RED));
    assert_eq!(err.path(), Some(path.as_path()));
}

#[test]
fn missing_artifact_is_resource_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("globals.css");
    let err = check_invariant(&missing, RED).unwrap_err();

    assert!(err.is_resource_unavailable());
    assert_eq!(err.path(), Some(missing.as_path()));
    assert_eq!(err.fragment(), None);
    assert_eq!(err.reason(), "resource unavailable");
    assert!(!err.to_string().contains("fragment not found"), "{err}");
}

#[test]
fn containing_content_passes_wherever_fragment_sits() {
    let dir = tempfile::tempdir().unwrap();
    for content in [
        RED,
        "--background: #FF0000;--background: #FF0000;",
        "/* generated */\n:root {\n  --background: #FF0000;\n}\n",
        "body{}\n:root{--foreground:#000;--background: #FF0000;}",
    ] {
        let path = artifact(&dir, content);
        assert!(check_invariant(&path, RED).is_ok(), "content: {content:?}");
    }
}

#[test]
fn equivalent_representations_are_not_accepted() {
    let dir = tempfile::tempdir().unwrap();
    for content in [
        ":root { --background: red; }",
        ":root { --background: rgb(255,0,0); }",
        ":root { --background: #f00; }",
        ":root { --background: #ff0000; }",
        ":root { --background:#FF0000; }",
        ":root { --background: #FF0000 }",
    ] {
        let path = artifact(&dir, content);
        let err = check_invariant(&path, RED).unwrap_err();
        assert!(err.is_violation(), "content: {content:?}");
    }
}

#[test]
fn repeated_checks_agree() {
    let dir = tempfile::tempdir().unwrap();
    let path = artifact(&dir, ":root { --background: #00FF00; }");
    let results: Vec<bool> = (0..3).map(|_| check_invariant(&path, RED).is_ok()).collect();
    assert_eq!(results, [false, false, false]);
}

#[test]
fn absent_check_mirrors_contains() {
    let dir = tempfile::tempdir().unwrap();
    let path = artifact(&dir, ":root { --background: #00FF00; }");
    check_absent(&path, RED).unwrap();

    let path = artifact(&dir, ":root { --background: #FF0000; }");
    let err = check_absent(&path, RED).unwrap_err();
    assert_eq!(err.reason(), "forbidden fragment present");
}
