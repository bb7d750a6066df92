//! Non-destructive guarantee tests
//!
//! These tests verify that the scanner never modifies project files.

use sha2::{Digest, Sha256};
use solman_scanner::Scanner;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Compute SHA256 hash of a file
fn hash_file(path: &Path) -> Option<String> {
    let content = fs::read(path).ok()?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    Some(hex::encode(hasher.finalize()))
}

/// Create a snapshot of all files in a directory
fn snapshot_directory(path: &Path) -> HashMap<String, String> {
    let mut snapshot = HashMap::new();

    for entry in WalkDir::new(path).into_iter().filter_map(Result::ok) {
        if entry.file_type().is_file() {
            let relative_path = entry
                .path()
                .strip_prefix(path)
                .unwrap()
                .to_string_lossy()
                .to_string();
            if let Some(hash) = hash_file(entry.path()) {
                snapshot.insert(relative_path, hash);
            }
        }
    }

    snapshot
}

/// Create a solution tree including a broken project and a broken packages.config
fn create_readonly_test_fixture() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let base = temp_dir.path();

    let web = base.join("Web");
    fs::create_dir_all(&web).unwrap();
    fs::write(
        web.join("Web.csproj"),
        r"<Project><PropertyGroup><TargetFrameworkVersion>v4.6.1</TargetFrameworkVersion></PropertyGroup></Project>",
    )
    .unwrap();
    fs::write(
        web.join("packages.config"),
        r#"<packages><package id="EntityFramework" version="6.2.0" targetFramework="net461" /></packages>"#,
    )
    .unwrap();
    fs::write(web.join("Global.asax.cs"), "public class Global {}").unwrap();

    let broken = base.join("Broken");
    fs::create_dir_all(&broken).unwrap();
    fs::write(broken.join("Broken.csproj"), "<Project>").unwrap();
    fs::write(broken.join("packages.config"), "<packages><package /></packages>").unwrap();

    fs::write(base.join("Solution.sln"), "Microsoft Visual Studio Solution File").unwrap();

    temp_dir
}

fn assert_unchanged(before: &HashMap<String, String>, after: &HashMap<String, String>) {
    assert_eq!(before.len(), after.len(), "Number of files should not change");
    for (path, before_hash) in before {
        assert_eq!(
            Some(before_hash),
            after.get(path),
            "File {path} should not be modified"
        );
    }
}

#[test]
fn test_scanner_is_readonly() {
    let fixture = create_readonly_test_fixture();
    let before_snapshot = snapshot_directory(fixture.path());

    let result = Scanner::new().scan(fixture.path());
    assert!(result.is_ok(), "Scan should succeed");

    assert_unchanged(&before_snapshot, &snapshot_directory(fixture.path()));
}

#[test]
fn test_scanner_is_readonly_when_strict_run_aborts() {
    let fixture = create_readonly_test_fixture();
    let before_snapshot = snapshot_directory(fixture.path());

    let result = Scanner::new().with_strict(true).scan(fixture.path());
    assert!(result.is_err(), "Strict scan should abort on the broken project");

    assert_unchanged(&before_snapshot, &snapshot_directory(fixture.path()));
}

#[test]
fn test_scanner_is_readonly_multiple_scans() {
    let fixture = create_readonly_test_fixture();
    let initial_snapshot = snapshot_directory(fixture.path());

    let scanner = Scanner::new();
    for i in 0..5 {
        let result = scanner.scan(fixture.path());
        assert!(result.is_ok(), "Scan {i} should succeed");
    }

    assert_unchanged(&initial_snapshot, &snapshot_directory(fixture.path()));
}

#[test]
fn test_scanner_does_not_create_files_or_directories() {
    let fixture = create_readonly_test_fixture();

    let count = |want_dir: bool| -> usize {
        WalkDir::new(fixture.path())
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_dir() == want_dir)
            .count()
    };
    let files_before = count(false);
    let dirs_before = count(true);

    let _ = Scanner::new().scan(fixture.path());

    assert_eq!(files_before, count(false), "Scanner should not create any files");
    assert_eq!(dirs_before, count(true), "Scanner should not create any directories");
}

#[cfg(unix)]
#[test]
fn test_scanner_preserves_timestamps() {
    let fixture = create_readonly_test_fixture();

    let mtimes = || -> HashMap<String, std::time::SystemTime> {
        WalkDir::new(fixture.path())
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|entry| {
                let relative_path = entry
                    .path()
                    .strip_prefix(fixture.path())
                    .unwrap()
                    .to_string_lossy()
                    .to_string();
                (relative_path, fs::metadata(entry.path()).unwrap().modified().unwrap())
            })
            .collect()
    };

    let before = mtimes();
    std::thread::sleep(std::time::Duration::from_millis(100));
    let _ = Scanner::new().scan(fixture.path());

    assert_eq!(before, mtimes(), "Modification times should not change");
}
