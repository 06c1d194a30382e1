//! CLI end-to-end tests that invoke the compiled `xcext` binary.
//!
//! These tests use `env!("CARGO_BIN_EXE_xcext")` to locate the binary and
//! `std::process::Command` to run it against temporary project trees.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn xcext_bin() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_xcext"))
}

/// Run `xcext` with the given args in the given directory.
fn run(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(xcext_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to execute xcext binary")
}

/// Lay out a minimal Tauri project with a generated iOS directory.
fn fake_project(root: &Path) {
    let src_tauri = root.join("src-tauri");
    fs::create_dir_all(&src_tauri).unwrap();
    fs::write(
        src_tauri.join("tauri.conf.json"),
        r#"{"productName":"MyApp","identifier":"com.example.myapp","version":"1.0.0"}"#,
    )
    .unwrap();

    let apple = src_tauri.join("gen").join("apple");
    fs::create_dir_all(&apple).unwrap();
    let manifest = "name: MyApp
targets:
  MyApp_iOS:
    type: application
    dependencies: []
    info:
      path: MyApp_iOS/Info.plist
      properties:
        CFBundleDisplayName: MyApp
";
    fs::write(apple.join("project.yml"), manifest).unwrap();
}

#[test]
fn no_command_prints_help_hint() {
    let temp = TempDir::new().unwrap();
    let output = run(temp.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("xcext"));
    assert!(stdout.contains("--help"));
}

#[test]
fn add_unknown_type_fails_with_available_list() {
    let temp = TempDir::new().unwrap();
    fake_project(temp.path());
    let output = run(temp.path(), &["add", "widget"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown extension type: widget"));
    assert!(stderr.contains("share"));
}

#[test]
fn add_outside_a_project_fails() {
    let temp = TempDir::new().unwrap();
    let output = run(temp.path(), &["add", "share"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"));
}

#[test]
fn add_share_scaffolds_the_extension() {
    let temp = TempDir::new().unwrap();
    fake_project(temp.path());
    let output = run(temp.path(), &["add", "share"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Share Extension setup complete"));
    assert!(stdout.contains("group.com.example.myapp"));

    let apple = temp.path().join("src-tauri/gen/apple");
    assert!(apple.join("ShareExtension/ShareViewController.swift").is_file());
    assert!(apple.join("ShareExtension/Info.plist").is_file());
    assert!(apple.join("ShareExtension/ShareExtension.entitlements").is_file());
    assert!(
        apple
            .join("MyApp_iOS/MyApp_iOS.entitlements")
            .is_file()
    );

    let manifest = fs::read_to_string(apple.join("project.yml")).unwrap();
    assert!(manifest.contains("MyApp-ShareExtension:"));
    assert!(manifest.contains("- target: MyApp-ShareExtension"));
}

#[test]
fn add_share_twice_leaves_one_target_block() {
    let temp = TempDir::new().unwrap();
    fake_project(temp.path());

    assert!(run(temp.path(), &["add", "share"]).status.success());
    assert!(run(temp.path(), &["add", "share"]).status.success());

    let manifest =
        fs::read_to_string(temp.path().join("src-tauri/gen/apple/project.yml")).unwrap();
    assert_eq!(manifest.matches("MyApp-ShareExtension:").count(), 1);
    assert_eq!(manifest.matches("CFBundleURLTypes:").count(), 1);
}
