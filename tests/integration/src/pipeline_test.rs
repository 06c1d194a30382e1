//! End-to-end test for the add-extension pipeline
//!
//! Exercises the complete flow against a synthesized project tree: config
//! discovery -> file creation -> entitlement and Info.plist edits ->
//! manifest rewrite. The external generator is expected to be absent in
//! the test environment, so its outcome is not asserted.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use xcext_core::{AddOptions, ExtensionRegistry, add_extension};
use xcext_fs::Platform;
use xcext_plist::APP_GROUPS_KEY;

const MANIFEST: &str = "name: MyApp
targets:
  MyApp_iOS:
    type: application
    dependencies: []
    info:
      path: MyApp_iOS/Info.plist
      properties:
        CFBundleDisplayName: MyApp
";

const HOST_INFO_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleDisplayName</key>
    <string>MyApp</string>
</dict>
</plist>
"#;

/// Lay out a Tauri project with a generated Apple directory for `platform`.
fn fake_project(root: &Path, platform: Platform) -> PathBuf {
    let src_tauri = root.join("src-tauri");
    fs::create_dir_all(&src_tauri).unwrap();
    fs::write(
        src_tauri.join("tauri.conf.json"),
        r#"{"productName":"MyApp","identifier":"com.example.myapp","version":"2.3.0"}"#,
    )
    .unwrap();

    let apple = src_tauri.join("gen").join(platform.dir_name());
    let host_dir = apple.join(format!("MyApp_{}", platform.target_suffix()));
    fs::create_dir_all(&host_dir).unwrap();

    let manifest = match platform {
        Platform::Ios => MANIFEST.to_string(),
        Platform::Macos => MANIFEST.replace("MyApp_iOS", "MyApp_macOS"),
    };
    fs::write(apple.join("project.yml"), manifest).unwrap();
    fs::write(host_dir.join("Info.plist"), HOST_INFO_PLIST).unwrap();

    apple
}

fn add_share(root: &Path, platform: Platform) -> xcext_core::AddReport {
    let registry = ExtensionRegistry::with_builtins();
    let options = AddOptions {
        platform,
        templates_dir: None,
        start_dir: Some(root.to_path_buf()),
    };
    add_extension(&registry, "share", &options).unwrap()
}

#[test]
fn add_share_scaffolds_everything() {
    let temp = TempDir::new().unwrap();
    let apple = fake_project(temp.path(), Platform::Ios);
    let report = add_share(temp.path(), Platform::Ios);

    assert_eq!(report.display_name, "Share Extension");
    assert_eq!(report.extension_name, "MyApp-ShareExtension");
    assert_eq!(report.identifier, "com.example.myapp");
    assert_eq!(report.app_group_id, "group.com.example.myapp");
    assert_eq!(report.url_scheme, "myapp");
    assert_eq!(report.apple_dir, apple);

    // Extension files
    let ext_dir = apple.join("ShareExtension");
    let controller = fs::read_to_string(ext_dir.join("ShareViewController.swift")).unwrap();
    assert!(controller.contains("group.com.example.myapp"));
    let info = fs::read_to_string(ext_dir.join("Info.plist")).unwrap();
    assert!(info.contains("<string>2.3.0</string>"));
    let ents = fs::read_to_string(ext_dir.join("ShareExtension.entitlements")).unwrap();
    assert!(ents.contains("<string>group.com.example.myapp</string>"));

    // Host entitlements created from scratch
    let host_ents =
        fs::read_to_string(apple.join("MyApp_iOS/MyApp_iOS.entitlements")).unwrap();
    assert!(host_ents.contains(APP_GROUPS_KEY));
    assert!(host_ents.contains("<string>group.com.example.myapp</string>"));

    // Host Info.plist gains the URL scheme
    let host_info = fs::read_to_string(apple.join("MyApp_iOS/Info.plist")).unwrap();
    assert!(host_info.contains("CFBundleURLSchemes"));
    assert!(host_info.contains("<string>myapp</string>"));

    // Manifest gains the target, the dependency edge, and the URL type
    let manifest = fs::read_to_string(apple.join("project.yml")).unwrap();
    assert!(manifest.contains("  MyApp-ShareExtension:"));
    assert!(manifest.contains("      - target: MyApp-ShareExtension"));
    assert!(manifest.contains("        embed: true"));
    assert!(manifest.contains("        CFBundleURLTypes:"));
}

#[test]
fn rerunning_the_pipeline_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let apple = fake_project(temp.path(), Platform::Ios);

    add_share(temp.path(), Platform::Ios);
    let manifest = fs::read_to_string(apple.join("project.yml")).unwrap();
    let host_ents =
        fs::read_to_string(apple.join("MyApp_iOS/MyApp_iOS.entitlements")).unwrap();
    let host_info = fs::read_to_string(apple.join("MyApp_iOS/Info.plist")).unwrap();

    add_share(temp.path(), Platform::Ios);
    assert_eq!(
        fs::read_to_string(apple.join("project.yml")).unwrap(),
        manifest
    );
    assert_eq!(
        fs::read_to_string(apple.join("MyApp_iOS/MyApp_iOS.entitlements")).unwrap(),
        host_ents
    );
    assert_eq!(
        fs::read_to_string(apple.join("MyApp_iOS/Info.plist")).unwrap(),
        host_info
    );
}

#[test]
fn add_share_on_macos_uses_the_macos_tree() {
    let temp = TempDir::new().unwrap();
    let apple = fake_project(temp.path(), Platform::Macos);
    let report = add_share(temp.path(), Platform::Macos);

    assert_eq!(report.apple_dir, apple);
    assert!(apple.ends_with("src-tauri/gen/apple-macos"));

    let ents =
        fs::read_to_string(apple.join("ShareExtension/ShareExtension.entitlements")).unwrap();
    assert!(ents.contains("com.apple.security.app-sandbox"));

    let manifest = fs::read_to_string(apple.join("project.yml")).unwrap();
    assert!(manifest.contains("    platform: macOS"));
    assert!(manifest.contains("      - target: MyApp-ShareExtension"));

    let host_info = fs::read_to_string(apple.join("MyApp_macOS/Info.plist")).unwrap();
    assert!(host_info.contains("CFBundleURLSchemes"));
}

#[test]
fn missing_apple_dir_is_an_error() {
    let temp = TempDir::new().unwrap();
    let src_tauri = temp.path().join("src-tauri");
    fs::create_dir_all(&src_tauri).unwrap();
    fs::write(
        src_tauri.join("tauri.conf.json"),
        r#"{"productName":"MyApp","identifier":"com.example.myapp"}"#,
    )
    .unwrap();

    let registry = ExtensionRegistry::with_builtins();
    let options = AddOptions {
        platform: Platform::Ios,
        templates_dir: None,
        start_dir: Some(temp.path().to_path_buf()),
    };
    let err = add_extension(&registry, "share", &options).unwrap_err();
    assert!(err.to_string().contains("project directory"));
}

#[test]
fn unknown_extension_type_reports_known_types() {
    let temp = TempDir::new().unwrap();
    fake_project(temp.path(), Platform::Ios);

    let registry = ExtensionRegistry::with_builtins();
    let options = AddOptions {
        platform: Platform::Ios,
        templates_dir: None,
        start_dir: Some(temp.path().to_path_buf()),
    };
    let err = add_extension(&registry, "widget", &options).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("widget"));
    assert!(message.contains("share"));
}
