//! Locating the project root, app configuration, and generated Apple
//! project directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::platform::Platform;

/// Build manifest file consumed by the project generator.
pub const MANIFEST_FILE: &str = "project.yml";

const APP_CONFIG_FILE: &str = "tauri.conf.json";

/// The subset of `tauri.conf.json` the scaffolder reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub product_name: Option<String>,
    pub identifier: Option<String>,
    pub version: Option<String>,
    /// Pre-2.0 config layout kept the product name here.
    #[serde(default)]
    pub package: PackageConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageConfig {
    pub product_name: Option<String>,
}

impl AppConfig {
    /// Product name from either config layout.
    pub fn product_name(&self) -> Option<&str> {
        self.product_name
            .as_deref()
            .or(self.package.product_name.as_deref())
    }
}

/// Walk up from `start` looking for the app configuration; falls back to
/// `start` itself when no ancestor carries one.
pub fn find_project_root(start: &Path) -> PathBuf {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(APP_CONFIG_FILE).is_file()
            || dir.join("src-tauri").join(APP_CONFIG_FILE).is_file()
        {
            debug!(root = %dir.display(), "found project root");
            return dir;
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => return start.to_path_buf(),
        }
    }
}

/// Load `tauri.conf.json` from the project root.
pub fn load_app_config(root: &Path) -> Result<AppConfig> {
    let candidates = [
        root.join("src-tauri").join(APP_CONFIG_FILE),
        root.join(APP_CONFIG_FILE),
    ];
    for path in candidates {
        if path.is_file() {
            let raw = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
            return serde_json::from_str(&raw).map_err(|source| Error::ConfigParse {
                path: path.clone(),
                source,
            });
        }
    }
    Err(Error::ConfigNotFound {
        root: root.to_path_buf(),
    })
}

/// Resolve the generated Apple project directory for `platform`.
pub fn find_apple_dir(root: &Path, platform: Platform) -> Result<PathBuf> {
    let candidates = [
        root.join("src-tauri").join("gen").join(platform.dir_name()),
        root.join("gen").join(platform.dir_name()),
    ];
    for path in candidates {
        if path.is_dir() {
            debug!(dir = %path.display(), "found apple project dir");
            return Ok(path);
        }
    }
    Err(Error::AppleDirNotFound {
        platform,
        hint: platform.init_hint().to_string(),
    })
}

/// Read `project.yml` from the Apple project directory.
pub fn read_manifest(apple_dir: &Path) -> Result<String> {
    let path = apple_dir.join(MANIFEST_FILE);
    if !path.is_file() {
        return Err(Error::ManifestNotFound {
            dir: apple_dir.to_path_buf(),
        });
    }
    fs::read_to_string(&path).map_err(|e| Error::io(&path, e))
}

/// Write `project.yml` back to the Apple project directory.
pub fn write_manifest(apple_dir: &Path, content: &str) -> Result<()> {
    let path = apple_dir.join(MANIFEST_FILE);
    fs::write(&path, content).map_err(|e| Error::io(&path, e))
}
