//! App identity derived from the app config and the build manifest.

use xcext_fs::{AppConfig, Platform};
use xcext_manifest::top_level_scalars;

/// Resolved identity of the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub product_name: String,
    pub bundle_id_prefix: String,
    pub identifier: String,
    pub version: String,
}

impl AppInfo {
    /// Merge the app config with the manifest's top-level scalars; config
    /// values win, manifest supplies `bundleIdPrefix`, and the rest falls
    /// back to the generator defaults.
    pub fn derive(config: &AppConfig, manifest: &str) -> Self {
        let scalars = top_level_scalars(manifest);
        let product_name = config.product_name().unwrap_or("app").to_string();
        let bundle_id_prefix = scalars
            .get("bundleIdPrefix")
            .cloned()
            .unwrap_or_else(|| "com.tauri".to_string());
        let identifier = config
            .identifier
            .clone()
            .unwrap_or_else(|| format!("{bundle_id_prefix}.{product_name}"));
        let version = config.version.clone().unwrap_or_else(|| "1.0.0".to_string());

        Self {
            product_name,
            bundle_id_prefix,
            identifier,
            version,
        }
    }

    /// Shared storage namespace for the host app and its extensions.
    pub fn app_group_id(&self) -> String {
        format!("group.{}", self.identifier)
    }

    /// Lowercase-alphanumeric URL scheme derived from the product name.
    pub fn url_scheme(&self) -> String {
        self.product_name
            .to_lowercase()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect()
    }

    /// Name of the host app target in the manifest, e.g. `MyApp_iOS`.
    pub fn host_target_name(&self, platform: Platform) -> String {
        format!("{}_{}", self.product_name, platform.target_suffix())
    }
}
