//! The add-extension pipeline.
//!
//! Sequences the collaborators around the pure text-mutation cores:
//! discover the project, create the extension's files, grant the shared
//! app group to the host app, register the URL scheme in the host
//! Info.plist, rewrite the build manifest, and invoke the generator.
//! Edits are threaded document-in, document-out; the pipeline owns all
//! file I/O and all error surfacing.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::app_info::AppInfo;
use crate::error::{Error, Result};
use crate::extension::ExtensionRegistry;
use crate::generate::{self, GeneratorStatus};
use xcext_fs::{
    Platform, find_apple_dir, find_project_root, load_app_config, read_manifest, write_manifest,
};
use xcext_plist::{APP_GROUPS_KEY, EMPTY_ENTITLEMENTS, add_string_to_array, add_url_scheme};

/// Options for [`add_extension`].
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub platform: Platform,
    /// Overrides the variant's built-in templates.
    pub templates_dir: Option<PathBuf>,
    /// Directory to start project discovery from; defaults to the current
    /// working directory.
    pub start_dir: Option<PathBuf>,
}

/// What the pipeline did, for reporting.
#[derive(Debug, Clone)]
pub struct AddReport {
    pub display_name: String,
    pub extension_name: String,
    pub suffix: String,
    pub identifier: String,
    pub app_group_id: String,
    pub url_scheme: String,
    pub apple_dir: PathBuf,
    pub generator: GeneratorStatus,
}

/// Scaffold the extension of type `type_name` into the discovered project.
pub fn add_extension(
    registry: &ExtensionRegistry,
    type_name: &str,
    options: &AddOptions,
) -> Result<AddReport> {
    let extension = registry
        .get(type_name)
        .ok_or_else(|| Error::UnknownExtensionType {
            requested: type_name.to_string(),
            available: registry.known_types().join(", "),
        })?;

    let start = match &options.start_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().map_err(|e| Error::io(".", e))?,
    };
    let root = find_project_root(&start);
    let config = load_app_config(&root)?;
    let apple_dir = find_apple_dir(&root, options.platform)?;

    let manifest = read_manifest(&apple_dir)?;
    let app = AppInfo::derive(&config, &manifest);
    info!(
        product_name = %app.product_name,
        identifier = %app.identifier,
        version = %app.version,
        "resolved app identity"
    );

    info!(name = extension.display_name(), "creating extension files");
    extension.create_files(&apple_dir, &app, options.templates_dir.as_deref(), options.platform)?;

    info!("updating host app entitlements");
    update_host_entitlements(&apple_dir, &app, options.platform)?;

    info!("registering URL scheme in host Info.plist");
    update_host_info_plist(&apple_dir, &app, options.platform)?;

    info!("updating build manifest");
    // Re-read so the edit starts from current disk state.
    let manifest = read_manifest(&apple_dir)?;
    let updated = extension.update_manifest(&manifest, &app, options.platform);
    write_manifest(&apple_dir, &updated)?;

    let generator = generate::run(&apple_dir);

    Ok(AddReport {
        display_name: extension.display_name().to_string(),
        extension_name: extension.extension_name(&app),
        suffix: extension.suffix().to_string(),
        identifier: app.identifier.clone(),
        app_group_id: app.app_group_id(),
        url_scheme: app.url_scheme(),
        apple_dir,
        generator,
    })
}

/// Grant the shared app group to the host app target, creating its
/// entitlements file when missing.
fn update_host_entitlements(apple_dir: &Path, app: &AppInfo, platform: Platform) -> Result<()> {
    let target = app.host_target_name(platform);
    let path = apple_dir.join(&target).join(format!("{target}.entitlements"));

    let doc = if path.is_file() {
        fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?
    } else {
        EMPTY_ENTITLEMENTS.to_string()
    };
    let updated = add_string_to_array(&doc, APP_GROUPS_KEY, &app.app_group_id());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(&path, updated).map_err(|e| Error::io(&path, e))?;
    info!(path = %path.display(), "host entitlements updated");
    Ok(())
}

/// Register the app's URL scheme in the host target's Info.plist so the
/// extension can deep-link back into the app. A missing Info.plist is
/// logged and skipped, matching the silent-no-op contract of the editors.
fn update_host_info_plist(apple_dir: &Path, app: &AppInfo, platform: Platform) -> Result<()> {
    let target = app.host_target_name(platform);
    let path = apple_dir.join(&target).join("Info.plist");

    if !path.is_file() {
        warn!(path = %path.display(), "Info.plist not found, skipping URL scheme setup");
        return Ok(());
    }

    let doc = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let updated = add_url_scheme(&doc, &app.url_scheme(), &app.identifier);
    if updated != doc {
        fs::write(&path, updated).map_err(|e| Error::io(&path, e))?;
        info!(scheme = %app.url_scheme(), "URL scheme added to Info.plist");
    }
    Ok(())
}
