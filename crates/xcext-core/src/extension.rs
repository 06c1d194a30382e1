//! Extension variants and their registry.

use std::collections::HashMap;
use std::path::Path;

use crate::app_info::AppInfo;
use crate::error::Result;
use xcext_fs::Platform;

/// One scaffoldable extension variant.
///
/// A variant is a capability table: how the extension is named, which
/// files it creates under the Apple project directory, and how it rewrites
/// the build manifest. Dispatch is by the type string users pass on the
/// command line.
pub trait ExtensionKind {
    /// Type string used for registry lookup, e.g. `share`.
    fn type_name(&self) -> &'static str;

    /// Human-readable name for reporting.
    fn display_name(&self) -> &'static str;

    /// Suffix appended to the product name and bundle identifier.
    fn suffix(&self) -> &'static str;

    /// `NSExtensionPointIdentifier` value for this variant.
    fn extension_point_identifier(&self) -> &'static str;

    /// Manifest target name for the extension.
    fn extension_name(&self, app: &AppInfo) -> String {
        format!("{}-{}", app.product_name, self.suffix())
    }

    /// Create the extension's source, Info.plist, and entitlements files.
    /// `templates_dir` overrides the built-in templates when given.
    fn create_files(
        &self,
        apple_dir: &Path,
        app: &AppInfo,
        templates_dir: Option<&Path>,
        platform: Platform,
    ) -> Result<()>;

    /// Apply the variant's manifest edits; pure document-in, document-out.
    fn update_manifest(&self, manifest: &str, app: &AppInfo, platform: Platform) -> String;
}

/// Registry of extension variants keyed by type string.
#[derive(Default)]
pub struct ExtensionRegistry {
    entries: HashMap<&'static str, Box<dyn ExtensionKind>>,
}

impl ExtensionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry populated with the built-in variants.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(crate::share::ShareExtension));
        registry
    }

    /// Register a variant under its type name.
    pub fn register(&mut self, kind: Box<dyn ExtensionKind>) {
        self.entries.insert(kind.type_name(), kind);
    }

    /// Look up a variant by type string.
    pub fn get(&self, type_name: &str) -> Option<&dyn ExtensionKind> {
        self.entries.get(type_name).map(Box::as_ref)
    }

    /// All registered type names (sorted).
    pub fn known_types(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
