//! The built-in Share Extension variant.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::app_info::AppInfo;
use crate::error::{Error, Result};
use crate::extension::ExtensionKind;
use xcext_fs::{Platform, TemplateVars, copy_template_dir, substitute};
use xcext_manifest::{TargetBlock, add_dependency, add_url_scheme, upsert_target};

/// Directory the extension's files live in, relative to the Apple project.
pub const EXTENSION_DIR: &str = "ShareExtension";

const VIEW_CONTROLLER_TEMPLATE: &str = include_str!("../templates/share/ShareViewController.swift");
const INFO_PLIST_TEMPLATE: &str = include_str!("../templates/share/Info.plist");

/// Scaffolds a share-services extension: a `ShareViewController`, its
/// Info.plist activation rules, an app-group entitlement, and the
/// app-extension target wired into the host app.
pub struct ShareExtension;

impl ShareExtension {
    fn template_vars(&self, app: &AppInfo) -> TemplateVars {
        let mut vars = TemplateVars::new();
        vars.insert("APP_GROUP_IDENTIFIER".into(), app.app_group_id());
        vars.insert("APP_URL_SCHEME".into(), app.url_scheme());
        vars.insert("VERSION".into(), app.version.clone());
        vars.insert(
            "BUNDLE_IDENTIFIER".into(),
            format!("{}.{}", app.identifier, self.suffix()),
        );
        vars.insert("PRODUCT_NAME".into(), app.product_name.clone());
        vars
    }

    fn target_yaml(&self, app: &AppInfo, platform: Platform) -> String {
        let name = self.extension_name(app);
        let bundle_id = format!("{}.{}", app.identifier, self.suffix());
        let platform_value = platform.generator_value();
        let deployment_target = platform.deployment_target();
        let version = &app.version;
        let point = self.extension_point_identifier();

        format!(
            "  {name}:
    type: app-extension
    platform: {platform_value}
    deploymentTarget: \"{deployment_target}\"
    sources:
      - path: {EXTENSION_DIR}
    info:
      path: {EXTENSION_DIR}/Info.plist
      properties:
        CFBundleDisplayName: Share
        CFBundleShortVersionString: \"{version}\"
        CFBundleVersion: \"{version}\"
        NSExtension:
          NSExtensionAttributes:
            NSExtensionActivationRule:
              NSExtensionActivationSupportsFileWithMaxCount: 10
              NSExtensionActivationSupportsImageWithMaxCount: 10
              NSExtensionActivationSupportsMovieWithMaxCount: 10
              NSExtensionActivationSupportsText: true
              NSExtensionActivationSupportsWebURLWithMaxCount: 1
          NSExtensionPointIdentifier: {point}
          NSExtensionPrincipalClass: $(PRODUCT_MODULE_NAME).ShareViewController
    settings:
      base:
        PRODUCT_BUNDLE_IDENTIFIER: {bundle_id}
        SKIP_INSTALL: YES
        CODE_SIGN_ENTITLEMENTS: {EXTENSION_DIR}/{EXTENSION_DIR}.entitlements"
        )
    }
}

impl ExtensionKind for ShareExtension {
    fn type_name(&self) -> &'static str {
        "share"
    }

    fn display_name(&self) -> &'static str {
        "Share Extension"
    }

    fn suffix(&self) -> &'static str {
        "ShareExtension"
    }

    fn extension_point_identifier(&self) -> &'static str {
        "com.apple.share-services"
    }

    fn create_files(
        &self,
        apple_dir: &Path,
        app: &AppInfo,
        templates_dir: Option<&Path>,
        platform: Platform,
    ) -> Result<()> {
        let dir = apple_dir.join(EXTENSION_DIR);
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;

        let vars = self.template_vars(app);
        match templates_dir {
            Some(custom) => copy_template_dir(custom, &dir, &vars)?,
            None => {
                let controller = dir.join("ShareViewController.swift");
                fs::write(&controller, substitute(VIEW_CONTROLLER_TEMPLATE, &vars))
                    .map_err(|e| Error::io(&controller, e))?;
                let info_plist = dir.join("Info.plist");
                fs::write(&info_plist, substitute(INFO_PLIST_TEMPLATE, &vars))
                    .map_err(|e| Error::io(&info_plist, e))?;
            }
        }

        let entitlements = xcext_plist::entitlements(
            Some(&app.app_group_id()),
            platform.needs_sandbox(),
        );
        let path = dir.join(format!("{EXTENSION_DIR}.entitlements"));
        fs::write(&path, entitlements).map_err(|e| Error::io(&path, e))?;

        info!(dir = %dir.display(), "created Share Extension files");
        Ok(())
    }

    fn update_manifest(&self, manifest: &str, app: &AppInfo, platform: Platform) -> String {
        let name = self.extension_name(app);
        let host = app.host_target_name(platform);

        let block = TargetBlock::new(&name, self.target_yaml(app, platform));
        let doc = upsert_target(manifest, &block);
        let doc = add_dependency(&doc, &host, &name);
        add_url_scheme(&doc, &host, &app.url_scheme(), &app.identifier)
    }
}
