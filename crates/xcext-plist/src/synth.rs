//! Synthesis of whole property-list documents in known shapes.

/// Entitlement key for shared app-group storage.
pub const APP_GROUPS_KEY: &str = "com.apple.security.application-groups";

/// Entitlement key for the macOS app sandbox.
pub const APP_SANDBOX_KEY: &str = "com.apple.security.app-sandbox";

const PLIST_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n<plist version=\"1.0\">\n";

/// An entitlements document with an empty root dictionary.
pub const EMPTY_ENTITLEMENTS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n<plist version=\"1.0\">\n<dict>\n</dict>\n</plist>";

/// Build a minimal entitlements plist.
///
/// Key order is fixed: the sandbox entry (when `sandbox` is set) comes
/// first, then the application-groups array (when a group id is given).
/// With neither, the result is an empty dictionary.
pub fn entitlements(app_group: Option<&str>, sandbox: bool) -> String {
    let mut keys = String::new();
    if sandbox {
        keys.push_str(&format!(
            "    <key>{APP_SANDBOX_KEY}</key>\n    <true/>\n"
        ));
    }
    if let Some(group) = app_group {
        keys.push_str(&format!(
            "    <key>{APP_GROUPS_KEY}</key>\n    <array>\n        <string>{group}</string>\n    </array>\n"
        ));
    }
    format!("{PLIST_HEADER}<dict>\n{keys}</dict>\n</plist>")
}
