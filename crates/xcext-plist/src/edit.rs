//! Idempotent edits on existing property-list documents.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tracing::debug;

/// An empty root dictionary, tolerant of whitespace between the tags.
static EMPTY_DICT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<dict>\s*</dict>").unwrap());

/// Closing tags of a single-dictionary plist.
static CLOSING_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s*)</dict>\s*</plist>").unwrap());

/// Whether the document contains `<key>{key}</key>`.
pub fn has_key(doc: &str, key: &str) -> bool {
    doc.contains(&format!("<key>{key}</key>"))
}

/// Byte offset just past the `<array>` that follows `<key>{key}</key>`,
/// with only whitespace allowed between the two tags.
fn array_anchor(doc: &str, key: &str) -> Option<usize> {
    let tag = format!("<key>{key}</key>");
    let at = doc.find(&tag)?;
    let rest = &doc[at + tag.len()..];
    let ws = rest.len() - rest.trim_start().len();
    rest[ws..]
        .starts_with("<array>")
        .then(|| at + tag.len() + ws + "<array>".len())
}

/// Add a string value to the array under `key`.
///
/// The duplicate check is deliberately coarse: a `value` that appears
/// verbatim anywhere in the document counts as already present, even
/// outside the target array. Tightening this would change idempotence
/// semantics observable by callers, so the imprecision is kept.
///
/// When the key/array pair exists the new `<string>` is inserted directly
/// after the opening `<array>`, ahead of any existing siblings. When it
/// does not, the document must contain an empty root dictionary, which is
/// rewritten to hold exactly the key, the array, and the one string. Any
/// other shape passes through unchanged.
pub fn add_string_to_array(doc: &str, key: &str, value: &str) -> String {
    if doc.contains(value) {
        debug!(key, value, "value already present in document");
        return doc.to_string();
    }

    if let Some(at) = array_anchor(doc, key) {
        let mut out = String::with_capacity(doc.len() + value.len() + 32);
        out.push_str(&doc[..at]);
        out.push_str(&format!("\n        <string>{value}</string>"));
        out.push_str(&doc[at..]);
        return out;
    }

    let body = format!(
        "<dict>\n    <key>{key}</key>\n    <array>\n        <string>{value}</string>\n    </array>\n</dict>"
    );
    EMPTY_DICT.replace(doc, NoExpand(&body)).into_owned()
}

/// Register a custom URL scheme in an app `Info.plist`.
///
/// Inserts a `CFBundleURLTypes` entry before the closing
/// `</dict></plist>`. First write wins: any existing `CFBundleURLSchemes`
/// key suppresses the edit, and a document without the closing tags passes
/// through unchanged.
pub fn add_url_scheme(doc: &str, scheme: &str, bundle_id: &str) -> String {
    if doc.contains("CFBundleURLSchemes") {
        debug!(scheme, "URL schemes already configured");
        return doc.to_string();
    }

    let entry = format!(
        "    <key>CFBundleURLTypes</key>\n    <array>\n        <dict>\n            <key>CFBundleURLSchemes</key>\n            <array>\n                <string>{scheme}</string>\n            </array>\n            <key>CFBundleURLName</key>\n            <string>{bundle_id}</string>\n        </dict>\n    </array>\n"
    );
    CLOSING_TAGS
        .replace(doc, format!("\n{entry}${{1}}</dict>\n</plist>"))
        .into_owned()
}
