//! Idempotent structural edits on the manifest.
//!
//! Three operations: add-or-replace an extension target block, add-or-ignore
//! an embed-and-codesign dependency edge, add-or-ignore a URL-scheme
//! declaration. All of them are total: a missing section, block, or sub-key
//! makes the operation a no-op that returns the input document unchanged.
//! Callers that need to know whether an edit applied must compare input and
//! output.

use std::ops::Range;

use tracing::debug;

use crate::scanner;

/// One buildable target's full configuration block.
///
/// `body` is the block text as it should appear in the manifest, including
/// the `  <name>:` declaration line at one level of indent. Leading and
/// trailing newlines are normalized away on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetBlock {
    pub name: String,
    pub body: String,
}

impl TargetBlock {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// Insert `entry` at the end of `region`, before the region's trailing
/// newline so the document keeps its line structure. `entry` must start
/// with a newline.
fn append_into(doc: &str, region: &Range<usize>, entry: &str) -> String {
    let mut at = region.end;
    if doc[..at].ends_with('\n') {
        at -= 1;
        if doc[..at].ends_with('\r') {
            at -= 1;
        }
    }
    let mut out = String::with_capacity(doc.len() + entry.len());
    out.push_str(&doc[..at]);
    out.push_str(entry);
    out.push_str(&doc[at..]);
    out
}

fn splice_out(doc: &str, region: Range<usize>) -> String {
    let mut out = String::with_capacity(doc.len() - region.len());
    out.push_str(&doc[..region.start]);
    out.push_str(&doc[region.end..]);
    out
}

/// Add or replace a target block.
///
/// Any existing block with the same name is removed first, wherever it
/// lives, then the new body is appended as the last child of the
/// `targets:` section. Re-running with a modified body updates in place
/// without duplicate declarations or stale leftovers; other targets keep
/// their order. Without a `targets:` section nothing is inserted.
pub fn upsert_target(doc: &str, block: &TargetBlock) -> String {
    let out = match scanner::target_block(doc, &block.name) {
        Some(existing) => {
            debug!(target_name = %block.name, "replacing existing target block");
            // Remove the preceding newline together with the block and keep
            // the block's own final one. Removal then mirrors the later
            // append exactly, so remove-then-append stays byte-stable under
            // repeated application whether or not the document ends with a
            // newline.
            let mut start = existing.start;
            let mut end = existing.end;
            if doc[..end].ends_with('\n') {
                end -= 1;
                if doc[..end].ends_with('\r') {
                    end -= 1;
                }
            }
            if start > 0 && doc[..start].ends_with('\n') {
                start -= 1;
                if doc[..start].ends_with('\r') {
                    start -= 1;
                }
            }
            splice_out(doc, start..end)
        }
        None => doc.to_string(),
    };

    let Some(section) = scanner::top_level_section(&out, "targets") else {
        debug!("no targets section in manifest, skipping insert");
        return out;
    };

    let entry = format!("\n{}", block.body.trim_matches('\n'));
    append_into(&out, &section, &entry)
}

/// Add an embed-and-codesign dependency edge from `host` to `extension`.
///
/// Appends a `- target: / embed: true / codeSign: true` entry at the end
/// of the host target's `dependencies:` region. No-op when the host block
/// or its `dependencies:` key is missing, or when the region already
/// references `extension`.
pub fn add_dependency(doc: &str, host: &str, extension: &str) -> String {
    let Some(host_block) = scanner::target_block(doc, host) else {
        return doc.to_string();
    };
    let Some(deps) = scanner::nested_block(doc, host_block, "dependencies", 2) else {
        return doc.to_string();
    };

    let needle = format!("target: {extension}");
    if doc[deps.clone()].contains(&needle) {
        debug!(host, extension, "dependency edge already present");
        return doc.to_string();
    }

    let entry =
        format!("\n      - target: {extension}\n        embed: true\n        codeSign: true");
    append_into(doc, &deps, &entry)
}

/// Register a custom URL scheme on the host target's Info properties.
///
/// Appends a `CFBundleURLTypes:` entry carrying one `CFBundleURLName`
/// (the owning bundle identifier) and a single-scheme `CFBundleURLSchemes:`
/// list into the host's `info:`/`properties:` region. First write wins: an
/// existing URL-type array anywhere in that region suppresses the edit, no
/// merging is attempted. No-op when the host block, `info:`, or
/// `properties:` is missing.
pub fn add_url_scheme(doc: &str, host: &str, scheme: &str, owner_bundle_id: &str) -> String {
    let Some(host_block) = scanner::target_block(doc, host) else {
        return doc.to_string();
    };
    let Some(info) = scanner::nested_block(doc, host_block, "info", 2) else {
        return doc.to_string();
    };
    let Some(props) = scanner::nested_block(doc, info, "properties", 3) else {
        return doc.to_string();
    };

    if doc[props.clone()].contains("CFBundleURLTypes:") {
        debug!(host, scheme, "URL scheme declaration already present");
        return doc.to_string();
    }

    let entry = format!(
        "\n        CFBundleURLTypes:\n          - CFBundleURLName: {owner_bundle_id}\n            CFBundleURLSchemes:\n              - {scheme}"
    );
    append_into(doc, &props, &entry)
}
