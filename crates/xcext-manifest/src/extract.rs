//! Shallow key-value extraction from the manifest.
//!
//! Read-only lookups (e.g. `bundleIdPrefix`) need a handful of top-level
//! scalars, not a YAML model. A pair is one physical line of the form
//! `key: value` with no leading whitespace; indented lines never match even
//! when they have the right shape.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static SCALAR_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\w+):\s*(.+)$").unwrap());

/// Extract top-level `key: value` pairs. Values are trimmed; on duplicate
/// keys the last occurrence wins.
pub fn top_level_scalars(doc: &str) -> HashMap<String, String> {
    let mut pairs = HashMap::new();
    for line in doc.lines() {
        if let Some(caps) = SCALAR_LINE.captures(line) {
            pairs.insert(caps[1].to_string(), caps[2].trim().to_string());
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_top_level_pairs() {
        let doc = "name: MyApp\nbundleIdPrefix: com.example\ntargets:\n  MyApp_iOS:\n    type: application\n";
        let pairs = top_level_scalars(doc);
        assert_eq!(pairs.get("name").map(String::as_str), Some("MyApp"));
        assert_eq!(
            pairs.get("bundleIdPrefix").map(String::as_str),
            Some("com.example")
        );
    }

    #[test]
    fn indented_lines_never_match() {
        let doc = "targets:\n  type: application\n";
        let pairs = top_level_scalars(doc);
        assert!(!pairs.contains_key("type"));
    }

    #[test]
    fn bare_section_headers_are_not_pairs() {
        let pairs = top_level_scalars("targets:\nname: App\n");
        assert!(!pairs.contains_key("targets"));
        assert_eq!(pairs.get("name").map(String::as_str), Some("App"));
    }

    #[test]
    fn last_occurrence_wins() {
        let pairs = top_level_scalars("name: First\nname: Second\n");
        assert_eq!(pairs.get("name").map(String::as_str), Some("Second"));
    }

    #[test]
    fn values_are_trimmed() {
        let pairs = top_level_scalars("version:   1.2.3  \n");
        assert_eq!(pairs.get("version").map(String::as_str), Some("1.2.3"));
    }
}
