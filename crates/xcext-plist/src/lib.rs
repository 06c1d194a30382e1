//! Property-list editing for entitlements and Info.plist documents
//!
//! Like the manifest editor, this crate never parses XML. It works on a
//! small fixed-shape dialect (one root `<dict>`) through known anchor
//! patterns, and silently passes unexpected document shapes through
//! unchanged.

pub mod edit;
pub mod synth;

pub use edit::{add_string_to_array, add_url_scheme, has_key};
pub use synth::{APP_GROUPS_KEY, APP_SANDBOX_KEY, EMPTY_ENTITLEMENTS, entitlements};
