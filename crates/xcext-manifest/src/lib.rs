//! Structural editing for the XcodeGen `project.yml` manifest
//!
//! The manifest is treated as opaque text, not parsed YAML. Regions of
//! interest (the `targets:` section, a named target block, a target's
//! sub-keys) are located by indentation and sibling-boundary heuristics,
//! and edits splice new lines into those regions. Every operation is a
//! pure `&str -> String` transformation that returns the input unchanged
//! when the structure it needs is absent.

pub mod editor;
pub mod extract;
pub mod scanner;

pub use editor::{TargetBlock, add_dependency, add_url_scheme, upsert_target};
pub use extract::top_level_scalars;
