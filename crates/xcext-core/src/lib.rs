//! Extension scaffolding orchestration
//!
//! Ties the text-mutation cores (`xcext-manifest`, `xcext-plist`) and the
//! filesystem collaborators (`xcext-fs`) into the add-extension pipeline:
//! discover the project, create the extension's files, grant the shared
//! app group, register the URL scheme, rewrite the build manifest, and
//! invoke the project generator.

pub mod app_info;
pub mod error;
pub mod extension;
pub mod generate;
pub mod pipeline;
pub mod share;

pub use app_info::AppInfo;
pub use error::{Error, Result};
pub use extension::{ExtensionKind, ExtensionRegistry};
pub use generate::GeneratorStatus;
pub use pipeline::{AddOptions, AddReport, add_extension};
pub use share::ShareExtension;
