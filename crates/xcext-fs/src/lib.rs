//! Filesystem collaborators for xcext
//!
//! Everything the pure text-mutation core must not do lives here: locating
//! the project root and the generated Apple project directory, loading the
//! app configuration, reading and writing the build manifest, and copying
//! template files with token substitution.

pub mod discovery;
pub mod error;
pub mod platform;
pub mod template;

pub use discovery::{
    AppConfig, MANIFEST_FILE, find_apple_dir, find_project_root, load_app_config, read_manifest,
    write_manifest,
};
pub use error::{Error, Result};
pub use platform::Platform;
pub use template::{TemplateVars, copy_template_dir, copy_template_file, substitute};
