//! Template copy with `{{TOKEN}}` substitution.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{([A-Z0-9_]+)\}\}").unwrap());

/// Token name to replacement value.
pub type TemplateVars = HashMap<String, String>;

/// Replace `{{NAME}}` tokens; unknown tokens are left in place.
pub fn substitute(content: &str, vars: &TemplateVars) -> String {
    TOKEN
        .replace_all(content, |caps: &regex::Captures| {
            vars.get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Copy one template file to `dest` with substitution applied.
pub fn copy_template_file(src: &Path, dest: &Path, vars: &TemplateVars) -> Result<()> {
    let content = fs::read_to_string(src).map_err(|e| Error::io(src, e))?;
    fs::write(dest, substitute(&content, vars)).map_err(|e| Error::io(dest, e))?;
    debug!(src = %src.display(), dest = %dest.display(), "copied template file");
    Ok(())
}

/// Recursively copy a templates directory, substituting in every file.
pub fn copy_template_dir(src: &Path, dest: &Path, vars: &TemplateVars) -> Result<()> {
    if !src.is_dir() {
        return Err(Error::TemplatesNotFound {
            path: src.to_path_buf(),
        });
    }
    fs::create_dir_all(dest).map_err(|e| Error::io(dest, e))?;

    for entry in fs::read_dir(src).map_err(|e| Error::io(src, e))? {
        let entry = entry.map_err(|e| Error::io(src, e))?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());
        if src_path.is_dir() {
            copy_template_dir(&src_path, &dest_path, vars)?;
        } else {
            copy_template_file(&src_path, &dest_path, vars)?;
        }
    }
    Ok(())
}
