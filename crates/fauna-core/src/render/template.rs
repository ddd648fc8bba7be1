//! Template read, placeholder substitution, and output write.

use std::fs;
use std::path::Path;

use crate::error::RunError;

/// Literal marker in the template replaced by the rendered fragment.
pub const PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";

/// Replace the first occurrence of the placeholder with `fragment`.
///
/// Single-pass string replacement: a template without the token comes back
/// unchanged, and a repeated token is only substituted once.
pub fn render_document(template: &str, fragment: &str) -> String {
    template.replacen(PLACEHOLDER, fragment, 1)
}

/// Read the template file once per run.
pub fn read_template(path: &Path) -> Result<String, RunError> {
    fs::read_to_string(path).map_err(|source| RunError::Template {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the substituted document, overwriting any prior content.
pub fn write_output(path: &Path, document: &str) -> Result<(), RunError> {
    fs::write(path, document).map_err(|source| RunError::Output {
        path: path.to_path_buf(),
        source,
    })
}
