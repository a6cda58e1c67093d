// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::utils::path::ensure_parent_dir;
use std::path::Path;

/// Check that the output file can be written.
///
/// - file does not exist → Ok (parent directories are created)
/// - file exists and `force` → Ok
/// - file exists without `force` → error, nothing is touched
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }
    ensure_parent_dir(path)?;
    Ok(())
}
