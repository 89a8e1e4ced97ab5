use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Refuse to clobber an existing output file unless --force was given.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "Output file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    Ok(())
}
