use crate::error::{AssetError, Result};
use std::fs::File;
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| AssetError::from_io(e, path))?;
    }
    Ok(())
}

/// The output directory is never created implicitly.
pub fn require_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(AssetError::OutputDirMissing {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

pub fn create_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| AssetError::from_io(e, path))
}

pub fn remove_file(path: &Path) -> Result<()> {
    std::fs::remove_file(path).map_err(|e| AssetError::from_io(e, path))
}
