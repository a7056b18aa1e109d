use crate::error::{AssetError, Result};
use crate::utils::fs;
use log::{debug, warn};
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// Extracts `archive_path` into `destination` and deletes the archive.
///
/// The archive is kept if extraction fails. Files already written are not
/// rolled back.
pub fn extract_and_remove(archive_path: &Path, destination: &Path) -> Result<usize> {
    let is_zip = archive_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("zip"))
        .unwrap_or(false);
    if !is_zip {
        return Err(AssetError::UnsupportedArchive {
            path: archive_path.to_path_buf(),
        });
    }

    let count = extract_zip(archive_path, destination)?;
    fs::remove_file(archive_path)?;
    debug!("Removed {archive_path:?}");
    Ok(count)
}

/// Returns the number of regular files written.
pub fn extract_zip(archive_path: &Path, destination: &Path) -> Result<usize> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file).map_err(|source| AssetError::ExtractionFailed {
        path: archive_path.to_path_buf(),
        source,
    })?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let outpath = match entry.enclosed_name() {
            Some(path) => destination.join(path),
            None => {
                warn!("Skipping entry with unsafe path: {}", entry.name());
                continue;
            }
        };

        if entry.is_dir() {
            fs::ensure_dir_exists(&outpath)?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            fs::ensure_dir_exists(parent)?;
        }
        let mut outfile = fs::create_file(&outpath)?;
        std::io::copy(&mut entry, &mut outfile)?;
        debug!("Extracted {outpath:?}");
        written += 1;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                let permissions = std::fs::Permissions::from_mode(file_mode(mode));
                std::fs::set_permissions(&outpath, permissions)?;
            }
        }
    }

    Ok(written)
}

/// Permission bits only, never setuid/setgid/sticky or file type bits.
#[cfg_attr(not(unix), allow(dead_code))]
fn file_mode(mode: u32) -> u32 {
    mode & 0o777
}
