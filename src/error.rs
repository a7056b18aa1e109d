use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssetError>;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Download failed: {url} (HTTP {status})")]
    DownloadFailed { url: String, status: u16 },

    #[error("Extraction failed: {path}")]
    ExtractionFailed {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Unsupported archive format: {path}")]
    UnsupportedArchive { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Output directory does not exist: {path}")]
    OutputDirMissing { path: PathBuf },
}

impl AssetError {
    /// Maps an I/O error on `path`, keeping permission failures distinguishable.
    pub fn from_io(error: std::io::Error, path: &std::path::Path) -> Self {
        match error.kind() {
            std::io::ErrorKind::PermissionDenied => AssetError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => AssetError::Io(error),
        }
    }
}
