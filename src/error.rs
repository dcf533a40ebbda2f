use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, UpdaterError>;

#[derive(Error, Debug)]
pub enum UpdaterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ZIP archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("No download link matching '{package}' found for FIR {fir}")]
    LinkNotFound { fir: String, package: String },

    #[error("Download failed: {url} (HTTP {status})")]
    DownloadError { url: String, status: u16 },

    #[error("Extraction failed: {path}")]
    ExtractionError { path: PathBuf },

    #[error("No profile starting with '{prefix}' found in {path}")]
    NoPrfFound { prefix: String, path: PathBuf },

    #[error("No sector file (.sct) found in {path}")]
    MissingSectorFile { path: PathBuf },

    #[error("FIR '{fir}' is not present in the configuration")]
    UnknownFir { fir: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("{failed} of {total} FIRs failed")]
    BatchFailed { failed: usize, total: usize },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,
}

impl UpdaterError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        UpdaterError::ConfigError {
            message: message.into(),
        }
    }
}
