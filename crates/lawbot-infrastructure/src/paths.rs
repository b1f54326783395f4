//! Local directories used by the client.
//!
//! ```text
//! ~/Downloads/                 # Downloaded guidance reports (platform download dir)
//! ~/.local/share/lawbot/       # Data directory, fallback for reports
//! └── reports/
//! ```

use std::path::PathBuf;

const APP_DIR_NAME: &str = "lawbot";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Neither a download nor a data directory could be determined.
    NoUsableDirectory,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::NoUsableDirectory => write!(f, "Cannot find a download or data directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Path resolution for lawbot client files.
pub struct LawbotPaths;

impl LawbotPaths {
    /// Returns the lawbot data directory (e.g. `~/.local/share/lawbot/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::NoUsableDirectory)
    }

    /// Directory downloaded reports are written to.
    ///
    /// Prefers the platform download directory and falls back to
    /// `<data_dir>/reports`.
    pub fn reports_dir() -> Result<PathBuf, PathError> {
        if let Some(dir) = dirs::download_dir() {
            return Ok(dir);
        }
        Ok(Self::data_dir()?.join("reports"))
    }
}
