//! File storage for downloaded guidance reports.

use crate::paths::LawbotPaths;
use lawbot_core::error::{LawbotError, Result};
use std::path::{Path, PathBuf};

/// File name used when the report URL has no usable last segment.
pub const DEFAULT_REPORT_FILE_NAME: &str = "legal_analysis.pdf";

/// Writes report bytes into a directory without overwriting earlier reports.
#[derive(Debug, Clone)]
pub struct ReportStorage {
    dir: PathBuf,
}

impl ReportStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage in the default reports directory.
    pub fn default_location() -> Result<Self> {
        let dir = LawbotPaths::reports_dir().map_err(|e| LawbotError::config(e.to_string()))?;
        Ok(Self::new(dir))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Saves `bytes` under `file_name`, adding ` (n)` before the extension
    /// when the name is taken. Returns the written path.
    pub async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let file_name = sanitize_file_name(file_name);
        let path = self.available_path(&file_name).await;
        tokio::fs::write(&path, bytes).await?;

        tracing::info!("[ReportStorage] Saved report to {:?}", path);
        Ok(path)
    }

    async fn available_path(&self, file_name: &str) -> PathBuf {
        let candidate = self.dir.join(file_name);
        if !tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
            return candidate;
        }

        let (stem, extension) = match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
            _ => (file_name, None),
        };

        let mut n = 1;
        loop {
            let name = match extension {
                Some(ext) => format!("{} ({}).{}", stem, n, ext),
                None => format!("{} ({})", stem, n),
            };
            let candidate = self.dir.join(name);
            if !tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Derives a file name from the last path segment of a resource URL.
pub fn file_name_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let segment = path.rsplit('/').next().unwrap_or_default();
    sanitize_file_name(segment)
}

/// Keeps a name inside the target directory.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c => c,
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        DEFAULT_REPORT_FILE_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}
