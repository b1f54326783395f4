use lawbot_core::error::{LawbotError, Result};
use lawbot_core::gateway::BackendGateway;
use lawbot_core::guidance::GuidanceResult;
use lawbot_infrastructure::ReportStorage;
use lawbot_infrastructure::report_storage::file_name_from_url;
use std::path::PathBuf;
use std::sync::Arc;

/// Downloads the resources a guidance result links to.
pub struct ReportService {
    gateway: Arc<dyn BackendGateway>,
    storage: ReportStorage,
}

impl ReportService {
    pub fn new(gateway: Arc<dyn BackendGateway>, storage: ReportStorage) -> Self {
        Self { gateway, storage }
    }

    /// Service writing into the platform download directory.
    pub fn with_default_location(gateway: Arc<dyn BackendGateway>) -> Result<Self> {
        Ok(Self::new(gateway, ReportStorage::default_location()?))
    }

    pub fn storage(&self) -> &ReportStorage {
        &self.storage
    }

    /// Saves the result's PDF report and returns where it was written.
    pub async fn download_pdf(&self, result: &GuidanceResult) -> Result<PathBuf> {
        let url = result
            .pdf_url
            .as_deref()
            .ok_or_else(|| LawbotError::validation("No report is available for this result."))?;

        tracing::debug!("[ReportService] Downloading report from {}", url);
        let bytes = self.gateway.fetch_resource(url).await.map_err(|e| {
            tracing::warn!("[ReportService] Report download failed: {}", e);
            e
        })?;

        self.storage.save(&file_name_from_url(url), &bytes).await
    }

    /// Fetches the spoken summary, if the result has one.
    pub async fn fetch_audio(&self, result: &GuidanceResult) -> Result<Vec<u8>> {
        let url = result
            .audio_url
            .as_deref()
            .ok_or_else(|| LawbotError::validation("No audio is available for this result."))?;

        self.gateway.fetch_resource(url).await
    }
}
