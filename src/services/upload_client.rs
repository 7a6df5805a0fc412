use std::path::Path;
use reqwest::multipart;

use crate::enums::upload_state::UploadState;
use crate::errors::{RoiTrackerError, RoiTrackerResult};
use crate::logger::progress_logger::{ProgressLogger, ProgressPlan};
use crate::structs::analysis_report::AnalysisReport;

/// One-shot client for the analysis endpoint. Sends a single multipart POST
/// per document; there is no retry, and no timeout beyond reqwest's defaults.
pub struct UploadClient {
    client: reqwest::Client,
    server_url: String,
}

impl UploadClient {
    pub fn new(server_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads the file, plays the size-estimated progress animation alongside
    /// the request, and resolves to the terminal upload state. Every failure
    /// path lands in `Failed(message)` for display; the caller decides what
    /// to do with it.
    pub async fn analyze_file(&self, path: &Path) -> UploadState {
        let data = match tokio::fs::read(path).await {
            Ok(data) => data,
            Err(e) => {
                let error = RoiTrackerError::file_error(&path.display().to_string(), "read", &e.to_string());
                return UploadState::Failed(error.user_message());
            }
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.txt".to_string());

        let mut progress = ProgressLogger::start(ProgressPlan::for_file_size(data.len() as u64));

        match self.upload_bytes(&file_name, data).await {
            Ok(report) => {
                progress.finish().await;
                UploadState::Success(report)
            }
            Err(error) => {
                let message = error.user_message();
                progress.fail(&message).await;
                UploadState::Failed(message)
            }
        }
    }

    pub async fn upload_bytes(&self, file_name: &str, data: Vec<u8>) -> RoiTrackerResult<AnalysisReport> {
        let part = multipart::Part::bytes(data).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/api/analyze", self.server_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(RoiTrackerError::upload_error(Some(status.as_u16()), &message));
        }

        let report = response
            .json::<AnalysisReport>()
            .await
            .map_err(|e| RoiTrackerError::parse_error("analysis response", &e.to_string()))?;

        Ok(report)
    }
}
