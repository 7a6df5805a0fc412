use crate::structs::analysis_report::AnalysisReport;

/// Lifecycle of one client-side upload. A single enum instead of separate
/// uploading/report/error flags, so states like "uploading and failed" cannot
/// be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    Idle,
    Uploading,
    Success(AnalysisReport),
    Failed(String),
}

impl UploadState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failed(_))
    }

    /// Clears report and error state back to the initial empty state.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
