use serde::{Deserialize, Serialize};
use crate::structs::lagging_indicator::LaggingIndicator;
use crate::structs::leading_indicator::LeadingIndicator;
use crate::structs::recommendation::Recommendation;

/// The structured report returned by `POST /api/analyze`. Built once per
/// request and never stored. Collections default to empty so a sparse but
/// well-formed model reply still renders.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub leading_indicators: Vec<LeadingIndicator>,

    #[serde(default)]
    pub lagging_indicators: Vec<LaggingIndicator>,

    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}
