use serde::{Deserialize, Serialize};
use crate::enums::impact_level::ImpactLevel;

/// A final-outcome signal with an expected impact level and timeframe.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LaggingIndicator {
    pub name: String,
    pub description: String,
    pub impact: ImpactLevel,
    pub timeline: String,
}
