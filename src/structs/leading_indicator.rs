use serde::{Deserialize, Serialize};
use crate::enums::indicator_status::IndicatorStatus;

/// An early, process-level signal scored 0-10.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LeadingIndicator {
    pub name: String,
    pub description: String,
    pub score: u8,
    pub status: IndicatorStatus,
}
