use serde::{Deserialize, Serialize};

/// Status label attached to a leading indicator. The model is asked for
/// "Good/At Risk/Needs Attention" but its output is not validated, so
/// anything else is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IndicatorStatus {
    Good,
    AtRisk,
    NeedsAttention,
    Other(String),
}

impl IndicatorStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::Good => "Good",
            Self::AtRisk => "At Risk",
            Self::NeedsAttention => "Needs Attention",
            Self::Other(label) => label,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Good => "✅",
            Self::AtRisk => "⚠️",
            Self::NeedsAttention => "🟡",
            Self::Other(_) => "❔",
        }
    }
}

impl From<String> for IndicatorStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Good" => Self::Good,
            "At Risk" => Self::AtRisk,
            "Needs Attention" => Self::NeedsAttention,
            _ => Self::Other(value),
        }
    }
}

impl From<IndicatorStatus> for String {
    fn from(status: IndicatorStatus) -> Self {
        status.label().to_string()
    }
}
