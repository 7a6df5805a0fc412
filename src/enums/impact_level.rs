use serde::{Deserialize, Serialize};

/// Expected impact of a lagging indicator ("High/Medium/Low" on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
    Other(String),
}

impl ImpactLevel {
    pub fn label(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for ImpactLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "High" => Self::High,
            "Medium" => Self::Medium,
            "Low" => Self::Low,
            _ => Self::Other(value),
        }
    }
}

impl From<ImpactLevel> for String {
    fn from(impact: ImpactLevel) -> Self {
        impact.label().to_string()
    }
}
