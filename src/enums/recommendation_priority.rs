use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecommendationPriority {
    High,
    Medium,
    Low,
    Other(String),
}

impl RecommendationPriority {
    pub fn label(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Other(label) => label,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::High => "🔥",
            Self::Medium => "📋",
            Self::Low => "💡",
            Self::Other(_) => "📋",
        }
    }
}

impl From<String> for RecommendationPriority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "High" => Self::High,
            "Medium" => Self::Medium,
            "Low" => Self::Low,
            _ => Self::Other(value),
        }
    }
}

impl From<RecommendationPriority> for String {
    fn from(priority: RecommendationPriority) -> Self {
        priority.label().to_string()
    }
}
