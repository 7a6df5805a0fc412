use serde::{Deserialize, Serialize};
use crate::enums::recommendation_priority::RecommendationPriority;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: RecommendationPriority,
    pub timeline: String,
}
