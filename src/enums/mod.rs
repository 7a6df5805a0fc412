pub mod ai_provider_error;
pub mod commands;
pub mod impact_level;
pub mod indicator_status;
pub mod recommendation_priority;
pub mod upload_state;
