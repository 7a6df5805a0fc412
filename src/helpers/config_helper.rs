use crate::config::constants::{DEFAULT_MODEL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, OPENAI_BASE_URL};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_provider() -> String {
        "openai".to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_base_url() -> String {
        OPENAI_BASE_URL.to_string()
    }
}
