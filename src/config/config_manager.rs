use std::fs;
use crate::config::constants::OPENAI_API_KEY_ENV;
use crate::errors::{RoiTrackerError, RoiTrackerResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    pub fn load() -> RoiTrackerResult<Config> {
        let config_location = dirs::home_dir().map(|d| d.join("roitracker/config.toml")).unwrap_or_default();

        if config_location.exists() {
            log::info!("📋 Loading config from: {}", config_location.display());
            let content = fs::read_to_string(&config_location).map_err(|e| {
                RoiTrackerError::ConfigurationFileError {
                    path: config_location.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        Ok(Config::default())
    }

    /// Reads the provider credential from the process environment. An unset
    /// variable yields an empty key; outbound calls then fail and surface as
    /// the 500 path.
    pub fn resolve_api_key(config: &Config) -> String {
        let env_name = config
            .ai
            .api_key_env
            .as_deref()
            .unwrap_or(OPENAI_API_KEY_ENV);
        std::env::var(env_name).unwrap_or_default()
    }

    pub fn api_key_env_name(config: &Config) -> String {
        config
            .ai
            .api_key_env
            .clone()
            .unwrap_or_else(|| OPENAI_API_KEY_ENV.to_string())
    }

    pub fn create_sample_config() -> RoiTrackerResult<()> {
        let sample_config = r#"# ROI Tracker Configuration

[server]
# Address the analysis server binds to
host = "127.0.0.1"
port = 3000

[ai]
provider = "openai"
model = "gpt-5-nano"
base_url = "https://api.openai.com/v1"

# Environment variable holding the provider API key
api_key_env = "OPENAI_API_KEY"
"#;
        let config_dir_path = dirs::home_dir().map(|d| d.join("roitracker")).unwrap_or_default();
        let config_file_path = dirs::home_dir().map(|d| d.join("roitracker/config.toml")).unwrap_or_default();
        fs::create_dir_all(&config_dir_path)?;
        fs::write(&config_file_path, sample_config)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.port == 0 {
            errors.push("Server port must be non-zero".to_string());
        }

        if config.ai.provider != "openai" {
            errors.push(format!("Unsupported AI provider: {}", config.ai.provider));
        }

        if config.ai.model.trim().is_empty() {
            errors.push("AI model must not be empty".to_string());
        }

        if !config.ai.base_url.starts_with("http") {
            errors.push(format!("AI base_url does not look like a URL: {}", config.ai.base_url));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
