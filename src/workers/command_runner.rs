use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::upload_state::UploadState;
use crate::errors::{RoiTrackerError, RoiTrackerResult};
use crate::logger::report_logger::ReportLogger;
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::services::upload_client::UploadClient;
use crate::structs::config::config::Config;
use crate::traits::completion_provider::CompletionProvider;
use crate::ui::analyze_server::AnalyzeServer;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> RoiTrackerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Serve { port, no_browser } => self.serve_command(port, no_browser).await,
            Commands::Analyze { file, server } => self.analyze_command(file, server).await,
            Commands::Init => self.init_command().await,
            Commands::Validate => self.validate_command().await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn serve_command(&self, port: Option<u16>, no_browser: bool) -> RoiTrackerResult<()> {
        let config = ConfigManager::load()?;
        let provider = Self::build_provider(&config);

        let mut server = AnalyzeServer::new(provider, config.server.host.clone());
        let port = server.start(Some(port.unwrap_or(config.server.port))).await?;

        let url = format!("http://{}:{}", config.server.host, port);
        log::info!("🌐 ROI Tracker available at {}", url);
        log::info!("⏹️ Press Ctrl+C to stop");

        if !no_browser {
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open browser: {}", e);
            }
        }

        tokio::signal::ctrl_c().await?;
        server.shutdown().await?;

        Ok(())
    }

    async fn analyze_command(&self, file: PathBuf, server: Option<String>) -> RoiTrackerResult<()> {
        let config = ConfigManager::load()?;
        let server_url = server.unwrap_or_else(|| format!("http://{}:{}", config.server.host, config.server.port));

        log::info!("📤 Uploading {} to {}", file.display(), server_url);

        let client = UploadClient::new(server_url);
        match client.analyze_file(&file).await {
            UploadState::Success(report) => {
                ReportLogger::print_report(&report);
                Ok(())
            }
            UploadState::Failed(message) => {
                log::error!("❌ {}", message);
                Err(RoiTrackerError::upload_error(None, &message))
            }
            // analyze_file only resolves to terminal states
            UploadState::Idle | UploadState::Uploading => Ok(()),
        }
    }

    async fn init_command(&self) -> RoiTrackerResult<()> {
        log::info!("🚀 Initializing roitracker configuration...");

        match ConfigManager::create_sample_config() {
            Ok(_) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("📝 Edit the configuration file to change the server address or model.");
                log::info!("🔧 Run 'roitracker validate' to check your configuration.");
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                return Err(e);
            }
        }

        Ok(())
    }

    async fn validate_command(&self) -> RoiTrackerResult<()> {
        log::info!("🔍 Validating roitracker configuration...");

        let config = match ConfigManager::load() {
            Ok(config) => {
                log::info!("✅ Configuration file loaded successfully");
                config
            }
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'roitracker init' to create a configuration file.");
                return Err(e);
            }
        };

        if let Err(issues) = ConfigManager::validate_config(&config) {
            log::error!("❌ Issues found:");
            for issue in &issues {
                log::error!("   - {}", issue);
            }
            return Err(RoiTrackerError::config_error(
                "Configuration is invalid",
                None,
                Some("Fix the issues above and run 'roitracker validate' again"),
            ));
        }

        log::info!("✅ Configuration is valid");

        if ConfigManager::resolve_api_key(&config).is_empty() {
            log::warn!(
                "⚠️ {} is not set - analysis requests will fail until it is exported",
                ConfigManager::api_key_env_name(&config)
            );
        }

        Ok(())
    }

    /// Credential is read from the environment once, at startup. An unset
    /// variable is only a warning here; the failure surfaces per-request.
    fn build_provider(config: &Config) -> Arc<dyn CompletionProvider> {
        let api_key = ConfigManager::resolve_api_key(config);
        if api_key.is_empty() {
            log::warn!(
                "⚠️ {} is not set - analysis requests will fail until it is exported",
                ConfigManager::api_key_env_name(config)
            );
        }

        Arc::new(
            OpenAIProvider::new(api_key)
                .with_model(config.ai.model.clone())
                .with_base_url(config.ai.base_url.clone()),
        )
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
