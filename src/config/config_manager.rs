use std::fs;
use std::path::PathBuf;
use crate::errors::{DocifyError, DocifyResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|dir| dir.join(".docify/config.toml"))
            .unwrap_or_default()
    }

    pub fn load() -> DocifyResult<Config> {
        let path = Self::config_path();

        if path.exists() {
            log::debug!("📋 Loading config from: {}", path.display());
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        Ok(Config::default())
    }

    pub fn save(config: &Config) -> DocifyResult<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)
            .map_err(|e| DocifyError::config_error(&format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, content)?;

        Ok(())
    }

    pub fn create_sample_config() -> DocifyResult<()> {
        let path = Self::config_path();

        if path.exists() {
            return Err(DocifyError::config_error(&format!(
                "Configuration already exists at {}",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let sample_config = r#"# Docify configuration

[api]
# Public URL of the inference backend
base_url = ""

# Bearer credential sent on every request
api_key = ""

# Replies shorter than this are replaced with a placeholder message
min_response_length = 10

[documentation]
# Target documentation length, forwarded to the backend
max_length = 1200

include_examples = true
detailed = true
"#;

        fs::write(&path, sample_config)?;
        log::info!("✅ Sample configuration written to {}", path.display());

        Ok(())
    }
}
