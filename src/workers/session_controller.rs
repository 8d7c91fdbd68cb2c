use std::fs;
use std::path::Path;

use crate::config::config_manager::ConfigManager;
use crate::config::constants::{TEST_CONNECTION_MAX_LENGTH, TEST_CONNECTION_PROMPT};
use crate::enums::backend_error::BackendError;
use crate::errors::{DocifyError, DocifyResult};
use crate::helpers::artifact_helper::ArtifactHelper;
use crate::services::backend_client::BackendClient;
use crate::services::language_detector::LanguageDetector;
use crate::structs::config::config::Config;
use crate::structs::config::documentation_config::DocumentationConfig;
use crate::structs::documentation_report::DocumentationReport;
use crate::structs::session::Session;

/// Binds user actions to session mutations and backend calls. Every
/// operation validates its preconditions before any network I/O, and a
/// failed operation leaves the session exactly as it found it.
pub struct SessionController {
    session: Session,
    min_response_length: usize,
    documentation_defaults: DocumentationConfig,
}

impl SessionController {
    pub fn new(config: &Config) -> Self {
        let mut session = Session::new();
        session.set_api_settings(&config.api.base_url, &config.api.api_key);

        Self {
            session,
            min_response_length: config.api.min_response_length,
            documentation_defaults: config.documentation.clone(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn upload(&mut self, path: &Path, language_override: Option<&str>) -> DocifyResult<()> {
        let code_content = fs::read_to_string(path).map_err(|e| {
            DocifyError::file_error(&path.display().to_string(), "read", &e.to_string())
        })?;

        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                DocifyError::file_error(&path.display().to_string(), "read", "invalid file name")
            })?;

        let language = match language_override {
            Some(tag) => {
                let tag = tag.to_lowercase();
                if !LanguageDetector::is_supported(&tag) {
                    return Err(DocifyError::config_error(&format!(
                        "Unsupported language '{}'. Supported: {}",
                        tag,
                        LanguageDetector::supported_tags().join(", ")
                    )));
                }
                Some(tag)
            }
            None => LanguageDetector::detect(&filename).map(str::to_string),
        };

        match &language {
            Some(lang) => log::info!(
                "✅ File loaded: {} ({} lines, language: {})",
                filename,
                code_content.lines().count(),
                lang.to_uppercase()
            ),
            None => log::warn!(
                "❌ Could not detect language for '{}'. Select one manually with --language.",
                filename
            ),
        }

        self.session.store_upload(filename, code_content, language);
        Ok(())
    }

    /// Trims and stores the API settings, then persists them so they
    /// survive restarts. No network call happens here.
    pub fn save_settings(&mut self, base_url: &str, api_key: &str) -> DocifyResult<()> {
        self.session.set_api_settings(base_url, api_key);

        let mut config = ConfigManager::load()?;
        config.api.base_url = self.session.api_base_url.clone();
        config.api.api_key = self.session.api_key.clone();
        ConfigManager::save(&config)?;

        log::info!("✅ Settings saved");
        Ok(())
    }

    /// Issues a short fixed generate request. Chat history is untouched.
    pub async fn test_connection(&self) -> DocifyResult<String> {
        self.ensure_api_settings()?;

        let reply = self
            .client()
            .generate(TEST_CONNECTION_PROMPT, TEST_CONNECTION_MAX_LENGTH)
            .await?;

        Ok(reply)
    }

    /// Sends a chat message about the loaded code. On success the
    /// (user, assistant) pair is appended in that order; on failure the
    /// transcript gains nothing.
    pub async fn send_message(&mut self, message: &str) -> DocifyResult<String> {
        let (code_content, language) = self.ensure_ready()?;
        let code_content = code_content.to_string();
        let language = language.to_string();

        let reply = self.client().chat(message, &code_content, &language).await?;

        self.session.append_exchange(message.to_string(), reply.clone());
        Ok(reply)
    }

    /// Requests documentation for the full, untruncated code and packages
    /// the result as a downloadable artifact.
    pub async fn generate_documentation(
        &self,
        options: Option<DocumentationConfig>,
    ) -> DocifyResult<DocumentationReport> {
        let (code_content, language) = self.ensure_ready()?;
        let filename = self
            .session
            .filename
            .as_deref()
            .ok_or_else(|| BackendError::missing("filename", "Upload a code file first."))?;

        let options = options.unwrap_or_else(|| self.documentation_defaults.clone());
        let response = self
            .client()
            .documentation(code_content, filename, language, &options)
            .await?;

        let artifact =
            ArtifactHelper::build(filename, &response.documentation, response.file_base64.as_deref())?;

        Ok(DocumentationReport {
            documentation: response.documentation,
            artifact,
        })
    }

    pub fn clear_chat(&mut self) {
        self.session.clear_chat();
        log::info!("🗑️ Chat history cleared");
    }

    pub fn reset_all(&mut self) {
        self.session.reset_all();
        log::info!("🔄 Session reset (API settings preserved)");
    }

    fn client(&self) -> BackendClient {
        BackendClient::new(&self.session.api_base_url, &self.session.api_key)
            .with_min_response_length(self.min_response_length)
    }

    fn ensure_api_settings(&self) -> Result<(), BackendError> {
        if self.session.api_base_url.is_empty() {
            return Err(BackendError::missing(
                "api_base_url",
                "Save the backend URL with 'docify settings' first.",
            ));
        }
        if self.session.api_key.is_empty() {
            return Err(BackendError::missing(
                "api_key",
                "Save the API key with 'docify settings' first.",
            ));
        }
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(&str, &str), BackendError> {
        self.ensure_api_settings()?;

        let code_content = self
            .session
            .code_content
            .as_deref()
            .ok_or_else(|| BackendError::missing("code_content", "Upload a code file first."))?;
        let language = self.session.language.as_deref().ok_or_else(|| {
            BackendError::missing("language", "Select a language for the loaded file.")
        })?;

        Ok((code_content, language))
    }
}
