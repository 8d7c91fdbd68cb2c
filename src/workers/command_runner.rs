use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::config::constants::QUICK_QUESTIONS;
use crate::enums::commands::Commands;
use crate::errors::{DocifyError, DocifyResult};
use crate::helpers::artifact_helper::ArtifactHelper;
use crate::logger::session_logger::SessionLogger;
use crate::services::language_detector::LanguageDetector;
use crate::structs::config::documentation_config::DocumentationConfig;
use crate::workers::session_controller::SessionController;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> DocifyResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Detect { file } => self.detect_command(&file),
            Commands::Settings { url, key } => self.settings_command(&url, &key),
            Commands::Test => self.test_command().await,
            Commands::Session { file, language } => {
                self.session_command(file.as_deref(), language.as_deref()).await
            }
            Commands::Doc {
                file,
                language,
                output,
                max_length,
                no_examples,
                brief,
            } => {
                let options = DocumentationConfig {
                    max_length,
                    include_examples: !no_examples,
                    detailed: !brief,
                };
                self.doc_command(&file, language.as_deref(), output.as_deref(), options)
                    .await
            }
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️ Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> DocifyResult<()> {
        log::info!("🚀 Initializing docify configuration...");

        ConfigManager::create_sample_config()?;
        log::info!("📝 Edit the configuration file to add your backend URL and API key.");
        log::info!("🔍 Run 'docify test' to verify the connection.");

        Ok(())
    }

    fn detect_command(&self, file: &str) -> DocifyResult<()> {
        match LanguageDetector::detect(file) {
            Some(language) => {
                log::info!("✅ Detected language: {}", language.to_uppercase());
            }
            None => {
                log::warn!("❌ Could not detect language for '{}'", file);
                log::info!(
                    "💡 Supported extensions: {}",
                    LanguageDetector::supported_extensions().join(", ")
                );
            }
        }

        Ok(())
    }

    fn settings_command(&self, url: &str, key: &str) -> DocifyResult<()> {
        let config = ConfigManager::load()?;
        let mut controller = SessionController::new(&config);
        controller.save_settings(url, key)
    }

    async fn test_command(&self) -> DocifyResult<()> {
        log::info!("🔍 Testing backend connection...");

        let config = ConfigManager::load()?;
        let controller = SessionController::new(&config);

        match controller.test_connection().await {
            Ok(reply) => {
                log::info!("✅ Connected successfully!");
                log::debug!("🤖 Backend replied: {}", reply);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Connection failed: {}", e);
                Err(e)
            }
        }
    }

    async fn doc_command(
        &self,
        file: &str,
        language: Option<&str>,
        output: Option<&str>,
        options: DocumentationConfig,
    ) -> DocifyResult<()> {
        let config = ConfigManager::load()?;
        let mut controller = SessionController::new(&config);

        controller.upload(Path::new(file), language)?;

        log::info!("🤖 Generating documentation...");
        let report = controller.generate_documentation(Some(options)).await?;

        SessionLogger::print_documentation(&report.documentation);

        let output_dir = Path::new(output.unwrap_or("."));
        let written = ArtifactHelper::write(&report.artifact, output_dir)?;
        log::info!("📥 Documentation saved to {}", written.display());

        Ok(())
    }

    async fn session_command(
        &self,
        file: Option<&str>,
        language: Option<&str>,
    ) -> DocifyResult<()> {
        let config = ConfigManager::load()?;
        let mut controller = SessionController::new(&config);

        if let Some(path) = file {
            controller.upload(Path::new(path), language)?;
        }

        SessionLogger::print_welcome(controller.session());

        loop {
            println!("\nOptions:");
            println!("  1. 💬 Send a chat message");
            println!("  2. ⚡ Quick questions");
            println!("  3. 📄 Generate documentation");
            println!("  4. 📜 Show transcript");
            println!("  5. 📊 Session statistics");
            println!("  6. 📁 Load another file");
            println!("  7. 🔍 Test connection");
            println!("  8. 🗑️ Clear chat");
            println!("  9. 🔄 Reset all");
            println!("  q. 🚪 Quit");

            let choice = Self::read_line("Select option: ")?;

            match choice.as_str() {
                "1" => {
                    let message = Self::read_line("Your question: ")?;
                    if message.is_empty() {
                        continue;
                    }
                    self.handle_chat(&mut controller, &message).await;
                }
                "2" => {
                    for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
                        println!("  {}. {}", i + 1, question);
                    }
                    let pick = Self::read_line("Question number: ")?;
                    match pick.parse::<usize>() {
                        Ok(index) if index >= 1 && index <= QUICK_QUESTIONS.len() => {
                            let question = QUICK_QUESTIONS[index - 1].to_string();
                            self.handle_chat(&mut controller, &question).await;
                        }
                        _ => log::warn!("⚠️ Invalid selection"),
                    }
                }
                "3" => {
                    log::info!("🤖 Generating documentation...");
                    match controller.generate_documentation(None).await {
                        Ok(report) => {
                            SessionLogger::print_documentation(&report.documentation);
                            match ArtifactHelper::write(&report.artifact, Path::new(".")) {
                                Ok(written) => {
                                    log::info!("📥 Documentation saved to {}", written.display())
                                }
                                Err(e) => log::error!("❌ Failed to save artifact: {}", e),
                            }
                        }
                        Err(e) => log::error!("❌ {}", e),
                    }
                }
                "4" => SessionLogger::print_transcript(controller.session()),
                "5" => SessionLogger::print_statistics(controller.session()),
                "6" => {
                    let path = Self::read_line("File path: ")?;
                    if path.is_empty() {
                        continue;
                    }
                    let language = Self::read_line("Language (empty for auto-detect): ")?;
                    let override_tag = if language.is_empty() {
                        None
                    } else {
                        Some(language.as_str())
                    };
                    if let Err(e) = controller.upload(Path::new(&path), override_tag) {
                        log::error!("❌ {}", e);
                    }
                }
                "7" => match controller.test_connection().await {
                    Ok(_) => log::info!("✅ Connected successfully!"),
                    Err(e) => log::error!("❌ Connection failed: {}", e),
                },
                "8" => controller.clear_chat(),
                "9" => controller.reset_all(),
                "q" | "quit" | "exit" => {
                    log::info!("👋 Session ended");
                    break;
                }
                _ => log::warn!("⚠️ Invalid option"),
            }
        }

        Ok(())
    }

    async fn handle_chat(&self, controller: &mut SessionController, message: &str) {
        log::info!("🤖 AI is analyzing your code...");

        match controller.send_message(message).await {
            Ok(reply) => {
                println!("\n🤖 AI:\n{}", reply);
            }
            // Unmet preconditions are user-fixable, not backend failures.
            Err(DocifyError::Backend(e)) if e.is_validation() => log::warn!("⚠️ {}", e),
            Err(e) => log::error!("❌ {}", e),
        }
    }

    fn read_line(prompt: &str) -> DocifyResult<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(input.trim().to_string())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
