use std::path::Path;
use crate::config::constants::SUPPORTED_LANGUAGES;

pub struct LanguageDetector;

impl LanguageDetector {
    /// Maps a filename's extension (case-insensitive) to a language tag.
    /// The table is scanned in order, so a contested extension always
    /// resolves to the earliest entry. Returns `None` for anything the
    /// table does not claim.
    pub fn detect(filename: &str) -> Option<&'static str> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_lowercase();
        let dotted = format!(".{}", extension);

        SUPPORTED_LANGUAGES
            .iter()
            .find(|(_, extensions)| extensions.contains(&dotted.as_str()))
            .map(|(tag, _)| *tag)
    }

    pub fn is_supported(language: &str) -> bool {
        SUPPORTED_LANGUAGES.iter().any(|(tag, _)| *tag == language)
    }

    pub fn supported_tags() -> Vec<&'static str> {
        SUPPORTED_LANGUAGES.iter().map(|(tag, _)| *tag).collect()
    }

    pub fn supported_extensions() -> Vec<&'static str> {
        SUPPORTED_LANGUAGES
            .iter()
            .flat_map(|(_, extensions)| extensions.iter().copied())
            .collect()
    }
}
