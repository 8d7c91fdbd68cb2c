use uuid::Uuid;
use crate::structs::chat_entry::ChatEntry;

/// In-memory context for one user's interaction. Owned by the command
/// layer and passed by reference into the controller, so concurrent
/// sessions in one process never share state.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub code_content: Option<String>,
    pub filename: Option<String>,
    pub language: Option<String>,
    pub chat_history: Vec<ChatEntry>,
    pub api_base_url: String,
    pub api_key: String,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            code_content: None,
            filename: None,
            language: None,
            chat_history: Vec::new(),
            api_base_url: String::new(),
            api_key: String::new(),
        }
    }

    pub fn set_api_settings(&mut self, base_url: &str, api_key: &str) {
        self.api_base_url = base_url.trim().trim_end_matches('/').to_string();
        self.api_key = api_key.trim().to_string();
    }

    /// Stores a freshly loaded file. Chat history survives a new upload;
    /// only the code-adjacent fields are overwritten.
    pub fn store_upload(&mut self, filename: String, code_content: String, language: Option<String>) {
        self.filename = Some(filename);
        self.code_content = Some(code_content);
        self.language = language;
    }

    /// Appends a completed request/response pair, user entry first.
    /// Failed requests never reach this method.
    pub fn append_exchange(&mut self, user_text: String, assistant_text: String) {
        self.chat_history.push(ChatEntry::user(user_text));
        self.chat_history.push(ChatEntry::assistant(assistant_text));
    }

    pub fn clear_chat(&mut self) {
        self.chat_history.clear();
    }

    /// Empties everything except the API settings, which stay sticky.
    pub fn reset_all(&mut self) {
        self.chat_history.clear();
        self.code_content = None;
        self.filename = None;
        self.language = None;
    }

    pub fn has_api_settings(&self) -> bool {
        !self.api_base_url.is_empty() && !self.api_key.is_empty()
    }

    pub fn has_code(&self) -> bool {
        self.code_content.is_some() && self.language.is_some()
    }

    pub fn message_count(&self) -> usize {
        self.chat_history.len()
    }

    pub fn code_line_count(&self) -> usize {
        self.code_content
            .as_deref()
            .map(|content| content.lines().count())
            .unwrap_or(0)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
