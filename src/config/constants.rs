use std::time::Duration;

pub const GENERATE_TIMEOUT_SECS: u64 = 120;
pub const CHAT_TIMEOUT_SECS: u64 = 120;
pub const DOCUMENTATION_TIMEOUT_SECS: u64 = 180;

pub const CHAT_CODE_SNIPPET_LIMIT: usize = 3000;
pub const DEFAULT_MIN_RESPONSE_LENGTH: usize = 10;
pub const DEFAULT_DOC_MAX_LENGTH: u32 = 1200;

pub const TEST_CONNECTION_PROMPT: &str = "Hello, test connection";
pub const TEST_CONNECTION_MAX_LENGTH: u32 = 50;

pub const EMPTY_GENERATE_RESPONSE: &str = "No response";
pub const FALLBACK_RESPONSE: &str = "I couldn't generate a proper response. Please try rephrasing your question or ask something more specific about the code.";

pub const DOCX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";
pub const ARTIFACT_NAME_SUFFIX: &str = "_Documentation";

pub const QUICK_QUESTIONS: &[&str] = &[
    "Explain the main purpose",
    "List all functions",
    "Find potential bugs",
    "Suggest improvements",
];

// Evaluated front to back; the first entry claiming an extension wins.
pub const SUPPORTED_LANGUAGES: &[(&str, &[&str])] = &[
    ("python", &[".py"]),
    ("javascript", &[".js", ".jsx"]),
    ("typescript", &[".ts", ".tsx"]),
    ("java", &[".java"]),
    ("c++", &[".cpp", ".hpp", ".cc"]),
    ("c", &[".c", ".h"]),
    ("c#", &[".cs"]),
    ("go", &[".go"]),
    ("rust", &[".rs"]),
    ("php", &[".php"]),
    ("ruby", &[".rb"]),
    ("swift", &[".swift"]),
    ("kotlin", &[".kt"]),
];

pub fn request_timeout(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
