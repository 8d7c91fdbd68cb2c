use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DocumentationRequest {
    pub code_content: String,
    pub filename: String,
    pub language: String,
    pub max_length: u32,
    pub include_examples: bool,
    pub detailed: bool,
}
