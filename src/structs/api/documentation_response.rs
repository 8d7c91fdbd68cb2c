use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DocumentationResponse {
    #[serde(default)]
    pub documentation: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_base64: Option<String>,
}
