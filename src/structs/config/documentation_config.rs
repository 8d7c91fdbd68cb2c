use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Knobs forwarded verbatim to the documentation endpoint.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DocumentationConfig {
    #[serde(default = "ConfigHelper::default_doc_max_length")]
    pub max_length: u32,

    #[serde(default = "ConfigHelper::default_true")]
    pub include_examples: bool,

    #[serde(default = "ConfigHelper::default_true")]
    pub detailed: bool,
}

impl Default for DocumentationConfig {
    fn default() -> Self {
        Self {
            max_length: ConfigHelper::default_doc_max_length(),
            include_examples: true,
            detailed: true,
        }
    }
}
