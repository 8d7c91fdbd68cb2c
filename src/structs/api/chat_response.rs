use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: String,
}
