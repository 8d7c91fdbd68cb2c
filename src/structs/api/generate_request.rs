use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GenerateRequest {
    pub prompt: String,
    pub max_length: u32,
}
