use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}
