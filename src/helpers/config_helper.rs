use crate::config::constants::{DEFAULT_DOC_MAX_LENGTH, DEFAULT_MIN_RESPONSE_LENGTH};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_min_response_length() -> usize {
        DEFAULT_MIN_RESPONSE_LENGTH
    }

    pub fn default_doc_max_length() -> u32 {
        DEFAULT_DOC_MAX_LENGTH
    }

    pub fn default_true() -> bool {
        true
    }
}
