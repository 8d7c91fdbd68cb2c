pub mod config_helper;
pub mod artifact_helper;
