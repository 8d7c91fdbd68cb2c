pub mod config;
pub mod api_config;
pub mod documentation_config;
