pub mod cli;
pub mod session;
pub mod chat_entry;
pub mod artifact;
pub mod documentation_report;
pub mod api;
pub mod config;
