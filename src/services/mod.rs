pub mod language_detector;
pub mod backend_client;
