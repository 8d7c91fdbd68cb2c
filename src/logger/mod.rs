pub mod session_logger;
