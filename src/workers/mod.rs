pub mod command_runner;
pub mod session_controller;
