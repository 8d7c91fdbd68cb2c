pub mod commands;
pub mod chat_role;
pub mod backend_error;
