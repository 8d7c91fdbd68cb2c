pub mod generate_request;
pub mod generate_response;
pub mod chat_request;
pub mod chat_response;
pub mod documentation_request;
pub mod documentation_response;
