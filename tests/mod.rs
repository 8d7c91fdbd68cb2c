mod session_tests;
mod artifact_tests;
mod backend_client_tests;
