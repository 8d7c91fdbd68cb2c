/// Downloadable document produced by the documentation endpoint: either
/// the decoded office document or the raw documentation text as fallback.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}
