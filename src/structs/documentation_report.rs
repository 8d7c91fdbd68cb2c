use crate::structs::artifact::Artifact;

#[derive(Debug, Clone)]
pub struct DocumentationReport {
    pub documentation: String,
    pub artifact: Artifact,
}
