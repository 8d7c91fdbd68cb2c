use std::fs;
use std::path::{Path, PathBuf};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::constants::{ARTIFACT_NAME_SUFFIX, DOCX_MIME_TYPE, MARKDOWN_MIME_TYPE};
use crate::enums::backend_error::BackendError;
use crate::errors::{DocifyError, DocifyResult};
use crate::structs::artifact::Artifact;

pub struct ArtifactHelper;

impl ArtifactHelper {
    /// Builds the downloadable artifact for a documentation response.
    /// When the backend returned a base64-encoded office document the
    /// decoded bytes are preserved exactly; otherwise the documentation
    /// text itself becomes a markdown fallback.
    pub fn build(
        filename: &str,
        documentation: &str,
        file_base64: Option<&str>,
    ) -> Result<Artifact, BackendError> {
        let stem = Self::artifact_stem(filename);

        match file_base64 {
            Some(encoded) if !encoded.is_empty() => {
                let bytes = STANDARD.decode(encoded).map_err(|e| {
                    BackendError::Unknown(format!("Invalid base64 document: {}", e))
                })?;

                Ok(Artifact {
                    file_name: format!("{}{}.docx", stem, ARTIFACT_NAME_SUFFIX),
                    mime_type: DOCX_MIME_TYPE,
                    bytes,
                })
            }
            _ => Ok(Artifact {
                file_name: format!("{}{}.md", stem, ARTIFACT_NAME_SUFFIX),
                mime_type: MARKDOWN_MIME_TYPE,
                bytes: documentation.as_bytes().to_vec(),
            }),
        }
    }

    pub fn write(artifact: &Artifact, output_dir: &Path) -> DocifyResult<PathBuf> {
        fs::create_dir_all(output_dir)?;

        let target = output_dir.join(&artifact.file_name);
        fs::write(&target, &artifact.bytes).map_err(|e| {
            DocifyError::file_error(&target.display().to_string(), "write", &e.to_string())
        })?;

        Ok(target)
    }

    fn artifact_stem(filename: &str) -> String {
        Path::new(filename)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("code")
            .to_string()
    }
}
