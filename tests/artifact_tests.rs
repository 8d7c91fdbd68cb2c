use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use docify_cli::config::constants::{DOCX_MIME_TYPE, MARKDOWN_MIME_TYPE};
use docify_cli::helpers::artifact_helper::ArtifactHelper;

#[test]
fn decoded_artifact_preserves_bytes_exactly() {
    let original: Vec<u8> = (0u16..=255).map(|b| b as u8).collect();
    let encoded = STANDARD.encode(&original);

    let artifact = ArtifactHelper::build("app.py", "ignored", Some(&encoded)).unwrap();

    assert_eq!(artifact.file_name, "app_Documentation.docx");
    assert_eq!(artifact.mime_type, DOCX_MIME_TYPE);
    assert_eq!(artifact.bytes, original);
    // Round-trip: re-encoding reproduces the wire value.
    assert_eq!(STANDARD.encode(&artifact.bytes), encoded);
}

#[test]
fn missing_binary_falls_back_to_markdown() {
    let documentation = "# app.py\n\nPrints a greeting.";

    let artifact = ArtifactHelper::build("app.py", documentation, None).unwrap();

    assert_eq!(artifact.file_name, "app_Documentation.md");
    assert_eq!(artifact.mime_type, MARKDOWN_MIME_TYPE);
    assert_eq!(artifact.bytes, documentation.as_bytes());
}

#[test]
fn empty_base64_falls_back_to_markdown() {
    let artifact = ArtifactHelper::build("lib.rs", "docs", Some("")).unwrap();
    assert_eq!(artifact.file_name, "lib_Documentation.md");
}

#[test]
fn invalid_base64_is_an_error() {
    assert!(ArtifactHelper::build("app.py", "docs", Some("not valid base64!!!")).is_err());
}

#[test]
fn artifact_name_derives_from_stem() {
    let artifact = ArtifactHelper::build("src/deeply/nested/server.go", "docs", None).unwrap();
    assert_eq!(artifact.file_name, "server_Documentation.md");
}

#[test]
fn write_persists_artifact_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = ArtifactHelper::build("app.py", "generated documentation", None).unwrap();

    let written = ArtifactHelper::write(&artifact, dir.path()).unwrap();

    assert!(written.ends_with("app_Documentation.md"));
    assert_eq!(std::fs::read(&written).unwrap(), artifact.bytes);
}
