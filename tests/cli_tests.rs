#![cfg(feature = "cli")]

//! CLI validate-command tests

use data_catalog_sdk::cli::CliError;
use data_catalog_sdk::cli::commands::validate::handle_validate;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_validate_database_document() {
    let file = write_fixture(r#"{"Name":"sales_db","Description":"quarterly sales"}"#);
    let path = file.path().to_string_lossy().into_owned();
    assert!(handle_validate("database", &path).is_ok());
}

#[test]
fn test_invalid_document_reports_violation() {
    let file = write_fixture(r#"{"Name":""}"#);
    let path = file.path().to_string_lossy().into_owned();
    assert!(matches!(
        handle_validate("database", &path),
        Err(CliError::ValidationError(_))
    ));
}

#[test]
fn test_malformed_json_reports_parse_error() {
    let file = write_fixture("{not json");
    let path = file.path().to_string_lossy().into_owned();
    assert!(matches!(
        handle_validate("database", &path),
        Err(CliError::ParseError(_))
    ));
}

#[test]
fn test_unknown_kind_rejected() {
    let file = write_fixture("{}");
    let path = file.path().to_string_lossy().into_owned();
    assert!(matches!(
        handle_validate("classifier", &path),
        Err(CliError::InvalidArgument(_))
    ));
}

#[test]
fn test_workflow_graph_kind() {
    let file = write_fixture(
        r#"{"Nodes":[{"UniqueId":"t1"},{"UniqueId":"j1"}],
            "Edges":[{"SourceId":"t1","DestinationId":"j1"}]}"#,
    );
    let path = file.path().to_string_lossy().into_owned();
    assert!(handle_validate("workflow-graph", &path).is_ok());
}

#[test]
fn test_missing_file_reported() {
    assert!(matches!(
        handle_validate("database", "/nonexistent/model.json"),
        Err(CliError::FileReadError(_, _))
    ));
}
