//! Validate command implementation
//!
//! Parses a JSON document as the named model kind and runs the boundary
//! validation for it. Exits non-zero on the first violation.

use crate::cli::error::CliError;
use crate::models::catalog::{DatabaseInput, PartitionInput, TableInput};
use crate::models::connection::ConnectionInput;
use crate::models::trigger::{Condition, Predicate};
use crate::models::workflow::WorkflowGraph;
use crate::ops::catalog::BatchCreatePartitionRequest;
use crate::ops::crawlers::CreateCrawlerRequest;
use crate::ops::triggers::CreateTriggerRequest;
use crate::ops::workflows::CreateWorkflowRequest;
use crate::validation::{
    validate_condition, validate_connection_input, validate_database_input,
    validate_partition_input, validate_predicate, validate_table_input, validate_workflow_graph,
};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::PathBuf;

/// Load input content from file or stdin
fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

fn parse<T: DeserializeOwned>(content: &str) -> Result<T, CliError> {
    serde_json::from_str(content).map_err(|e| CliError::ParseError(e.to_string()))
}

/// Handle the validate command
pub fn handle_validate(kind: &str, input: &str) -> Result<(), CliError> {
    let content = load_input(input)?;
    tracing::debug!(kind, "validating document");

    let result = match kind {
        "database" => validate_database_input(&parse::<DatabaseInput>(&content)?)
            .map_err(|e| e.to_string()),
        "table" => {
            validate_table_input(&parse::<TableInput>(&content)?).map_err(|e| e.to_string())
        }
        "partition" => validate_partition_input(&parse::<PartitionInput>(&content)?)
            .map_err(|e| e.to_string()),
        "connection" => validate_connection_input(&parse::<ConnectionInput>(&content)?)
            .map_err(|e| e.to_string()),
        "condition" => {
            validate_condition(&parse::<Condition>(&content)?).map_err(|e| e.to_string())
        }
        "predicate" => {
            validate_predicate(&parse::<Predicate>(&content)?).map_err(|e| e.to_string())
        }
        "workflow-graph" => validate_workflow_graph(&parse::<WorkflowGraph>(&content)?)
            .map_err(|e| e.to_string()),
        "create-crawler" => parse::<CreateCrawlerRequest>(&content)?
            .validate()
            .map_err(|e| e.to_string()),
        "create-trigger" => parse::<CreateTriggerRequest>(&content)?
            .validate()
            .map_err(|e| e.to_string()),
        "create-workflow" => parse::<CreateWorkflowRequest>(&content)?
            .validate()
            .map_err(|e| e.to_string()),
        "batch-create-partition" => parse::<BatchCreatePartitionRequest>(&content)?
            .validate()
            .map_err(|e| e.to_string()),
        _ => {
            return Err(CliError::InvalidArgument(format!("Unknown kind: {}", kind)));
        }
    };

    result.map_err(CliError::ValidationError)?;

    println!("Validation successful");
    Ok(())
}
