//! Boundary validation for the catalog model
//!
//! The model types themselves accept any value; the service's documented
//! constraints (length bounds, character classes, collection size limits,
//! cross-field rules) are enforced here, as an explicit step callers run
//! before handing a request to the transport layer.
//!
//! Provides:
//! - field-level constraint checkers (`constraints`)
//! - cross-field rules for inputs, conditions and predicates (`rules`)
//! - workflow-graph structure checks (`graph`)

pub mod constraints;
pub mod graph;
pub mod rules;

pub use graph::{GraphError, validate_workflow_graph};
pub use rules::{
    validate_condition, validate_connection_input, validate_database_input,
    validate_partition_input, validate_predicate, validate_table_input,
};

/// A documented constraint the value under validation violates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: length {len} outside {min}..={max}")]
    Length {
        field: &'static str,
        len: usize,
        min: usize,
        max: usize,
    },

    #[error("{field}: value contains characters outside the allowed set")]
    Pattern { field: &'static str },

    #[error("{field}: at most {max} items allowed, got {len}")]
    TooManyItems {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{field}: {message}")]
    Invalid { field: &'static str, message: String },
}
