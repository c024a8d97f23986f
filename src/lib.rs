//! Data Catalog SDK - client model layer for a cloud data-catalog / ETL API
//!
//! Provides typed shapes for:
//! - Catalog entities (databases, tables, partitions, connections)
//! - Crawler configuration and status
//! - Jobs, job runs, triggers, workflows and ML task runs
//! - Request/response beans for the representative API surface
//! - Boundary validation of the documented field constraints
//!
//! Transport, signing, retries and pagination live in an external runtime;
//! this crate only models the wire shapes and their invariants.

pub mod models;
pub mod ops;
pub mod validation;

pub mod cli;

// Re-export commonly used types
pub use models::ModelError;
pub use models::enums::*;
pub use models::{
    Column, Connection, ConnectionInput, Crawler, CrawlerTargets, Database, DatabaseInput,
    DevEndpoint, Job, JobRun, Partition, PartitionInput, StorageDescriptor, Table, TableInput,
    TaskRun, Trigger, Workflow, WorkflowGraph, WorkflowRun,
};

// Re-export the operation beans callers touch most
pub use ops::{
    BatchCreatePartitionRequest, BatchCreatePartitionResponse, CreateCrawlerRequest,
    CreateDatabaseRequest, CreateDevEndpointRequest, CreateJobRequest, CreateTriggerRequest,
    CreateWorkflowRequest, GetDatabaseRequest, GetDatabaseResponse, StartJobRunRequest,
    StartJobRunResponse, UpdateTableRequest,
};

// Re-export validation entry points
pub use validation::{GraphError, ValidationError, validate_workflow_graph};
