//! Model types for the data-catalog and ETL orchestration API
//!
//! Plain data types mirroring the service's wire schema. Construction goes
//! through `new()` plus consuming `with_*` builders; setters never validate
//! (see the `validation` module for the boundary checks). Collection-valued
//! fields default to empty and are treated as present-but-empty: they are
//! omitted from both the wire form and the `Display` rendering when empty.

pub mod catalog;
pub mod connection;
pub mod crawler;
pub mod dev_endpoint;
pub(crate) mod display;
pub mod enums;
pub mod job;
pub mod task_run;
pub mod trigger;
pub mod workflow;

pub use catalog::{
    Column, DataLakePrincipal, Database, DatabaseInput, ErrorDetail, Order, Partition,
    PartitionError, PartitionInput, PrincipalPermissions, SerDeInfo, SkewedInfo,
    StorageDescriptor, Table, TableInput,
};
pub use connection::{Connection, ConnectionInput, PhysicalConnectionRequirements};
pub use crawler::{
    CatalogTarget, Crawl, Crawler, CrawlerMetrics, CrawlerTargets, DynamoDbTarget, JdbcTarget,
    LastCrawlInfo, S3Target, Schedule, SchemaChangePolicy,
};
pub use dev_endpoint::DevEndpoint;
pub use enums::*;
pub use job::{
    ConnectionsList, ExecutionProperty, Job, JobCommand, JobRun, NotificationProperty,
    Predecessor,
};
pub use task_run::{
    ExportLabelsTaskRunProperties, FindMatchesTaskRunProperties, ImportLabelsTaskRunProperties,
    LabelingSetGenerationTaskRunProperties, TaskRun, TaskRunProperties,
};
pub use trigger::{Action, Condition, Predicate, Trigger, TriggerUpdate};
pub use workflow::{
    CrawlerNodeDetails, Edge, JobNodeDetails, Node, TriggerNodeDetails, Workflow, WorkflowGraph,
    WorkflowRun, WorkflowRunStatistics,
};

/// Error raised by the additive property-bag helpers.
///
/// The only failure the model layer itself produces: inserting an entry whose
/// key is already present. Bulk `with_*` replacement never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("duplicate key in {field}: {key}")]
    DuplicateKey { field: &'static str, key: String },
}

/// Insert into a property bag, refusing to overwrite an existing key.
pub(crate) fn insert_unique(
    map: &mut std::collections::HashMap<String, String>,
    field: &'static str,
    key: String,
    value: String,
) -> Result<(), ModelError> {
    if map.contains_key(&key) {
        return Err(ModelError::DuplicateKey { field, key });
    }
    map.insert(key, value);
    Ok(())
}
