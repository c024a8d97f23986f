//! Request and response beans for the API surface
//!
//! One module per API area. Requests carry a `validate()` that applies the
//! documented constraints before the bean is handed to a transport layer;
//! responses are plain read-side shapes. Dispatch, signing and pagination
//! are not modeled here.

pub mod catalog;
pub mod connections;
pub mod crawlers;
pub mod dev_endpoints;
pub mod jobs;
pub mod triggers;
pub mod workflows;

pub use catalog::{
    BatchCreatePartitionRequest, BatchCreatePartitionResponse, CreateDatabaseRequest,
    CreateDatabaseResponse, CreateTableRequest, CreateTableResponse, GetDatabaseRequest,
    GetDatabaseResponse, GetDatabasesRequest, GetDatabasesResponse, GetPartitionsRequest,
    GetPartitionsResponse, GetTableRequest, GetTableResponse, UpdateTableRequest,
    UpdateTableResponse,
};
pub use connections::{
    CreateConnectionRequest, CreateConnectionResponse, GetConnectionRequest,
    GetConnectionResponse,
};
pub use crawlers::{
    CreateCrawlerRequest, CreateCrawlerResponse, GetCrawlerMetricsRequest,
    GetCrawlerMetricsResponse, GetCrawlerRequest, GetCrawlerResponse, StartCrawlerRequest,
    StartCrawlerResponse,
};
pub use dev_endpoints::{CreateDevEndpointRequest, CreateDevEndpointResponse};
pub use jobs::{
    CreateJobRequest, CreateJobResponse, GetJobRunRequest, GetJobRunResponse, StartJobRunRequest,
    StartJobRunResponse,
};
pub use triggers::{
    CreateTriggerRequest, CreateTriggerResponse, GetTriggerRequest, GetTriggerResponse,
    StartTriggerRequest, StartTriggerResponse, UpdateTriggerRequest, UpdateTriggerResponse,
};
pub use workflows::{
    CreateWorkflowRequest, CreateWorkflowResponse, GetWorkflowRequest, GetWorkflowResponse,
    GetWorkflowRunRequest, GetWorkflowRunResponse, PutWorkflowRunPropertiesRequest,
    PutWorkflowRunPropertiesResponse, StartWorkflowRunRequest, StartWorkflowRunResponse,
};
