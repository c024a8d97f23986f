//! Closed string enums used across the catalog model
//!
//! Every enumerated wire field is a plain string on the wire with a fixed
//! legal value set. Each enum here carries one variant per documented value
//! plus an `Other(String)` fallback so values introduced by a newer service
//! version survive a decode/encode round trip instead of failing.
//!
//! Serde support goes through the string codec (`from`/`into` on `String`),
//! so the wire never sees anything but the plain value text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a trigger fires.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TriggerType {
    Scheduled,
    Conditional,
    OnDemand,
    /// Value not recognized by this version of the model.
    Other(String),
}

impl TriggerType {
    pub fn as_str(&self) -> &str {
        match self {
            TriggerType::Scheduled => "SCHEDULED",
            TriggerType::Conditional => "CONDITIONAL",
            TriggerType::OnDemand => "ON_DEMAND",
            TriggerType::Other(s) => s,
        }
    }
}

impl From<&str> for TriggerType {
    fn from(value: &str) -> Self {
        match value {
            "SCHEDULED" => TriggerType::Scheduled,
            "CONDITIONAL" => TriggerType::Conditional,
            "ON_DEMAND" => TriggerType::OnDemand,
            other => {
                tracing::debug!(value = other, "unrecognized trigger type");
                TriggerType::Other(other.to_string())
            }
        }
    }
}

impl From<String> for TriggerType {
    fn from(value: String) -> Self {
        TriggerType::from(value.as_str())
    }
}

impl From<TriggerType> for String {
    fn from(value: TriggerType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TriggerState {
    Creating,
    Created,
    Activating,
    Activated,
    Deactivating,
    Deactivated,
    Deleting,
    Updating,
    Other(String),
}

impl TriggerState {
    pub fn as_str(&self) -> &str {
        match self {
            TriggerState::Creating => "CREATING",
            TriggerState::Created => "CREATED",
            TriggerState::Activating => "ACTIVATING",
            TriggerState::Activated => "ACTIVATED",
            TriggerState::Deactivating => "DEACTIVATING",
            TriggerState::Deactivated => "DEACTIVATED",
            TriggerState::Deleting => "DELETING",
            TriggerState::Updating => "UPDATING",
            TriggerState::Other(s) => s,
        }
    }
}

impl From<&str> for TriggerState {
    fn from(value: &str) -> Self {
        match value {
            "CREATING" => TriggerState::Creating,
            "CREATED" => TriggerState::Created,
            "ACTIVATING" => TriggerState::Activating,
            "ACTIVATED" => TriggerState::Activated,
            "DEACTIVATING" => TriggerState::Deactivating,
            "DEACTIVATED" => TriggerState::Deactivated,
            "DELETING" => TriggerState::Deleting,
            "UPDATING" => TriggerState::Updating,
            other => {
                tracing::debug!(value = other, "unrecognized trigger state");
                TriggerState::Other(other.to_string())
            }
        }
    }
}

impl From<String> for TriggerState {
    fn from(value: String) -> Self {
        TriggerState::from(value.as_str())
    }
}

impl From<TriggerState> for String {
    fn from(value: TriggerState) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TriggerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a single crawl inside a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CrawlState {
    Running,
    Cancelling,
    Cancelled,
    Succeeded,
    Failed,
    Other(String),
}

impl CrawlState {
    pub fn as_str(&self) -> &str {
        match self {
            CrawlState::Running => "RUNNING",
            CrawlState::Cancelling => "CANCELLING",
            CrawlState::Cancelled => "CANCELLED",
            CrawlState::Succeeded => "SUCCEEDED",
            CrawlState::Failed => "FAILED",
            CrawlState::Other(s) => s,
        }
    }
}

impl From<&str> for CrawlState {
    fn from(value: &str) -> Self {
        match value {
            "RUNNING" => CrawlState::Running,
            "CANCELLING" => CrawlState::Cancelling,
            "CANCELLED" => CrawlState::Cancelled,
            "SUCCEEDED" => CrawlState::Succeeded,
            "FAILED" => CrawlState::Failed,
            other => {
                tracing::debug!(value = other, "unrecognized crawl state");
                CrawlState::Other(other.to_string())
            }
        }
    }
}

impl From<String> for CrawlState {
    fn from(value: String) -> Self {
        CrawlState::from(value.as_str())
    }
}

impl From<CrawlState> for String {
    fn from(value: CrawlState) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational state of a crawler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CrawlerState {
    Ready,
    Running,
    Stopping,
    Other(String),
}

impl CrawlerState {
    pub fn as_str(&self) -> &str {
        match self {
            CrawlerState::Ready => "READY",
            CrawlerState::Running => "RUNNING",
            CrawlerState::Stopping => "STOPPING",
            CrawlerState::Other(s) => s,
        }
    }
}

impl From<&str> for CrawlerState {
    fn from(value: &str) -> Self {
        match value {
            "READY" => CrawlerState::Ready,
            "RUNNING" => CrawlerState::Running,
            "STOPPING" => CrawlerState::Stopping,
            other => {
                tracing::debug!(value = other, "unrecognized crawler state");
                CrawlerState::Other(other.to_string())
            }
        }
    }
}

impl From<String> for CrawlerState {
    fn from(value: String) -> Self {
        CrawlerState::from(value.as_str())
    }
}

impl From<CrawlerState> for String {
    fn from(value: CrawlerState) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for CrawlerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a crawler's most recent crawl.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LastCrawlStatus {
    Succeeded,
    Cancelled,
    Failed,
    Other(String),
}

impl LastCrawlStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LastCrawlStatus::Succeeded => "SUCCEEDED",
            LastCrawlStatus::Cancelled => "CANCELLED",
            LastCrawlStatus::Failed => "FAILED",
            LastCrawlStatus::Other(s) => s,
        }
    }
}

impl From<&str> for LastCrawlStatus {
    fn from(value: &str) -> Self {
        match value {
            "SUCCEEDED" => LastCrawlStatus::Succeeded,
            "CANCELLED" => LastCrawlStatus::Cancelled,
            "FAILED" => LastCrawlStatus::Failed,
            other => {
                tracing::debug!(value = other, "unrecognized last crawl status");
                LastCrawlStatus::Other(other.to_string())
            }
        }
    }
}

impl From<String> for LastCrawlStatus {
    fn from(value: String) -> Self {
        LastCrawlStatus::from(value.as_str())
    }
}

impl From<LastCrawlStatus> for String {
    fn from(value: LastCrawlStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for LastCrawlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a crawler schedule is active.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScheduleState {
    Scheduled,
    NotScheduled,
    Transitioning,
    Other(String),
}

impl ScheduleState {
    pub fn as_str(&self) -> &str {
        match self {
            ScheduleState::Scheduled => "SCHEDULED",
            ScheduleState::NotScheduled => "NOT_SCHEDULED",
            ScheduleState::Transitioning => "TRANSITIONING",
            ScheduleState::Other(s) => s,
        }
    }
}

impl From<&str> for ScheduleState {
    fn from(value: &str) -> Self {
        match value {
            "SCHEDULED" => ScheduleState::Scheduled,
            "NOT_SCHEDULED" => ScheduleState::NotScheduled,
            "TRANSITIONING" => ScheduleState::Transitioning,
            other => {
                tracing::debug!(value = other, "unrecognized schedule state");
                ScheduleState::Other(other.to_string())
            }
        }
    }
}

impl From<String> for ScheduleState {
    fn from(value: String) -> Self {
        ScheduleState::from(value.as_str())
    }
}

impl From<ScheduleState> for String {
    fn from(value: ScheduleState) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ScheduleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a job run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobRunState {
    Starting,
    Running,
    Stopping,
    Stopped,
    Succeeded,
    Failed,
    Timeout,
    Other(String),
}

impl JobRunState {
    pub fn as_str(&self) -> &str {
        match self {
            JobRunState::Starting => "STARTING",
            JobRunState::Running => "RUNNING",
            JobRunState::Stopping => "STOPPING",
            JobRunState::Stopped => "STOPPED",
            JobRunState::Succeeded => "SUCCEEDED",
            JobRunState::Failed => "FAILED",
            JobRunState::Timeout => "TIMEOUT",
            JobRunState::Other(s) => s,
        }
    }

    /// Whether the run has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobRunState::Stopped
                | JobRunState::Succeeded
                | JobRunState::Failed
                | JobRunState::Timeout
        )
    }
}

impl From<&str> for JobRunState {
    fn from(value: &str) -> Self {
        match value {
            "STARTING" => JobRunState::Starting,
            "RUNNING" => JobRunState::Running,
            "STOPPING" => JobRunState::Stopping,
            "STOPPED" => JobRunState::Stopped,
            "SUCCEEDED" => JobRunState::Succeeded,
            "FAILED" => JobRunState::Failed,
            "TIMEOUT" => JobRunState::Timeout,
            other => {
                tracing::debug!(value = other, "unrecognized job run state");
                JobRunState::Other(other.to_string())
            }
        }
    }
}

impl From<String> for JobRunState {
    fn from(value: String) -> Self {
        JobRunState::from(value.as_str())
    }
}

impl From<JobRunState> for String {
    fn from(value: JobRunState) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for JobRunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predefined worker size for a job run or dev endpoint.
///
/// Wire values are mixed-case product names, not screaming-snake tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkerType {
    Standard,
    G1x,
    G2x,
    Other(String),
}

impl WorkerType {
    pub fn as_str(&self) -> &str {
        match self {
            WorkerType::Standard => "Standard",
            WorkerType::G1x => "G.1X",
            WorkerType::G2x => "G.2X",
            WorkerType::Other(s) => s,
        }
    }
}

impl From<&str> for WorkerType {
    fn from(value: &str) -> Self {
        match value {
            "Standard" => WorkerType::Standard,
            "G.1X" => WorkerType::G1x,
            "G.2X" => WorkerType::G2x,
            other => {
                tracing::debug!(value = other, "unrecognized worker type");
                WorkerType::Other(other.to_string())
            }
        }
    }
}

impl From<String> for WorkerType {
    fn from(value: String) -> Self {
        WorkerType::from(value.as_str())
    }
}

impl From<WorkerType> for String {
    fn from(value: WorkerType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for WorkerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a predicate combines its conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Logical {
    And,
    Any,
    Other(String),
}

impl Logical {
    pub fn as_str(&self) -> &str {
        match self {
            Logical::And => "AND",
            Logical::Any => "ANY",
            Logical::Other(s) => s,
        }
    }
}

impl From<&str> for Logical {
    fn from(value: &str) -> Self {
        match value {
            "AND" => Logical::And,
            "ANY" => Logical::Any,
            other => {
                tracing::debug!(value = other, "unrecognized logical");
                Logical::Other(other.to_string())
            }
        }
    }
}

impl From<String> for Logical {
    fn from(value: String) -> Self {
        Logical::from(value.as_str())
    }
}

impl From<Logical> for String {
    fn from(value: Logical) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Logical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operator inside a single condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogicalOperator {
    Equals,
    Other(String),
}

impl LogicalOperator {
    pub fn as_str(&self) -> &str {
        match self {
            LogicalOperator::Equals => "EQUALS",
            LogicalOperator::Other(s) => s,
        }
    }
}

impl From<&str> for LogicalOperator {
    fn from(value: &str) -> Self {
        match value {
            "EQUALS" => LogicalOperator::Equals,
            other => {
                tracing::debug!(value = other, "unrecognized logical operator");
                LogicalOperator::Other(other.to_string())
            }
        }
    }
}

impl From<String> for LogicalOperator {
    fn from(value: String) -> Self {
        LogicalOperator::from(value.as_str())
    }
}

impl From<LogicalOperator> for String {
    fn from(value: LogicalOperator) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of data store a connection points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConnectionType {
    Jdbc,
    Sftp,
    Mongodb,
    Kafka,
    Network,
    Other(String),
}

impl ConnectionType {
    pub fn as_str(&self) -> &str {
        match self {
            ConnectionType::Jdbc => "JDBC",
            ConnectionType::Sftp => "SFTP",
            ConnectionType::Mongodb => "MONGODB",
            ConnectionType::Kafka => "KAFKA",
            ConnectionType::Network => "NETWORK",
            ConnectionType::Other(s) => s,
        }
    }
}

impl From<&str> for ConnectionType {
    fn from(value: &str) -> Self {
        match value {
            "JDBC" => ConnectionType::Jdbc,
            "SFTP" => ConnectionType::Sftp,
            "MONGODB" => ConnectionType::Mongodb,
            "KAFKA" => ConnectionType::Kafka,
            "NETWORK" => ConnectionType::Network,
            other => {
                tracing::debug!(value = other, "unrecognized connection type");
                ConnectionType::Other(other.to_string())
            }
        }
    }
}

impl From<String> for ConnectionType {
    fn from(value: String) -> Self {
        ConnectionType::from(value.as_str())
    }
}

impl From<ConnectionType> for String {
    fn from(value: ConnectionType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a crawler does with catalog entries whose source objects vanished.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeleteBehavior {
    Log,
    DeleteFromDatabase,
    DeprecateInDatabase,
    Other(String),
}

impl DeleteBehavior {
    pub fn as_str(&self) -> &str {
        match self {
            DeleteBehavior::Log => "LOG",
            DeleteBehavior::DeleteFromDatabase => "DELETE_FROM_DATABASE",
            DeleteBehavior::DeprecateInDatabase => "DEPRECATE_IN_DATABASE",
            DeleteBehavior::Other(s) => s,
        }
    }
}

impl From<&str> for DeleteBehavior {
    fn from(value: &str) -> Self {
        match value {
            "LOG" => DeleteBehavior::Log,
            "DELETE_FROM_DATABASE" => DeleteBehavior::DeleteFromDatabase,
            "DEPRECATE_IN_DATABASE" => DeleteBehavior::DeprecateInDatabase,
            other => {
                tracing::debug!(value = other, "unrecognized delete behavior");
                DeleteBehavior::Other(other.to_string())
            }
        }
    }
}

impl From<String> for DeleteBehavior {
    fn from(value: String) -> Self {
        DeleteBehavior::from(value.as_str())
    }
}

impl From<DeleteBehavior> for String {
    fn from(value: DeleteBehavior) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for DeleteBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a crawler does when it detects a changed schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UpdateBehavior {
    Log,
    UpdateInDatabase,
    Other(String),
}

impl UpdateBehavior {
    pub fn as_str(&self) -> &str {
        match self {
            UpdateBehavior::Log => "LOG",
            UpdateBehavior::UpdateInDatabase => "UPDATE_IN_DATABASE",
            UpdateBehavior::Other(s) => s,
        }
    }
}

impl From<&str> for UpdateBehavior {
    fn from(value: &str) -> Self {
        match value {
            "LOG" => UpdateBehavior::Log,
            "UPDATE_IN_DATABASE" => UpdateBehavior::UpdateInDatabase,
            other => {
                tracing::debug!(value = other, "unrecognized update behavior");
                UpdateBehavior::Other(other.to_string())
            }
        }
    }
}

impl From<String> for UpdateBehavior {
    fn from(value: String) -> Self {
        UpdateBehavior::from(value.as_str())
    }
}

impl From<UpdateBehavior> for String {
    fn from(value: UpdateBehavior) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for UpdateBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkflowRunStatus {
    Running,
    Completed,
    Stopping,
    Stopped,
    Error,
    Other(String),
}

impl WorkflowRunStatus {
    pub fn as_str(&self) -> &str {
        match self {
            WorkflowRunStatus::Running => "RUNNING",
            WorkflowRunStatus::Completed => "COMPLETED",
            WorkflowRunStatus::Stopping => "STOPPING",
            WorkflowRunStatus::Stopped => "STOPPED",
            WorkflowRunStatus::Error => "ERROR",
            WorkflowRunStatus::Other(s) => s,
        }
    }
}

impl From<&str> for WorkflowRunStatus {
    fn from(value: &str) -> Self {
        match value {
            "RUNNING" => WorkflowRunStatus::Running,
            "COMPLETED" => WorkflowRunStatus::Completed,
            "STOPPING" => WorkflowRunStatus::Stopping,
            "STOPPED" => WorkflowRunStatus::Stopped,
            "ERROR" => WorkflowRunStatus::Error,
            other => {
                tracing::debug!(value = other, "unrecognized workflow run status");
                WorkflowRunStatus::Other(other.to_string())
            }
        }
    }
}

impl From<String> for WorkflowRunStatus {
    fn from(value: String) -> Self {
        WorkflowRunStatus::from(value.as_str())
    }
}

impl From<WorkflowRunStatus> for String {
    fn from(value: WorkflowRunStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for WorkflowRunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of node in a workflow graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    Crawler,
    Job,
    Trigger,
    Other(String),
}

impl NodeType {
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Crawler => "CRAWLER",
            NodeType::Job => "JOB",
            NodeType::Trigger => "TRIGGER",
            NodeType::Other(s) => s,
        }
    }
}

impl From<&str> for NodeType {
    fn from(value: &str) -> Self {
        match value {
            "CRAWLER" => NodeType::Crawler,
            "JOB" => NodeType::Job,
            "TRIGGER" => NodeType::Trigger,
            other => {
                tracing::debug!(value = other, "unrecognized node type");
                NodeType::Other(other.to_string())
            }
        }
    }
}

impl From<String> for NodeType {
    fn from(value: String) -> Self {
        NodeType::from(value.as_str())
    }
}

impl From<NodeType> for String {
    fn from(value: NodeType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of an ML task run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatusType {
    Starting,
    Running,
    Stopping,
    Stopped,
    Succeeded,
    Failed,
    Timeout,
    Other(String),
}

impl TaskStatusType {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatusType::Starting => "STARTING",
            TaskStatusType::Running => "RUNNING",
            TaskStatusType::Stopping => "STOPPING",
            TaskStatusType::Stopped => "STOPPED",
            TaskStatusType::Succeeded => "SUCCEEDED",
            TaskStatusType::Failed => "FAILED",
            TaskStatusType::Timeout => "TIMEOUT",
            TaskStatusType::Other(s) => s,
        }
    }
}

impl From<&str> for TaskStatusType {
    fn from(value: &str) -> Self {
        match value {
            "STARTING" => TaskStatusType::Starting,
            "RUNNING" => TaskStatusType::Running,
            "STOPPING" => TaskStatusType::Stopping,
            "STOPPED" => TaskStatusType::Stopped,
            "SUCCEEDED" => TaskStatusType::Succeeded,
            "FAILED" => TaskStatusType::Failed,
            "TIMEOUT" => TaskStatusType::Timeout,
            other => {
                tracing::debug!(value = other, "unrecognized task status");
                TaskStatusType::Other(other.to_string())
            }
        }
    }
}

impl From<String> for TaskStatusType {
    fn from(value: String) -> Self {
        TaskStatusType::from(value.as_str())
    }
}

impl From<TaskStatusType> for String {
    fn from(value: TaskStatusType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TaskStatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of work an ML task run performs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskType {
    Evaluation,
    LabelingSetGeneration,
    ImportLabels,
    ExportLabels,
    FindMatches,
    Other(String),
}

impl TaskType {
    pub fn as_str(&self) -> &str {
        match self {
            TaskType::Evaluation => "EVALUATION",
            TaskType::LabelingSetGeneration => "LABELING_SET_GENERATION",
            TaskType::ImportLabels => "IMPORT_LABELS",
            TaskType::ExportLabels => "EXPORT_LABELS",
            TaskType::FindMatches => "FIND_MATCHES",
            TaskType::Other(s) => s,
        }
    }
}

impl From<&str> for TaskType {
    fn from(value: &str) -> Self {
        match value {
            "EVALUATION" => TaskType::Evaluation,
            "LABELING_SET_GENERATION" => TaskType::LabelingSetGeneration,
            "IMPORT_LABELS" => TaskType::ImportLabels,
            "EXPORT_LABELS" => TaskType::ExportLabels,
            "FIND_MATCHES" => TaskType::FindMatches,
            other => {
                tracing::debug!(value = other, "unrecognized task type");
                TaskType::Other(other.to_string())
            }
        }
    }
}

impl From<String> for TaskType {
    fn from(value: String) -> Self {
        TaskType::from(value.as_str())
    }
}

impl From<TaskType> for String {
    fn from(value: TaskType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog permission granted to a principal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Permission {
    All,
    Select,
    Alter,
    Drop,
    Delete,
    Insert,
    CreateDatabase,
    CreateTable,
    DataLocationAccess,
    Other(String),
}

impl Permission {
    pub fn as_str(&self) -> &str {
        match self {
            Permission::All => "ALL",
            Permission::Select => "SELECT",
            Permission::Alter => "ALTER",
            Permission::Drop => "DROP",
            Permission::Delete => "DELETE",
            Permission::Insert => "INSERT",
            Permission::CreateDatabase => "CREATE_DATABASE",
            Permission::CreateTable => "CREATE_TABLE",
            Permission::DataLocationAccess => "DATA_LOCATION_ACCESS",
            Permission::Other(s) => s,
        }
    }
}

impl From<&str> for Permission {
    fn from(value: &str) -> Self {
        match value {
            "ALL" => Permission::All,
            "SELECT" => Permission::Select,
            "ALTER" => Permission::Alter,
            "DROP" => Permission::Drop,
            "DELETE" => Permission::Delete,
            "INSERT" => Permission::Insert,
            "CREATE_DATABASE" => Permission::CreateDatabase,
            "CREATE_TABLE" => Permission::CreateTable,
            "DATA_LOCATION_ACCESS" => Permission::DataLocationAccess,
            other => {
                tracing::debug!(value = other, "unrecognized permission");
                Permission::Other(other.to_string())
            }
        }
    }
}

impl From<String> for Permission {
    fn from(value: String) -> Self {
        Permission::from(value.as_str())
    }
}

impl From<Permission> for String {
    fn from(value: Permission) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_value_round_trip() {
        let t = TriggerType::from("CONDITIONAL");
        assert_eq!(t, TriggerType::Conditional);
        assert_eq!(t.as_str(), "CONDITIONAL");
    }

    #[test]
    fn test_unknown_value_survives() {
        let s = CrawlState::from("PAUSED");
        assert_eq!(s, CrawlState::Other("PAUSED".to_string()));
        assert_eq!(s.to_string(), "PAUSED");
    }

    #[test]
    fn test_serde_uses_plain_strings() {
        let json = serde_json::to_string(&WorkerType::G1x).unwrap();
        assert_eq!(json, "\"G.1X\"");
        let back: WorkerType = serde_json::from_str("\"G.4X\"").unwrap();
        assert_eq!(back, WorkerType::Other("G.4X".to_string()));
        assert_eq!(serde_json::to_string(&back).unwrap(), "\"G.4X\"");
    }

    #[test]
    fn test_job_run_terminal_states() {
        assert!(JobRunState::Succeeded.is_terminal());
        assert!(JobRunState::Timeout.is_terminal());
        assert!(!JobRunState::Running.is_terminal());
        assert!(!JobRunState::Other("PENDING".to_string()).is_terminal());
    }
}
