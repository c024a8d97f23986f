//! Workflow model types
//!
//! A workflow chains triggers, jobs and crawlers into a dependency graph.
//! The graph shape is returned by read operations; see `validation::graph`
//! for the structural checks applied before a graph is trusted.

use super::ModelError;
use super::crawler::Crawl;
use super::display::FieldDisplay;
use super::enums::{NodeType, WorkflowRunStatus};
use super::job::JobRun;
use super::trigger::Trigger;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Trigger carried by a workflow-graph node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TriggerNodeDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,
}

impl TriggerNodeDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }
}

impl fmt::Display for TriggerNodeDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Trigger", self.trigger.as_ref())?;
        d.finish()
    }
}

/// Job runs carried by a workflow-graph node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct JobNodeDetails {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub job_runs: Vec<JobRun>,
}

impl JobNodeDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_job_runs(mut self, job_runs: Vec<JobRun>) -> Self {
        self.job_runs = job_runs;
        self
    }

    pub fn with_job_run(mut self, job_run: JobRun) -> Self {
        self.job_runs.push(job_run);
        self
    }
}

impl fmt::Display for JobNodeDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.list("JobRuns", &self.job_runs)?;
        d.finish()
    }
}

/// Crawls carried by a workflow-graph node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CrawlerNodeDetails {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crawls: Vec<Crawl>,
}

impl CrawlerNodeDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_crawls(mut self, crawls: Vec<Crawl>) -> Self {
        self.crawls = crawls;
        self
    }

    pub fn with_crawl(mut self, crawl: Crawl) -> Self {
        self.crawls.push(crawl);
        self
    }
}

impl fmt::Display for CrawlerNodeDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.list("Crawls", &self.crawls)?;
        d.finish()
    }
}

/// One vertex in a workflow graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Node {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<NodeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Identifier edges refer to, unique within the graph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_details: Option<TriggerNodeDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_details: Option<JobNodeDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawler_details: Option<CrawlerNodeDetails>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_type(mut self, node_type: NodeType) -> Self {
        self.node_type = Some(node_type);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    pub fn with_trigger_details(mut self, trigger_details: TriggerNodeDetails) -> Self {
        self.trigger_details = Some(trigger_details);
        self
    }

    pub fn with_job_details(mut self, job_details: JobNodeDetails) -> Self {
        self.job_details = Some(job_details);
        self
    }

    pub fn with_crawler_details(mut self, crawler_details: CrawlerNodeDetails) -> Self {
        self.crawler_details = Some(crawler_details);
        self
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Type", self.node_type.as_ref())?;
        d.opt("Name", self.name.as_ref())?;
        d.opt("UniqueId", self.unique_id.as_ref())?;
        d.opt("TriggerDetails", self.trigger_details.as_ref())?;
        d.opt("JobDetails", self.job_details.as_ref())?;
        d.opt("CrawlerDetails", self.crawler_details.as_ref())?;
        d.finish()
    }
}

/// Directed dependency between two workflow nodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Edge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
}

impl Edge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = Some(source_id.into());
        self
    }

    pub fn with_destination_id(mut self, destination_id: impl Into<String>) -> Self {
        self.destination_id = Some(destination_id.into());
        self
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("SourceId", self.source_id.as_ref())?;
        d.opt("DestinationId", self.destination_id.as_ref())?;
        d.finish()
    }
}

/// Complete dependency graph of a workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct WorkflowGraph {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Node>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<Edge>,
}

impl WorkflowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_edges(mut self, edges: Vec<Edge>) -> Self {
        self.edges = edges;
        self
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }
}

impl fmt::Display for WorkflowGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.list("Nodes", &self.nodes)?;
        d.list("Edges", &self.edges)?;
        d.finish()
    }
}

/// Counts of actions in a workflow run, by outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct WorkflowRunStatistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_actions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_actions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_actions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopped_actions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub succeeded_actions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_actions: Option<i32>,
}

impl WorkflowRunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_total_actions(mut self, total_actions: i32) -> Self {
        self.total_actions = Some(total_actions);
        self
    }

    pub fn with_timeout_actions(mut self, timeout_actions: i32) -> Self {
        self.timeout_actions = Some(timeout_actions);
        self
    }

    pub fn with_failed_actions(mut self, failed_actions: i32) -> Self {
        self.failed_actions = Some(failed_actions);
        self
    }

    pub fn with_stopped_actions(mut self, stopped_actions: i32) -> Self {
        self.stopped_actions = Some(stopped_actions);
        self
    }

    pub fn with_succeeded_actions(mut self, succeeded_actions: i32) -> Self {
        self.succeeded_actions = Some(succeeded_actions);
        self
    }

    pub fn with_running_actions(mut self, running_actions: i32) -> Self {
        self.running_actions = Some(running_actions);
        self
    }
}

impl fmt::Display for WorkflowRunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("TotalActions", self.total_actions.as_ref())?;
        d.opt("TimeoutActions", self.timeout_actions.as_ref())?;
        d.opt("FailedActions", self.failed_actions.as_ref())?;
        d.opt("StoppedActions", self.stopped_actions.as_ref())?;
        d.opt("SucceededActions", self.succeeded_actions.as_ref())?;
        d.opt("RunningActions", self.running_actions.as_ref())?;
        d.finish()
    }
}

/// One execution of a workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct WorkflowRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_run_id: Option<String>,
    /// Run-scoped properties shared by all jobs in the run.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub workflow_run_properties: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkflowRunStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<WorkflowRunStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<WorkflowGraph>,
}

impl WorkflowRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_workflow_run_id(mut self, workflow_run_id: impl Into<String>) -> Self {
        self.workflow_run_id = Some(workflow_run_id.into());
        self
    }

    pub fn with_workflow_run_properties(
        mut self,
        workflow_run_properties: HashMap<String, String>,
    ) -> Self {
        self.workflow_run_properties = workflow_run_properties;
        self
    }

    pub fn add_workflow_run_properties_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(
            &mut self.workflow_run_properties,
            "WorkflowRunProperties",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_workflow_run_properties_entries(mut self) -> Self {
        self.workflow_run_properties.clear();
        self
    }

    pub fn with_started_on(mut self, started_on: DateTime<Utc>) -> Self {
        self.started_on = Some(started_on);
        self
    }

    pub fn with_completed_on(mut self, completed_on: DateTime<Utc>) -> Self {
        self.completed_on = Some(completed_on);
        self
    }

    pub fn with_status(mut self, status: WorkflowRunStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_statistics(mut self, statistics: WorkflowRunStatistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn with_graph(mut self, graph: WorkflowGraph) -> Self {
        self.graph = Some(graph);
        self
    }
}

impl fmt::Display for WorkflowRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Name", self.name.as_ref())?;
        d.opt("WorkflowRunId", self.workflow_run_id.as_ref())?;
        d.map("WorkflowRunProperties", &self.workflow_run_properties)?;
        d.opt("StartedOn", self.started_on.as_ref())?;
        d.opt("CompletedOn", self.completed_on.as_ref())?;
        d.opt("Status", self.status.as_ref())?;
        d.opt("Statistics", self.statistics.as_ref())?;
        d.opt("Graph", self.graph.as_ref())?;
        d.finish()
    }
}

/// A workflow definition plus its most recent run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Workflow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Properties every run starts from unless overridden per run.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub default_run_properties: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_run: Option<WorkflowRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<WorkflowGraph>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default_run_properties(
        mut self,
        default_run_properties: HashMap<String, String>,
    ) -> Self {
        self.default_run_properties = default_run_properties;
        self
    }

    pub fn add_default_run_properties_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(
            &mut self.default_run_properties,
            "DefaultRunProperties",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_default_run_properties_entries(mut self) -> Self {
        self.default_run_properties.clear();
        self
    }

    pub fn with_created_on(mut self, created_on: DateTime<Utc>) -> Self {
        self.created_on = Some(created_on);
        self
    }

    pub fn with_last_modified_on(mut self, last_modified_on: DateTime<Utc>) -> Self {
        self.last_modified_on = Some(last_modified_on);
        self
    }

    pub fn with_last_run(mut self, last_run: WorkflowRun) -> Self {
        self.last_run = Some(last_run);
        self
    }

    pub fn with_graph(mut self, graph: WorkflowGraph) -> Self {
        self.graph = Some(graph);
        self
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Name", self.name.as_ref())?;
        d.opt("Description", self.description.as_ref())?;
        d.map("DefaultRunProperties", &self.default_run_properties)?;
        d.opt("CreatedOn", self.created_on.as_ref())?;
        d.opt("LastModifiedOn", self.last_modified_on.as_ref())?;
        d.opt("LastRun", self.last_run.as_ref())?;
        d.opt("Graph", self.graph.as_ref())?;
        d.finish()
    }
}
