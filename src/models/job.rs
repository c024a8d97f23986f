//! Job and job-run model types
//!
//! A job is a stored ETL script definition plus its execution settings; a
//! job run is one attempt at executing it. Capacity can be expressed either
//! as a raw processing-unit count (`max_capacity`) or as a worker type plus
//! worker count, never both.

use super::ModelError;
use super::display::FieldDisplay;
use super::enums::{JobRunState, WorkerType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Script entry point executed by a job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct JobCommand {
    /// `batchetl` for a batch ETL script, `pythonshell` for a plain script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_version: Option<String>,
}

impl JobCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_script_location(mut self, script_location: impl Into<String>) -> Self {
        self.script_location = Some(script_location.into());
        self
    }

    pub fn with_python_version(mut self, python_version: impl Into<String>) -> Self {
        self.python_version = Some(python_version.into());
        self
    }
}

impl fmt::Display for JobCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Name", self.name.as_ref())?;
        d.opt("ScriptLocation", self.script_location.as_ref())?;
        d.opt("PythonVersion", self.python_version.as_ref())?;
        d.finish()
    }
}

/// Concurrency bound for a job's runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ExecutionProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_runs: Option<i32>,
}

impl ExecutionProperty {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_concurrent_runs(mut self, max_concurrent_runs: i32) -> Self {
        self.max_concurrent_runs = Some(max_concurrent_runs);
        self
    }
}

impl fmt::Display for ExecutionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("MaxConcurrentRuns", self.max_concurrent_runs.as_ref())?;
        d.finish()
    }
}

/// Delay before a run-delay notification fires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationProperty {
    /// Minutes after a run starts before the notification is sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_delay_after: Option<i32>,
}

impl NotificationProperty {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notify_delay_after(mut self, notify_delay_after: i32) -> Self {
        self.notify_delay_after = Some(notify_delay_after);
        self
    }
}

impl fmt::Display for NotificationProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("NotifyDelayAfter", self.notify_delay_after.as_ref())?;
        d.finish()
    }
}

/// Connection names a job uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionsList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<String>,
}

impl ConnectionsList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connections(mut self, connections: Vec<String>) -> Self {
        self.connections = connections;
        self
    }

    pub fn with_connection(mut self, connection: impl Into<String>) -> Self {
        self.connections.push(connection.into());
        self
    }
}

impl fmt::Display for ConnectionsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.list("Connections", &self.connections)?;
        d.finish()
    }
}

/// A stored job definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Job {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reserved; the service does not use it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_uri: Option<String>,
    /// Role assumed by the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_property: Option<ExecutionProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<JobCommand>,
    /// Arguments the script receives unless the run overrides them.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub default_arguments: HashMap<String, String>,
    /// Arguments a run may not override.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub non_overridable_arguments: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<ConnectionsList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<i32>,
    /// Minutes a run may execute before being force-stopped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    /// Processing units allocated to a run. Mutually exclusive with
    /// `worker_type`/`number_of_workers`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<WorkerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_workers: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_property: Option<NotificationProperty>,
    /// Runtime environment version the job executes under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,
}

impl Job {
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

    pub fn with_log_uri(mut self, log_uri: impl Into<String>) -> Self {
        self.log_uri = Some(log_uri.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
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

    pub fn with_execution_property(mut self, execution_property: ExecutionProperty) -> Self {
        self.execution_property = Some(execution_property);
        self
    }

    pub fn with_command(mut self, command: JobCommand) -> Self {
        self.command = Some(command);
        self
    }

    pub fn with_default_arguments(mut self, default_arguments: HashMap<String, String>) -> Self {
        self.default_arguments = default_arguments;
        self
    }

    pub fn add_default_arguments_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(
            &mut self.default_arguments,
            "DefaultArguments",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_default_arguments_entries(mut self) -> Self {
        self.default_arguments.clear();
        self
    }

    pub fn with_non_overridable_arguments(
        mut self,
        non_overridable_arguments: HashMap<String, String>,
    ) -> Self {
        self.non_overridable_arguments = non_overridable_arguments;
        self
    }

    pub fn add_non_overridable_arguments_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(
            &mut self.non_overridable_arguments,
            "NonOverridableArguments",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_non_overridable_arguments_entries(mut self) -> Self {
        self.non_overridable_arguments.clear();
        self
    }

    pub fn with_connections(mut self, connections: ConnectionsList) -> Self {
        self.connections = Some(connections);
        self
    }

    pub fn with_max_retries(mut self, max_retries: i32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    pub fn with_timeout(mut self, timeout: i32) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_capacity(mut self, max_capacity: f64) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    pub fn with_worker_type(mut self, worker_type: WorkerType) -> Self {
        self.worker_type = Some(worker_type);
        self
    }

    pub fn with_number_of_workers(mut self, number_of_workers: i32) -> Self {
        self.number_of_workers = Some(number_of_workers);
        self
    }

    pub fn with_security_configuration(
        mut self,
        security_configuration: impl Into<String>,
    ) -> Self {
        self.security_configuration = Some(security_configuration.into());
        self
    }

    pub fn with_notification_property(
        mut self,
        notification_property: NotificationProperty,
    ) -> Self {
        self.notification_property = Some(notification_property);
        self
    }

    pub fn with_runtime_version(mut self, runtime_version: impl Into<String>) -> Self {
        self.runtime_version = Some(runtime_version.into());
        self
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Name", self.name.as_ref())?;
        d.opt("Description", self.description.as_ref())?;
        d.opt("LogUri", self.log_uri.as_ref())?;
        d.opt("Role", self.role.as_ref())?;
        d.opt("CreatedOn", self.created_on.as_ref())?;
        d.opt("LastModifiedOn", self.last_modified_on.as_ref())?;
        d.opt("ExecutionProperty", self.execution_property.as_ref())?;
        d.opt("Command", self.command.as_ref())?;
        d.map("DefaultArguments", &self.default_arguments)?;
        d.map("NonOverridableArguments", &self.non_overridable_arguments)?;
        d.opt("Connections", self.connections.as_ref())?;
        d.opt("MaxRetries", self.max_retries.as_ref())?;
        d.opt("Timeout", self.timeout.as_ref())?;
        d.opt("MaxCapacity", self.max_capacity.as_ref())?;
        d.opt("WorkerType", self.worker_type.as_ref())?;
        d.opt("NumberOfWorkers", self.number_of_workers.as_ref())?;
        d.opt(
            "SecurityConfiguration",
            self.security_configuration.as_ref(),
        )?;
        d.opt("NotificationProperty", self.notification_property.as_ref())?;
        d.opt("RuntimeVersion", self.runtime_version.as_ref())?;
        d.finish()
    }
}

/// Run that had to finish before the current one started.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Predecessor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

impl Predecessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_job_name(mut self, job_name: impl Into<String>) -> Self {
        self.job_name = Some(job_name.into());
        self
    }

    pub fn with_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = Some(run_id.into());
        self
    }
}

impl fmt::Display for Predecessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("JobName", self.job_name.as_ref())?;
        d.opt("RunId", self.run_id.as_ref())?;
        d.finish()
    }
}

/// One execution of a job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct JobRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Retry attempt number, zero for the first run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_run_state: Option<JobRunState>,
    /// Arguments for this run, replacing the job's defaults.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub arguments: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub predecessor_runs: Vec<Predecessor>,
    /// Seconds the run consumed resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<WorkerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_workers: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_property: Option<NotificationProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,
}

impl JobRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_attempt(mut self, attempt: i32) -> Self {
        self.attempt = Some(attempt);
        self
    }

    pub fn with_previous_run_id(mut self, previous_run_id: impl Into<String>) -> Self {
        self.previous_run_id = Some(previous_run_id.into());
        self
    }

    pub fn with_trigger_name(mut self, trigger_name: impl Into<String>) -> Self {
        self.trigger_name = Some(trigger_name.into());
        self
    }

    pub fn with_job_name(mut self, job_name: impl Into<String>) -> Self {
        self.job_name = Some(job_name.into());
        self
    }

    pub fn with_started_on(mut self, started_on: DateTime<Utc>) -> Self {
        self.started_on = Some(started_on);
        self
    }

    pub fn with_last_modified_on(mut self, last_modified_on: DateTime<Utc>) -> Self {
        self.last_modified_on = Some(last_modified_on);
        self
    }

    pub fn with_completed_on(mut self, completed_on: DateTime<Utc>) -> Self {
        self.completed_on = Some(completed_on);
        self
    }

    pub fn with_job_run_state(mut self, job_run_state: JobRunState) -> Self {
        self.job_run_state = Some(job_run_state);
        self
    }

    pub fn with_arguments(mut self, arguments: HashMap<String, String>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn add_arguments_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(&mut self.arguments, "Arguments", key.into(), value.into())?;
        Ok(self)
    }

    pub fn clear_arguments_entries(mut self) -> Self {
        self.arguments.clear();
        self
    }

    pub fn with_error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = Some(error_message.into());
        self
    }

    pub fn with_predecessor_runs(mut self, predecessor_runs: Vec<Predecessor>) -> Self {
        self.predecessor_runs = predecessor_runs;
        self
    }

    pub fn with_predecessor_run(mut self, predecessor_run: Predecessor) -> Self {
        self.predecessor_runs.push(predecessor_run);
        self
    }

    pub fn with_execution_time(mut self, execution_time: i32) -> Self {
        self.execution_time = Some(execution_time);
        self
    }

    pub fn with_timeout(mut self, timeout: i32) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_capacity(mut self, max_capacity: f64) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    pub fn with_worker_type(mut self, worker_type: WorkerType) -> Self {
        self.worker_type = Some(worker_type);
        self
    }

    pub fn with_number_of_workers(mut self, number_of_workers: i32) -> Self {
        self.number_of_workers = Some(number_of_workers);
        self
    }

    pub fn with_security_configuration(
        mut self,
        security_configuration: impl Into<String>,
    ) -> Self {
        self.security_configuration = Some(security_configuration.into());
        self
    }

    pub fn with_log_group_name(mut self, log_group_name: impl Into<String>) -> Self {
        self.log_group_name = Some(log_group_name.into());
        self
    }

    pub fn with_notification_property(
        mut self,
        notification_property: NotificationProperty,
    ) -> Self {
        self.notification_property = Some(notification_property);
        self
    }

    pub fn with_runtime_version(mut self, runtime_version: impl Into<String>) -> Self {
        self.runtime_version = Some(runtime_version.into());
        self
    }
}

impl fmt::Display for JobRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Id", self.id.as_ref())?;
        d.opt("Attempt", self.attempt.as_ref())?;
        d.opt("PreviousRunId", self.previous_run_id.as_ref())?;
        d.opt("TriggerName", self.trigger_name.as_ref())?;
        d.opt("JobName", self.job_name.as_ref())?;
        d.opt("StartedOn", self.started_on.as_ref())?;
        d.opt("LastModifiedOn", self.last_modified_on.as_ref())?;
        d.opt("CompletedOn", self.completed_on.as_ref())?;
        d.opt("JobRunState", self.job_run_state.as_ref())?;
        d.map("Arguments", &self.arguments)?;
        d.opt("ErrorMessage", self.error_message.as_ref())?;
        d.list("PredecessorRuns", &self.predecessor_runs)?;
        d.opt("ExecutionTime", self.execution_time.as_ref())?;
        d.opt("Timeout", self.timeout.as_ref())?;
        d.opt("MaxCapacity", self.max_capacity.as_ref())?;
        d.opt("WorkerType", self.worker_type.as_ref())?;
        d.opt("NumberOfWorkers", self.number_of_workers.as_ref())?;
        d.opt(
            "SecurityConfiguration",
            self.security_configuration.as_ref(),
        )?;
        d.opt("LogGroupName", self.log_group_name.as_ref())?;
        d.opt("NotificationProperty", self.notification_property.as_ref())?;
        d.opt("RuntimeVersion", self.runtime_version.as_ref())?;
        d.finish()
    }
}
