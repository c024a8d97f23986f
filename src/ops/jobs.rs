//! Job and job-run operations

use crate::models::ModelError;
use crate::models::display::FieldDisplay;
use crate::models::enums::WorkerType;
use crate::models::job::{
    ConnectionsList, ExecutionProperty, JobCommand, JobRun, NotificationProperty,
};
use crate::validation::ValidationError;
use crate::validation::constraints::{check_name, check_opt_description, check_opt_name};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Create a new job definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateJobRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_uri: Option<String>,
    /// Role assumed by the job's runs.
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_property: Option<ExecutionProperty>,
    pub command: JobCommand,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub default_arguments: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub non_overridable_arguments: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<ConnectionsList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    /// Mutually exclusive with `worker_type`/`number_of_workers`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_property: Option<NotificationProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_workers: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<WorkerType>,
}

impl CreateJobRequest {
    pub fn new(name: impl Into<String>, role: impl Into<String>, command: JobCommand) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            command,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_log_uri(mut self, log_uri: impl Into<String>) -> Self {
        self.log_uri = Some(log_uri.into());
        self
    }

    pub fn with_execution_property(mut self, execution_property: ExecutionProperty) -> Self {
        self.execution_property = Some(execution_property);
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
        crate::models::insert_unique(
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
        crate::models::insert_unique(
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

    pub fn with_security_configuration(
        mut self,
        security_configuration: impl Into<String>,
    ) -> Self {
        self.security_configuration = Some(security_configuration.into());
        self
    }

    pub fn with_tags(mut self, tags: HashMap<String, String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn add_tags_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        crate::models::insert_unique(&mut self.tags, "Tags", key.into(), value.into())?;
        Ok(self)
    }

    pub fn clear_tags_entries(mut self) -> Self {
        self.tags.clear();
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

    pub fn with_number_of_workers(mut self, number_of_workers: i32) -> Self {
        self.number_of_workers = Some(number_of_workers);
        self
    }

    pub fn with_worker_type(mut self, worker_type: WorkerType) -> Self {
        self.worker_type = Some(worker_type);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Name", &self.name)?;
        check_name("Role", &self.role)?;
        check_opt_description("Description", self.description.as_ref())?;
        if self.max_capacity.is_some()
            && (self.worker_type.is_some() || self.number_of_workers.is_some())
        {
            return Err(ValidationError::Invalid {
                field: "MaxCapacity",
                message: "max capacity cannot be combined with worker settings".to_string(),
            });
        }
        if let Some(timeout) = self.timeout
            && timeout < 1
        {
            return Err(ValidationError::Invalid {
                field: "Timeout",
                message: "timeout must be at least one minute".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for CreateJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.opt("Description", self.description.as_ref())?;
        d.opt("LogUri", self.log_uri.as_ref())?;
        d.field("Role", &self.role)?;
        d.opt("ExecutionProperty", self.execution_property.as_ref())?;
        d.field("Command", &self.command)?;
        d.map("DefaultArguments", &self.default_arguments)?;
        d.map("NonOverridableArguments", &self.non_overridable_arguments)?;
        d.opt("Connections", self.connections.as_ref())?;
        d.opt("MaxRetries", self.max_retries.as_ref())?;
        d.opt("Timeout", self.timeout.as_ref())?;
        d.opt("MaxCapacity", self.max_capacity.as_ref())?;
        d.opt(
            "SecurityConfiguration",
            self.security_configuration.as_ref(),
        )?;
        d.map("Tags", &self.tags)?;
        d.opt("NotificationProperty", self.notification_property.as_ref())?;
        d.opt("RuntimeVersion", self.runtime_version.as_ref())?;
        d.opt("NumberOfWorkers", self.number_of_workers.as_ref())?;
        d.opt("WorkerType", self.worker_type.as_ref())?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateJobResponse {
    /// Name assigned to the job definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CreateJobResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for CreateJobResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Name", self.name.as_ref())?;
        d.finish()
    }
}

/// Start a run of a job, optionally retrying a previous run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StartJobRunRequest {
    pub job_name: String,
    /// Id of the run being retried, if this is a retry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_run_id: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub arguments: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_property: Option<NotificationProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<WorkerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_workers: Option<i32>,
}

impl StartJobRunRequest {
    pub fn new(job_name: impl Into<String>) -> Self {
        Self {
            job_name: job_name.into(),
            ..Default::default()
        }
    }

    pub fn with_job_run_id(mut self, job_run_id: impl Into<String>) -> Self {
        self.job_run_id = Some(job_run_id.into());
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
        crate::models::insert_unique(&mut self.arguments, "Arguments", key.into(), value.into())?;
        Ok(self)
    }

    pub fn clear_arguments_entries(mut self) -> Self {
        self.arguments.clear();
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

    pub fn with_worker_type(mut self, worker_type: WorkerType) -> Self {
        self.worker_type = Some(worker_type);
        self
    }

    pub fn with_number_of_workers(mut self, number_of_workers: i32) -> Self {
        self.number_of_workers = Some(number_of_workers);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("JobName", &self.job_name)?;
        check_opt_name("JobRunId", self.job_run_id.as_ref())?;
        if self.max_capacity.is_some()
            && (self.worker_type.is_some() || self.number_of_workers.is_some())
        {
            return Err(ValidationError::Invalid {
                field: "MaxCapacity",
                message: "max capacity cannot be combined with worker settings".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for StartJobRunRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("JobName", &self.job_name)?;
        d.opt("JobRunId", self.job_run_id.as_ref())?;
        d.map("Arguments", &self.arguments)?;
        d.opt("Timeout", self.timeout.as_ref())?;
        d.opt("MaxCapacity", self.max_capacity.as_ref())?;
        d.opt(
            "SecurityConfiguration",
            self.security_configuration.as_ref(),
        )?;
        d.opt("NotificationProperty", self.notification_property.as_ref())?;
        d.opt("WorkerType", self.worker_type.as_ref())?;
        d.opt("NumberOfWorkers", self.number_of_workers.as_ref())?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StartJobRunResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_run_id: Option<String>,
}

impl StartJobRunResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_job_run_id(mut self, job_run_id: impl Into<String>) -> Self {
        self.job_run_id = Some(job_run_id.into());
        self
    }
}

impl fmt::Display for StartJobRunResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("JobRunId", self.job_run_id.as_ref())?;
        d.finish()
    }
}

/// Fetch one job run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetJobRunRequest {
    pub job_name: String,
    pub run_id: String,
    /// Whether predecessor runs are included in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessors_included: Option<bool>,
}

impl GetJobRunRequest {
    pub fn new(job_name: impl Into<String>, run_id: impl Into<String>) -> Self {
        Self {
            job_name: job_name.into(),
            run_id: run_id.into(),
            predecessors_included: None,
        }
    }

    pub fn with_predecessors_included(mut self, predecessors_included: bool) -> Self {
        self.predecessors_included = Some(predecessors_included);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("JobName", &self.job_name)?;
        check_name("RunId", &self.run_id)
    }
}

impl fmt::Display for GetJobRunRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("JobName", &self.job_name)?;
        d.field("RunId", &self.run_id)?;
        d.opt(
            "PredecessorsIncluded",
            self.predecessors_included.as_ref(),
        )?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetJobRunResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_run: Option<JobRun>,
}

impl GetJobRunResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_job_run(mut self, job_run: JobRun) -> Self {
        self.job_run = Some(job_run);
        self
    }
}

impl fmt::Display for GetJobRunResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("JobRun", self.job_run.as_ref())?;
        d.finish()
    }
}
