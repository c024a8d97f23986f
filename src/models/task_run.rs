//! ML task-run model types
//!
//! Task runs track the background work a machine-learning transform performs
//! (label import/export, labeling-set generation, match finding). Exactly one
//! of the per-type property blocks is populated, selected by `task_type`.

use super::display::FieldDisplay;
use super::enums::{TaskStatusType, TaskType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration of a label-import task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ImportLabelsTaskRunProperties {
    /// Object-store path the labels are read from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_s3_path: Option<String>,
    /// Whether existing labels are replaced rather than merged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
}

impl ImportLabelsTaskRunProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_s3_path(mut self, input_s3_path: impl Into<String>) -> Self {
        self.input_s3_path = Some(input_s3_path.into());
        self
    }

    pub fn with_replace(mut self, replace: bool) -> Self {
        self.replace = Some(replace);
        self
    }
}

impl fmt::Display for ImportLabelsTaskRunProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("InputS3Path", self.input_s3_path.as_ref())?;
        d.opt("Replace", self.replace.as_ref())?;
        d.finish()
    }
}

/// Configuration of a label-export task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ExportLabelsTaskRunProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_path: Option<String>,
}

impl ExportLabelsTaskRunProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_s3_path(mut self, output_s3_path: impl Into<String>) -> Self {
        self.output_s3_path = Some(output_s3_path.into());
        self
    }
}

impl fmt::Display for ExportLabelsTaskRunProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("OutputS3Path", self.output_s3_path.as_ref())?;
        d.finish()
    }
}

/// Configuration of a labeling-set generation task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct LabelingSetGenerationTaskRunProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_path: Option<String>,
}

impl LabelingSetGenerationTaskRunProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_s3_path(mut self, output_s3_path: impl Into<String>) -> Self {
        self.output_s3_path = Some(output_s3_path.into());
        self
    }
}

impl fmt::Display for LabelingSetGenerationTaskRunProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("OutputS3Path", self.output_s3_path.as_ref())?;
        d.finish()
    }
}

/// Job identifiers of a match-finding task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct FindMatchesTaskRunProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_run_id: Option<String>,
}

impl FindMatchesTaskRunProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_job_id(mut self, job_id: impl Into<String>) -> Self {
        self.job_id = Some(job_id.into());
        self
    }

    pub fn with_job_name(mut self, job_name: impl Into<String>) -> Self {
        self.job_name = Some(job_name.into());
        self
    }

    pub fn with_job_run_id(mut self, job_run_id: impl Into<String>) -> Self {
        self.job_run_id = Some(job_run_id.into());
        self
    }
}

impl fmt::Display for FindMatchesTaskRunProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("JobId", self.job_id.as_ref())?;
        d.opt("JobName", self.job_name.as_ref())?;
        d.opt("JobRunId", self.job_run_id.as_ref())?;
        d.finish()
    }
}

/// Type discriminator plus the matching property block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TaskRunProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<TaskType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_labels_task_run_properties: Option<ImportLabelsTaskRunProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_labels_task_run_properties: Option<ExportLabelsTaskRunProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labeling_set_generation_task_run_properties:
        Option<LabelingSetGenerationTaskRunProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub find_matches_task_run_properties: Option<FindMatchesTaskRunProperties>,
}

impl TaskRunProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_type(mut self, task_type: TaskType) -> Self {
        self.task_type = Some(task_type);
        self
    }

    pub fn with_import_labels_task_run_properties(
        mut self,
        properties: ImportLabelsTaskRunProperties,
    ) -> Self {
        self.import_labels_task_run_properties = Some(properties);
        self
    }

    pub fn with_export_labels_task_run_properties(
        mut self,
        properties: ExportLabelsTaskRunProperties,
    ) -> Self {
        self.export_labels_task_run_properties = Some(properties);
        self
    }

    pub fn with_labeling_set_generation_task_run_properties(
        mut self,
        properties: LabelingSetGenerationTaskRunProperties,
    ) -> Self {
        self.labeling_set_generation_task_run_properties = Some(properties);
        self
    }

    pub fn with_find_matches_task_run_properties(
        mut self,
        properties: FindMatchesTaskRunProperties,
    ) -> Self {
        self.find_matches_task_run_properties = Some(properties);
        self
    }
}

impl fmt::Display for TaskRunProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("TaskType", self.task_type.as_ref())?;
        d.opt(
            "ImportLabelsTaskRunProperties",
            self.import_labels_task_run_properties.as_ref(),
        )?;
        d.opt(
            "ExportLabelsTaskRunProperties",
            self.export_labels_task_run_properties.as_ref(),
        )?;
        d.opt(
            "LabelingSetGenerationTaskRunProperties",
            self.labeling_set_generation_task_run_properties.as_ref(),
        )?;
        d.opt(
            "FindMatchesTaskRunProperties",
            self.find_matches_task_run_properties.as_ref(),
        )?;
        d.finish()
    }
}

/// One background task executed for an ML transform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TaskRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatusType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<TaskRunProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<DateTime<Utc>>,
    /// Seconds the task consumed resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<i32>,
}

impl TaskRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform_id(mut self, transform_id: impl Into<String>) -> Self {
        self.transform_id = Some(transform_id.into());
        self
    }

    pub fn with_task_run_id(mut self, task_run_id: impl Into<String>) -> Self {
        self.task_run_id = Some(task_run_id.into());
        self
    }

    pub fn with_status(mut self, status: TaskStatusType) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_log_group_name(mut self, log_group_name: impl Into<String>) -> Self {
        self.log_group_name = Some(log_group_name.into());
        self
    }

    pub fn with_properties(mut self, properties: TaskRunProperties) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn with_error_string(mut self, error_string: impl Into<String>) -> Self {
        self.error_string = Some(error_string.into());
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

    pub fn with_execution_time(mut self, execution_time: i32) -> Self {
        self.execution_time = Some(execution_time);
        self
    }
}

impl fmt::Display for TaskRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("TransformId", self.transform_id.as_ref())?;
        d.opt("TaskRunId", self.task_run_id.as_ref())?;
        d.opt("Status", self.status.as_ref())?;
        d.opt("LogGroupName", self.log_group_name.as_ref())?;
        d.opt("Properties", self.properties.as_ref())?;
        d.opt("ErrorString", self.error_string.as_ref())?;
        d.opt("StartedOn", self.started_on.as_ref())?;
        d.opt("LastModifiedOn", self.last_modified_on.as_ref())?;
        d.opt("CompletedOn", self.completed_on.as_ref())?;
        d.opt("ExecutionTime", self.execution_time.as_ref())?;
        d.finish()
    }
}
