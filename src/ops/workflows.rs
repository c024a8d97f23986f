//! Workflow operations

use crate::models::ModelError;
use crate::models::display::FieldDisplay;
use crate::models::workflow::{Workflow, WorkflowRun};
use crate::validation::ValidationError;
use crate::validation::constraints::{check_name, check_opt_description, check_single_line};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Create a new, empty workflow. Triggers join it at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateWorkflowRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Properties every run starts from.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub default_run_properties: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl CreateWorkflowRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
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
        crate::models::insert_unique(
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

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Name", &self.name)?;
        check_opt_description("Description", self.description.as_ref())?;
        for (key, value) in &self.default_run_properties {
            check_single_line("DefaultRunProperties", key)?;
            check_single_line("DefaultRunProperties", value)?;
        }
        Ok(())
    }
}

impl fmt::Display for CreateWorkflowRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.opt("Description", self.description.as_ref())?;
        d.map("DefaultRunProperties", &self.default_run_properties)?;
        d.map("Tags", &self.tags)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateWorkflowResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CreateWorkflowResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for CreateWorkflowResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Name", self.name.as_ref())?;
        d.finish()
    }
}

/// Fetch a workflow, optionally with its dependency graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetWorkflowRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_graph: Option<bool>,
}

impl GetWorkflowRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            include_graph: None,
        }
    }

    pub fn with_include_graph(mut self, include_graph: bool) -> Self {
        self.include_graph = Some(include_graph);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Name", &self.name)
    }
}

impl fmt::Display for GetWorkflowRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.opt("IncludeGraph", self.include_graph.as_ref())?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetWorkflowResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<Workflow>,
}

impl GetWorkflowResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workflow(mut self, workflow: Workflow) -> Self {
        self.workflow = Some(workflow);
        self
    }
}

impl fmt::Display for GetWorkflowResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Workflow", self.workflow.as_ref())?;
        d.finish()
    }
}

/// Start a run of a workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StartWorkflowRunRequest {
    pub name: String,
}

impl StartWorkflowRunRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Name", &self.name)
    }
}

impl fmt::Display for StartWorkflowRunRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StartWorkflowRunResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

impl StartWorkflowRunResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = Some(run_id.into());
        self
    }
}

impl fmt::Display for StartWorkflowRunResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("RunId", self.run_id.as_ref())?;
        d.finish()
    }
}

/// Replace the run properties of an in-flight workflow run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PutWorkflowRunPropertiesRequest {
    pub name: String,
    pub run_id: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub run_properties: HashMap<String, String>,
}

impl PutWorkflowRunPropertiesRequest {
    pub fn new(name: impl Into<String>, run_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            run_id: run_id.into(),
            run_properties: HashMap::new(),
        }
    }

    pub fn with_run_properties(mut self, run_properties: HashMap<String, String>) -> Self {
        self.run_properties = run_properties;
        self
    }

    pub fn add_run_properties_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        crate::models::insert_unique(
            &mut self.run_properties,
            "RunProperties",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_run_properties_entries(mut self) -> Self {
        self.run_properties.clear();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Name", &self.name)?;
        check_name("RunId", &self.run_id)?;
        for (key, value) in &self.run_properties {
            check_single_line("RunProperties", key)?;
            check_single_line("RunProperties", value)?;
        }
        Ok(())
    }
}

impl fmt::Display for PutWorkflowRunPropertiesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.field("RunId", &self.run_id)?;
        d.map("RunProperties", &self.run_properties)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PutWorkflowRunPropertiesResponse {}

impl fmt::Display for PutWorkflowRunPropertiesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDisplay::new(f)?.finish()
    }
}

/// Fetch one workflow run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetWorkflowRunRequest {
    pub name: String,
    pub run_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_graph: Option<bool>,
}

impl GetWorkflowRunRequest {
    pub fn new(name: impl Into<String>, run_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            run_id: run_id.into(),
            include_graph: None,
        }
    }

    pub fn with_include_graph(mut self, include_graph: bool) -> Self {
        self.include_graph = Some(include_graph);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Name", &self.name)?;
        check_name("RunId", &self.run_id)
    }
}

impl fmt::Display for GetWorkflowRunRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.field("RunId", &self.run_id)?;
        d.opt("IncludeGraph", self.include_graph.as_ref())?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetWorkflowRunResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<WorkflowRun>,
}

impl GetWorkflowRunResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_run(mut self, run: WorkflowRun) -> Self {
        self.run = Some(run);
        self
    }
}

impl fmt::Display for GetWorkflowRunResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Run", self.run.as_ref())?;
        d.finish()
    }
}
