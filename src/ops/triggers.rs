//! Trigger operations
//!
//! Creation enforces the type-specific requirements: a scheduled trigger
//! needs a schedule, a conditional trigger needs a predicate with at least
//! one valid condition, and an on-demand trigger carries neither.

use crate::models::ModelError;
use crate::models::display::FieldDisplay;
use crate::models::enums::TriggerType;
use crate::models::trigger::{Action, Predicate, Trigger, TriggerUpdate};
use crate::validation::ValidationError;
use crate::validation::constraints::{check_name, check_opt_description, check_opt_name};
use crate::validation::rules::validate_predicate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Create a new trigger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTriggerRequest {
    pub name: String,
    /// Workflow the trigger joins, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_name: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<TriggerType>,
    /// Required for scheduled triggers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// Required for conditional triggers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicate: Option<Predicate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Activate immediately. Not supported for on-demand triggers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_on_creation: Option<bool>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl CreateTriggerRequest {
    pub fn new(name: impl Into<String>, trigger_type: TriggerType) -> Self {
        Self {
            name: name.into(),
            trigger_type: Some(trigger_type),
            ..Default::default()
        }
    }

    pub fn with_workflow_name(mut self, workflow_name: impl Into<String>) -> Self {
        self.workflow_name = Some(workflow_name.into());
        self
    }

    pub fn with_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_start_on_creation(mut self, start_on_creation: bool) -> Self {
        self.start_on_creation = Some(start_on_creation);
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
        check_opt_name("WorkflowName", self.workflow_name.as_ref())?;
        check_opt_description("Description", self.description.as_ref())?;
        if self.actions.is_empty() {
            return Err(ValidationError::Invalid {
                field: "Actions",
                message: "a trigger needs at least one action".to_string(),
            });
        }
        match self.trigger_type {
            Some(TriggerType::Scheduled) => {
                if self.schedule.is_none() {
                    return Err(ValidationError::Invalid {
                        field: "Schedule",
                        message: "a scheduled trigger needs a schedule".to_string(),
                    });
                }
            }
            Some(TriggerType::Conditional) => match &self.predicate {
                Some(predicate) => validate_predicate(predicate)?,
                None => {
                    return Err(ValidationError::Invalid {
                        field: "Predicate",
                        message: "a conditional trigger needs a predicate".to_string(),
                    });
                }
            },
            Some(TriggerType::OnDemand) => {
                if self.start_on_creation == Some(true) {
                    return Err(ValidationError::Invalid {
                        field: "StartOnCreation",
                        message: "an on-demand trigger cannot start on creation".to_string(),
                    });
                }
            }
            Some(TriggerType::Other(_)) | None => {
                return Err(ValidationError::Invalid {
                    field: "Type",
                    message: "a known trigger type is required".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for CreateTriggerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.opt("WorkflowName", self.workflow_name.as_ref())?;
        d.opt("Type", self.trigger_type.as_ref())?;
        d.opt("Schedule", self.schedule.as_ref())?;
        d.opt("Predicate", self.predicate.as_ref())?;
        d.list("Actions", &self.actions)?;
        d.opt("Description", self.description.as_ref())?;
        d.opt("StartOnCreation", self.start_on_creation.as_ref())?;
        d.map("Tags", &self.tags)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTriggerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CreateTriggerResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for CreateTriggerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Name", self.name.as_ref())?;
        d.finish()
    }
}

/// Fetch one trigger by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetTriggerRequest {
    pub name: String,
}

impl GetTriggerRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Name", &self.name)
    }
}

impl fmt::Display for GetTriggerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetTriggerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,
}

impl GetTriggerResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }
}

impl fmt::Display for GetTriggerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Trigger", self.trigger.as_ref())?;
        d.finish()
    }
}

/// Activate an existing trigger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StartTriggerRequest {
    pub name: String,
}

impl StartTriggerRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Name", &self.name)
    }
}

impl fmt::Display for StartTriggerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StartTriggerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl StartTriggerResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for StartTriggerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Name", self.name.as_ref())?;
        d.finish()
    }
}

/// Replace the mutable parts of a trigger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTriggerRequest {
    pub name: String,
    pub trigger_update: TriggerUpdate,
}

impl UpdateTriggerRequest {
    pub fn new(name: impl Into<String>, trigger_update: TriggerUpdate) -> Self {
        Self {
            name: name.into(),
            trigger_update,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Name", &self.name)?;
        if let Some(predicate) = &self.trigger_update.predicate {
            validate_predicate(predicate)?;
        }
        Ok(())
    }
}

impl fmt::Display for UpdateTriggerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.field("TriggerUpdate", &self.trigger_update)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTriggerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,
}

impl UpdateTriggerResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }
}

impl fmt::Display for UpdateTriggerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Trigger", self.trigger.as_ref())?;
        d.finish()
    }
}
