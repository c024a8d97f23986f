//! Trigger model types
//!
//! Triggers start jobs and crawls, either on a schedule, on demand, or when
//! a predicate over other jobs/crawls becomes true. A condition watches
//! exactly one job or one crawler, never both at once.

use super::ModelError;
use super::display::FieldDisplay;
use super::enums::{CrawlState, JobRunState, Logical, LogicalOperator, TriggerState, TriggerType};
use super::job::NotificationProperty;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One watched job or crawler state inside a predicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Condition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_operator: Option<LogicalOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// Job-run state the condition waits for. Only with `job_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<JobRunState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawler_name: Option<String>,
    /// Crawl state the condition waits for. Only with `crawler_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_state: Option<CrawlState>,
}

impl Condition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logical_operator(mut self, logical_operator: LogicalOperator) -> Self {
        self.logical_operator = Some(logical_operator);
        self
    }

    pub fn with_job_name(mut self, job_name: impl Into<String>) -> Self {
        self.job_name = Some(job_name.into());
        self
    }

    pub fn with_state(mut self, state: JobRunState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_crawler_name(mut self, crawler_name: impl Into<String>) -> Self {
        self.crawler_name = Some(crawler_name.into());
        self
    }

    pub fn with_crawl_state(mut self, crawl_state: CrawlState) -> Self {
        self.crawl_state = Some(crawl_state);
        self
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("LogicalOperator", self.logical_operator.as_ref())?;
        d.opt("JobName", self.job_name.as_ref())?;
        d.opt("State", self.state.as_ref())?;
        d.opt("CrawlerName", self.crawler_name.as_ref())?;
        d.opt("CrawlState", self.crawl_state.as_ref())?;
        d.finish()
    }
}

/// Condition set that fires a conditional trigger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Predicate {
    /// `AND` waits for all conditions, `ANY` for the first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical: Option<Logical>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logical(mut self, logical: Logical) -> Self {
        self.logical = Some(logical);
        self
    }

    pub fn with_conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Logical", self.logical.as_ref())?;
        d.list("Conditions", &self.conditions)?;
        d.finish()
    }
}

/// Work started when a trigger fires: one job run or one crawl.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Action {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub arguments: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_property: Option<NotificationProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawler_name: Option<String>,
}

impl Action {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_job_name(mut self, job_name: impl Into<String>) -> Self {
        self.job_name = Some(job_name.into());
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

    pub fn with_timeout(mut self, timeout: i32) -> Self {
        self.timeout = Some(timeout);
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

    pub fn with_crawler_name(mut self, crawler_name: impl Into<String>) -> Self {
        self.crawler_name = Some(crawler_name.into());
        self
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("JobName", self.job_name.as_ref())?;
        d.map("Arguments", &self.arguments)?;
        d.opt("Timeout", self.timeout.as_ref())?;
        d.opt(
            "SecurityConfiguration",
            self.security_configuration.as_ref(),
        )?;
        d.opt("NotificationProperty", self.notification_property.as_ref())?;
        d.opt("CrawlerName", self.crawler_name.as_ref())?;
        d.finish()
    }
}

/// A trigger definition plus its current state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Trigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Workflow this trigger belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<TriggerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TriggerState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Cron expression for scheduled triggers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
    /// Required for conditional triggers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicate: Option<Predicate>,
}

impl Trigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_workflow_name(mut self, workflow_name: impl Into<String>) -> Self {
        self.workflow_name = Some(workflow_name.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_trigger_type(mut self, trigger_type: TriggerType) -> Self {
        self.trigger_type = Some(trigger_type);
        self
    }

    pub fn with_state(mut self, state: TriggerState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
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

    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Name", self.name.as_ref())?;
        d.opt("WorkflowName", self.workflow_name.as_ref())?;
        d.opt("Id", self.id.as_ref())?;
        d.opt("Type", self.trigger_type.as_ref())?;
        d.opt("State", self.state.as_ref())?;
        d.opt("Description", self.description.as_ref())?;
        d.opt("Schedule", self.schedule.as_ref())?;
        d.list("Actions", &self.actions)?;
        d.opt("Predicate", self.predicate.as_ref())?;
        d.finish()
    }
}

/// Mutable subset of a trigger used by update operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TriggerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicate: Option<Predicate>,
}

impl TriggerUpdate {
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

    pub fn with_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
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

    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }
}

impl fmt::Display for TriggerUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Name", self.name.as_ref())?;
        d.opt("Description", self.description.as_ref())?;
        d.opt("Schedule", self.schedule.as_ref())?;
        d.list("Actions", &self.actions)?;
        d.opt("Predicate", self.predicate.as_ref())?;
        d.finish()
    }
}
