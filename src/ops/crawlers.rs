//! Crawler operations

use crate::models::ModelError;
use crate::models::crawler::{Crawler, CrawlerMetrics, CrawlerTargets, SchemaChangePolicy};
use crate::models::display::FieldDisplay;
use crate::validation::ValidationError;
use crate::validation::constraints::{check_name, check_opt_description};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Create a new crawler. It starts in the ready state; `StartCrawler` runs it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCrawlerRequest {
    pub name: String,
    /// Role the crawler assumes to reach the target stores.
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub targets: CrawlerTargets,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classifiers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_change_policy: Option<SchemaChangePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawler_security_configuration: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl CreateCrawlerRequest {
    pub fn new(name: impl Into<String>, role: impl Into<String>, targets: CrawlerTargets) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            targets,
            ..Default::default()
        }
    }

    pub fn with_database_name(mut self, database_name: impl Into<String>) -> Self {
        self.database_name = Some(database_name.into());
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

    pub fn with_classifiers(mut self, classifiers: Vec<String>) -> Self {
        self.classifiers = classifiers;
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifiers.push(classifier.into());
        self
    }

    pub fn with_table_prefix(mut self, table_prefix: impl Into<String>) -> Self {
        self.table_prefix = Some(table_prefix.into());
        self
    }

    pub fn with_schema_change_policy(mut self, schema_change_policy: SchemaChangePolicy) -> Self {
        self.schema_change_policy = Some(schema_change_policy);
        self
    }

    pub fn with_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    pub fn with_crawler_security_configuration(
        mut self,
        crawler_security_configuration: impl Into<String>,
    ) -> Self {
        self.crawler_security_configuration = Some(crawler_security_configuration.into());
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
        check_name("Role", &self.role)?;
        check_opt_description("Description", self.description.as_ref())?;
        if self.targets.is_empty() {
            return Err(ValidationError::Invalid {
                field: "Targets",
                message: "a crawler needs at least one target".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for CreateCrawlerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.field("Role", &self.role)?;
        d.opt("DatabaseName", self.database_name.as_ref())?;
        d.opt("Description", self.description.as_ref())?;
        d.field("Targets", &self.targets)?;
        d.opt("Schedule", self.schedule.as_ref())?;
        d.list("Classifiers", &self.classifiers)?;
        d.opt("TablePrefix", self.table_prefix.as_ref())?;
        d.opt("SchemaChangePolicy", self.schema_change_policy.as_ref())?;
        d.opt("Configuration", self.configuration.as_ref())?;
        d.opt(
            "CrawlerSecurityConfiguration",
            self.crawler_security_configuration.as_ref(),
        )?;
        d.map("Tags", &self.tags)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCrawlerResponse {}

impl fmt::Display for CreateCrawlerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDisplay::new(f)?.finish()
    }
}

/// Fetch one crawler by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetCrawlerRequest {
    pub name: String,
}

impl GetCrawlerRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Name", &self.name)
    }
}

impl fmt::Display for GetCrawlerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetCrawlerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawler: Option<Crawler>,
}

impl GetCrawlerResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_crawler(mut self, crawler: Crawler) -> Self {
        self.crawler = Some(crawler);
        self
    }
}

impl fmt::Display for GetCrawlerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Crawler", self.crawler.as_ref())?;
        d.finish()
    }
}

/// Fetch run metrics for some or all crawlers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetCrawlerMetricsRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crawler_name_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl GetCrawlerMetricsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_crawler_name_list(mut self, crawler_name_list: Vec<String>) -> Self {
        self.crawler_name_list = crawler_name_list;
        self
    }

    pub fn with_crawler_name(mut self, crawler_name: impl Into<String>) -> Self {
        self.crawler_name_list.push(crawler_name.into());
        self
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for name in &self.crawler_name_list {
            check_name("CrawlerNameList", name)?;
        }
        Ok(())
    }
}

impl fmt::Display for GetCrawlerMetricsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.list("CrawlerNameList", &self.crawler_name_list)?;
        d.opt("MaxResults", self.max_results.as_ref())?;
        d.opt("NextToken", self.next_token.as_ref())?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetCrawlerMetricsResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crawler_metrics_list: Vec<CrawlerMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl GetCrawlerMetricsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_crawler_metrics_list(mut self, crawler_metrics_list: Vec<CrawlerMetrics>) -> Self {
        self.crawler_metrics_list = crawler_metrics_list;
        self
    }

    pub fn with_crawler_metrics(mut self, crawler_metrics: CrawlerMetrics) -> Self {
        self.crawler_metrics_list.push(crawler_metrics);
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl fmt::Display for GetCrawlerMetricsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.list("CrawlerMetricsList", &self.crawler_metrics_list)?;
        d.opt("NextToken", self.next_token.as_ref())?;
        d.finish()
    }
}

/// Start a crawl, unless one is already running for this crawler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StartCrawlerRequest {
    pub name: String,
}

impl StartCrawlerRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Name", &self.name)
    }
}

impl fmt::Display for StartCrawlerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StartCrawlerResponse {}

impl fmt::Display for StartCrawlerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDisplay::new(f)?.finish()
    }
}
