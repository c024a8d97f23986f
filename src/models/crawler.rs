//! Crawler model types
//!
//! A crawler scans configured data stores and writes the schemas it finds
//! into the catalog. Only the configuration and status shapes are modeled
//! here; the crawl engine itself lives behind the service API.

use super::display::FieldDisplay;
use super::enums::{
    CrawlState, CrawlerState, DeleteBehavior, LastCrawlStatus, ScheduleState, UpdateBehavior,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Object-store path target for a crawl.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct S3Target {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Glob patterns excluded from the crawl.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<String>,
}

impl S3Target {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_exclusion(mut self, exclusion: impl Into<String>) -> Self {
        self.exclusions.push(exclusion.into());
        self
    }
}

impl fmt::Display for S3Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Path", self.path.as_ref())?;
        d.list("Exclusions", &self.exclusions)?;
        d.finish()
    }
}

/// JDBC data-store target for a crawl, reached through a named connection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct JdbcTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<String>,
}

impl JdbcTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connection_name(mut self, connection_name: impl Into<String>) -> Self {
        self.connection_name = Some(connection_name.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_exclusion(mut self, exclusion: impl Into<String>) -> Self {
        self.exclusions.push(exclusion.into());
        self
    }
}

impl fmt::Display for JdbcTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("ConnectionName", self.connection_name.as_ref())?;
        d.opt("Path", self.path.as_ref())?;
        d.list("Exclusions", &self.exclusions)?;
        d.finish()
    }
}

/// Key-value store table target for a crawl.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DynamoDbTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl DynamoDbTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for DynamoDbTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Path", self.path.as_ref())?;
        d.finish()
    }
}

/// Existing catalog tables re-crawled in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogTarget {
    pub database_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<String>,
}

impl CatalogTarget {
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            ..Default::default()
        }
    }

    pub fn with_tables(mut self, tables: Vec<String>) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.tables.push(table.into());
        self
    }
}

impl fmt::Display for CatalogTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("DatabaseName", &self.database_name)?;
        d.list("Tables", &self.tables)?;
        d.finish()
    }
}

/// All data stores a crawler visits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CrawlerTargets {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub s3_targets: Vec<S3Target>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jdbc_targets: Vec<JdbcTarget>,
    #[serde(
        rename = "DynamoDBTargets",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dynamo_db_targets: Vec<DynamoDbTarget>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub catalog_targets: Vec<CatalogTarget>,
}

impl CrawlerTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_s3_targets(mut self, s3_targets: Vec<S3Target>) -> Self {
        self.s3_targets = s3_targets;
        self
    }

    pub fn with_s3_target(mut self, s3_target: S3Target) -> Self {
        self.s3_targets.push(s3_target);
        self
    }

    pub fn with_jdbc_targets(mut self, jdbc_targets: Vec<JdbcTarget>) -> Self {
        self.jdbc_targets = jdbc_targets;
        self
    }

    pub fn with_jdbc_target(mut self, jdbc_target: JdbcTarget) -> Self {
        self.jdbc_targets.push(jdbc_target);
        self
    }

    pub fn with_dynamo_db_targets(mut self, dynamo_db_targets: Vec<DynamoDbTarget>) -> Self {
        self.dynamo_db_targets = dynamo_db_targets;
        self
    }

    pub fn with_dynamo_db_target(mut self, dynamo_db_target: DynamoDbTarget) -> Self {
        self.dynamo_db_targets.push(dynamo_db_target);
        self
    }

    pub fn with_catalog_targets(mut self, catalog_targets: Vec<CatalogTarget>) -> Self {
        self.catalog_targets = catalog_targets;
        self
    }

    pub fn with_catalog_target(mut self, catalog_target: CatalogTarget) -> Self {
        self.catalog_targets.push(catalog_target);
        self
    }

    /// True when no target of any kind is configured.
    pub fn is_empty(&self) -> bool {
        self.s3_targets.is_empty()
            && self.jdbc_targets.is_empty()
            && self.dynamo_db_targets.is_empty()
            && self.catalog_targets.is_empty()
    }
}

impl fmt::Display for CrawlerTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.list("S3Targets", &self.s3_targets)?;
        d.list("JdbcTargets", &self.jdbc_targets)?;
        d.list("DynamoDBTargets", &self.dynamo_db_targets)?;
        d.list("CatalogTargets", &self.catalog_targets)?;
        d.finish()
    }
}

/// Cron-based schedule attached to a crawler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Schedule {
    /// Cron expression, e.g. `cron(15 12 * * ? *)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ScheduleState>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedule_expression(mut self, schedule_expression: impl Into<String>) -> Self {
        self.schedule_expression = Some(schedule_expression.into());
        self
    }

    pub fn with_state(mut self, state: ScheduleState) -> Self {
        self.state = Some(state);
        self
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("ScheduleExpression", self.schedule_expression.as_ref())?;
        d.opt("State", self.state.as_ref())?;
        d.finish()
    }
}

/// What the crawler does when stored schemas diverge from what it finds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaChangePolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_behavior: Option<UpdateBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_behavior: Option<DeleteBehavior>,
}

impl SchemaChangePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_update_behavior(mut self, update_behavior: UpdateBehavior) -> Self {
        self.update_behavior = Some(update_behavior);
        self
    }

    pub fn with_delete_behavior(mut self, delete_behavior: DeleteBehavior) -> Self {
        self.delete_behavior = Some(delete_behavior);
        self
    }
}

impl fmt::Display for SchemaChangePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("UpdateBehavior", self.update_behavior.as_ref())?;
        d.opt("DeleteBehavior", self.delete_behavior.as_ref())?;
        d.finish()
    }
}

/// Status of a crawler's most recent completed crawl.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct LastCrawlInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LastCrawlStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
}

impl LastCrawlInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: LastCrawlStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = Some(error_message.into());
        self
    }

    pub fn with_log_group(mut self, log_group: impl Into<String>) -> Self {
        self.log_group = Some(log_group.into());
        self
    }

    pub fn with_log_stream(mut self, log_stream: impl Into<String>) -> Self {
        self.log_stream = Some(log_stream.into());
        self
    }

    pub fn with_message_prefix(mut self, message_prefix: impl Into<String>) -> Self {
        self.message_prefix = Some(message_prefix.into());
        self
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }
}

impl fmt::Display for LastCrawlInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Status", self.status.as_ref())?;
        d.opt("ErrorMessage", self.error_message.as_ref())?;
        d.opt("LogGroup", self.log_group.as_ref())?;
        d.opt("LogStream", self.log_stream.as_ref())?;
        d.opt("MessagePrefix", self.message_prefix.as_ref())?;
        d.opt("StartTime", self.start_time.as_ref())?;
        d.finish()
    }
}

/// A crawler definition plus its current status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Crawler {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Role the crawler assumes to reach the target data stores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<CrawlerTargets>,
    /// Database the crawl results are written into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Classifier names applied in order before the built-in ones.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classifiers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_change_policy: Option<SchemaChangePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CrawlerState>,
    /// Prefix added to the names of tables the crawler creates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    /// Milliseconds the crawler has been running, if a crawl is in flight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_elapsed_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_crawl: Option<LastCrawlInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// JSON configuration overriding default crawl behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawler_security_configuration: Option<String>,
}

impl Crawler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_targets(mut self, targets: CrawlerTargets) -> Self {
        self.targets = Some(targets);
        self
    }

    pub fn with_database_name(mut self, database_name: impl Into<String>) -> Self {
        self.database_name = Some(database_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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

    pub fn with_schema_change_policy(mut self, schema_change_policy: SchemaChangePolicy) -> Self {
        self.schema_change_policy = Some(schema_change_policy);
        self
    }

    pub fn with_state(mut self, state: CrawlerState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_table_prefix(mut self, table_prefix: impl Into<String>) -> Self {
        self.table_prefix = Some(table_prefix.into());
        self
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    pub fn with_crawl_elapsed_time(mut self, crawl_elapsed_time: i64) -> Self {
        self.crawl_elapsed_time = Some(crawl_elapsed_time);
        self
    }

    pub fn with_creation_time(mut self, creation_time: DateTime<Utc>) -> Self {
        self.creation_time = Some(creation_time);
        self
    }

    pub fn with_last_updated(mut self, last_updated: DateTime<Utc>) -> Self {
        self.last_updated = Some(last_updated);
        self
    }

    pub fn with_last_crawl(mut self, last_crawl: LastCrawlInfo) -> Self {
        self.last_crawl = Some(last_crawl);
        self
    }

    pub fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
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
}

impl fmt::Display for Crawler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Name", self.name.as_ref())?;
        d.opt("Role", self.role.as_ref())?;
        d.opt("Targets", self.targets.as_ref())?;
        d.opt("DatabaseName", self.database_name.as_ref())?;
        d.opt("Description", self.description.as_ref())?;
        d.list("Classifiers", &self.classifiers)?;
        d.opt("SchemaChangePolicy", self.schema_change_policy.as_ref())?;
        d.opt("State", self.state.as_ref())?;
        d.opt("TablePrefix", self.table_prefix.as_ref())?;
        d.opt("Schedule", self.schedule.as_ref())?;
        d.opt("CrawlElapsedTime", self.crawl_elapsed_time.as_ref())?;
        d.opt("CreationTime", self.creation_time.as_ref())?;
        d.opt("LastUpdated", self.last_updated.as_ref())?;
        d.opt("LastCrawl", self.last_crawl.as_ref())?;
        d.opt("Version", self.version.as_ref())?;
        d.opt("Configuration", self.configuration.as_ref())?;
        d.opt(
            "CrawlerSecurityConfiguration",
            self.crawler_security_configuration.as_ref(),
        )?;
        d.finish()
    }
}

/// Run metrics for one crawler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CrawlerMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawler_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_left_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub still_estimating: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_runtime_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_runtime_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables_created: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables_updated: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables_deleted: Option<i32>,
}

impl CrawlerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_crawler_name(mut self, crawler_name: impl Into<String>) -> Self {
        self.crawler_name = Some(crawler_name.into());
        self
    }

    pub fn with_time_left_seconds(mut self, time_left_seconds: f64) -> Self {
        self.time_left_seconds = Some(time_left_seconds);
        self
    }

    pub fn with_still_estimating(mut self, still_estimating: bool) -> Self {
        self.still_estimating = Some(still_estimating);
        self
    }

    pub fn with_last_runtime_seconds(mut self, last_runtime_seconds: f64) -> Self {
        self.last_runtime_seconds = Some(last_runtime_seconds);
        self
    }

    pub fn with_median_runtime_seconds(mut self, median_runtime_seconds: f64) -> Self {
        self.median_runtime_seconds = Some(median_runtime_seconds);
        self
    }

    pub fn with_tables_created(mut self, tables_created: i32) -> Self {
        self.tables_created = Some(tables_created);
        self
    }

    pub fn with_tables_updated(mut self, tables_updated: i32) -> Self {
        self.tables_updated = Some(tables_updated);
        self
    }

    pub fn with_tables_deleted(mut self, tables_deleted: i32) -> Self {
        self.tables_deleted = Some(tables_deleted);
        self
    }
}

impl fmt::Display for CrawlerMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("CrawlerName", self.crawler_name.as_ref())?;
        d.opt("TimeLeftSeconds", self.time_left_seconds.as_ref())?;
        d.opt("StillEstimating", self.still_estimating.as_ref())?;
        d.opt("LastRuntimeSeconds", self.last_runtime_seconds.as_ref())?;
        d.opt(
            "MedianRuntimeSeconds",
            self.median_runtime_seconds.as_ref(),
        )?;
        d.opt("TablesCreated", self.tables_created.as_ref())?;
        d.opt("TablesUpdated", self.tables_updated.as_ref())?;
        d.opt("TablesDeleted", self.tables_deleted.as_ref())?;
        d.finish()
    }
}

/// One crawl executed as part of a workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Crawl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CrawlState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream: Option<String>,
}

impl Crawl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, state: CrawlState) -> Self {
        self.state = Some(state);
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

    pub fn with_error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = Some(error_message.into());
        self
    }

    pub fn with_log_group(mut self, log_group: impl Into<String>) -> Self {
        self.log_group = Some(log_group.into());
        self
    }

    pub fn with_log_stream(mut self, log_stream: impl Into<String>) -> Self {
        self.log_stream = Some(log_stream.into());
        self
    }
}

impl fmt::Display for Crawl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("State", self.state.as_ref())?;
        d.opt("StartedOn", self.started_on.as_ref())?;
        d.opt("CompletedOn", self.completed_on.as_ref())?;
        d.opt("ErrorMessage", self.error_message.as_ref())?;
        d.opt("LogGroup", self.log_group.as_ref())?;
        d.opt("LogStream", self.log_stream.as_ref())?;
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_is_empty() {
        let targets = CrawlerTargets::new();
        assert!(targets.is_empty());
        let targets = targets.with_s3_target(S3Target::new().with_path("s3://bucket/raw/"));
        assert!(!targets.is_empty());
    }

    #[test]
    fn test_dynamo_db_wire_name() {
        let targets =
            CrawlerTargets::new().with_dynamo_db_target(DynamoDbTarget::new().with_path("orders"));
        let json = serde_json::to_value(&targets).unwrap();
        assert!(json.get("DynamoDBTargets").is_some());
    }
}
