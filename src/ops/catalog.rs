//! Catalog operations: databases, tables, partitions
//!
//! Batch partition creation accepts at most [`BATCH_CREATE_PARTITION_MAX`]
//! inputs per call; the response reports per-partition failures instead of
//! failing the whole batch.

use crate::models::catalog::{
    Database, DatabaseInput, Partition, PartitionError, PartitionInput, Table, TableInput,
};
use crate::models::display::FieldDisplay;
use crate::validation::constraints::{check_list_max, check_name, check_opt_id};
use crate::validation::rules::{
    validate_database_input, validate_partition_input, validate_table_input,
};
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on partition inputs per batch-create call.
pub const BATCH_CREATE_PARTITION_MAX: usize = 100;

/// Create a new database in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDatabaseRequest {
    /// Catalog to create the database in; the caller's own when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub database_input: DatabaseInput,
}

impl CreateDatabaseRequest {
    pub fn new(database_input: DatabaseInput) -> Self {
        Self {
            catalog_id: None,
            database_input,
        }
    }

    pub fn with_catalog_id(mut self, catalog_id: impl Into<String>) -> Self {
        self.catalog_id = Some(catalog_id.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_opt_id("CatalogId", self.catalog_id.as_ref())?;
        validate_database_input(&self.database_input)
    }
}

impl fmt::Display for CreateDatabaseRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("CatalogId", self.catalog_id.as_ref())?;
        d.field("DatabaseInput", &self.database_input)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDatabaseResponse {}

impl fmt::Display for CreateDatabaseResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDisplay::new(f)?.finish()
    }
}

/// Fetch one database by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetDatabaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub name: String,
}

impl GetDatabaseRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            catalog_id: None,
            name: name.into(),
        }
    }

    pub fn with_catalog_id(mut self, catalog_id: impl Into<String>) -> Self {
        self.catalog_id = Some(catalog_id.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_opt_id("CatalogId", self.catalog_id.as_ref())?;
        check_name("Name", &self.name)
    }
}

impl fmt::Display for GetDatabaseRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("CatalogId", self.catalog_id.as_ref())?;
        d.field("Name", &self.name)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetDatabaseResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<Database>,
}

impl GetDatabaseResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }
}

impl fmt::Display for GetDatabaseResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Database", self.database.as_ref())?;
        d.finish()
    }
}

/// List databases a page at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetDatabasesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    /// Continuation token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetDatabasesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog_id(mut self, catalog_id: impl Into<String>) -> Self {
        self.catalog_id = Some(catalog_id.into());
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_opt_id("CatalogId", self.catalog_id.as_ref())?;
        if let Some(max_results) = self.max_results
            && !(1..=1000).contains(&max_results)
        {
            return Err(ValidationError::Invalid {
                field: "MaxResults",
                message: format!("page size {} outside 1..=1000", max_results),
            });
        }
        Ok(())
    }
}

impl fmt::Display for GetDatabasesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("CatalogId", self.catalog_id.as_ref())?;
        d.opt("NextToken", self.next_token.as_ref())?;
        d.opt("MaxResults", self.max_results.as_ref())?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetDatabasesResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub database_list: Vec<Database>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl GetDatabasesResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_database_list(mut self, database_list: Vec<Database>) -> Self {
        self.database_list = database_list;
        self
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.database_list.push(database);
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl fmt::Display for GetDatabasesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.list("DatabaseList", &self.database_list)?;
        d.opt("NextToken", self.next_token.as_ref())?;
        d.finish()
    }
}

/// Create a table in a database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub database_name: String,
    pub table_input: TableInput,
}

impl CreateTableRequest {
    pub fn new(database_name: impl Into<String>, table_input: TableInput) -> Self {
        Self {
            catalog_id: None,
            database_name: database_name.into(),
            table_input,
        }
    }

    pub fn with_catalog_id(mut self, catalog_id: impl Into<String>) -> Self {
        self.catalog_id = Some(catalog_id.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_opt_id("CatalogId", self.catalog_id.as_ref())?;
        check_name("DatabaseName", &self.database_name)?;
        validate_table_input(&self.table_input)
    }
}

impl fmt::Display for CreateTableRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("CatalogId", self.catalog_id.as_ref())?;
        d.field("DatabaseName", &self.database_name)?;
        d.field("TableInput", &self.table_input)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableResponse {}

impl fmt::Display for CreateTableResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDisplay::new(f)?.finish()
    }
}

/// Replace a table definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTableRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub database_name: String,
    pub table_input: TableInput,
    /// When false the replaced version is archived rather than dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_archive: Option<bool>,
}

impl UpdateTableRequest {
    pub fn new(database_name: impl Into<String>, table_input: TableInput) -> Self {
        Self {
            catalog_id: None,
            database_name: database_name.into(),
            table_input,
            skip_archive: None,
        }
    }

    pub fn with_catalog_id(mut self, catalog_id: impl Into<String>) -> Self {
        self.catalog_id = Some(catalog_id.into());
        self
    }

    pub fn with_skip_archive(mut self, skip_archive: bool) -> Self {
        self.skip_archive = Some(skip_archive);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_opt_id("CatalogId", self.catalog_id.as_ref())?;
        check_name("DatabaseName", &self.database_name)?;
        validate_table_input(&self.table_input)
    }
}

impl fmt::Display for UpdateTableRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("CatalogId", self.catalog_id.as_ref())?;
        d.field("DatabaseName", &self.database_name)?;
        d.field("TableInput", &self.table_input)?;
        d.opt("SkipArchive", self.skip_archive.as_ref())?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTableResponse {}

impl fmt::Display for UpdateTableResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDisplay::new(f)?.finish()
    }
}

/// Fetch one table by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetTableRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub database_name: String,
    pub name: String,
}

impl GetTableRequest {
    pub fn new(database_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            catalog_id: None,
            database_name: database_name.into(),
            name: name.into(),
        }
    }

    pub fn with_catalog_id(mut self, catalog_id: impl Into<String>) -> Self {
        self.catalog_id = Some(catalog_id.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_opt_id("CatalogId", self.catalog_id.as_ref())?;
        check_name("DatabaseName", &self.database_name)?;
        check_name("Name", &self.name)
    }
}

impl fmt::Display for GetTableRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("CatalogId", self.catalog_id.as_ref())?;
        d.field("DatabaseName", &self.database_name)?;
        d.field("Name", &self.name)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetTableResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,
}

impl GetTableResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.table = Some(table);
        self
    }
}

impl fmt::Display for GetTableResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Table", self.table.as_ref())?;
        d.finish()
    }
}

/// Create several partitions in one call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct BatchCreatePartitionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub database_name: String,
    pub table_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partition_input_list: Vec<PartitionInput>,
}

impl BatchCreatePartitionRequest {
    pub fn new(database_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            catalog_id: None,
            database_name: database_name.into(),
            table_name: table_name.into(),
            partition_input_list: Vec::new(),
        }
    }

    pub fn with_catalog_id(mut self, catalog_id: impl Into<String>) -> Self {
        self.catalog_id = Some(catalog_id.into());
        self
    }

    pub fn with_partition_input_list(mut self, partition_input_list: Vec<PartitionInput>) -> Self {
        self.partition_input_list = partition_input_list;
        self
    }

    pub fn with_partition_input(mut self, partition_input: PartitionInput) -> Self {
        self.partition_input_list.push(partition_input);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_opt_id("CatalogId", self.catalog_id.as_ref())?;
        check_name("DatabaseName", &self.database_name)?;
        check_name("TableName", &self.table_name)?;
        check_list_max(
            "PartitionInputList",
            self.partition_input_list.len(),
            BATCH_CREATE_PARTITION_MAX,
        )?;
        for partition_input in &self.partition_input_list {
            validate_partition_input(partition_input)?;
        }
        Ok(())
    }
}

impl fmt::Display for BatchCreatePartitionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("CatalogId", self.catalog_id.as_ref())?;
        d.field("DatabaseName", &self.database_name)?;
        d.field("TableName", &self.table_name)?;
        d.list("PartitionInputList", &self.partition_input_list)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct BatchCreatePartitionResponse {
    /// Partitions that could not be created; empty on full success.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<PartitionError>,
}

impl BatchCreatePartitionResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_errors(mut self, errors: Vec<PartitionError>) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_error(mut self, error: PartitionError) -> Self {
        self.errors.push(error);
        self
    }
}

impl fmt::Display for BatchCreatePartitionResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.list("Errors", &self.errors)?;
        d.finish()
    }
}

/// List a table's partitions, optionally filtered by an expression.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetPartitionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub database_name: String,
    pub table_name: String,
    /// Predicate over partition-key values, SQL `WHERE`-like syntax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetPartitionsRequest {
    pub fn new(database_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            catalog_id: None,
            database_name: database_name.into(),
            table_name: table_name.into(),
            expression: None,
            next_token: None,
            max_results: None,
        }
    }

    pub fn with_catalog_id(mut self, catalog_id: impl Into<String>) -> Self {
        self.catalog_id = Some(catalog_id.into());
        self
    }

    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_opt_id("CatalogId", self.catalog_id.as_ref())?;
        check_name("DatabaseName", &self.database_name)?;
        check_name("TableName", &self.table_name)
    }
}

impl fmt::Display for GetPartitionsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("CatalogId", self.catalog_id.as_ref())?;
        d.field("DatabaseName", &self.database_name)?;
        d.field("TableName", &self.table_name)?;
        d.opt("Expression", self.expression.as_ref())?;
        d.opt("NextToken", self.next_token.as_ref())?;
        d.opt("MaxResults", self.max_results.as_ref())?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetPartitionsResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partitions: Vec<Partition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl GetPartitionsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partitions(mut self, partitions: Vec<Partition>) -> Self {
        self.partitions = partitions;
        self
    }

    pub fn with_partition(mut self, partition: Partition) -> Self {
        self.partitions.push(partition);
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl fmt::Display for GetPartitionsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.list("Partitions", &self.partitions)?;
        d.opt("NextToken", self.next_token.as_ref())?;
        d.finish()
    }
}
