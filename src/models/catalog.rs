//! Catalog model types: databases, tables, partitions and their parts
//!
//! A catalog is the root namespace of the metadata store. Databases group
//! tables; tables carry a storage descriptor and partition keys; partitions
//! subdivide a table's data by an ordered tuple of key values. `*Input`
//! variants are the write-side shapes accepted by create/update operations.

use super::ModelError;
use super::display::FieldDisplay;
use super::enums::Permission;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Detail attached to a partial-failure entry in a batch response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ErrorDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error_code(mut self, error_code: impl Into<String>) -> Self {
        self.error_code = Some(error_code.into());
        self
    }

    pub fn with_error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = Some(error_message.into());
        self
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("ErrorCode", self.error_code.as_ref())?;
        d.opt("ErrorMessage", self.error_message.as_ref())?;
        d.finish()
    }
}

/// Identity that catalog permissions are granted to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DataLakePrincipal {
    /// Principal identifier, typically an IAM-style ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lake_principal_identifier: Option<String>,
}

impl DataLakePrincipal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_lake_principal_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.data_lake_principal_identifier = Some(identifier.into());
        self
    }
}

impl fmt::Display for DataLakePrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt(
            "DataLakePrincipalIdentifier",
            self.data_lake_principal_identifier.as_ref(),
        )?;
        d.finish()
    }
}

/// Permissions granted to a principal on newly created tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PrincipalPermissions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<DataLakePrincipal>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
}

impl PrincipalPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_principal(mut self, principal: DataLakePrincipal) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Replace the permission list.
    pub fn with_permissions(mut self, permissions: Vec<Permission>) -> Self {
        self.permissions = permissions;
        self
    }

    /// Append a single permission.
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permissions.push(permission);
        self
    }
}

impl fmt::Display for PrincipalPermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Principal", self.principal.as_ref())?;
        d.list("Permissions", &self.permissions)?;
        d.finish()
    }
}

/// A named logical grouping of tables in the catalog.
///
/// # Example
///
/// ```rust
/// use data_catalog_sdk::models::Database;
///
/// let db = Database::new("sales_db").with_description("quarterly sales");
/// assert_eq!(db.to_string(), "{Name: sales_db,Description: quarterly sales}");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Database {
    /// Database name, lowercased by the service on storage.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Location of the database, for example an object-store path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_uri: Option<String>,
    /// Free-form key/value properties.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Permissions applied to tables created in this database by default.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub create_table_default_permissions: Vec<PrincipalPermissions>,
}

impl Database {
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

    pub fn with_location_uri(mut self, location_uri: impl Into<String>) -> Self {
        self.location_uri = Some(location_uri.into());
        self
    }

    /// Replace the parameter bag.
    pub fn with_parameters(mut self, parameters: HashMap<String, String>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Add a single parameter, failing if the key is already present.
    pub fn add_parameters_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(&mut self.parameters, "Parameters", key.into(), value.into())?;
        Ok(self)
    }

    pub fn clear_parameters_entries(mut self) -> Self {
        self.parameters.clear();
        self
    }

    pub fn with_create_time(mut self, create_time: DateTime<Utc>) -> Self {
        self.create_time = Some(create_time);
        self
    }

    pub fn with_create_table_default_permissions(
        mut self,
        permissions: Vec<PrincipalPermissions>,
    ) -> Self {
        self.create_table_default_permissions = permissions;
        self
    }

    pub fn with_create_table_default_permission(
        mut self,
        permission: PrincipalPermissions,
    ) -> Self {
        self.create_table_default_permissions.push(permission);
        self
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.opt("Description", self.description.as_ref())?;
        d.opt("LocationUri", self.location_uri.as_ref())?;
        d.map("Parameters", &self.parameters)?;
        d.opt("CreateTime", self.create_time.as_ref())?;
        d.list(
            "CreateTableDefaultPermissions",
            &self.create_table_default_permissions,
        )?;
        d.finish()
    }
}

/// Write-side shape for creating a database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DatabaseInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_uri: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub create_table_default_permissions: Vec<PrincipalPermissions>,
}

impl DatabaseInput {
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

    pub fn with_location_uri(mut self, location_uri: impl Into<String>) -> Self {
        self.location_uri = Some(location_uri.into());
        self
    }

    pub fn with_parameters(mut self, parameters: HashMap<String, String>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn add_parameters_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(&mut self.parameters, "Parameters", key.into(), value.into())?;
        Ok(self)
    }

    pub fn clear_parameters_entries(mut self) -> Self {
        self.parameters.clear();
        self
    }

    pub fn with_create_table_default_permissions(
        mut self,
        permissions: Vec<PrincipalPermissions>,
    ) -> Self {
        self.create_table_default_permissions = permissions;
        self
    }

    pub fn with_create_table_default_permission(
        mut self,
        permission: PrincipalPermissions,
    ) -> Self {
        self.create_table_default_permissions.push(permission);
        self
    }
}

impl fmt::Display for DatabaseInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.opt("Description", self.description.as_ref())?;
        d.opt("LocationUri", self.location_uri.as_ref())?;
        d.map("Parameters", &self.parameters)?;
        d.list(
            "CreateTableDefaultPermissions",
            &self.create_table_default_permissions,
        )?;
        d.finish()
    }
}

/// A single column in a table or partition schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Column {
    pub name: String,
    /// Data type string, for example `string`, `bigint`, `array<double>`.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_column_type(mut self, column_type: impl Into<String>) -> Self {
        self.column_type = Some(column_type.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_parameters(mut self, parameters: HashMap<String, String>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn add_parameters_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(&mut self.parameters, "Parameters", key.into(), value.into())?;
        Ok(self)
    }

    pub fn clear_parameters_entries(mut self) -> Self {
        self.parameters.clear();
        self
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.opt("Type", self.column_type.as_ref())?;
        d.opt("Comment", self.comment.as_ref())?;
        d.map("Parameters", &self.parameters)?;
        d.finish()
    }
}

/// Sort order of a bucketed column: 1 ascending, 0 descending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    pub column: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

impl Order {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ..Default::default()
        }
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = Some(sort_order);
        self
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Column", &self.column)?;
        d.opt("SortOrder", self.sort_order.as_ref())?;
        d.finish()
    }
}

/// Serialization/deserialization program and its configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SerDeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Implementation used by the execution engine, e.g. a class path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serialization_library: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,
}

impl SerDeInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_serialization_library(mut self, serialization_library: impl Into<String>) -> Self {
        self.serialization_library = Some(serialization_library.into());
        self
    }

    pub fn with_parameters(mut self, parameters: HashMap<String, String>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn add_parameters_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(&mut self.parameters, "Parameters", key.into(), value.into())?;
        Ok(self)
    }

    pub fn clear_parameters_entries(mut self) -> Self {
        self.parameters.clear();
        self
    }
}

impl fmt::Display for SerDeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Name", self.name.as_ref())?;
        d.opt("SerializationLibrary", self.serialization_library.as_ref())?;
        d.map("Parameters", &self.parameters)?;
        d.finish()
    }
}

/// Skewed-value metadata for a table's storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SkewedInfo {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skewed_column_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skewed_column_values: Vec<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub skewed_column_value_location_maps: HashMap<String, String>,
}

impl SkewedInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skewed_column_names(mut self, names: Vec<String>) -> Self {
        self.skewed_column_names = names;
        self
    }

    pub fn with_skewed_column_name(mut self, name: impl Into<String>) -> Self {
        self.skewed_column_names.push(name.into());
        self
    }

    pub fn with_skewed_column_values(mut self, values: Vec<String>) -> Self {
        self.skewed_column_values = values;
        self
    }

    pub fn with_skewed_column_value(mut self, value: impl Into<String>) -> Self {
        self.skewed_column_values.push(value.into());
        self
    }

    pub fn with_skewed_column_value_location_maps(
        mut self,
        maps: HashMap<String, String>,
    ) -> Self {
        self.skewed_column_value_location_maps = maps;
        self
    }

    pub fn add_skewed_column_value_location_maps_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(
            &mut self.skewed_column_value_location_maps,
            "SkewedColumnValueLocationMaps",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_skewed_column_value_location_maps_entries(mut self) -> Self {
        self.skewed_column_value_location_maps.clear();
        self
    }
}

impl fmt::Display for SkewedInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.list("SkewedColumnNames", &self.skewed_column_names)?;
        d.list("SkewedColumnValues", &self.skewed_column_values)?;
        d.map(
            "SkewedColumnValueLocationMaps",
            &self.skewed_column_value_location_maps,
        )?;
        d.finish()
    }
}

/// Physical storage layout of a table or partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StorageDescriptor {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_buckets: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serde_info: Option<SerDeInfo>,
    /// Columns the data is bucketed by.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bucket_columns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort_columns: Vec<Order>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skewed_info: Option<SkewedInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_as_sub_directories: Option<bool>,
}

impl StorageDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_input_format(mut self, input_format: impl Into<String>) -> Self {
        self.input_format = Some(input_format.into());
        self
    }

    pub fn with_output_format(mut self, output_format: impl Into<String>) -> Self {
        self.output_format = Some(output_format.into());
        self
    }

    pub fn with_compressed(mut self, compressed: bool) -> Self {
        self.compressed = Some(compressed);
        self
    }

    pub fn with_number_of_buckets(mut self, number_of_buckets: i32) -> Self {
        self.number_of_buckets = Some(number_of_buckets);
        self
    }

    pub fn with_serde_info(mut self, serde_info: SerDeInfo) -> Self {
        self.serde_info = Some(serde_info);
        self
    }

    pub fn with_bucket_columns(mut self, bucket_columns: Vec<String>) -> Self {
        self.bucket_columns = bucket_columns;
        self
    }

    pub fn with_bucket_column(mut self, bucket_column: impl Into<String>) -> Self {
        self.bucket_columns.push(bucket_column.into());
        self
    }

    pub fn with_sort_columns(mut self, sort_columns: Vec<Order>) -> Self {
        self.sort_columns = sort_columns;
        self
    }

    pub fn with_sort_column(mut self, sort_column: Order) -> Self {
        self.sort_columns.push(sort_column);
        self
    }

    pub fn with_parameters(mut self, parameters: HashMap<String, String>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn add_parameters_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(&mut self.parameters, "Parameters", key.into(), value.into())?;
        Ok(self)
    }

    pub fn clear_parameters_entries(mut self) -> Self {
        self.parameters.clear();
        self
    }

    pub fn with_skewed_info(mut self, skewed_info: SkewedInfo) -> Self {
        self.skewed_info = Some(skewed_info);
        self
    }

    pub fn with_stored_as_sub_directories(mut self, stored_as_sub_directories: bool) -> Self {
        self.stored_as_sub_directories = Some(stored_as_sub_directories);
        self
    }
}

impl fmt::Display for StorageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.list("Columns", &self.columns)?;
        d.opt("Location", self.location.as_ref())?;
        d.opt("InputFormat", self.input_format.as_ref())?;
        d.opt("OutputFormat", self.output_format.as_ref())?;
        d.opt("Compressed", self.compressed.as_ref())?;
        d.opt("NumberOfBuckets", self.number_of_buckets.as_ref())?;
        d.opt("SerdeInfo", self.serde_info.as_ref())?;
        d.list("BucketColumns", &self.bucket_columns)?;
        d.list("SortColumns", &self.sort_columns)?;
        d.map("Parameters", &self.parameters)?;
        d.opt("SkewedInfo", self.skewed_info.as_ref())?;
        d.opt(
            "StoredAsSubDirectories",
            self.stored_as_sub_directories.as_ref(),
        )?;
        d.finish()
    }
}

/// A table definition as stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Table {
    pub name: String,
    /// Database the table belongs to. Read-side only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_access_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_analyzed_time: Option<DateTime<Utc>>,
    /// Retention period in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_descriptor: Option<StorageDescriptor>,
    /// Columns the table is partitioned by, in partition-value order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partition_keys: Vec<Column>,
    /// Original query text when the table is a view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_original_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_expanded_text: Option<String>,
    /// Table kind, for example `EXTERNAL_TABLE` or `VIRTUAL_VIEW`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_type: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
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

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_create_time(mut self, create_time: DateTime<Utc>) -> Self {
        self.create_time = Some(create_time);
        self
    }

    pub fn with_update_time(mut self, update_time: DateTime<Utc>) -> Self {
        self.update_time = Some(update_time);
        self
    }

    pub fn with_last_access_time(mut self, last_access_time: DateTime<Utc>) -> Self {
        self.last_access_time = Some(last_access_time);
        self
    }

    pub fn with_last_analyzed_time(mut self, last_analyzed_time: DateTime<Utc>) -> Self {
        self.last_analyzed_time = Some(last_analyzed_time);
        self
    }

    pub fn with_retention(mut self, retention: i32) -> Self {
        self.retention = Some(retention);
        self
    }

    pub fn with_storage_descriptor(mut self, storage_descriptor: StorageDescriptor) -> Self {
        self.storage_descriptor = Some(storage_descriptor);
        self
    }

    pub fn with_partition_keys(mut self, partition_keys: Vec<Column>) -> Self {
        self.partition_keys = partition_keys;
        self
    }

    pub fn with_partition_key(mut self, partition_key: Column) -> Self {
        self.partition_keys.push(partition_key);
        self
    }

    pub fn with_view_original_text(mut self, view_original_text: impl Into<String>) -> Self {
        self.view_original_text = Some(view_original_text.into());
        self
    }

    pub fn with_view_expanded_text(mut self, view_expanded_text: impl Into<String>) -> Self {
        self.view_expanded_text = Some(view_expanded_text.into());
        self
    }

    pub fn with_table_type(mut self, table_type: impl Into<String>) -> Self {
        self.table_type = Some(table_type.into());
        self
    }

    pub fn with_parameters(mut self, parameters: HashMap<String, String>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn add_parameters_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(&mut self.parameters, "Parameters", key.into(), value.into())?;
        Ok(self)
    }

    pub fn clear_parameters_entries(mut self) -> Self {
        self.parameters.clear();
        self
    }

    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = Some(created_by.into());
        self
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.opt("DatabaseName", self.database_name.as_ref())?;
        d.opt("Description", self.description.as_ref())?;
        d.opt("Owner", self.owner.as_ref())?;
        d.opt("CreateTime", self.create_time.as_ref())?;
        d.opt("UpdateTime", self.update_time.as_ref())?;
        d.opt("LastAccessTime", self.last_access_time.as_ref())?;
        d.opt("LastAnalyzedTime", self.last_analyzed_time.as_ref())?;
        d.opt("Retention", self.retention.as_ref())?;
        d.opt("StorageDescriptor", self.storage_descriptor.as_ref())?;
        d.list("PartitionKeys", &self.partition_keys)?;
        d.opt("ViewOriginalText", self.view_original_text.as_ref())?;
        d.opt("ViewExpandedText", self.view_expanded_text.as_ref())?;
        d.opt("TableType", self.table_type.as_ref())?;
        d.map("Parameters", &self.parameters)?;
        d.opt("CreatedBy", self.created_by.as_ref())?;
        d.finish()
    }
}

/// Write-side shape for creating or updating a table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TableInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_access_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_analyzed_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_descriptor: Option<StorageDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partition_keys: Vec<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_original_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_expanded_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_type: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,
}

impl TableInput {
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

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_last_access_time(mut self, last_access_time: DateTime<Utc>) -> Self {
        self.last_access_time = Some(last_access_time);
        self
    }

    pub fn with_last_analyzed_time(mut self, last_analyzed_time: DateTime<Utc>) -> Self {
        self.last_analyzed_time = Some(last_analyzed_time);
        self
    }

    pub fn with_retention(mut self, retention: i32) -> Self {
        self.retention = Some(retention);
        self
    }

    pub fn with_storage_descriptor(mut self, storage_descriptor: StorageDescriptor) -> Self {
        self.storage_descriptor = Some(storage_descriptor);
        self
    }

    pub fn with_partition_keys(mut self, partition_keys: Vec<Column>) -> Self {
        self.partition_keys = partition_keys;
        self
    }

    pub fn with_partition_key(mut self, partition_key: Column) -> Self {
        self.partition_keys.push(partition_key);
        self
    }

    pub fn with_view_original_text(mut self, view_original_text: impl Into<String>) -> Self {
        self.view_original_text = Some(view_original_text.into());
        self
    }

    pub fn with_view_expanded_text(mut self, view_expanded_text: impl Into<String>) -> Self {
        self.view_expanded_text = Some(view_expanded_text.into());
        self
    }

    pub fn with_table_type(mut self, table_type: impl Into<String>) -> Self {
        self.table_type = Some(table_type.into());
        self
    }

    pub fn with_parameters(mut self, parameters: HashMap<String, String>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn add_parameters_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(&mut self.parameters, "Parameters", key.into(), value.into())?;
        Ok(self)
    }

    pub fn clear_parameters_entries(mut self) -> Self {
        self.parameters.clear();
        self
    }
}

impl fmt::Display for TableInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.opt("Description", self.description.as_ref())?;
        d.opt("Owner", self.owner.as_ref())?;
        d.opt("LastAccessTime", self.last_access_time.as_ref())?;
        d.opt("LastAnalyzedTime", self.last_analyzed_time.as_ref())?;
        d.opt("Retention", self.retention.as_ref())?;
        d.opt("StorageDescriptor", self.storage_descriptor.as_ref())?;
        d.list("PartitionKeys", &self.partition_keys)?;
        d.opt("ViewOriginalText", self.view_original_text.as_ref())?;
        d.opt("ViewExpandedText", self.view_expanded_text.as_ref())?;
        d.opt("TableType", self.table_type.as_ref())?;
        d.map("Parameters", &self.parameters)?;
        d.finish()
    }
}

/// A sub-division of a table's data, identified by its key-value tuple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Partition {
    /// Values for the table's partition keys, in key order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_access_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_descriptor: Option<StorageDescriptor>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_analyzed_time: Option<DateTime<Utc>>,
}

impl Partition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn with_database_name(mut self, database_name: impl Into<String>) -> Self {
        self.database_name = Some(database_name.into());
        self
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn with_creation_time(mut self, creation_time: DateTime<Utc>) -> Self {
        self.creation_time = Some(creation_time);
        self
    }

    pub fn with_last_access_time(mut self, last_access_time: DateTime<Utc>) -> Self {
        self.last_access_time = Some(last_access_time);
        self
    }

    pub fn with_storage_descriptor(mut self, storage_descriptor: StorageDescriptor) -> Self {
        self.storage_descriptor = Some(storage_descriptor);
        self
    }

    pub fn with_parameters(mut self, parameters: HashMap<String, String>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn add_parameters_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(&mut self.parameters, "Parameters", key.into(), value.into())?;
        Ok(self)
    }

    pub fn clear_parameters_entries(mut self) -> Self {
        self.parameters.clear();
        self
    }

    pub fn with_last_analyzed_time(mut self, last_analyzed_time: DateTime<Utc>) -> Self {
        self.last_analyzed_time = Some(last_analyzed_time);
        self
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.list("Values", &self.values)?;
        d.opt("DatabaseName", self.database_name.as_ref())?;
        d.opt("TableName", self.table_name.as_ref())?;
        d.opt("CreationTime", self.creation_time.as_ref())?;
        d.opt("LastAccessTime", self.last_access_time.as_ref())?;
        d.opt("StorageDescriptor", self.storage_descriptor.as_ref())?;
        d.map("Parameters", &self.parameters)?;
        d.opt("LastAnalyzedTime", self.last_analyzed_time.as_ref())?;
        d.finish()
    }
}

/// Write-side shape for creating one partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionInput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_access_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_descriptor: Option<StorageDescriptor>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_analyzed_time: Option<DateTime<Utc>>,
}

impl PartitionInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn with_last_access_time(mut self, last_access_time: DateTime<Utc>) -> Self {
        self.last_access_time = Some(last_access_time);
        self
    }

    pub fn with_storage_descriptor(mut self, storage_descriptor: StorageDescriptor) -> Self {
        self.storage_descriptor = Some(storage_descriptor);
        self
    }

    pub fn with_parameters(mut self, parameters: HashMap<String, String>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn add_parameters_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(&mut self.parameters, "Parameters", key.into(), value.into())?;
        Ok(self)
    }

    pub fn clear_parameters_entries(mut self) -> Self {
        self.parameters.clear();
        self
    }

    pub fn with_last_analyzed_time(mut self, last_analyzed_time: DateTime<Utc>) -> Self {
        self.last_analyzed_time = Some(last_analyzed_time);
        self
    }
}

impl fmt::Display for PartitionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.list("Values", &self.values)?;
        d.opt("LastAccessTime", self.last_access_time.as_ref())?;
        d.opt("StorageDescriptor", self.storage_descriptor.as_ref())?;
        d.map("Parameters", &self.parameters)?;
        d.opt("LastAnalyzedTime", self.last_analyzed_time.as_ref())?;
        d.finish()
    }
}

/// Per-partition failure in a batch-create response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionError {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partition_values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<ErrorDetail>,
}

impl PartitionError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partition_values(mut self, partition_values: Vec<String>) -> Self {
        self.partition_values = partition_values;
        self
    }

    pub fn with_partition_value(mut self, partition_value: impl Into<String>) -> Self {
        self.partition_values.push(partition_value.into());
        self
    }

    pub fn with_error_detail(mut self, error_detail: ErrorDetail) -> Self {
        self.error_detail = Some(error_detail);
        self
    }
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.list("PartitionValues", &self.partition_values)?;
        d.opt("ErrorDetail", self.error_detail.as_ref())?;
        d.finish()
    }
}
