//! Connection model types
//!
//! A connection stores the properties needed to reach an external data store
//! (JDBC endpoint, message broker, network share). Secrets never appear here;
//! the property bag carries references and plain configuration only.

use super::ModelError;
use super::display::FieldDisplay;
use super::enums::ConnectionType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Networking requirements for connections that run inside a VPC.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PhysicalConnectionRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_group_id_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
}

impl PhysicalConnectionRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subnet_id(mut self, subnet_id: impl Into<String>) -> Self {
        self.subnet_id = Some(subnet_id.into());
        self
    }

    pub fn with_security_group_id_list(mut self, security_group_id_list: Vec<String>) -> Self {
        self.security_group_id_list = security_group_id_list;
        self
    }

    pub fn with_security_group_id(mut self, security_group_id: impl Into<String>) -> Self {
        self.security_group_id_list.push(security_group_id.into());
        self
    }

    pub fn with_availability_zone(mut self, availability_zone: impl Into<String>) -> Self {
        self.availability_zone = Some(availability_zone.into());
        self
    }
}

impl fmt::Display for PhysicalConnectionRequirements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("SubnetId", self.subnet_id.as_ref())?;
        d.list("SecurityGroupIdList", &self.security_group_id_list)?;
        d.opt("AvailabilityZone", self.availability_zone.as_ref())?;
        d.finish()
    }
}

/// A connection definition as stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Connection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<ConnectionType>,
    /// Criteria used when selecting this connection for a crawl or job.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_criteria: Vec<String>,
    /// Typed property bag, e.g. `JDBC_CONNECTION_URL`, `USERNAME`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub connection_properties: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_connection_requirements: Option<PhysicalConnectionRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
}

impl Connection {
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

    pub fn with_connection_type(mut self, connection_type: ConnectionType) -> Self {
        self.connection_type = Some(connection_type);
        self
    }

    pub fn with_match_criteria(mut self, match_criteria: Vec<String>) -> Self {
        self.match_criteria = match_criteria;
        self
    }

    pub fn with_match_criterion(mut self, criterion: impl Into<String>) -> Self {
        self.match_criteria.push(criterion.into());
        self
    }

    pub fn with_connection_properties(mut self, properties: HashMap<String, String>) -> Self {
        self.connection_properties = properties;
        self
    }

    pub fn add_connection_properties_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(
            &mut self.connection_properties,
            "ConnectionProperties",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_connection_properties_entries(mut self) -> Self {
        self.connection_properties.clear();
        self
    }

    pub fn with_physical_connection_requirements(
        mut self,
        requirements: PhysicalConnectionRequirements,
    ) -> Self {
        self.physical_connection_requirements = Some(requirements);
        self
    }

    pub fn with_creation_time(mut self, creation_time: DateTime<Utc>) -> Self {
        self.creation_time = Some(creation_time);
        self
    }

    pub fn with_last_updated_time(mut self, last_updated_time: DateTime<Utc>) -> Self {
        self.last_updated_time = Some(last_updated_time);
        self
    }

    pub fn with_last_updated_by(mut self, last_updated_by: impl Into<String>) -> Self {
        self.last_updated_by = Some(last_updated_by.into());
        self
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Name", self.name.as_ref())?;
        d.opt("Description", self.description.as_ref())?;
        d.opt("ConnectionType", self.connection_type.as_ref())?;
        d.list("MatchCriteria", &self.match_criteria)?;
        d.map("ConnectionProperties", &self.connection_properties)?;
        d.opt(
            "PhysicalConnectionRequirements",
            self.physical_connection_requirements.as_ref(),
        )?;
        d.opt("CreationTime", self.creation_time.as_ref())?;
        d.opt("LastUpdatedTime", self.last_updated_time.as_ref())?;
        d.opt("LastUpdatedBy", self.last_updated_by.as_ref())?;
        d.finish()
    }
}

/// Write-side shape for creating or updating a connection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<ConnectionType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_criteria: Vec<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub connection_properties: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_connection_requirements: Option<PhysicalConnectionRequirements>,
}

impl ConnectionInput {
    pub fn new(name: impl Into<String>, connection_type: ConnectionType) -> Self {
        Self {
            name: name.into(),
            connection_type: Some(connection_type),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_match_criteria(mut self, match_criteria: Vec<String>) -> Self {
        self.match_criteria = match_criteria;
        self
    }

    pub fn with_match_criterion(mut self, criterion: impl Into<String>) -> Self {
        self.match_criteria.push(criterion.into());
        self
    }

    pub fn with_connection_properties(mut self, properties: HashMap<String, String>) -> Self {
        self.connection_properties = properties;
        self
    }

    pub fn add_connection_properties_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        super::insert_unique(
            &mut self.connection_properties,
            "ConnectionProperties",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_connection_properties_entries(mut self) -> Self {
        self.connection_properties.clear();
        self
    }

    pub fn with_physical_connection_requirements(
        mut self,
        requirements: PhysicalConnectionRequirements,
    ) -> Self {
        self.physical_connection_requirements = Some(requirements);
        self
    }
}

impl fmt::Display for ConnectionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("Name", &self.name)?;
        d.opt("Description", self.description.as_ref())?;
        d.opt("ConnectionType", self.connection_type.as_ref())?;
        d.list("MatchCriteria", &self.match_criteria)?;
        d.map("ConnectionProperties", &self.connection_properties)?;
        d.opt(
            "PhysicalConnectionRequirements",
            self.physical_connection_requirements.as_ref(),
        )?;
        d.finish()
    }
}
