//! Connection operations

use crate::models::connection::{Connection, ConnectionInput};
use crate::models::display::FieldDisplay;
use crate::validation::ValidationError;
use crate::validation::constraints::{check_name, check_opt_id};
use crate::validation::rules::validate_connection_input;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store a new connection definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateConnectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub connection_input: ConnectionInput,
}

impl CreateConnectionRequest {
    pub fn new(connection_input: ConnectionInput) -> Self {
        Self {
            catalog_id: None,
            connection_input,
        }
    }

    pub fn with_catalog_id(mut self, catalog_id: impl Into<String>) -> Self {
        self.catalog_id = Some(catalog_id.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_opt_id("CatalogId", self.catalog_id.as_ref())?;
        validate_connection_input(&self.connection_input)
    }
}

impl fmt::Display for CreateConnectionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("CatalogId", self.catalog_id.as_ref())?;
        d.field("ConnectionInput", &self.connection_input)?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateConnectionResponse {}

impl fmt::Display for CreateConnectionResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDisplay::new(f)?.finish()
    }
}

/// Fetch one connection by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetConnectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub name: String,
    /// When true, secret values are redacted in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_password: Option<bool>,
}

impl GetConnectionRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            catalog_id: None,
            name: name.into(),
            hide_password: None,
        }
    }

    pub fn with_catalog_id(mut self, catalog_id: impl Into<String>) -> Self {
        self.catalog_id = Some(catalog_id.into());
        self
    }

    pub fn with_hide_password(mut self, hide_password: bool) -> Self {
        self.hide_password = Some(hide_password);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_opt_id("CatalogId", self.catalog_id.as_ref())?;
        check_name("Name", &self.name)
    }
}

impl fmt::Display for GetConnectionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("CatalogId", self.catalog_id.as_ref())?;
        d.field("Name", &self.name)?;
        d.opt("HidePassword", self.hide_password.as_ref())?;
        d.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetConnectionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<Connection>,
}

impl GetConnectionResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connection(mut self, connection: Connection) -> Self {
        self.connection = Some(connection);
        self
    }
}

impl fmt::Display for GetConnectionResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("Connection", self.connection.as_ref())?;
        d.finish()
    }
}
