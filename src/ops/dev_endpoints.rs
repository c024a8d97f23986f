//! Dev-endpoint operations

use crate::models::ModelError;
use crate::models::display::FieldDisplay;
use crate::models::enums::WorkerType;
use crate::validation::ValidationError;
use crate::validation::constraints::check_name;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Provision a new development endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDevEndpointRequest {
    pub endpoint_name: String,
    /// Role the endpoint assumes.
    pub role_arn: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub public_keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_nodes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<WorkerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_workers: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_python_libs_s3_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_jars_s3_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub arguments: HashMap<String, String>,
}

impl CreateDevEndpointRequest {
    pub fn new(endpoint_name: impl Into<String>, role_arn: impl Into<String>) -> Self {
        Self {
            endpoint_name: endpoint_name.into(),
            role_arn: role_arn.into(),
            ..Default::default()
        }
    }

    pub fn with_security_group_ids(mut self, security_group_ids: Vec<String>) -> Self {
        self.security_group_ids = security_group_ids;
        self
    }

    pub fn with_security_group_id(mut self, security_group_id: impl Into<String>) -> Self {
        self.security_group_ids.push(security_group_id.into());
        self
    }

    pub fn with_subnet_id(mut self, subnet_id: impl Into<String>) -> Self {
        self.subnet_id = Some(subnet_id.into());
        self
    }

    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }

    pub fn with_public_keys(mut self, public_keys: Vec<String>) -> Self {
        self.public_keys = public_keys;
        self
    }

    pub fn with_number_of_nodes(mut self, number_of_nodes: i32) -> Self {
        self.number_of_nodes = Some(number_of_nodes);
        self
    }

    pub fn with_worker_type(mut self, worker_type: WorkerType) -> Self {
        self.worker_type = Some(worker_type);
        self
    }

    pub fn with_number_of_workers(mut self, number_of_workers: i32) -> Self {
        self.number_of_workers = Some(number_of_workers);
        self
    }

    pub fn with_extra_python_libs_s3_path(mut self, path: impl Into<String>) -> Self {
        self.extra_python_libs_s3_path = Some(path.into());
        self
    }

    pub fn with_extra_jars_s3_path(mut self, path: impl Into<String>) -> Self {
        self.extra_jars_s3_path = Some(path.into());
        self
    }

    pub fn with_security_configuration(
        mut self,
        security_configuration: impl Into<String>,
    ) -> Self {
        self.security_configuration = Some(security_configuration.into());
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

    pub fn with_arguments(mut self, arguments: HashMap<String, String>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn add_arguments_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        crate::models::insert_unique(&mut self.arguments, "Arguments", key.into(), value.into())?;
        Ok(self)
    }

    pub fn clear_arguments_entries(mut self) -> Self {
        self.arguments.clear();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("EndpointName", &self.endpoint_name)?;
        check_name("RoleArn", &self.role_arn)?;
        if self.public_key.is_some() && !self.public_keys.is_empty() {
            return Err(ValidationError::Invalid {
                field: "PublicKeys",
                message: "use either the single key or the key list, not both".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for CreateDevEndpointRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.field("EndpointName", &self.endpoint_name)?;
        d.field("RoleArn", &self.role_arn)?;
        d.list("SecurityGroupIds", &self.security_group_ids)?;
        d.opt("SubnetId", self.subnet_id.as_ref())?;
        d.opt("PublicKey", self.public_key.as_ref())?;
        d.list("PublicKeys", &self.public_keys)?;
        d.opt("NumberOfNodes", self.number_of_nodes.as_ref())?;
        d.opt("WorkerType", self.worker_type.as_ref())?;
        d.opt("NumberOfWorkers", self.number_of_workers.as_ref())?;
        d.opt(
            "ExtraPythonLibsS3Path",
            self.extra_python_libs_s3_path.as_ref(),
        )?;
        d.opt("ExtraJarsS3Path", self.extra_jars_s3_path.as_ref())?;
        d.opt(
            "SecurityConfiguration",
            self.security_configuration.as_ref(),
        )?;
        d.map("Tags", &self.tags)?;
        d.map("Arguments", &self.arguments)?;
        d.finish()
    }
}

/// Provisioning acknowledgement; mirrors the endpoint's initial state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDevEndpointResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_nodes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<WorkerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_workers: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_python_libs_s3_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_jars_s3_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub arguments: HashMap<String, String>,
}

impl CreateDevEndpointResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint_name(mut self, endpoint_name: impl Into<String>) -> Self {
        self.endpoint_name = Some(endpoint_name.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_security_group_ids(mut self, security_group_ids: Vec<String>) -> Self {
        self.security_group_ids = security_group_ids;
        self
    }

    pub fn with_subnet_id(mut self, subnet_id: impl Into<String>) -> Self {
        self.subnet_id = Some(subnet_id.into());
        self
    }

    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.role_arn = Some(role_arn.into());
        self
    }

    pub fn with_number_of_nodes(mut self, number_of_nodes: i32) -> Self {
        self.number_of_nodes = Some(number_of_nodes);
        self
    }

    pub fn with_worker_type(mut self, worker_type: WorkerType) -> Self {
        self.worker_type = Some(worker_type);
        self
    }

    pub fn with_number_of_workers(mut self, number_of_workers: i32) -> Self {
        self.number_of_workers = Some(number_of_workers);
        self
    }

    pub fn with_availability_zone(mut self, availability_zone: impl Into<String>) -> Self {
        self.availability_zone = Some(availability_zone.into());
        self
    }

    pub fn with_vpc_id(mut self, vpc_id: impl Into<String>) -> Self {
        self.vpc_id = Some(vpc_id.into());
        self
    }

    pub fn with_extra_python_libs_s3_path(mut self, path: impl Into<String>) -> Self {
        self.extra_python_libs_s3_path = Some(path.into());
        self
    }

    pub fn with_extra_jars_s3_path(mut self, path: impl Into<String>) -> Self {
        self.extra_jars_s3_path = Some(path.into());
        self
    }

    pub fn with_failure_reason(mut self, failure_reason: impl Into<String>) -> Self {
        self.failure_reason = Some(failure_reason.into());
        self
    }

    pub fn with_security_configuration(
        mut self,
        security_configuration: impl Into<String>,
    ) -> Self {
        self.security_configuration = Some(security_configuration.into());
        self
    }

    pub fn with_created_timestamp(mut self, created_timestamp: DateTime<Utc>) -> Self {
        self.created_timestamp = Some(created_timestamp);
        self
    }

    pub fn with_arguments(mut self, arguments: HashMap<String, String>) -> Self {
        self.arguments = arguments;
        self
    }
}

impl fmt::Display for CreateDevEndpointResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("EndpointName", self.endpoint_name.as_ref())?;
        d.opt("Status", self.status.as_ref())?;
        d.list("SecurityGroupIds", &self.security_group_ids)?;
        d.opt("SubnetId", self.subnet_id.as_ref())?;
        d.opt("RoleArn", self.role_arn.as_ref())?;
        d.opt("NumberOfNodes", self.number_of_nodes.as_ref())?;
        d.opt("WorkerType", self.worker_type.as_ref())?;
        d.opt("NumberOfWorkers", self.number_of_workers.as_ref())?;
        d.opt("AvailabilityZone", self.availability_zone.as_ref())?;
        d.opt("VpcId", self.vpc_id.as_ref())?;
        d.opt(
            "ExtraPythonLibsS3Path",
            self.extra_python_libs_s3_path.as_ref(),
        )?;
        d.opt("ExtraJarsS3Path", self.extra_jars_s3_path.as_ref())?;
        d.opt("FailureReason", self.failure_reason.as_ref())?;
        d.opt(
            "SecurityConfiguration",
            self.security_configuration.as_ref(),
        )?;
        d.opt("CreatedTimestamp", self.created_timestamp.as_ref())?;
        d.map("Arguments", &self.arguments)?;
        d.finish()
    }
}
