//! Development endpoint model type
//!
//! A dev endpoint is a long-lived environment for developing and testing ETL
//! scripts interactively. Only the descriptive shape is modeled; provisioning
//! happens behind the service API.

use super::ModelError;
use super::display::FieldDisplay;
use super::enums::WorkerType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DevEndpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_name: Option<String>,
    /// Role the endpoint assumes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    /// Address reachable only from within the endpoint's VPC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<WorkerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_workers: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_nodes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    /// Comma-separated object-store paths of extra Python libraries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_python_libs_s3_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_jars_s3_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_timestamp: Option<DateTime<Utc>>,
    /// Legacy single-key field; `public_keys` supersedes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub public_keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub arguments: HashMap<String, String>,
}

impl DevEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint_name(mut self, endpoint_name: impl Into<String>) -> Self {
        self.endpoint_name = Some(endpoint_name.into());
        self
    }

    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.role_arn = Some(role_arn.into());
        self
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

    pub fn with_private_address(mut self, private_address: impl Into<String>) -> Self {
        self.private_address = Some(private_address.into());
        self
    }

    pub fn with_public_address(mut self, public_address: impl Into<String>) -> Self {
        self.public_address = Some(public_address.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
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

    pub fn with_number_of_nodes(mut self, number_of_nodes: i32) -> Self {
        self.number_of_nodes = Some(number_of_nodes);
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

    pub fn with_last_update_status(mut self, last_update_status: impl Into<String>) -> Self {
        self.last_update_status = Some(last_update_status.into());
        self
    }

    pub fn with_created_timestamp(mut self, created_timestamp: DateTime<Utc>) -> Self {
        self.created_timestamp = Some(created_timestamp);
        self
    }

    pub fn with_last_modified_timestamp(mut self, last_modified_timestamp: DateTime<Utc>) -> Self {
        self.last_modified_timestamp = Some(last_modified_timestamp);
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

    pub fn with_security_configuration(
        mut self,
        security_configuration: impl Into<String>,
    ) -> Self {
        self.security_configuration = Some(security_configuration.into());
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
}

impl fmt::Display for DevEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = FieldDisplay::new(f)?;
        d.opt("EndpointName", self.endpoint_name.as_ref())?;
        d.opt("RoleArn", self.role_arn.as_ref())?;
        d.list("SecurityGroupIds", &self.security_group_ids)?;
        d.opt("SubnetId", self.subnet_id.as_ref())?;
        d.opt("PrivateAddress", self.private_address.as_ref())?;
        d.opt("PublicAddress", self.public_address.as_ref())?;
        d.opt("Status", self.status.as_ref())?;
        d.opt("WorkerType", self.worker_type.as_ref())?;
        d.opt("NumberOfWorkers", self.number_of_workers.as_ref())?;
        d.opt("NumberOfNodes", self.number_of_nodes.as_ref())?;
        d.opt("AvailabilityZone", self.availability_zone.as_ref())?;
        d.opt("VpcId", self.vpc_id.as_ref())?;
        d.opt(
            "ExtraPythonLibsS3Path",
            self.extra_python_libs_s3_path.as_ref(),
        )?;
        d.opt("ExtraJarsS3Path", self.extra_jars_s3_path.as_ref())?;
        d.opt("FailureReason", self.failure_reason.as_ref())?;
        d.opt("LastUpdateStatus", self.last_update_status.as_ref())?;
        d.opt("CreatedTimestamp", self.created_timestamp.as_ref())?;
        d.opt(
            "LastModifiedTimestamp",
            self.last_modified_timestamp.as_ref(),
        )?;
        d.opt("PublicKey", self.public_key.as_ref())?;
        d.list("PublicKeys", &self.public_keys)?;
        d.opt(
            "SecurityConfiguration",
            self.security_configuration.as_ref(),
        )?;
        d.map("Arguments", &self.arguments)?;
        d.finish()
    }
}
