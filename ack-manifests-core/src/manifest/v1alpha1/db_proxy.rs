use kube::CustomResource;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::manifest::AckCustomResource;
use crate::manifest::v1alpha1::common::{Tag, UserAuthConfig};

#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[kube(
    kind = "DBProxy",
    group = "rds.services.k8s.aws",
    version = "v1alpha1",
    doc = "DBProxy is the Schema for the DBProxies API.",
    derive = "PartialEq",
    namespaced
)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DBProxySpec {
    /// The authorization mechanism that the proxy uses.
    pub auth: Vec<UserAuthConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether the proxy includes detailed information about SQL statements
    /// in its logs.
    pub debug_logging: Option<bool>,
    /// The kinds of databases that the proxy can connect to. This value
    /// determines which database network protocol the proxy recognizes.
    pub engine_family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The number of seconds that a connection to the proxy can be inactive
    /// before the proxy disconnects it.
    pub idle_client_timeout: Option<i64>,
    /// The identifier for the proxy. This name must be unique for all
    /// proxies owned by your AWS account in the specified AWS Region.
    pub name: String,
    #[serde(default, rename(serialize = "requireTLS"), skip_serializing_if = "Option::is_none")]
    /// Whether Transport Layer Security encryption is required for
    /// connections to the proxy.
    pub require_tls: Option<bool>,
    #[serde(rename(serialize = "roleARN"))]
    /// The Amazon Resource Name of the IAM role that the proxy uses to
    /// access secrets in AWS Secrets Manager.
    pub role_arn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Tags to associate with the new proxy.
    pub tags: Option<Vec<Tag>>,
    #[serde(default, rename(serialize = "vpcSecurityGroupIDs"), skip_serializing_if = "Option::is_none")]
    /// One or more VPC security group IDs to associate with the new proxy.
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(rename(serialize = "vpcSubnetIDs"))]
    /// One or more VPC subnet IDs to associate with the new proxy.
    pub vpc_subnet_ids: Vec<String>,
}

impl AckCustomResource for DBProxy {
    type Spec = DBProxySpec;

    fn from_parts(metadata: ObjectMeta, spec: Self::Spec) -> Self {
        DBProxy { metadata, spec }
    }
}
