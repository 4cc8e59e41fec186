use kube::CustomResource;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::manifest::AckCustomResource;
use crate::manifest::v1alpha1::common::{AWSResourceReference, Tag};

#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[kube(
    kind = "DBSubnetGroup",
    group = "rds.services.k8s.aws",
    version = "v1alpha1",
    doc = "DBSubnetGroup is the Schema for the DBSubnetGroups API.",
    derive = "PartialEq",
    namespaced
)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DBSubnetGroupSpec {
    /// The description for the DB subnet group.
    pub description: String,
    /// The name for the DB subnet group. This value is stored as a
    /// lowercase string. Must not be "default".
    pub name: String,
    #[serde(default, rename(serialize = "subnetIDs"), skip_serializing_if = "Option::is_none")]
    /// The EC2 Subnet IDs for the DB subnet group.
    pub subnet_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_refs: Option<Vec<AWSResourceReference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Tags to assign to the DB subnet group.
    pub tags: Option<Vec<Tag>>,
}

impl AckCustomResource for DBSubnetGroup {
    type Spec = DBSubnetGroupSpec;

    fn from_parts(metadata: ObjectMeta, spec: Self::Spec) -> Self {
        DBSubnetGroup { metadata, spec }
    }
}
