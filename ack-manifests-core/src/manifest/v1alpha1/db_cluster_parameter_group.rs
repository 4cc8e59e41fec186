use kube::CustomResource;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::manifest::AckCustomResource;
use crate::manifest::v1alpha1::common::Tag;

#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[kube(
    kind = "DBClusterParameterGroup",
    group = "rds.services.k8s.aws",
    version = "v1alpha1",
    doc = "DBClusterParameterGroup is the Schema for the DBClusterParameterGroups API.",
    derive = "PartialEq",
    namespaced
)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DBClusterParameterGroupSpec {
    /// The description for the DB cluster parameter group.
    pub description: String,
    /// The DB cluster parameter group family name. A DB cluster parameter
    /// group can be associated with one and only one family.
    pub family: String,
    /// The name of the DB cluster parameter group.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Parameter names mapped to their desired values, overriding the
    /// family defaults.
    pub parameter_overrides: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Tags to assign to the DB cluster parameter group.
    pub tags: Option<Vec<Tag>>,
}

impl AckCustomResource for DBClusterParameterGroup {
    type Spec = DBClusterParameterGroupSpec;

    fn from_parts(metadata: ObjectMeta, spec: Self::Spec) -> Self {
        DBClusterParameterGroup { metadata, spec }
    }
}
