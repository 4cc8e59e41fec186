use kube::CustomResource;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::manifest::AckCustomResource;

#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[kube(
    kind = "GlobalCluster",
    group = "rds.services.k8s.aws",
    version = "v1alpha1",
    doc = "GlobalCluster is the Schema for the GlobalClusters API.",
    derive = "PartialEq",
    namespaced
)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct GlobalClusterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The name for your database of up to 64 alphanumeric characters.
    pub database_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The deletion protection setting for the new global database.
    pub deletion_protection: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The name of the database engine to be used for this DB cluster.
    pub engine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The engine version of the Aurora global database.
    pub engine_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The cluster identifier of the new global database cluster.
    pub global_cluster_identifier: Option<String>,
    #[serde(default, rename(serialize = "sourceDBClusterIdentifier"), skip_serializing_if = "Option::is_none")]
    /// The Amazon Resource Name to use as the primary cluster of the
    /// global database.
    pub source_db_cluster_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The storage encryption setting for the new global database cluster.
    pub storage_encrypted: Option<bool>,
}

impl AckCustomResource for GlobalCluster {
    type Spec = GlobalClusterSpec;

    fn from_parts(metadata: ObjectMeta, spec: Self::Spec) -> Self {
        GlobalCluster { metadata, spec }
    }
}
