use kube::CustomResource;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::manifest::AckCustomResource;
use crate::manifest::v1alpha1::common::{
    AWSResourceReference, ScalingConfiguration, SecretKeyReference,
    ServerlessV2ScalingConfiguration, Tag,
};

#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[kube(
    kind = "DBCluster",
    group = "rds.services.k8s.aws",
    version = "v1alpha1",
    doc = "DBCluster is the Schema for the DBClusters API.",
    derive = "PartialEq",
    namespaced
)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DBClusterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The amount of storage in gibibytes to allocate to each DB instance
    /// in the Multi-AZ DB cluster.
    pub allocated_storage: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether minor engine upgrades are applied automatically to the DB
    /// cluster during the maintenance window.
    pub auto_minor_version_upgrade: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// A list of Availability Zones in which DB instances in the cluster
    /// can be created.
    pub availability_zones: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The number of days for which automated backups are retained.
    pub backup_retention_period: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The name of the character set to associate with the DB cluster.
    pub character_set_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether to copy all tags from the DB cluster to snapshots of the
    /// DB cluster.
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The name for your database of up to 64 alphanumeric characters.
    pub database_name: Option<String>,
    /// The identifier for this DB cluster. This parameter is stored as a
    /// lowercase string.
    pub db_cluster_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The compute and memory capacity of each DB instance in the Multi-AZ
    /// DB cluster, for example db.m6gd.xlarge.
    pub db_cluster_instance_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The name of the DB cluster parameter group to associate with this
    /// DB cluster.
    pub db_cluster_parameter_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_cluster_parameter_group_ref: Option<AWSResourceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// A DB subnet group to associate with this DB cluster.
    pub db_subnet_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_ref: Option<AWSResourceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether the DB cluster has deletion protection enabled. The database
    /// can't be deleted when deletion protection is enabled.
    pub deletion_protection: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The Region where you want to copy automated backups of this cluster.
    pub destination_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The list of log types that need to be enabled for exporting to
    /// CloudWatch Logs.
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether to enable this DB cluster to forward write operations to the
    /// primary cluster of an Aurora global database.
    pub enable_global_write_forwarding: Option<bool>,
    #[serde(default, rename(serialize = "enableHTTPEndpoint"), skip_serializing_if = "Option::is_none")]
    /// Whether to enable the HTTP endpoint for an Aurora Serverless v1 DB
    /// cluster.
    pub enable_http_endpoint: Option<bool>,
    #[serde(default, rename(serialize = "enableIAMDatabaseAuthentication"), skip_serializing_if = "Option::is_none")]
    /// Whether to enable mapping of IAM accounts to database accounts.
    pub enable_iam_database_authentication: Option<bool>,
    /// The name of the database engine to be used for this DB cluster,
    /// for example aurora-mysql or aurora-postgresql.
    pub engine: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The DB engine mode of the DB cluster, either provisioned or
    /// serverless.
    pub engine_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The version number of the database engine to use.
    pub engine_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The global cluster ID of an Aurora cluster that becomes the primary
    /// cluster in the new global database cluster.
    pub global_cluster_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The amount of Provisioned IOPS to be initially allocated for each DB
    /// instance in the Multi-AZ DB cluster.
    pub iops: Option<i64>,
    #[serde(default, rename(serialize = "kmsKeyID"), skip_serializing_if = "Option::is_none")]
    /// The AWS KMS key identifier for an encrypted DB cluster.
    pub kms_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_ref: Option<AWSResourceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether to manage the master user password with AWS Secrets Manager.
    pub manage_master_user_password: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The password for the master database user, referenced from a Secret.
    pub master_user_password: Option<SecretKeyReference>,
    #[serde(default, rename(serialize = "masterUserSecretKMSKeyID"), skip_serializing_if = "Option::is_none")]
    /// The KMS key identifier to encrypt a secret that is automatically
    /// generated and managed in AWS Secrets Manager.
    pub master_user_secret_kms_key_id: Option<String>,
    #[serde(default, rename(serialize = "masterUserSecretKMSKeyRef"), skip_serializing_if = "Option::is_none")]
    pub master_user_secret_kms_key_ref: Option<AWSResourceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The name of the master user for the DB cluster.
    pub master_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The interval in seconds between points when Enhanced Monitoring
    /// metrics are collected for the DB cluster.
    pub monitoring_interval: Option<i64>,
    #[serde(default, rename(serialize = "monitoringRoleARN"), skip_serializing_if = "Option::is_none")]
    /// The Amazon Resource Name for the IAM role that permits RDS to send
    /// Enhanced Monitoring metrics to CloudWatch Logs.
    pub monitoring_role_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The network type of the DB cluster, IPV4 or DUAL.
    pub network_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The port number on which the instances in the DB cluster accept
    /// connections.
    pub port: Option<i64>,
    #[serde(default, rename(serialize = "preSignedURL"), skip_serializing_if = "Option::is_none")]
    /// When you are replicating a DB cluster from one Region to another,
    /// the URL that contains a Signature Version 4 signed request.
    pub pre_signed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The daily time range during which automated backups are created, in
    /// Universal Coordinated Time.
    pub preferred_backup_window: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The weekly time range during which system maintenance can occur, in
    /// Universal Coordinated Time.
    pub preferred_maintenance_window: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether the DB cluster is publicly accessible.
    pub publicly_accessible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The Amazon Resource Name of the source DB instance or DB cluster if
    /// this DB cluster is created as a read replica.
    pub replication_source_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// For DB clusters in serverless DB engine mode, the scaling properties
    /// of the DB cluster.
    pub scaling_configuration: Option<ScalingConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serverless_v2_scaling_configuration: Option<ServerlessV2ScalingConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The identifier for the DB snapshot or DB cluster snapshot to restore
    /// from.
    pub snapshot_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The Region which contains the source DB cluster when replicating a
    /// DB cluster.
    pub source_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether the DB cluster is encrypted.
    pub storage_encrypted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The storage type to associate with the DB cluster.
    pub storage_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Tags to assign to the DB cluster.
    pub tags: Option<Vec<Tag>>,
    #[serde(default, rename(serialize = "vpcSecurityGroupIDs"), skip_serializing_if = "Option::is_none")]
    /// A list of EC2 VPC security groups to associate with this DB cluster.
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_refs: Option<Vec<AWSResourceReference>>,
}

impl AckCustomResource for DBCluster {
    type Spec = DBClusterSpec;

    fn from_parts(metadata: ObjectMeta, spec: Self::Spec) -> Self {
        DBCluster { metadata, spec }
    }
}
