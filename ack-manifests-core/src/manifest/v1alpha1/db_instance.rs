use kube::CustomResource;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::manifest::AckCustomResource;
use crate::manifest::v1alpha1::common::{
    AWSResourceReference, ProcessorFeature, SecretKeyReference, Tag,
};

#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[kube(
    kind = "DBInstance",
    group = "rds.services.k8s.aws",
    version = "v1alpha1",
    doc = "DBInstance is the Schema for the DBInstances API.",
    derive = "PartialEq",
    namespaced
)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DBInstanceSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The amount of storage in gibibytes to allocate for the DB instance.
    pub allocated_storage: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether minor engine upgrades are applied automatically to the DB
    /// instance during the maintenance window.
    pub auto_minor_version_upgrade: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The Availability Zone in which the DB instance is created.
    pub availability_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The number of days for which automated backups are retained.
    pub backup_retention_period: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The location for storing automated backups and manual snapshots,
    /// either outposts or region.
    pub backup_target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The CA certificate identifier to use for the DB instance's server
    /// certificate.
    pub ca_certificate_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The character set to associate this DB instance with.
    pub character_set_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether to copy tags from the DB instance to snapshots of the DB
    /// instance.
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The identifier of the DB cluster that this instance will belong to.
    pub db_cluster_identifier: Option<String>,
    /// The compute and memory capacity of the DB instance, for example
    /// db.m5.large.
    pub db_instance_class: String,
    /// The identifier for this DB instance. This parameter is stored as a
    /// lowercase string.
    pub db_instance_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The meaning of this parameter differs according to the database
    /// engine you use.
    pub db_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The name of the DB parameter group to associate with this DB
    /// instance.
    pub db_parameter_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_parameter_group_ref: Option<AWSResourceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The identifier of the DB snapshot to restore from.
    pub db_snapshot_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// A DB subnet group to associate with this DB instance.
    pub db_subnet_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_ref: Option<AWSResourceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether the DB instance has deletion protection enabled. The
    /// database can't be deleted when deletion protection is enabled.
    pub deletion_protection: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The list of log types that need to be enabled for exporting to
    /// CloudWatch Logs.
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(default, rename(serialize = "enableCustomerOwnedIP"), skip_serializing_if = "Option::is_none")]
    /// Whether to enable a customer-owned IP address for an RDS on Outposts
    /// DB instance.
    pub enable_customer_owned_ip: Option<bool>,
    #[serde(default, rename(serialize = "enableIAMDatabaseAuthentication"), skip_serializing_if = "Option::is_none")]
    /// Whether to enable mapping of IAM accounts to database accounts.
    pub enable_iam_database_authentication: Option<bool>,
    /// The name of the database engine to be used for this instance, for
    /// example mysql, postgres or mariadb.
    pub engine: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The version number of the database engine to use.
    pub engine_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The amount of Provisioned IOPS to be initially allocated for the DB
    /// instance.
    pub iops: Option<i64>,
    #[serde(default, rename(serialize = "kmsKeyID"), skip_serializing_if = "Option::is_none")]
    /// The AWS KMS key identifier for an encrypted DB instance.
    pub kms_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_ref: Option<AWSResourceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The license model information for this DB instance.
    pub license_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether to manage the master user password with AWS Secrets Manager.
    pub manage_master_user_password: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The password for the master user, referenced from a Secret.
    pub master_user_password: Option<SecretKeyReference>,
    #[serde(default, rename(serialize = "masterUserSecretKMSKeyID"), skip_serializing_if = "Option::is_none")]
    /// The KMS key identifier to encrypt a secret that is automatically
    /// generated and managed in AWS Secrets Manager.
    pub master_user_secret_kms_key_id: Option<String>,
    #[serde(default, rename(serialize = "masterUserSecretKMSKeyRef"), skip_serializing_if = "Option::is_none")]
    pub master_user_secret_kms_key_ref: Option<AWSResourceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The name for the master user.
    pub master_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The upper limit in gibibytes to which Amazon RDS can automatically
    /// scale the storage of the DB instance.
    pub max_allocated_storage: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The interval in seconds between points when Enhanced Monitoring
    /// metrics are collected for the DB instance.
    pub monitoring_interval: Option<i64>,
    #[serde(default, rename(serialize = "monitoringRoleARN"), skip_serializing_if = "Option::is_none")]
    /// The Amazon Resource Name for the IAM role that permits RDS to send
    /// enhanced monitoring metrics to CloudWatch Logs.
    pub monitoring_role_arn: Option<String>,
    #[serde(default, rename(serialize = "multiAZ"), skip_serializing_if = "Option::is_none")]
    /// Whether the DB instance is a Multi-AZ deployment.
    pub multi_az: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The network type of the DB instance, IPV4 or DUAL.
    pub network_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The option group to associate the DB instance with.
    pub option_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether to enable Performance Insights for the DB instance.
    pub performance_insights_enabled: Option<bool>,
    #[serde(default, rename(serialize = "performanceInsightsKMSKeyID"), skip_serializing_if = "Option::is_none")]
    /// The AWS KMS key identifier for encryption of Performance Insights
    /// data.
    pub performance_insights_kms_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The number of days to retain Performance Insights data.
    pub performance_insights_retention_period: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The port number on which the database accepts connections.
    pub port: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The daily time range during which automated backups are created, in
    /// Universal Coordinated Time.
    pub preferred_backup_window: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The weekly time range during which system maintenance can occur, in
    /// Universal Coordinated Time.
    pub preferred_maintenance_window: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The number of CPU cores and the number of threads per core for the
    /// DB instance class of the DB instance.
    pub processor_features: Option<Vec<ProcessorFeature>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The order of priority in which an Aurora Replica is promoted to the
    /// primary instance after a failure of the existing primary instance.
    pub promotion_tier: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether the DB instance is publicly accessible.
    pub publicly_accessible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The open mode of an Oracle read replica, either open-read-only or
    /// mounted.
    pub replica_mode: Option<String>,
    #[serde(default, rename(serialize = "sourceDBInstanceIdentifier"), skip_serializing_if = "Option::is_none")]
    /// The identifier of the DB instance that will act as the source for
    /// the read replica.
    pub source_db_instance_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether the DB instance is encrypted.
    pub storage_encrypted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The storage throughput value for the DB instance.
    pub storage_throughput: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The storage type to associate with the DB instance.
    pub storage_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Tags to assign to the DB instance.
    pub tags: Option<Vec<Tag>>,
    #[serde(default, rename(serialize = "tdeCredentialARN"), skip_serializing_if = "Option::is_none")]
    /// The Amazon Resource Name from the key store with which to associate
    /// the instance for TDE encryption.
    pub tde_credential_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The time zone of the DB instance.
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether the DB instance class of the DB instance uses its default
    /// processor features.
    pub use_default_processor_features: Option<bool>,
    #[serde(default, rename(serialize = "vpcSecurityGroupIDs"), skip_serializing_if = "Option::is_none")]
    /// A list of Amazon EC2 VPC security groups to associate with this DB
    /// instance.
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_refs: Option<Vec<AWSResourceReference>>,
}

impl AckCustomResource for DBInstance {
    type Spec = DBInstanceSpec;

    fn from_parts(metadata: ObjectMeta, spec: Self::Spec) -> Self {
        DBInstance { metadata, spec }
    }
}
