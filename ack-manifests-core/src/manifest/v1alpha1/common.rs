use serde::{Deserialize, Serialize};
use schemars::JsonSchema;


/// A key/value pair attached to the AWS resource.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Reference to a key in a Secret holding a sensitive field value.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct SecretKeyReference {
    /// The key within the Secret data map.
    pub key: String,
    /// The name of the Secret.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The namespace of the Secret; defaults to the resource's namespace.
    pub namespace: Option<String>,
}

/// Reference to another ACK-managed resource that supplies a field value
/// once that resource has been created.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct AWSResourceReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<AWSResourceReferenceFrom>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct AWSResourceReferenceFrom {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// A processor feature (`coreCount` or `threadsPerCore`) of a DB instance class.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct ProcessorFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Authorization for a database user to connect through a DB proxy.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct UserAuthConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The type of authentication the proxy uses for connections from clients.
    pub auth_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The type of authentication the proxy uses for connections to the database.
    pub client_password_auth_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// A user-specified description about the authentication.
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether to require IAM authentication for connections to the proxy.
    pub iam_auth: Option<String>,
    #[serde(default, rename(serialize = "secretARN"), skip_serializing_if = "Option::is_none")]
    /// The Amazon Resource Name of the secret holding the database credentials.
    pub secret_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The name of the database user.
    pub user_name: Option<String>,
}

/// Aurora Serverless v1 scaling properties of a DB cluster.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ScalingConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether to allow the cluster to pause when idle.
    pub auto_pause: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The maximum capacity in Aurora capacity units.
    pub max_capacity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The minimum capacity in Aurora capacity units.
    pub min_capacity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds_before_timeout: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds_until_auto_pause: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The action to take when the timeout is reached.
    pub timeout_action: Option<String>,
}

/// Aurora Serverless v2 scaling properties of a DB cluster.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ServerlessV2ScalingConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The maximum capacity in Aurora capacity units.
    pub max_capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// The minimum capacity in Aurora capacity units.
    pub min_capacity: Option<f64>,
}
