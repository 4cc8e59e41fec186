pub mod utils;
pub mod v1alpha1;

use kube::{Resource, CustomResourceExt};
use k8s_openapi::NamespaceResourceScope;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

/// A namespaced ACK custom resource that can be assembled from identity
/// metadata plus a typed spec. The `apiVersion`/`kind` constants come from
/// the type itself and are stamped into the output on serialization.
pub trait AckCustomResource:
    Clone
        + Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + CustomResourceExt
        + Serialize
        + Debug
        + Send
        + Sync
        + 'static
{
    type Spec: Clone
        + Debug
        + Serialize
        + DeserializeOwned
        + JsonSchema
        + Send
        + Sync
        + 'static;

    fn from_parts(metadata: ObjectMeta, spec: Self::Spec) -> Self;
}
