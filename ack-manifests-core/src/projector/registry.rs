use std::collections::BTreeMap;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::Resource;
use serde_json::Value;

use ack_manifests_common::telemetry::debug;

use crate::error::{ProjectorError, Result};
use crate::manifest::AckCustomResource;
use crate::manifest::v1alpha1::{
    db_cluster::DBCluster,
    db_cluster_parameter_group::DBClusterParameterGroup,
    db_instance::DBInstance,
    db_parameter_group::DBParameterGroup,
    db_proxy::DBProxy,
    db_subnet_group::DBSubnetGroup,
    global_cluster::GlobalCluster,
};
use crate::projector::project::{project, IdOrder, ManifestInput, Projected};
use crate::projector::validate::validate_metadata;

/// Options applied to every document in a render invocation.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Namespace stamped into documents that omit `metadata.namespace`.
    pub default_namespace: Option<String>,
}

/// Identity constants and conventions for one registered resource kind.
#[derive(Debug, Clone)]
pub struct KindDescriptor {
    pub kind: String,
    pub api_version: String,
    pub display_name: &'static str,
    /// The identifier order this kind has always used; `None` when the
    /// kind declares no identifier output.
    pub id_order: Option<IdOrder>,
}

type RenderFn = fn(Value, Option<IdOrder>, &RenderOptions) -> Result<Projected>;
type CrdFn = fn() -> CustomResourceDefinition;

struct KindEntry {
    descriptor: KindDescriptor,
    render: RenderFn,
    crd: CrdFn,
}

/// Immutable mapping from kind name to its descriptor and render function,
/// built once at process start and passed by reference.
pub struct Registry {
    kinds: BTreeMap<String, KindEntry>,
}

impl Registry {
    pub fn new() -> Self {
        let mut registry = Registry { kinds: BTreeMap::new() };

        registry.register::<DBCluster>("DB Cluster", Some(IdOrder::NamespaceName));
        registry.register::<DBClusterParameterGroup>("DB Cluster Parameter Group", Some(IdOrder::NamespaceName));
        registry.register::<DBInstance>("DB Instance", Some(IdOrder::NamespaceName));
        registry.register::<DBParameterGroup>("DB Parameter Group", Some(IdOrder::NamespaceName));
        registry.register::<DBProxy>("DB Proxy", Some(IdOrder::NameNamespace));
        registry.register::<DBSubnetGroup>("DB Subnet Group", Some(IdOrder::NamespaceName));
        registry.register::<GlobalCluster>("Global Cluster", Some(IdOrder::NameNamespace));

        registry
    }

    fn register<K>(&mut self, display_name: &'static str, id_order: Option<IdOrder>)
    where
        K: AckCustomResource,
    {
        let descriptor = KindDescriptor {
            kind: K::kind(&()).to_string(),
            api_version: K::api_version(&()).to_string(),
            display_name,
            id_order,
        };

        self.kinds.insert(descriptor.kind.clone(), KindEntry {
            descriptor,
            render: render_document::<K>,
            crd: K::crd,
        });
    }

    pub fn get(&self, kind: &str) -> Option<&KindDescriptor> {
        self.kinds.get(kind).map(|entry| &entry.descriptor)
    }

    /// The declared schema for a kind, as a CustomResourceDefinition.
    pub fn crd(&self, kind: &str) -> Option<CustomResourceDefinition> {
        self.kinds.get(kind).map(|entry| (entry.crd)())
    }

    /// Descriptors for every registered kind, in kind-name order.
    pub fn descriptors(&self) -> impl Iterator<Item = &KindDescriptor> {
        self.kinds.values().map(|entry| &entry.descriptor)
    }

    /// Render one configuration document, dispatching on its `kind` field.
    pub fn render(&self, doc: Value, options: &RenderOptions) -> Result<Projected> {
        let kind = doc
            .get("kind")
            .and_then(Value::as_str)
            .ok_or_else(|| ProjectorError::ValidationError("document is missing a `kind` field".to_string()))?
            .to_string();

        let entry = match self.kinds.get(&kind) {
            Some(entry) => entry,
            None => return Err(ProjectorError::UnknownKindError(kind)),
        };

        let projected = (entry.render)(doc, entry.descriptor.id_order, options)?;
        debug!(
            event = "Projected",
            kind = kind.as_str(),
            id = projected.id.as_deref().unwrap_or_default(),
        );

        Ok(projected)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode, validate and project one document for a concrete resource kind
fn render_document<K>(doc: Value, id_order: Option<IdOrder>, options: &RenderOptions) -> Result<Projected>
where
    K: AckCustomResource,
{
    let mut input: ManifestInput<K::Spec> = serde_json::from_value(doc)?;

    if input.metadata.namespace.is_none() {
        input.metadata.namespace = options.default_namespace.clone();
    }

    validate_metadata(&input.metadata)?;

    let manifest = K::from_parts(input.metadata.into_object_meta(), input.spec);
    project(&manifest, id_order)
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn registers_every_supported_kind() {
        let registry = Registry::new();
        let kinds: Vec<_> = registry.descriptors().map(|d| d.kind.clone()).collect();

        assert_eq!(kinds, vec![
            "DBCluster",
            "DBClusterParameterGroup",
            "DBInstance",
            "DBParameterGroup",
            "DBProxy",
            "DBSubnetGroup",
            "GlobalCluster",
        ]);

        for descriptor in registry.descriptors() {
            assert_eq!(descriptor.api_version, "rds.services.k8s.aws/v1alpha1");
        }

        let crd = registry.crd("DBInstance").unwrap();
        assert_eq!(crd.spec.names.kind, "DBInstance");
        assert!(registry.crd("DBSnapshot").is_none());
    }

    #[test]
    fn renders_a_document_by_kind() {
        let registry = Registry::new();
        let doc = json!({
            "kind": "DBParameterGroup",
            "metadata": {"name": "pg1", "namespace": "default"},
            "spec": {"description": "x", "family": "mysql8.0", "name": "pg1"},
        });

        let projected = registry.render(doc, &RenderOptions::default()).unwrap();
        assert_eq!(projected.id.as_deref(), Some("default/pg1"));
        assert!(projected.yaml.contains("kind: DBParameterGroup"));
    }

    #[test]
    fn injected_constants_cannot_be_overridden() {
        let registry = Registry::new();
        let doc = json!({
            "apiVersion": "example.com/v9",
            "kind": "GlobalCluster",
            "metadata": {"name": "g1", "namespace": "default"},
            "spec": {"engine": "aurora-postgresql"},
        });

        let projected = registry.render(doc, &RenderOptions::default()).unwrap();
        assert!(projected.yaml.contains("apiVersion: rds.services.k8s.aws/v1alpha1"));
        assert!(projected.yaml.contains("kind: GlobalCluster"));
        assert!(!projected.yaml.contains("example.com/v9"));
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let registry = Registry::new();
        let doc = json!({
            "kind": "DBSnapshot",
            "metadata": {"name": "s1", "namespace": "default"},
            "spec": {},
        });

        let err = registry.render(doc, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, ProjectorError::UnknownKindError(kind) if kind == "DBSnapshot"));
    }

    #[test]
    fn default_namespace_applies_only_when_missing() {
        let registry = Registry::new();
        let options = RenderOptions { default_namespace: Some("team-a".to_string()) };

        let doc = json!({
            "kind": "DBSubnetGroup",
            "metadata": {"name": "sg1"},
            "spec": {"description": "x", "name": "sg1", "subnet_ids": ["subnet-1"]},
        });
        let projected = registry.render(doc, &options).unwrap();
        assert_eq!(projected.id.as_deref(), Some("team-a/sg1"));
        assert!(projected.yaml.contains("namespace: team-a"));

        let doc = json!({
            "kind": "DBSubnetGroup",
            "metadata": {"name": "sg1", "namespace": "explicit"},
            "spec": {"description": "x", "name": "sg1"},
        });
        let projected = registry.render(doc, &options).unwrap();
        assert_eq!(projected.id.as_deref(), Some("explicit/sg1"));
    }

    #[test]
    fn missing_namespace_without_default_fails_validation() {
        let registry = Registry::new();
        let doc = json!({
            "kind": "DBParameterGroup",
            "metadata": {"name": "pg1"},
            "spec": {"description": "x", "family": "mysql8.0", "name": "pg1"},
        });

        let err = registry.render(doc, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, ProjectorError::ValidationError(_)));
    }
}
