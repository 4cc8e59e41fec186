use std::collections::BTreeMap;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::Resource;
use serde::Deserialize;

use crate::error::Result;
use crate::manifest::AckCustomResource;

/// Identity metadata accepted at the configuration boundary.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ManifestMeta {
    pub name: String,
    /// Optional at parse time so a configured default namespace can be
    /// applied; required by the time validation runs.
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl ManifestMeta {
    pub fn into_object_meta(self) -> ObjectMeta {
        ObjectMeta {
            name: Some(self.name),
            namespace: self.namespace,
            labels: self.labels,
            annotations: self.annotations,
            ..Default::default()
        }
    }
}

/// A configuration document for one resource kind. Top-level keys other
/// than `metadata` and `spec` (including any user-supplied `apiVersion` or
/// `kind`) are ignored; the output constants come from the resource type.
#[derive(Deserialize, Debug, Clone)]
pub struct ManifestInput<S> {
    pub metadata: ManifestMeta,
    pub spec: S,
}

/// Order of the metadata fields in the computed identifier. Carried per
/// kind by the registry rather than fixed globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdOrder {
    NamespaceName,
    NameNamespace,
}

impl IdOrder {
    /// The identifier format string, for display.
    pub fn format(&self) -> &'static str {
        match self {
            IdOrder::NamespaceName => "<namespace>/<name>",
            IdOrder::NameNamespace => "<name>/<namespace>",
        }
    }

    fn compose(&self, name: &str, namespace: &str) -> String {
        match self {
            IdOrder::NamespaceName => format!("{}/{}", namespace, name),
            IdOrder::NameNamespace => format!("{}/{}", name, namespace),
        }
    }
}

/// The outcome of projecting one configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct Projected {
    /// Opaque identifier, present for kinds that declare one.
    pub id: Option<String>,
    /// The rendered YAML manifest.
    pub yaml: String,
}

/// Project a typed manifest into its YAML document and identifier.
///
/// Deterministic: structurally equal manifests produce byte-identical
/// output. A serialization failure yields no partial output.
pub fn project<K>(manifest: &K, id_order: Option<IdOrder>) -> Result<Projected>
where
    K: AckCustomResource,
{
    let yaml = serde_norway::to_string(manifest)?;

    let meta = manifest.meta();
    let id = id_order.map(|order| order.compose(
        meta.name.as_deref().unwrap_or_default(),
        meta.namespace.as_deref().unwrap_or_default(),
    ));

    Ok(Projected { id, yaml })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::v1alpha1::db_parameter_group::{DBParameterGroup, DBParameterGroupSpec};

    fn parameter_group(name: &str, namespace: &str) -> DBParameterGroup {
        let meta = ManifestMeta {
            name: name.to_string(),
            namespace: Some(namespace.to_string()),
            labels: None,
            annotations: None,
        };
        DBParameterGroup::from_parts(meta.into_object_meta(), DBParameterGroupSpec {
            description: "x".to_string(),
            family: "mysql8.0".to_string(),
            name: name.to_string(),
            parameter_overrides: None,
            tags: None,
        })
    }

    #[test]
    fn projection_is_deterministic() {
        let first = project(&parameter_group("pg1", "default"), Some(IdOrder::NamespaceName)).unwrap();
        let second = project(&parameter_group("pg1", "default"), Some(IdOrder::NamespaceName)).unwrap();

        assert_eq!(first.yaml, second.yaml);
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn identifier_follows_the_kind_order() {
        let manifest = parameter_group("a", "b");

        let projected = project(&manifest, Some(IdOrder::NamespaceName)).unwrap();
        assert_eq!(projected.id.as_deref(), Some("b/a"));

        let projected = project(&manifest, Some(IdOrder::NameNamespace)).unwrap();
        assert_eq!(projected.id.as_deref(), Some("a/b"));

        let projected = project(&manifest, None).unwrap();
        assert_eq!(projected.id, None);
    }

    #[test]
    fn constants_are_stamped_into_the_output() {
        let projected = project(&parameter_group("pg1", "default"), None).unwrap();

        assert!(projected.yaml.contains("apiVersion: rds.services.k8s.aws/v1alpha1"));
        assert!(projected.yaml.contains("kind: DBParameterGroup"));
    }

    #[test]
    fn unset_fields_are_omitted() {
        let projected = project(&parameter_group("pg1", "default"), None).unwrap();

        assert!(!projected.yaml.contains("tags"));
        assert!(!projected.yaml.contains("parameterOverrides"));
        assert!(!projected.yaml.contains("labels"));
        assert!(!projected.yaml.contains("annotations"));
    }

    #[test]
    fn id_format_strings() {
        assert_eq!(IdOrder::NamespaceName.format(), "<namespace>/<name>");
        assert_eq!(IdOrder::NameNamespace.format(), "<name>/<namespace>");
    }
}
