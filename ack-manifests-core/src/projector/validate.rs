use crate::error::{ProjectorError, Result};
use crate::projector::project::ManifestMeta;

const MAX_SUBDOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Validate identity metadata against the Kubernetes naming conventions.
/// The projector is only ever invoked with metadata that passed here.
pub fn validate_metadata(meta: &ManifestMeta) -> Result<()> {
    if meta.name.is_empty() {
        return Err(ProjectorError::ValidationError("metadata.name must not be empty".to_string()));
    }
    if meta.name.len() > MAX_SUBDOMAIN_LEN || !is_dns_subdomain(&meta.name) {
        return Err(ProjectorError::ValidationError(format!("metadata.name `{}` is not a valid DNS subdomain", meta.name)));
    }

    match meta.namespace.as_deref() {
        None | Some("") => {
            return Err(ProjectorError::ValidationError("metadata.namespace must not be empty".to_string()));
        },
        Some(namespace) => {
            if namespace.len() > MAX_LABEL_LEN || !is_dns_label(namespace) {
                return Err(ProjectorError::ValidationError(format!("metadata.namespace `{}` is not a valid DNS label", namespace)));
            }
        },
    }

    if let Some(labels) = &meta.labels {
        for (key, value) in labels {
            if !is_qualified_name(key) {
                return Err(ProjectorError::ValidationError(format!("label key `{}` is not a valid qualified name", key)));
            }
            if !is_label_value(value) {
                return Err(ProjectorError::ValidationError(format!("label value `{}` for key `{}` is not valid", value, key)));
            }
        }
    }

    if let Some(annotations) = &meta.annotations {
        for key in annotations.keys() {
            if !is_qualified_name(key) {
                return Err(ProjectorError::ValidationError(format!("annotation key `{}` is not a valid qualified name", key)));
            }
        }
    }

    Ok(())
}

// RFC 1123 DNS label: lowercase alphanumerics and `-`, alphanumeric at
// both ends
fn is_dns_label(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && value.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

// RFC 1123 DNS subdomain: one or more DNS labels separated by `.`
fn is_dns_subdomain(value: &str) -> bool {
    !value.is_empty() && value.split('.').all(is_dns_label)
}

fn is_name_part_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'
}

// Qualified name: an optional DNS subdomain prefix followed by `/`, then a
// name of at most 63 characters, alphanumeric at both ends
fn is_qualified_name(key: &str) -> bool {
    let (prefix, name) = match key.split_once('/') {
        Some((prefix, name)) => (Some(prefix), name),
        None => (None, key),
    };

    if let Some(prefix) = prefix {
        if prefix.len() > MAX_SUBDOMAIN_LEN || !is_dns_subdomain(prefix) {
            return false;
        }
    }

    !name.is_empty()
        && name.len() <= MAX_LABEL_LEN
        && name.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
        && name.chars().last().is_some_and(|c| c.is_ascii_alphanumeric())
        && name.chars().all(is_name_part_char)
}

// Label values may be empty; otherwise at most 63 characters, alphanumeric
// at both ends
fn is_label_value(value: &str) -> bool {
    value.is_empty()
        || (value.len() <= MAX_LABEL_LEN
            && value.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
            && value.chars().last().is_some_and(|c| c.is_ascii_alphanumeric())
            && value.chars().all(is_name_part_char))
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn meta(name: &str, namespace: Option<&str>) -> ManifestMeta {
        ManifestMeta {
            name: name.to_string(),
            namespace: namespace.map(str::to_string),
            labels: None,
            annotations: None,
        }
    }

    #[test]
    fn accepts_well_formed_metadata() {
        assert!(validate_metadata(&meta("pg1", Some("default"))).is_ok());
        assert!(validate_metadata(&meta("my-cluster.prod", Some("team-a"))).is_ok());
    }

    #[test]
    fn rejects_missing_or_invalid_name() {
        assert!(validate_metadata(&meta("", Some("default"))).is_err());
        assert!(validate_metadata(&meta("Uppercase", Some("default"))).is_err());
        assert!(validate_metadata(&meta("trailing-", Some("default"))).is_err());
        assert!(validate_metadata(&meta("a..b", Some("default"))).is_err());
        assert!(validate_metadata(&meta(&"a".repeat(254), Some("default"))).is_err());
    }

    #[test]
    fn rejects_missing_or_invalid_namespace() {
        assert!(validate_metadata(&meta("pg1", None)).is_err());
        assert!(validate_metadata(&meta("pg1", Some(""))).is_err());
        assert!(validate_metadata(&meta("pg1", Some("dotted.ns"))).is_err());
        assert!(validate_metadata(&meta("pg1", Some(&"n".repeat(64)))).is_err());
    }

    #[test]
    fn validates_label_syntax() {
        let mut valid = meta("pg1", Some("default"));
        valid.labels = Some(BTreeMap::from([
            ("app.kubernetes.io/name".to_string(), "postgres".to_string()),
            ("team".to_string(), "".to_string()),
        ]));
        assert!(validate_metadata(&valid).is_ok());

        let mut bad_key = meta("pg1", Some("default"));
        bad_key.labels = Some(BTreeMap::from([("-leading".to_string(), "v".to_string())]));
        assert!(validate_metadata(&bad_key).is_err());

        let mut bad_value = meta("pg1", Some("default"));
        bad_value.labels = Some(BTreeMap::from([("team".to_string(), "has space".to_string())]));
        assert!(validate_metadata(&bad_value).is_err());
    }

    #[test]
    fn validates_annotation_keys() {
        let mut valid = meta("pg1", Some("default"));
        valid.annotations = Some(BTreeMap::from([
            ("rds.services.k8s.aws/region".to_string(), "us-east-1 or anything".to_string()),
        ]));
        assert!(validate_metadata(&valid).is_ok());

        let mut bad = meta("pg1", Some("default"));
        bad.annotations = Some(BTreeMap::from([("bad//key".to_string(), "v".to_string())]));
        assert!(validate_metadata(&bad).is_err());
    }
}
