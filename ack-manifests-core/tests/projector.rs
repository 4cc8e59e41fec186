use serde_json::json;

use ack_manifests_core::projector::registry::{Registry, RenderOptions};

#[test]
fn db_parameter_group_scenario() {
    let registry = Registry::new();
    let doc = json!({
        "kind": "DBParameterGroup",
        "metadata": {"name": "pg1", "namespace": "default"},
        "spec": {"description": "x", "family": "mysql8.0", "name": "pg1"},
    });

    let projected = registry.render(doc, &RenderOptions::default()).unwrap();

    assert_eq!(projected.id.as_deref(), Some("default/pg1"));
    assert!(projected.yaml.contains("apiVersion: rds.services.k8s.aws/v1alpha1"));
    assert!(projected.yaml.contains("kind: DBParameterGroup"));

    let manifest: serde_json::Value = serde_norway::from_str(&projected.yaml).unwrap();
    let spec = manifest.get("spec").and_then(|s| s.as_object()).unwrap();

    assert_eq!(spec.len(), 3);
    assert_eq!(spec.get("description"), Some(&json!("x")));
    assert_eq!(spec.get("family"), Some(&json!("mysql8.0")));
    assert_eq!(spec.get("name"), Some(&json!("pg1")));
    assert!(!spec.contains_key("tags"));
}

#[test]
fn output_round_trips_to_config_plus_identity() {
    let registry = Registry::new();
    let doc = json!({
        "kind": "DBInstance",
        "metadata": {
            "name": "db1",
            "namespace": "prod",
            "labels": {"app.kubernetes.io/name": "db1"},
        },
        "spec": {
            "allocated_storage": 100,
            "db_instance_class": "db.m5.large",
            "db_instance_identifier": "db1",
            "engine": "postgres",
            "engine_version": "15.3",
            "master_user_password": {"key": "password", "name": "db1-creds"},
            "master_username": "admin",
            "multi_az": true,
            "tags": [{"key": "env", "value": "prod"}],
            "vpc_security_group_ids": ["sg-12345"],
        },
    });

    let projected = registry.render(doc, &RenderOptions::default()).unwrap();
    let manifest: serde_json::Value = serde_norway::from_str(&projected.yaml).unwrap();

    assert_eq!(manifest, json!({
        "apiVersion": "rds.services.k8s.aws/v1alpha1",
        "kind": "DBInstance",
        "metadata": {
            "name": "db1",
            "namespace": "prod",
            "labels": {"app.kubernetes.io/name": "db1"},
        },
        "spec": {
            "allocatedStorage": 100,
            "dbInstanceClass": "db.m5.large",
            "dbInstanceIdentifier": "db1",
            "engine": "postgres",
            "engineVersion": "15.3",
            "masterUserPassword": {"key": "password", "name": "db1-creds"},
            "masterUsername": "admin",
            "multiAZ": true,
            "tags": [{"key": "env", "value": "prod"}],
            "vpcSecurityGroupIDs": ["sg-12345"],
        },
    }));
}

#[test]
fn repeated_rendering_is_byte_identical() {
    let registry = Registry::new();
    let doc = json!({
        "kind": "DBCluster",
        "metadata": {"name": "c1", "namespace": "default"},
        "spec": {
            "db_cluster_identifier": "c1",
            "engine": "aurora-postgresql",
            "serverless_v2_scaling_configuration": {"max_capacity": 8.5, "min_capacity": 0.5},
        },
    });

    let first = registry.render(doc.clone(), &RenderOptions::default()).unwrap();
    let second = registry.render(doc, &RenderOptions::default()).unwrap();

    assert_eq!(first.yaml, second.yaml);
    assert_eq!(first.id, second.id);
}

#[test]
fn identifier_order_is_a_per_kind_convention() {
    let registry = Registry::new();

    let proxy = json!({
        "kind": "DBProxy",
        "metadata": {"name": "a", "namespace": "b"},
        "spec": {
            "auth": [{"auth_scheme": "SECRETS", "iam_auth": "DISABLED"}],
            "engine_family": "POSTGRESQL",
            "name": "a",
            "role_arn": "arn:aws:iam::123456789012:role/proxy",
            "vpc_subnet_ids": ["subnet-1", "subnet-2"],
        },
    });
    let projected = registry.render(proxy, &RenderOptions::default()).unwrap();
    assert_eq!(projected.id.as_deref(), Some("a/b"));

    let cluster = json!({
        "kind": "DBCluster",
        "metadata": {"name": "a", "namespace": "b"},
        "spec": {"db_cluster_identifier": "a", "engine": "aurora-mysql"},
    });
    let projected = registry.render(cluster, &RenderOptions::default()).unwrap();
    assert_eq!(projected.id.as_deref(), Some("b/a"));
}

#[test]
fn snake_case_input_renders_as_camel_case() {
    let registry = Registry::new();
    let doc = json!({
        "kind": "DBSubnetGroup",
        "metadata": {"name": "sg1", "namespace": "default"},
        "spec": {
            "description": "primary subnets",
            "name": "sg1",
            "subnet_ids": ["subnet-1", "subnet-2"],
            "tags": [{"key": "env", "value": "prod"}],
        },
    });

    let projected = registry.render(doc, &RenderOptions::default()).unwrap();

    assert!(projected.yaml.contains("subnetIDs:"));
    assert!(!projected.yaml.contains("subnet_ids"));
}

#[test]
fn misshapen_spec_is_a_decode_error() {
    let registry = Registry::new();
    let doc = json!({
        "kind": "DBParameterGroup",
        "metadata": {"name": "pg1", "namespace": "default"},
        "spec": {"description": "x", "family": "mysql8.0"},
    });

    let err = registry.render(doc, &RenderOptions::default()).unwrap_err();
    assert!(err.to_string().contains("failed to decode configuration"));
}
