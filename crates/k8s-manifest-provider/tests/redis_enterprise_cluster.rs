use indoc::indoc;
use k8s_manifest_provider::{
    crd::app_redislabs_com::v1alpha1::RedisEnterpriseCluster,
    data_source::{DataSource, ManifestDataSource, ReadRequest},
    diagnostics::Severity,
};
use rstest::rstest;
use serde_json::{Value, json};

fn read(config: Value) -> k8s_manifest_provider::data_source::ReadResponse {
    ManifestDataSource::<RedisEnterpriseCluster>::new().read(ReadRequest::new(config))
}

#[test]
fn renders_minimal_cluster() {
    let response = read(json!({
        "metadata": {"name": "x", "namespace": "y"},
    }));

    assert!(response.diagnostics.is_empty(), "{}", response.diagnostics);
    assert_eq!(response.state_attribute("id"), Some("y/x"));
    assert_eq!(
        response.state_attribute("yaml"),
        Some(indoc! {"
            apiVersion: app.redislabs.com/v1alpha1
            kind: RedisEnterpriseCluster
            metadata:
              name: x
              namespace: y
        "})
    );
}

#[test]
fn type_information_cannot_be_overridden() {
    let response = read(json!({
        "apiVersion": "example.com/v2",
        "kind": "Something",
        "metadata": {"name": "x", "namespace": "y"},
    }));

    let yaml = response.state_attribute("yaml").unwrap();
    assert!(yaml.starts_with("apiVersion: app.redislabs.com/v1alpha1\nkind: RedisEnterpriseCluster\n"));
    assert!(!yaml.contains("example.com"));
    assert!(!yaml.contains("Something"));
}

#[test]
fn renders_nested_spec() {
    let response = read(json!({
        "metadata": {
            "name": "rec",
            "namespace": "redis",
            "labels": {"app.kubernetes.io/name": "redis"},
        },
        "spec": {
            "nodes": 3,
            "uiServiceType": "LoadBalancer",
            "persistentSpec": {"enabled": true, "volumeSize": "20Gi"},
            "slaveHA": {"slaveHAGracePeriod": 900},
            "containerTimezone": {"propagateHost": {}},
        },
    }));

    assert_eq!(
        response.state_attribute("yaml"),
        Some(indoc! {"
            apiVersion: app.redislabs.com/v1alpha1
            kind: RedisEnterpriseCluster
            metadata:
              name: rec
              namespace: redis
              labels:
                app.kubernetes.io/name: redis
            spec:
              containerTimezone:
                propagateHost: {}
              nodes: 3
              persistentSpec:
                enabled: true
                volumeSize: 20Gi
              slaveHA:
                slaveHAGracePeriod: 900
              uiServiceType: LoadBalancer
        "})
    );
}

#[test]
fn rendered_spec_round_trips() {
    let spec = json!({
        "nodes": 5,
        "redisEnterpriseNodeResources": {
            "limits": {"cpu": "2", "memory": "4Gi"},
            "requests": {"cpu": "2", "memory": "4Gi"},
        },
        "podTolerations": [
            {"key": "dedicated", "operator": "Equal", "value": "redis", "effect": "NoSchedule"},
        ],
        "redisEnterpriseImageSpec": {
            "imagePullPolicy": "IfNotPresent",
            "repository": "redislabs/redis",
            "versionTag": "7.4.2-54",
        },
        "ldap": {
            "protocol": "LDAPS",
            "servers": [{"host": "ldap.example.com", "port": 636}],
        },
        "vaultCASecret": "vault-ca",
    });

    let response = read(json!({
        "metadata": {"name": "rec", "namespace": "redis"},
        "spec": spec,
    }));

    let rendered: Value = serde_yaml::from_str(response.state_attribute("yaml").unwrap()).unwrap();
    assert_eq!(rendered["spec"], spec);

    let state = response.state.unwrap();
    assert_eq!(state["spec"], spec);
    assert_eq!(state["metadata"]["name"], "rec");
}

#[test]
fn unset_fields_are_omitted() {
    let response = read(json!({
        "metadata": {"name": "rec", "namespace": "redis"},
        "spec": {
            "persistentSpec": {"enabled": true},
            "services": {},
        },
    }));

    let yaml = response.state_attribute("yaml").unwrap();
    assert!(!yaml.contains("null"), "{yaml}");
    assert!(!yaml.contains("volumeSize"), "{yaml}");
    assert!(yaml.contains("services: {}"), "{yaml}");
}

#[rstest]
#[case::service_type(json!({"uiServiceType": "Internal"}), "spec.uiServiceType")]
#[case::upgrade_policy(json!({"redisUpgradePolicy": "newest"}), "spec.redisUpgradePolicy")]
#[case::ldap_protocol(json!({"ldap": {"protocol": "ldap"}}), "spec.ldap.protocol")]
#[case::ldap_server(
    json!({"ldap": {"servers": [{"host": "ldap-0"}, {"host": "ldap-1", "port": "636"}]}}),
    "spec.ldap.servers[1].port"
)]
#[case::wrong_type(json!({"nodes": "three"}), "spec.nodes")]
fn invalid_spec_values(#[case] spec: Value, #[case] attribute: &str) {
    let response = read(json!({
        "metadata": {"name": "rec", "namespace": "redis"},
        "spec": spec,
    }));

    assert_eq!(response.state, None);
    assert_eq!(response.diagnostics.error_count(), 1);
    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.summary, "Unable to decode configuration");
    assert_eq!(
        diagnostic.attribute.as_ref().map(ToString::to_string).as_deref(),
        Some(attribute)
    );
}

#[test]
fn unknown_ldap_protocol_names_the_allowed_values() {
    let response = read(json!({
        "metadata": {"name": "rec", "namespace": "redis"},
        "spec": {"ldap": {"protocol": "ldap"}},
    }));

    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(
        diagnostic.to_string(),
        "error: Unable to decode configuration (at spec.ldap.protocol): failed to decode the \
         RedisEnterpriseCluster configuration: unknown variant `ldap`, expected one of `LDAP`, \
         `LDAPS`, `STARTTLS`"
    );
}

#[test]
fn deprecated_pod_security_policy_is_a_warning() {
    let response = read(json!({
        "metadata": {"name": "rec", "namespace": "redis"},
        "spec": {"podSecurityPolicyName": "redis-enterprise-psp"},
    }));

    assert!(!response.diagnostics.has_error());
    assert_eq!(response.diagnostics.len(), 1);
    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.summary, "Deprecated attribute");
    assert_eq!(
        diagnostic.attribute.as_ref().unwrap().to_string(),
        "spec.podSecurityPolicyName"
    );

    let yaml = response.state_attribute("yaml").unwrap();
    assert!(yaml.contains("podSecurityPolicyName: redis-enterprise-psp"), "{yaml}");
}

#[test]
fn invalid_metadata_is_reported_per_attribute() {
    let response = read(json!({
        "metadata": {
            "name": "Not_Valid",
            "namespace": "y",
            "labels": {"-bad": "value"},
        },
    }));

    assert_eq!(response.state, None);
    let attributes: Vec<String> = response
        .diagnostics
        .iter()
        .map(|diagnostic| diagnostic.attribute.as_ref().unwrap().to_string())
        .collect();
    assert_eq!(attributes, ["metadata.name", r#"metadata.labels["-bad"]"#]);
}

#[test]
fn schema_includes_computed_attributes() {
    let schema = ManifestDataSource::<RedisEnterpriseCluster>::new().schema();

    assert_eq!(schema.attribute_names(), ["id", "metadata", "spec", "yaml"]);

    let attributes = serde_json::to_value(&schema.attributes).unwrap();
    assert_eq!(attributes["properties"]["id"]["readOnly"], true);
    assert_eq!(attributes["properties"]["yaml"]["readOnly"], true);
    assert_eq!(attributes["required"], json!(["metadata"]));
}
