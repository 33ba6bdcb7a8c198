//! The `RedisEnterpriseCluster` custom resource of the Redis Enterprise operator.

use std::collections::BTreeMap;

use k8s_openapi::{
    api::core::v1::{
        Container, EnvVar, HostAlias, LocalObjectReference, PodAntiAffinity, ResourceRequirements,
        Toleration, Volume, VolumeMount,
    },
    apimachinery::pkg::api::resource::Quantity,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::pod::{AdditionalPodSpecAttributes, ImageSpec};
use crate::{
    crd::app_redislabs_com::GROUP,
    diagnostics::{AttributePath, Diagnostic, Diagnostics},
    manifest::Manifest,
    metadata::ManifestMetadata,
};

/// A Redis Enterprise cluster, the set of nodes all databases of the operator run on.
///
/// ```yaml
/// apiVersion: app.redislabs.com/v1alpha1
/// kind: RedisEnterpriseCluster
/// metadata:
///   name: rec
///   namespace: redis
/// spec:
///   nodes: 3
///   persistentSpec:
///     enabled: true
///     volumeSize: 20Gi
/// ```
#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedisEnterpriseCluster {
    pub metadata: ManifestMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<RedisEnterpriseClusterSpec>,
}

impl Manifest for RedisEnterpriseCluster {
    const GROUP: &'static str = GROUP;
    const KIND: &'static str = "RedisEnterpriseCluster";
    const VERSION: &'static str = super::VERSION;

    fn metadata(&self) -> &ManifestMetadata {
        &self.metadata
    }

    fn warnings(&self) -> Diagnostics {
        let mut diagnostics = Diagnostics::default();

        if self
            .spec
            .as_ref()
            .is_some_and(|spec| spec.pod_security_policy_name.is_some())
        {
            diagnostics.push(
                Diagnostic::warning(
                    "Deprecated attribute",
                    "PodSecurityPolicy was removed in Kubernetes 1.25, use Pod Security Admission instead",
                )
                .with_attribute(AttributePath::root("spec").attribute("podSecurityPolicyName")),
            );
        }

        diagnostics
    }
}

/// The desired state of a [`RedisEnterpriseCluster`].
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedisEnterpriseClusterSpec {
    /// Settings for Active-Active databases spanning several clusters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_active: Option<ActiveActive>,

    /// Additional anti-affinity terms, each evaluated against the given topology key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anti_affinity_additional_topology_keys: Option<Vec<String>>,

    /// Cluster-wide backup configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup: Option<Backup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrapper_image_spec: Option<ImageSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrapper_resources: Option<ResourceRequirements>,

    /// Secrets holding the certificates of the cluster's internal services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Certificates>,

    /// Secret containing the cluster's admin credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_credential_secret_name: Option<String>,

    /// Vault role used to read the admin credentials, only for the `vault` secret type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_credential_secret_role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_credential_secret_type: Option<ClusterCredentialSecretType>,

    /// Whether the cluster is recovered from persisted data after losing quorum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_recovery: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_timezone: Option<ContainerTimezone>,

    /// Whether the operator creates the service account of the cluster pods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_service_account: Option<bool>,

    /// Encrypts the traffic between the nodes of new databases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_internode_encryption: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypt_at_rest: Option<EncryptAtRest>,

    /// Extra environment variables added to the Redis Enterprise containers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_env_vars: Option<Vec<EnvVar>>,

    /// Labels added to every resource created for the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_labels: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_aliases: Option<Vec<HostAlias>>,

    /// How the cluster API and databases are exposed outside of Kubernetes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingress_or_route_spec: Option<IngressOrRouteSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldap: Option<Ldap>,

    /// The license, inline. Prefer `licenseSecretName`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_secret_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,

    /// Number of Redis Enterprise nodes, should be an odd number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocsp_configuration: Option<OcspConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_spec: Option<PersistentSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_annotations: Option<BTreeMap<String, String>>,

    /// Overrides the default anti-affinity, which spreads the nodes over distinct hosts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_anti_affinity: Option<PodAntiAffinity>,

    /// Deprecated. Only honoured on clusters older than Kubernetes 1.25.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_security_policy_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_starting_policy: Option<PodStartingPolicy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_tolerations: Option<Vec<Toleration>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_class_name: Option<String>,

    /// Image pull secrets of the cluster pods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_secrets: Option<Vec<LocalObjectReference>>,

    /// Node label used to place the nodes in distinct racks or zones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rack_awareness_node_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_enterprise_additional_pod_spec_attributes: Option<AdditionalPodSpecAttributes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_enterprise_image_spec: Option<ImageSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_enterprise_node_resources: Option<ResourceRequirements>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_enterprise_services_configuration: Option<ServicesConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_enterprise_services_rigger_image_spec: Option<ImageSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_enterprise_services_rigger_resources: Option<ResourceRequirements>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_enterprise_termination_grace_period_seconds: Option<i64>,

    /// Additional volume mounts of the Redis Enterprise containers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_enterprise_volume_mounts: Option<Vec<VolumeMount>>,

    /// Auto Tiering (Redis on Flash) settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_on_flash_spec: Option<RedisOnFlashSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_upgrade_policy: Option<RedisUpgradePolicy>,

    /// Whether new databases use RESP3 by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resp3_default: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_context: Option<SecurityContextSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Services>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services_rigger_spec: Option<ServicesRiggerSpec>,

    /// Sidecar containers added to every Redis Enterprise pod.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_containers_spec: Option<Vec<Container>>,

    #[serde(default, rename = "slaveHA", skip_serializing_if = "Option::is_none")]
    pub slave_ha: Option<SlaveHa>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_annotations: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_service_type: Option<ServiceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_spec: Option<UpgradeSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_meter: Option<UsageMeter>,

    /// Username of the cluster admin, defaults to `demo@redislabs.com`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, rename = "vaultCASecret", skip_serializing_if = "Option::is_none")]
    pub vault_ca_secret: Option<String>,

    /// Additional volumes of the Redis Enterprise pods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<Volume>>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum ServiceType {
    ClusterIP,
    NodePort,
    LoadBalancer,
    ExternalName,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterCredentialSecretType {
    Kubernetes,
    Vault,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RedisUpgradePolicy {
    Major,
    Latest,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveActive {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_ingress_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_ingress_suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingress_annotations: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<ActiveActiveMethod>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActiveActiveMethod {
    OpenShiftRoute,
    Ingress,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3: Option<BackupS3>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupS3 {
    /// Secret holding the CA certificate used to connect to the S3 endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_certificate_secret_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_certificate_secret_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cm_certificate_secret_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldap_client_certificate_secret_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics_exporter_certificate_secret_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_certificate_secret_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syncer_certificate_secret_name: Option<String>,
}

/// Either propagate the timezone of the host, or set one by name.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerTimezone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propagate_host: Option<PropagateHost>,

    /// An IANA timezone name like `Europe/Berlin`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone_name: Option<String>,
}

/// Marker object, rendered as `{}`.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub struct PropagateHost {}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptAtRest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressOrRouteSpec {
    /// Hostname of the cluster API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_fqdn_url: Option<String>,

    /// Suffix appended to the database names to build their hostnames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_fqdn_suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingress_annotations: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<IngressMethod>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IngressMethod {
    Ingress,
    OpenShiftRoute,
    Istio,
}

/// LDAP authentication of the cluster and of its databases.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ldap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_query: Option<LdapAuthenticationQuery>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_query: Option<LdapAuthorizationQuery>,

    /// Secret with the `dn` and `password` keys used to bind to the LDAP server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind_credentials_secret_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_certificate_secret_name: Option<String>,

    #[serde(default, rename = "cacheTTLSeconds", skip_serializing_if = "Option::is_none")]
    pub cache_ttl_seconds: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_timeout_seconds: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_for_control_plane: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_for_data_plane: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<LdapProtocol>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<LdapServer>>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LdapAuthenticationQuery {
    /// Search filter used to find the user, `%s` is replaced by the username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Template for the user's DN, `%u` is replaced by the username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LdapAuthorizationQuery {
    /// Attribute of the user entry listing the groups the user belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LdapProtocol {
    Ldap,
    Ldaps,
    Starttls,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LdapServer {
    pub host: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OcspConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocsp_functionality: Option<bool>,

    /// Seconds between two queries of the OCSP responder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_frequency: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_frequency: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_max_tries: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_timeout: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_persistent_volume_resize: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<Quantity>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodStartingPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_threshold_seconds: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedisOnFlashSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub big_store_driver: Option<BigStoreDriver>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash_disk_size: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash_storage_engine: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class_name: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BigStoreDriver {
    Rocksdb,
    Speedb,
}

/// Per service overrides of the services running inside the Redis Enterprise nodes.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cm_server: Option<ServiceConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crdb_coordinator: Option<ServiceConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crdb_worker: Option<ServiceConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mdns_server: Option<ServiceConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdns_server: Option<ServiceConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saslauthd: Option<ServiceConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats_archiver: Option<ServiceConfiguration>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_mode: Option<OperatingMode>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingMode {
    Enabled,
    Disabled,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityContextSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only_root_filesystem_policy: Option<ReadOnlyRootFilesystemPolicy>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadOnlyRootFilesystemPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Services {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_service: Option<ApiService>,

    /// Annotations added to every service created for the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services_annotations: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiService {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<ServiceType>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesRiggerSpec {
    /// Comma separated list of service types created per database, e.g. `cluster_ip,headless`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_service_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_env_vars: Option<Vec<EnvVar>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_annotations: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_naming: Option<ServiceNaming>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services_rigger_additional_pod_spec_attributes: Option<AdditionalPodSpecAttributes>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum ServiceNaming {
    #[serde(rename = "bdb_name")]
    BdbName,

    #[serde(rename = "redis-port")]
    RedisPort,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaveHa {
    /// Seconds to wait before migrating shards away from a failed node.
    #[serde(default, rename = "slaveHAGracePeriod", skip_serializing_if = "Option::is_none")]
    pub slave_ha_grace_period: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_upgrade_redis_enterprise: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMeter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_home_client: Option<CallHomeClient>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallHomeClient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_spec: Option<ImageSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
}
