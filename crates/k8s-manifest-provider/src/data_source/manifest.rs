use std::marker::PhantomData;

use convert_case::{Case, Casing};
use k8s_manifest_shared::yaml;
use serde::Serialize;
use serde_json::Value;
use snafu::{IntoError, ResultExt, Snafu};
use tracing::instrument;

use super::{DataSource, ReadRequest, ReadResponse};
use crate::{
    diagnostics::{AttributePath, Diagnostic},
    manifest::Manifest,
    schema::DataSourceSchema,
};

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to decode the {kind} configuration"))]
    DecodeConfig {
        source: serde_json::Error,
        kind: &'static str,

        /// Location of the offending value, `None` when the configuration as a whole is wrong.
        path: Option<AttributePath>,
    },

    #[snafu(display("failed to serialize the {kind} manifest to YAML"))]
    MarshalYaml {
        source: yaml::Error,
        kind: &'static str,
    },

    #[snafu(display("failed to convert the {kind} manifest into state"))]
    EncodeState {
        source: serde_json::Error,
        kind: &'static str,
    },
}

impl Error {
    /// The summary of the diagnostic reported for this error.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::DecodeConfig { .. } => "Unable to decode configuration",
            Self::MarshalYaml { .. } => "Unable to marshal YAML",
            Self::EncodeState { .. } => "Unable to store state",
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::from_error(self.summary(), self);
        match self {
            Self::DecodeConfig {
                path: Some(path), ..
            } => diagnostic.with_attribute(path.clone()),
            _ => diagnostic,
        }
    }
}

/// The state written for a manifest data source: the configuration plus the computed attributes.
#[derive(Serialize)]
struct ManifestState<'a, M> {
    id: String,
    yaml: String,

    #[serde(flatten)]
    manifest: &'a M,
}

/// A data source rendering manifests of type `M`.
///
/// One implementation serves every custom resource, the resource specific parts come from the
/// [`Manifest`] implementation of `M`.
pub struct ManifestDataSource<M> {
    _manifest: PhantomData<fn() -> M>,
}

impl<M> Default for ManifestDataSource<M> {
    fn default() -> Self {
        Self {
            _manifest: PhantomData,
        }
    }
}

impl<M: Manifest> ManifestDataSource<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The part of the type name following the provider name, e.g.
    /// `app_redislabs_com_redis_enterprise_cluster_v1alpha1_manifest`.
    pub fn type_name_suffix() -> String {
        let group = M::GROUP.replace(['.', '-'], "_");
        let kind = M::KIND.to_case(Case::Snake);

        if group.is_empty() {
            format!("{kind}_{version}_manifest", version = M::VERSION)
        } else {
            format!("{group}_{kind}_{version}_manifest", version = M::VERSION)
        }
    }

    /// Decodes the configuration, which uses the field names of the resource itself.
    pub fn decode(config: Value) -> Result<M> {
        serde_path_to_error::deserialize(config).map_err(|err| {
            let path = AttributePath::from_deserialize_path(err.path());
            DecodeConfigSnafu {
                kind: M::KIND,
                path,
            }
            .into_error(err.into_inner())
        })
    }

    /// Renders the manifest and assembles the resulting state.
    pub fn render(manifest: &M) -> Result<Value> {
        let id = manifest.metadata().id();
        tracing::debug!(%id, "rendering manifest");

        let yaml = manifest
            .to_yaml()
            .context(MarshalYamlSnafu { kind: M::KIND })?;

        serde_json::to_value(ManifestState { id, yaml, manifest })
            .context(EncodeStateSnafu { kind: M::KIND })
    }
}

impl<M: Manifest> DataSource for ManifestDataSource<M> {
    fn type_name(&self, provider_type_name: &str) -> String {
        format!("{provider_type_name}_{}", Self::type_name_suffix())
    }

    fn schema(&self) -> DataSourceSchema {
        DataSourceSchema::for_manifest::<M>()
    }

    #[instrument(name = "read_manifest", skip_all, fields(kind = M::KIND, api_version = %M::api_version()))]
    fn read(&self, request: ReadRequest) -> ReadResponse {
        let manifest = match Self::decode(request.config) {
            Ok(manifest) => manifest,
            Err(err) => {
                tracing::warn!(error = &err as &dyn std::error::Error, "rejecting configuration");
                return ReadResponse::from_diagnostics(err.to_diagnostic());
            }
        };

        let mut diagnostics = manifest.metadata().validate();
        diagnostics.extend(manifest.warnings());
        if diagnostics.has_error() {
            tracing::warn!(
                errors = diagnostics.error_count(),
                "metadata failed validation"
            );
            return ReadResponse::from_diagnostics(diagnostics);
        }

        match Self::render(&manifest) {
            Ok(state) => ReadResponse {
                state: Some(state),
                diagnostics,
            },
            Err(err) => {
                tracing::error!(error = &err as &dyn std::error::Error, "failed to render manifest");
                let mut response = ReadResponse::from_diagnostics(diagnostics);
                response.diagnostics.push(err.to_diagnostic());
                response
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use schemars::JsonSchema;
    use serde::Deserialize;
    use serde_json::json;
    use snafu::IntoError;

    use super::*;
    use crate::{
        metadata::ManifestMetadata,
        schema::{ID_ATTRIBUTE, YAML_ATTRIBUTE},
    };

    #[derive(Debug, Deserialize, JsonSchema, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct ConfigMapLike {
        metadata: ManifestMetadata,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<std::collections::BTreeMap<String, String>>,
    }

    impl Manifest for ConfigMapLike {
        const GROUP: &'static str = "";
        const KIND: &'static str = "ConfigMapLike";
        const VERSION: &'static str = "v1";

        fn metadata(&self) -> &ManifestMetadata {
            &self.metadata
        }
    }

    #[test]
    fn type_name_without_group() {
        let data_source = ManifestDataSource::<ConfigMapLike>::new();
        assert_eq!(
            data_source.type_name("k8s"),
            "k8s_config_map_like_v1_manifest"
        );
    }

    #[test]
    fn state_contains_computed_attributes() {
        let response = ManifestDataSource::<ConfigMapLike>::new().read(ReadRequest::new(json!({
            "metadata": {"name": "x", "namespace": "y"},
            "data": {"key": "value"},
        })));

        assert!(response.diagnostics.is_empty());
        let state = response.state.unwrap();
        assert_eq!(state[ID_ATTRIBUTE], "y/x");
        assert_eq!(state["data"]["key"], "value");
        assert_eq!(
            state[YAML_ATTRIBUTE],
            "apiVersion: v1\nkind: ConfigMapLike\nmetadata:\n  name: x\n  namespace: y\ndata:\n  key: value\n"
        );
    }

    #[rstest]
    #[case(json!(null), None)]
    #[case(json!({"metadata": {"name": "x"}}), Some("metadata"))]
    #[case(
        json!({"metadata": {"name": "x", "namespace": "y"}, "data": ["not", "a", "map"]}),
        Some("data")
    )]
    #[case(
        json!({"metadata": {"name": "x", "namespace": "y"}, "data": {"tier": 1}}),
        Some("data.tier")
    )]
    fn undecodable_configuration(#[case] config: Value, #[case] attribute: Option<&str>) {
        let response = ManifestDataSource::<ConfigMapLike>::new().read(ReadRequest::new(config));

        assert_eq!(response.state, None);
        assert_eq!(response.diagnostics.len(), 1);
        let diagnostic = response.diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.summary, "Unable to decode configuration");
        assert!(
            diagnostic
                .detail
                .starts_with("failed to decode the ConfigMapLike configuration: ")
        );
        assert_eq!(
            diagnostic.attribute.as_ref().map(ToString::to_string).as_deref(),
            attribute
        );
    }

    #[test]
    fn marshal_errors_become_diagnostics() {
        let err = MarshalYamlSnafu {
            kind: "ConfigMapLike",
        }
        .into_error(yaml::Error::WriteDocumentSeparator {
            source: std::io::Error::other("closed"),
        });

        let diagnostic = err.to_diagnostic();
        assert_eq!(diagnostic.summary, "Unable to marshal YAML");
        assert_eq!(diagnostic.attribute, None);
        assert_eq!(
            diagnostic.detail,
            "failed to serialize the ConfigMapLike manifest to YAML: failed to write YAML document separator: closed"
        );
    }
}
