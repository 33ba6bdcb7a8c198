//! Schemas describing the configuration accepted by data sources.

use std::collections::BTreeMap;

use schemars::Schema;
use serde::Serialize;
use serde_json::{Value, json};

use crate::manifest::Manifest;

/// Attribute holding the computed `<namespace>/<name>` identifier.
pub const ID_ATTRIBUTE: &str = "id";

/// Attribute holding the rendered YAML document.
pub const YAML_ATTRIBUTE: &str = "yaml";

/// The schema of a single data source.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceSchema {
    pub description: String,
    pub markdown_description: String,

    /// JSON schema of the configuration, including the computed attributes.
    pub attributes: Schema,
}

impl DataSourceSchema {
    /// Derives the schema of a manifest data source from the model of `M`.
    ///
    /// The computed `id` and `yaml` attributes are added as read-only properties.
    pub fn for_manifest<M: Manifest>() -> Self {
        let mut attributes = schemars::schema_for!(M);

        let object = attributes.ensure_object();
        object.insert(
            "title".to_owned(),
            Value::String(format!("{} ({})", M::KIND, M::api_version())),
        );

        let properties = object.entry("properties").or_insert_with(|| json!({}));
        if let Some(properties) = properties.as_object_mut() {
            properties.insert(
                ID_ATTRIBUTE.to_owned(),
                json!({
                    "type": "string",
                    "readOnly": true,
                    "description": "The identifier of the manifest, in the form '<namespace>/<name>'.",
                }),
            );
            properties.insert(
                YAML_ATTRIBUTE.to_owned(),
                json!({
                    "type": "string",
                    "readOnly": true,
                    "description": "The generated manifest in YAML format.",
                }),
            );
        }

        Self {
            description: format!(
                "Creates a {kind} ({api_version}) manifest and renders it as YAML. This data source does not interact with any Kubernetes cluster.",
                kind = M::KIND,
                api_version = M::api_version(),
            ),
            markdown_description: format!(
                "Creates a `{kind}` (`{api_version}`) manifest and renders it as YAML. This data source does not interact with any Kubernetes cluster.",
                kind = M::KIND,
                api_version = M::api_version(),
            ),
            attributes,
        }
    }

    /// Names of the top-level attributes, in alphabetical order.
    pub fn attribute_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .attributes
            .as_object()
            .and_then(|object| object.get("properties"))
            .and_then(Value::as_object)
            .map(|properties| properties.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }
}

/// The schemas of every data source offered by a provider, keyed by type name.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSchema {
    pub data_source_schemas: BTreeMap<String, DataSourceSchema>,
}
