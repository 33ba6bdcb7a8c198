use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    diagnostics::{AttributePath, Diagnostic, Diagnostics},
    kvp, validation,
};

/// Standard object metadata of a rendered manifest.
///
/// Only the fields a user can meaningfully set before the object exists are accepted; everything
/// the API server fills in (uid, resourceVersion, ...) is left out.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestMetadata {
    /// Unique name of the object within its namespace. Must be a lowercase DNS subdomain.
    #[schemars(length(min = 1, max = 253))]
    pub name: String,

    /// Namespace the object is created in. Must be a lowercase DNS label.
    #[schemars(length(min = 1, max = 63))]
    pub namespace: String,

    /// Map of string keys and values that can be used to organize and categorize objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    /// Unstructured key value map stored with a resource that may be set by external tools to
    /// store and retrieve arbitrary metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl ManifestMetadata {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// The identifier of the rendered object, `<namespace>/<name>`.
    pub fn id(&self) -> String {
        format!("{namespace}/{name}", namespace = self.namespace, name = self.name)
    }

    /// Checks every field against the formats enforced by the API server.
    ///
    /// All violations are collected, each diagnostic points at the offending attribute.
    pub fn validate(&self) -> Diagnostics {
        let mut diagnostics = Diagnostics::default();
        let metadata = AttributePath::root("metadata");

        if let Err(err) = validation::validate_object_name(&self.name) {
            diagnostics.push(
                Diagnostic::from_error("Invalid object name", &err)
                    .with_attribute(metadata.clone().attribute("name")),
            );
        }

        if let Err(err) = validation::validate_namespace_name(&self.namespace) {
            diagnostics.push(
                Diagnostic::from_error("Invalid namespace", &err)
                    .with_attribute(metadata.clone().attribute("namespace")),
            );
        }

        for (key, value) in self.labels.iter().flatten() {
            if let Err(err) = kvp::parse_label(key, value) {
                diagnostics.push(
                    Diagnostic::from_error("Invalid label", &err)
                        .with_attribute(metadata.clone().attribute("labels").map_key(key)),
                );
            }
        }

        if let Some(annotations) = &self.annotations {
            for key in annotations.keys() {
                if let Err(err) = kvp::parse_annotation_key(key) {
                    diagnostics.push(
                        Diagnostic::from_error("Invalid annotation key", &err)
                            .with_attribute(metadata.clone().attribute("annotations").map_key(key)),
                    );
                }
            }

            if let Err(err) = kvp::validate_annotations_size(annotations) {
                diagnostics.push(
                    Diagnostic::from_error("Annotations too large", &err)
                        .with_attribute(metadata.attribute("annotations")),
                );
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn attributes(diagnostics: &Diagnostics) -> Vec<String> {
        diagnostics
            .iter()
            .filter_map(|d| d.attribute.as_ref().map(ToString::to_string))
            .collect()
    }

    #[test]
    fn id_is_namespace_slash_name() {
        assert_eq!(ManifestMetadata::new("y", "x").id(), "y/x");
    }

    #[test]
    fn valid_metadata_has_no_diagnostics() {
        let metadata = ManifestMetadata {
            labels: Some(BTreeMap::from([
                ("app.kubernetes.io/name".to_owned(), "redis".to_owned()),
                ("empty".to_owned(), String::new()),
            ])),
            annotations: Some(BTreeMap::from([(
                "Redislabs.com/Note".to_owned(),
                "any text at all, even with spaces".to_owned(),
            )])),
            ..ManifestMetadata::new("redis", "rec.prod")
        };

        assert!(metadata.validate().is_empty());
    }

    #[rstest]
    #[case("x", "Y", &["metadata.namespace"])]
    #[case("X", "y", &["metadata.name"])]
    #[case("", "", &["metadata.name", "metadata.namespace"])]
    #[case("a.b", "a.b", &["metadata.namespace"])]
    fn invalid_name_and_namespace(
        #[case] name: &str,
        #[case] namespace: &str,
        #[case] expected: &[&str],
    ) {
        let diagnostics = ManifestMetadata::new(namespace, name).validate();

        assert!(diagnostics.has_error());
        assert_eq!(attributes(&diagnostics), expected);
    }

    #[test]
    fn invalid_labels_point_at_their_key() {
        let metadata = ManifestMetadata {
            labels: Some(BTreeMap::from([
                ("bad key".to_owned(), "v".to_owned()),
                ("good".to_owned(), "-bad-value".to_owned()),
                ("fine".to_owned(), "ok".to_owned()),
            ])),
            ..ManifestMetadata::new("y", "x")
        };
        let diagnostics = metadata.validate();

        assert_eq!(
            attributes(&diagnostics),
            [r#"metadata.labels["bad key"]"#, r#"metadata.labels["good"]"#]
        );
        assert!(diagnostics.iter().all(|d| d.summary == "Invalid label"));
    }

    #[rstest]
    #[case("bad key")]
    #[case("-note")]
    #[case("redislabs.com/nested/note")]
    #[case("redislabs_com/note")]
    #[case("redislabs.com/")]
    fn invalid_annotation_keys_point_at_their_key(#[case] key: &str) {
        let metadata = ManifestMetadata {
            annotations: Some(BTreeMap::from([
                (key.to_owned(), "value".to_owned()),
                ("redislabs.com/owner".to_owned(), "platform".to_owned()),
            ])),
            ..ManifestMetadata::new("y", "x")
        };
        let diagnostics = metadata.validate();

        assert_eq!(
            attributes(&diagnostics),
            [format!("metadata.annotations[{key:?}]")]
        );
        let diagnostic = diagnostics.iter().next().unwrap();
        assert!(diagnostic.is_error());
        assert_eq!(diagnostic.summary, "Invalid annotation key");
    }

    #[test]
    fn oversized_annotations() {
        let metadata = ManifestMetadata {
            annotations: Some(BTreeMap::from([(
                "huge".to_owned(),
                "x".repeat(kvp::TOTAL_ANNOTATION_SIZE_LIMIT),
            )])),
            ..ManifestMetadata::new("y", "x")
        };
        let diagnostics = metadata.validate();

        assert_eq!(attributes(&diagnostics), ["metadata.annotations"]);
    }
}
