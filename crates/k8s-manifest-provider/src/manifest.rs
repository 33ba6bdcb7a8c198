//! The [`Manifest`] trait implemented by every rendered custom resource.

use k8s_manifest_shared::yaml::{self, SerializeOptions};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};

use crate::{diagnostics::Diagnostics, metadata::ManifestMetadata};

/// A custom resource which can be rendered into a YAML manifest.
///
/// Implementors only model `metadata` and `spec`. The `apiVersion` and `kind` are fixed per type
/// and are added while rendering, so whatever a configuration contains for them is ignored.
pub trait Manifest: Serialize + DeserializeOwned + JsonSchema + Send + Sync + 'static {
    /// API group of the resource, empty for the core group.
    const GROUP: &'static str;

    /// API version of the resource within [`Self::GROUP`].
    const VERSION: &'static str;

    /// The resource kind in `PascalCase`.
    const KIND: &'static str;

    fn metadata(&self) -> &ManifestMetadata;

    /// Warnings about an otherwise valid configuration, like the use of deprecated attributes.
    /// They are reported alongside the state and never prevent rendering.
    fn warnings(&self) -> Diagnostics {
        Diagnostics::default()
    }

    /// The `apiVersion` of rendered documents, e.g. `app.redislabs.com/v1alpha1`.
    fn api_version() -> String {
        if Self::GROUP.is_empty() {
            Self::VERSION.to_owned()
        } else {
            format!("{group}/{version}", group = Self::GROUP, version = Self::VERSION)
        }
    }

    /// Wraps `self` together with its `apiVersion` and `kind`.
    fn to_document(&self) -> ManifestDocument<'_, Self> {
        ManifestDocument {
            api_version: Self::api_version(),
            kind: Self::KIND,
            manifest: self,
        }
    }

    /// Renders the complete manifest as a single YAML document.
    fn to_yaml(&self) -> Result<String, yaml::Error> {
        yaml::to_string(&self.to_document(), SerializeOptions::manifest())
    }
}

/// A [`Manifest`] as it is written out: `apiVersion` and `kind` first, followed by the fields of
/// the manifest itself.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDocument<'a, M> {
    pub api_version: String,
    pub kind: &'static str,

    #[serde(flatten)]
    pub manifest: &'a M,
}
