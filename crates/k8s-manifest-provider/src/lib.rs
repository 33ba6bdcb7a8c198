//! Read-only data sources which render Kubernetes custom resources into YAML manifests.
//!
//! Every supported resource is exposed as a [`data_source::ManifestDataSource`], registered in the
//! [`provider::Provider`] under a type name derived from its API group, kind and version.
//!
//! ## Crate Features
//!
//! - `default` enables the `clap` feature.
//! - `clap` enables the [`cli`] module and command line arguments for the telemetry options.

#[cfg(feature = "clap")]
pub mod cli;
pub mod crd;
pub mod data_source;
pub mod diagnostics;
pub mod kvp;
pub mod manifest;
pub mod metadata;
pub mod provider;
pub mod schema;
pub mod validation;

// External re-exports
pub use k8s_openapi;
pub use schemars;
// Internal re-exports
pub use k8s_manifest_shared as shared;
pub use k8s_manifest_telemetry as telemetry;
