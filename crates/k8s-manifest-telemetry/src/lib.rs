//! Telemetry setup for the k8s-manifest binaries.
//!
//! See [`tracing::Tracing`] to get started.

pub mod tracing;
