//! The contract between the provider host and its data sources.

use serde::Serialize;
use serde_json::Value;

use crate::{
    diagnostics::Diagnostics,
    schema::DataSourceSchema,
};

mod manifest;

pub use manifest::*;

/// A read-only data source.
///
/// Data sources are stateless. Every [`DataSource::read`] call is independent and may run
/// concurrently with other calls.
pub trait DataSource: Send + Sync {
    /// The full type name under which the data source is registered with a provider called
    /// `provider_type_name`.
    fn type_name(&self, provider_type_name: &str) -> String;

    fn schema(&self) -> DataSourceSchema;

    /// Turns the configuration in `request` into the data source's state.
    fn read(&self, request: ReadRequest) -> ReadResponse;
}

/// Input of [`DataSource::read`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadRequest {
    pub config: Value,
}

impl ReadRequest {
    pub fn new(config: Value) -> Self {
        Self { config }
    }
}

/// Output of [`DataSource::read`].
///
/// The state is only present when none of the diagnostics is an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReadResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,

    #[serde(skip_serializing_if = "Diagnostics::is_empty")]
    pub diagnostics: Diagnostics,
}

impl ReadResponse {
    pub fn from_diagnostics(diagnostics: impl Into<Diagnostics>) -> Self {
        Self {
            state: None,
            diagnostics: diagnostics.into(),
        }
    }

    /// Returns a single attribute of the state, like `id` or `yaml`.
    pub fn state_attribute(&self, name: &str) -> Option<&str> {
        self.state.as_ref()?.get(name)?.as_str()
    }
}
