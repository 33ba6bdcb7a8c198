//! The registry of data sources offered under a common provider type name.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::instrument;

use crate::{
    crd,
    data_source::{DataSource, ReadRequest, ReadResponse},
    diagnostics::Diagnostic,
    schema::{DataSourceSchema, ProviderSchema},
};

/// The type name of the provider, which prefixes every data source type name.
pub const PROVIDER_TYPE_NAME: &str = "k8s";

pub struct Provider {
    type_name: String,
    data_sources: BTreeMap<String, Box<dyn DataSource>>,
}

impl Default for Provider {
    /// A provider with every data source of this crate registered.
    fn default() -> Self {
        crd::data_sources()
            .into_iter()
            .fold(Self::new(PROVIDER_TYPE_NAME), Self::with_boxed_data_source)
    }
}

impl Provider {
    /// Creates a provider without any data sources.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            data_sources: BTreeMap::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn with_data_source(self, data_source: impl DataSource + 'static) -> Self {
        self.with_boxed_data_source(Box::new(data_source))
    }

    /// Registers `data_source` under its type name, replacing any data source with the same name.
    pub fn with_boxed_data_source(mut self, data_source: Box<dyn DataSource>) -> Self {
        let type_name = data_source.type_name(&self.type_name);
        tracing::trace!(data_source.type_name = %type_name, "registering data source");

        self.data_sources.insert(type_name, data_source);
        self
    }

    /// Type names of all registered data sources, in alphabetical order.
    pub fn data_source_type_names(&self) -> impl Iterator<Item = &str> {
        self.data_sources.keys().map(String::as_str)
    }

    pub fn data_source(&self, type_name: &str) -> Option<&dyn DataSource> {
        self.data_sources.get(type_name).map(|data_source| data_source.as_ref())
    }

    pub fn data_source_schema(&self, type_name: &str) -> Option<DataSourceSchema> {
        self.data_source(type_name).map(DataSource::schema)
    }

    pub fn schema(&self) -> ProviderSchema {
        ProviderSchema {
            data_source_schemas: self
                .data_sources
                .iter()
                .map(|(type_name, data_source)| (type_name.clone(), data_source.schema()))
                .collect(),
        }
    }

    /// Reads the data source registered as `type_name`.
    ///
    /// Unknown type names are reported as an error diagnostic.
    #[instrument(skip(self, config))]
    pub fn read_data_source(&self, type_name: &str, config: Value) -> ReadResponse {
        match self.data_source(type_name) {
            Some(data_source) => data_source.read(ReadRequest::new(config)),
            None => {
                tracing::warn!("data source is not registered");
                ReadResponse::from_diagnostics(Diagnostic::error(
                    "Unknown data source",
                    format!(
                        "the provider {provider:?} has no data source named {type_name:?}",
                        provider = self.type_name
                    ),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_provider_registers_every_resource() {
        let provider = Provider::default();

        assert_eq!(
            provider.data_source_type_names().collect::<Vec<_>>(),
            [
                "k8s_app_redislabs_com_redis_enterprise_cluster_v1alpha1_manifest",
                "k8s_app_redislabs_com_redis_enterprise_database_v1alpha1_manifest",
            ]
        );
    }

    #[test]
    fn empty_provider() {
        let provider = Provider::new("custom");

        assert_eq!(provider.type_name(), "custom");
        assert_eq!(provider.data_source_type_names().count(), 0);
        assert!(provider.schema().data_source_schemas.is_empty());
    }

    #[test]
    fn data_source_names_use_the_provider_type_name() {
        use crate::{
            crd::app_redislabs_com::v1alpha1::RedisEnterpriseDatabase,
            data_source::ManifestDataSource,
        };

        let provider = Provider::new("kubernetes")
            .with_data_source(ManifestDataSource::<RedisEnterpriseDatabase>::new());

        assert!(
            provider
                .data_source(
                    "kubernetes_app_redislabs_com_redis_enterprise_database_v1alpha1_manifest"
                )
                .is_some()
        );
    }
}
