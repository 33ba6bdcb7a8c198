//! Resources of the Redis Enterprise operator.

use crate::data_source::{DataSource, ManifestDataSource};

pub mod v1alpha1;

pub const GROUP: &str = "app.redislabs.com";

/// One manifest data source per resource of the group.
pub fn data_sources() -> Vec<Box<dyn DataSource>> {
    vec![
        Box::new(ManifestDataSource::<v1alpha1::RedisEnterpriseCluster>::new()),
        Box::new(ManifestDataSource::<v1alpha1::RedisEnterpriseDatabase>::new()),
    ]
}
