//! Models of the custom resources which can be rendered, one module per API group.

use crate::data_source::DataSource;

pub mod app_redislabs_com;

/// Every data source known to this crate.
pub fn data_sources() -> Vec<Box<dyn DataSource>> {
    app_redislabs_com::data_sources()
}
