//! Version `v1alpha1` of the `app.redislabs.com` resources.

mod pod;
mod redis_enterprise_cluster;
mod redis_enterprise_database;

pub use pod::*;
pub use redis_enterprise_cluster::*;
pub use redis_enterprise_database::*;

pub const VERSION: &str = "v1alpha1";
