//! Resources of the core `v1` API group.

mod config_map;
mod pod;

pub use config_map::ConfigMap;
pub use pod::Pod;
