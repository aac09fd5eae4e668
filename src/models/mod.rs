pub mod config;

pub use config::{AdjustConfig, AppConfig, ClusterConfig, GridWeightConfig};
