//! The configuration artifact produced by the wizard
//!
//! [`Config`] is the canonical, serialized shape consumed by later training tooling.
//! [`persistence`] reads and writes it as YAML.

pub mod defaults;
pub mod model;
pub mod persistence;

pub use model::{Buckets, Config, CosCredentials, Credentials, TrainingParams, WmlCredentials};
pub use persistence::{load_config, save_config};
