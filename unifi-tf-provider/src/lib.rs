//! UniFi Network Provider
//!
//! Maps resource and data source operations onto the UniFi controller API.
//!
//! ## Module Structure
//!
//! - `client` - UnifiClient, the HTTP implementation of `RemoteClient`
//! - `config` - Provider settings and environment fallback
//! - `provider` - UnifiProvider registry
//! - `resources` - Resource and data source tables
//! - `schemas` - Auto-generated resource schemas

pub mod client;
pub mod config;
pub mod provider;
pub mod resources;
pub mod schemas;

// Re-export main types
pub use client::UnifiClient;
pub use config::{EnvSource, ProcessEnv, ProviderConfig};
pub use provider::UnifiProvider;
