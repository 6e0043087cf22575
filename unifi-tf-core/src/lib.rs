//! UniFi TF Core
//!
//! Schema-driven resource mapping: one schema table per resource kind drives a
//! generic state codec and a generic CRUD controller.

pub mod codec;
pub mod controller;
pub mod data_source;
pub mod diagnostics;
pub mod provider;
pub mod resource;
pub mod schema;
