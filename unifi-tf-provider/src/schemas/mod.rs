//! UniFi resource schema definitions

pub mod generated;

use unifi_tf_core::schema::ResourceSchema;

/// Returns all UniFi resource schemas
/// Auto-generated from the kind tables in unifi-tf-codegen/schemas
pub fn all_schemas() -> Vec<ResourceSchema> {
    generated::schemas()
}
