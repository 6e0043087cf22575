//! site schema definition for UniFi
//!
//! Auto-generated from UniFi kind table: site
//!
//! DO NOT EDIT MANUALLY - regenerate with unifi-tf-codegen

use super::UnifiSchemaConfig;
use unifi_tf_core::provider::Endpoint;
use unifi_tf_core::schema::{AttributeSchema, AttributeType, IdentityShape, ResourceSchema};

/// Returns the schema config for site (site)
pub fn site_config() -> UnifiSchemaConfig {
    UnifiSchemaConfig {
        endpoint: Endpoint::Global("site"),
        schema: ResourceSchema::new("site")
        .with_description("Manages a site of the controller.")
        .with_identity(IdentityShape::Simple)
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .computed()
                .with_wire_name("_id")
                .with_description("The ID of the Site to look up."),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .computed()
                .with_description("The name of the Site."),
        )
        .attribute(
            AttributeSchema::new("description", AttributeType::String)
                .required()
                .with_wire_name("desc")
                .with_description("The description of the Site."),
        )
    }
}
