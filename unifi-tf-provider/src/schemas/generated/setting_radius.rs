//! setting_radius schema definition for UniFi
//!
//! Auto-generated from UniFi kind table: setting/radius
//!
//! DO NOT EDIT MANUALLY - regenerate with unifi-tf-codegen

use super::UnifiSchemaConfig;
use unifi_tf_core::provider::Endpoint;
use unifi_tf_core::schema::{AttributeSchema, AttributeType, IdentityShape, ResourceSchema, types};

/// Returns the schema config for setting_radius (setting/radius)
pub fn setting_radius_config() -> UnifiSchemaConfig {
    UnifiSchemaConfig {
        endpoint: Endpoint::Singleton("radius"),
        schema: ResourceSchema::new("setting_radius")
        .with_description("Manages the built-in RADIUS server settings of a site.")
        .with_identity(IdentityShape::Simple)
        .with_scope()
        .with_last_updated()
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .computed()
                .with_wire_name("_id")
                .with_description("The ID of the Setting RADIUS."),
        )
        .attribute(
            AttributeSchema::new("accounting_enabled", AttributeType::Bool)
                .optional_computed()
                .with_description("Enable RADIUS accounting."),
        )
        .attribute(
            AttributeSchema::new("accounting_port", types::port())
                .optional_computed()
                .narrow_i32()
                .with_wire_name("acct_port")
                .with_description("The port for accounting communications."),
        )
        .attribute(
            AttributeSchema::new("auth_port", types::port())
                .optional_computed()
                .narrow_i32()
                .with_description("The port for authentication communications."),
        )
        .attribute(
            AttributeSchema::new("enabled", AttributeType::Bool)
                .optional_computed()
                .with_description("RADIUS server enabled."),
        )
        .attribute(
            AttributeSchema::new("interim_update_interval", AttributeType::Int)
                .optional_computed()
                .narrow_i32()
                .with_description("Statistics will be collected from connected clients at this interval."),
        )
        .attribute(
            AttributeSchema::new("secret", AttributeType::String)
                .sensitive()
                .with_wire_name("x_secret")
                .with_description("RADIUS secret passphrase."),
        )
        .attribute(
            AttributeSchema::new("tunneled_reply", AttributeType::Bool)
                .optional_computed()
                .with_description("Encrypt communication between the server and the client."),
        )
    }
}
