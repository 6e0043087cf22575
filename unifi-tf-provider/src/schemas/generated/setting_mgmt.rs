//! setting_mgmt schema definition for UniFi
//!
//! Auto-generated from UniFi kind table: setting/mgmt
//!
//! DO NOT EDIT MANUALLY - regenerate with unifi-tf-codegen

use super::UnifiSchemaConfig;
use unifi_tf_core::provider::Endpoint;
use unifi_tf_core::schema::{AttributeSchema, AttributeType, IdentityShape, ResourceSchema};

/// Returns the schema config for setting_mgmt (setting/mgmt)
pub fn setting_mgmt_config() -> UnifiSchemaConfig {
    UnifiSchemaConfig {
        endpoint: Endpoint::Singleton("mgmt"),
        schema: ResourceSchema::new("setting_mgmt")
        .with_description("Manages the management settings of a site.")
        .with_identity(IdentityShape::Simple)
        .with_scope()
        .with_last_updated()
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .computed()
                .with_wire_name("_id")
                .with_description("The ID of the Setting Mgmt."),
        )
        .attribute(
            AttributeSchema::new("auto_upgrade", AttributeType::Bool)
                .optional_computed()
                .with_description("Automatically upgrade device firmware."),
        )
        .attribute(
            AttributeSchema::new("ssh_enabled", AttributeType::Bool)
                .optional_computed()
                .with_wire_name("x_ssh_enabled")
                .with_description("Enable SSH authentication on devices."),
        )
        .attribute(
            AttributeSchema::new("ssh_keys", AttributeType::List(Box::new(AttributeType::Object(vec![
                AttributeSchema::new("name", AttributeType::String)
                    .required()
                    .with_description("Name of the SSH key."),
                AttributeSchema::new("type", AttributeType::String)
                    .required()
                    .with_description("Type of the SSH key, for example `ssh-rsa`."),
                AttributeSchema::new("key", AttributeType::String)
                    .required()
                    .with_description("Public key material."),
                AttributeSchema::new("comment", AttributeType::String)
                    .with_description("Comment for the SSH key."),
                AttributeSchema::new("date", AttributeType::String)
                    .computed()
                    .with_description("Date the key was added."),
                AttributeSchema::new("fingerprint", AttributeType::String)
                    .computed()
                    .with_description("Fingerprint of the key."),
            ]))))
                .optional_computed()
                .with_wire_name("x_ssh_keys")
                .with_description("SSH keys installed on devices."),
        )
    }
}
