//! dynamic_dns schema definition for UniFi
//!
//! Auto-generated from UniFi kind table: rest/dynamicdns
//!
//! DO NOT EDIT MANUALLY - regenerate with unifi-tf-codegen

use super::UnifiSchemaConfig;
use unifi_tf_core::provider::Endpoint;
use unifi_tf_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema config for dynamic_dns (rest/dynamicdns)
pub fn dynamic_dns_config() -> UnifiSchemaConfig {
    UnifiSchemaConfig {
        endpoint: Endpoint::Scoped("dynamicdns"),
        schema: ResourceSchema::new("dynamic_dns")
        .with_description("Manages a Dynamic DNS entry.")
        .with_scope()
        .with_last_updated()
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .computed()
                .with_wire_name("_id")
                .with_description("The ID of the Dynamic Dns."),
        )
        .attribute(
            AttributeSchema::new("host_name", AttributeType::String)
                .required()
                .with_description("The host name to update in the Dynamic DNS service."),
        )
        .attribute(
            AttributeSchema::new("interface", AttributeType::Enum(vec!["wan".to_string(), "wan2".to_string()]))
                .optional_computed()
                .with_description("The interface for the Dynamic DNS. Can be `wan` or `wan2`."),
        )
        .attribute(
            AttributeSchema::new("login", AttributeType::String)
                .optional_computed()
                .with_description("The login username for the Dynamic DNS service."),
        )
        .attribute(
            AttributeSchema::new("password", AttributeType::String)
                .sensitive()
                .with_wire_name("x_password")
                .with_description("The password for the Dynamic DNS service."),
        )
        .attribute(
            AttributeSchema::new("server", AttributeType::String)
                .optional_computed()
                .with_description("The server for the Dynamic DNS service."),
        )
        .attribute(
            AttributeSchema::new("service", AttributeType::String)
                .required()
                .with_description("The Dynamic DNS service provider, various values are supported (for example `dyndns`, etc.)."),
        )
    }
}
