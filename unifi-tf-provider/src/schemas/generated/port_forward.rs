//! port_forward schema definition for UniFi
//!
//! Auto-generated from UniFi kind table: rest/portforward
//!
//! DO NOT EDIT MANUALLY - regenerate with unifi-tf-codegen

use super::UnifiSchemaConfig;
use unifi_tf_core::provider::Endpoint;
use unifi_tf_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema config for port_forward (rest/portforward)
pub fn port_forward_config() -> UnifiSchemaConfig {
    UnifiSchemaConfig {
        endpoint: Endpoint::Scoped("portforward"),
        schema: ResourceSchema::new("port_forward")
        .with_description("Manages a port forwarding rule on the gateway.")
        .with_scope()
        .with_last_updated()
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .computed()
                .with_wire_name("_id")
                .with_description("The ID of the Port Forward."),
        )
        .attribute(
            AttributeSchema::new("site_id", AttributeType::String)
                .computed()
                .with_description("The ID of the site the Port Forward belongs to."),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the port forwarding rule."),
        )
        .attribute(
            AttributeSchema::new("dst_port", AttributeType::String)
                .required()
                .with_description("The destination port for the forwarding."),
        )
        .attribute(
            AttributeSchema::new("fwd_ip", AttributeType::String)
                .required()
                .with_wire_name("fwd")
                .with_description("The IPv4 address to forward traffic to."),
        )
        .attribute(
            AttributeSchema::new("fwd_port", AttributeType::String)
                .required()
                .with_description("The port to forward traffic to."),
        )
        .attribute(
            AttributeSchema::new("enabled", AttributeType::Bool)
                .optional_computed()
                .with_description("Whether the port forwarding rule is enabled."),
        )
        .attribute(
            AttributeSchema::new("log", AttributeType::Bool)
                .optional_computed()
                .with_description("Whether to log forwarded traffic."),
        )
        .attribute(
            AttributeSchema::new("port_forward_interface", AttributeType::Enum(vec!["wan".to_string(), "wan2".to_string(), "both".to_string()]))
                .optional_computed()
                .with_wire_name("pfwd_interface")
                .with_description("The port forwarding interface. Can be `wan`, `wan2`, or `both`."),
        )
        .attribute(
            AttributeSchema::new("protocol", AttributeType::Enum(vec!["tcp_udp".to_string(), "tcp".to_string(), "udp".to_string()]))
                .optional_computed()
                .with_wire_name("proto")
                .with_description("The protocol for the port forwarding rule. Can be `tcp`, `udp`, or `tcp_udp`."),
        )
        .attribute(
            AttributeSchema::new("src_ip", AttributeType::String)
                .optional_computed()
                .with_wire_name("src")
                .with_description("The source IPv4 address (or CIDR) of the port forwarding rule. Use `any` for all."),
        )
    }
}
