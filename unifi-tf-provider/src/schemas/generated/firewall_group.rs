//! firewall_group schema definition for UniFi
//!
//! Auto-generated from UniFi kind table: rest/firewallgroup
//!
//! DO NOT EDIT MANUALLY - regenerate with unifi-tf-codegen

use super::UnifiSchemaConfig;
use unifi_tf_core::provider::Endpoint;
use unifi_tf_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema config for firewall_group (rest/firewallgroup)
pub fn firewall_group_config() -> UnifiSchemaConfig {
    UnifiSchemaConfig {
        endpoint: Endpoint::Scoped("firewallgroup"),
        schema: ResourceSchema::new("firewall_group")
        .with_description("Manages a firewall group of addresses or ports.")
        .with_scope()
        .with_last_updated()
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .computed()
                .with_wire_name("_id")
                .with_description("The ID of the Firewall Group."),
        )
        .attribute(
            AttributeSchema::new("site_id", AttributeType::String)
                .computed()
                .with_description("The ID of the site the Firewall Group belongs to."),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the firewall group."),
        )
        .attribute(
            AttributeSchema::new("type", AttributeType::Enum(vec!["address-group".to_string(), "port-group".to_string(), "ipv6-address-group".to_string()]))
                .required()
                .with_wire_name("group_type")
                .with_description("The type of the firewall group."),
        )
        .attribute(
            AttributeSchema::new("members", AttributeType::List(Box::new(AttributeType::String)))
                .optional_computed()
                .with_wire_name("group_members")
                .with_description("The members of the firewall group."),
        )
    }
}
