//! firewall_rule schema definition for UniFi
//!
//! Auto-generated from UniFi kind table: rest/firewallrule
//!
//! DO NOT EDIT MANUALLY - regenerate with unifi-tf-codegen

use super::UnifiSchemaConfig;
use unifi_tf_core::provider::Endpoint;
use unifi_tf_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema config for firewall_rule (rest/firewallrule)
pub fn firewall_rule_config() -> UnifiSchemaConfig {
    UnifiSchemaConfig {
        endpoint: Endpoint::Scoped("firewallrule"),
        schema: ResourceSchema::new("firewall_rule")
        .with_description("Manages an individual firewall rule on the gateway.")
        .with_scope()
        .with_last_updated()
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .computed()
                .with_wire_name("_id")
                .with_description("The ID of the Firewall Rule."),
        )
        .attribute(
            AttributeSchema::new("site_id", AttributeType::String)
                .computed()
                .with_description("The ID of the site the Firewall Rule belongs to."),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the firewall rule."),
        )
        .attribute(
            AttributeSchema::new("action", AttributeType::Enum(vec!["drop".to_string(), "reject".to_string(), "accept".to_string()]))
                .required()
                .with_description("The action of the firewall rule."),
        )
        .attribute(
            AttributeSchema::new("ruleset", AttributeType::Enum(vec!["WAN_IN".to_string(), "WAN_OUT".to_string(), "WAN_LOCAL".to_string(), "LAN_IN".to_string(), "LAN_OUT".to_string(), "LAN_LOCAL".to_string(), "GUEST_IN".to_string(), "GUEST_OUT".to_string(), "GUEST_LOCAL".to_string(), "WANv6_IN".to_string(), "WANv6_OUT".to_string(), "WANv6_LOCAL".to_string(), "LANv6_IN".to_string(), "LANv6_OUT".to_string(), "LANv6_LOCAL".to_string(), "GUESTv6_IN".to_string(), "GUESTv6_OUT".to_string(), "GUESTv6_LOCAL".to_string()]))
                .required()
                .with_description("The ruleset the rule applies to."),
        )
        .attribute(
            AttributeSchema::new("rule_index", AttributeType::Int)
                .required()
                .narrow_i32()
                .with_description("The index of the rule. Must be >= 2000 < 3000 or > 4000 < 5000."),
        )
        .attribute(
            AttributeSchema::new("enabled", AttributeType::Bool)
                .optional_computed()
                .with_description("Whether the rule is enabled."),
        )
        .attribute(
            AttributeSchema::new("protocol", AttributeType::String)
                .optional_computed()
                .with_description("The IPv4 protocol of the rule."),
        )
        .attribute(
            AttributeSchema::new("protocol_v6", AttributeType::String)
                .optional_computed()
                .with_description("The IPv6 protocol of the rule."),
        )
        .attribute(
            AttributeSchema::new("protocol_match_excepted", AttributeType::Bool)
                .optional_computed()
                .with_description("Match all protocols except the selected one."),
        )
        .attribute(
            AttributeSchema::new("logging", AttributeType::Bool)
                .optional_computed()
                .with_description("Enable logging for the firewall rule."),
        )
        .attribute(
            AttributeSchema::new("icmp_typename", AttributeType::String)
                .optional_computed()
                .with_description("ICMP type name."),
        )
        .attribute(
            AttributeSchema::new("icmp_v6_typename", AttributeType::String)
                .optional_computed()
                .with_wire_name("icmpv6_typename")
                .with_description("ICMPv6 type name."),
        )
        .attribute(
            AttributeSchema::new("ip_sec", AttributeType::String)
                .optional_computed()
                .with_wire_name("ipsec")
                .with_description("Specify whether the rule matches on IPsec packets. Can be one of `match-ipset` or `match-none`."),
        )
        .attribute(
            AttributeSchema::new("setting_preference", AttributeType::String)
                .optional_computed()
                .with_description("Either `auto` or `manual`."),
        )
        .attribute(
            AttributeSchema::new("src_address", AttributeType::String)
                .optional_computed()
                .with_description("The source address of the firewall rule."),
        )
        .attribute(
            AttributeSchema::new("src_address_ipv6", AttributeType::String)
                .optional_computed()
                .with_description("The IPv6 source address of the firewall rule."),
        )
        .attribute(
            AttributeSchema::new("src_firewall_group_ids", AttributeType::List(Box::new(AttributeType::String)))
                .optional_computed()
                .with_wire_name("src_firewallgroup_ids")
                .with_description("The source firewall group IDs of the rule."),
        )
        .attribute(
            AttributeSchema::new("src_mac", AttributeType::String)
                .optional_computed()
                .with_wire_name("src_mac_address")
                .with_description("The source MAC address of the firewall rule."),
        )
        .attribute(
            AttributeSchema::new("src_network_id", AttributeType::String)
                .optional_computed()
                .with_wire_name("src_networkconf_id")
                .with_description("The source network ID of the firewall rule."),
        )
        .attribute(
            AttributeSchema::new("src_network_type", AttributeType::Enum(vec!["ADDRv4".to_string(), "NETv4".to_string()]))
                .optional_computed()
                .with_wire_name("src_networkconf_type")
                .with_description("The source network type of the firewall rule."),
        )
        .attribute(
            AttributeSchema::new("src_port", AttributeType::String)
                .optional_computed()
                .with_description("The source port of the firewall rule."),
        )
        .attribute(
            AttributeSchema::new("dst_address", AttributeType::String)
                .optional_computed()
                .with_description("The destination address of the firewall rule."),
        )
        .attribute(
            AttributeSchema::new("dst_address_ipv6", AttributeType::String)
                .optional_computed()
                .with_description("The IPv6 destination address of the firewall rule."),
        )
        .attribute(
            AttributeSchema::new("dst_firewall_group_ids", AttributeType::List(Box::new(AttributeType::String)))
                .optional_computed()
                .with_wire_name("dst_firewallgroup_ids")
                .with_description("The destination firewall group IDs of the rule."),
        )
        .attribute(
            AttributeSchema::new("dst_network_id", AttributeType::String)
                .optional_computed()
                .with_wire_name("dst_networkconf_id")
                .with_description("The destination network ID of the firewall rule."),
        )
        .attribute(
            AttributeSchema::new("dst_network_type", AttributeType::Enum(vec!["ADDRv4".to_string(), "NETv4".to_string()]))
                .optional_computed()
                .with_wire_name("dst_networkconf_type")
                .with_description("The destination network type of the firewall rule."),
        )
        .attribute(
            AttributeSchema::new("dst_port", AttributeType::String)
                .optional_computed()
                .with_description("The destination port of the firewall rule."),
        )
        .attribute(
            AttributeSchema::new("state_established", AttributeType::Bool)
                .optional_computed()
                .with_description("Match where the state is established."),
        )
        .attribute(
            AttributeSchema::new("state_invalid", AttributeType::Bool)
                .optional_computed()
                .with_description("Match where the state is invalid."),
        )
        .attribute(
            AttributeSchema::new("state_new", AttributeType::Bool)
                .optional_computed()
                .with_description("Match where the state is new."),
        )
        .attribute(
            AttributeSchema::new("state_related", AttributeType::Bool)
                .optional_computed()
                .with_description("Match where the state is related."),
        )
    }
}
