//! network schema definition for UniFi
//!
//! Auto-generated from UniFi kind table: rest/networkconf
//!
//! DO NOT EDIT MANUALLY - regenerate with unifi-tf-codegen

use super::UnifiSchemaConfig;
use unifi_tf_core::provider::Endpoint;
use unifi_tf_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

/// Returns the schema config for network (rest/networkconf)
pub fn network_config() -> UnifiSchemaConfig {
    UnifiSchemaConfig {
        endpoint: Endpoint::Scoped("networkconf"),
        schema: ResourceSchema::new("network")
        .with_description("Manages a network (LAN, VLAN or WAN) on the controller.")
        .with_scope()
        .with_last_updated()
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .computed()
                .with_wire_name("_id")
                .with_description("The ID of the Network."),
        )
        .attribute(
            AttributeSchema::new("site_id", AttributeType::String)
                .computed()
                .with_description("The ID of the site the Network belongs to."),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the network."),
        )
        .attribute(
            AttributeSchema::new("purpose", AttributeType::Enum(vec!["corporate".to_string(), "guest".to_string(), "wan".to_string(), "vlan-only".to_string(), "remote-user-vpn".to_string(), "site-vpn".to_string(), "vpn-client".to_string()]))
                .required()
                .with_description("The purpose of the network."),
        )
        .attribute(
            AttributeSchema::new("enabled", AttributeType::Bool)
                .optional_computed()
                .with_description("Whether the network is enabled."),
        )
        .attribute(
            AttributeSchema::new("subnet", types::cidr())
                .optional_computed()
                .with_wire_name("ip_subnet")
                .with_description("The gateway address and prefix of the network, for example `10.0.0.1/24`."),
        )
        .attribute(
            AttributeSchema::new("vlan_id", AttributeType::Int)
                .optional_computed()
                .narrow_i32()
                .with_wire_name("vlan")
                .with_description("The VLAN ID of the network."),
        )
        .attribute(
            AttributeSchema::new("vlan_enabled", AttributeType::Bool)
                .optional_computed()
                .with_description("Whether VLAN tagging is enabled."),
        )
        .attribute(
            AttributeSchema::new("network_group", AttributeType::String)
                .optional_computed()
                .with_description("The group of the network, for example `LAN`."),
        )
        .attribute(
            AttributeSchema::new("domain_name", AttributeType::String)
                .optional_computed()
                .with_description("The domain name of the network."),
        )
        .attribute(
            AttributeSchema::new("igmp_snooping", AttributeType::Bool)
                .optional_computed()
                .with_description("Whether IGMP snooping is enabled."),
        )
        .attribute(
            AttributeSchema::new("internet_access_enabled", AttributeType::Bool)
                .optional_computed()
                .with_description("Whether clients of the network may reach the internet."),
        )
        .attribute(
            AttributeSchema::new("dhcp_enabled", AttributeType::Bool)
                .optional_computed()
                .with_wire_name("dhcpd_enabled")
                .with_description("Whether the DHCP server is enabled."),
        )
        .attribute(
            AttributeSchema::new("dhcp_start", AttributeType::String)
                .optional_computed()
                .with_wire_name("dhcpd_start")
                .with_description("The first address of the DHCP range."),
        )
        .attribute(
            AttributeSchema::new("dhcp_stop", AttributeType::String)
                .optional_computed()
                .with_wire_name("dhcpd_stop")
                .with_description("The last address of the DHCP range."),
        )
        .attribute(
            AttributeSchema::new("dhcp_lease_time", AttributeType::Int)
                .optional_computed()
                .narrow_i32()
                .with_wire_name("dhcpd_leasetime")
                .with_description("The DHCP lease time in seconds."),
        )
        .attribute(
            AttributeSchema::new("dhcp_dns", AttributeType::List(Box::new(AttributeType::String)))
                .optional_computed()
                .flattened(["dhcpd_dns_1", "dhcpd_dns_2", "dhcpd_dns_3", "dhcpd_dns_4"])
                .with_description("Up to four IPv4 DNS servers handed out by DHCP."),
        )
        .attribute(
            AttributeSchema::new("dhcp_v6_dns", AttributeType::List(Box::new(AttributeType::String)))
                .optional_computed()
                .flattened(["dhcpdv6_dns_1", "dhcpdv6_dns_2", "dhcpdv6_dns_3", "dhcpdv6_dns_4"])
                .with_description("Up to four IPv6 DNS servers handed out by DHCPv6."),
        )
        .attribute(
            AttributeSchema::new("wan_type", AttributeType::String)
                .optional_computed()
                .with_description("The IPv4 WAN connection type, for example `dhcp`, `static` or `pppoe`."),
        )
        .attribute(
            AttributeSchema::new("wan_ip", AttributeType::String)
                .optional_computed()
                .with_description("The static IPv4 address of the WAN."),
        )
        .attribute(
            AttributeSchema::new("wan_netmask", AttributeType::String)
                .optional_computed()
                .with_description("The IPv4 netmask of the WAN."),
        )
        .attribute(
            AttributeSchema::new("wan_gateway", AttributeType::String)
                .optional_computed()
                .with_description("The IPv4 gateway of the WAN."),
        )
        .attribute(
            AttributeSchema::new("wan_dns", AttributeType::List(Box::new(AttributeType::String)))
                .optional_computed()
                .flattened(["wan_dns1", "wan_dns2", "wan_dns3", "wan_dns4"])
                .with_description("Up to four DNS servers for the WAN."),
        )
        .attribute(
            AttributeSchema::new("wan_username", AttributeType::String)
                .optional_computed()
                .with_description("The PPPoE username of the WAN."),
        )
        .attribute(
            AttributeSchema::new("wan_password", AttributeType::String)
                .sensitive()
                .with_wire_name("x_wan_password")
                .with_description("The PPPoE password of the WAN."),
        )
    }
}
