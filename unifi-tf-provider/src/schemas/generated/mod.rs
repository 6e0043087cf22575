//! Auto-generated UniFi resource schemas
//!
//! DO NOT EDIT MANUALLY - regenerate each module with:
//!   cargo run -p unifi-tf-codegen -- --file unifi-tf-codegen/schemas/<kind>.json \
//!     --output unifi-tf-provider/src/schemas/generated/<kind>.rs

use unifi_tf_core::controller::ResourceConfig;
use unifi_tf_core::provider::Endpoint;
use unifi_tf_core::schema::ResourceSchema;

/// UniFi schema configuration
///
/// Combines the generated ResourceSchema with the endpoint the kind is
/// served from.
pub struct UnifiSchemaConfig {
    /// Remote collection, settings document or site manager endpoint
    pub endpoint: Endpoint,
    /// The resource schema with attribute definitions
    pub schema: ResourceSchema,
}

impl UnifiSchemaConfig {
    /// Settings documents are written by update and never deleted
    pub fn resource_config(self) -> ResourceConfig {
        if self.endpoint.is_singleton() {
            ResourceConfig::singleton(self.endpoint, self.schema)
        } else {
            ResourceConfig::new(self.endpoint, self.schema)
        }
    }
}

pub mod account;
pub mod dynamic_dns;
pub mod firewall_group;
pub mod firewall_rule;
pub mod network;
pub mod port_forward;
pub mod setting_mgmt;
pub mod setting_radius;
pub mod site;
pub mod static_route;
pub mod user_group;

pub fn configs() -> Vec<UnifiSchemaConfig> {
    vec![
        account::account_config(),
        dynamic_dns::dynamic_dns_config(),
        firewall_group::firewall_group_config(),
        firewall_rule::firewall_rule_config(),
        network::network_config(),
        port_forward::port_forward_config(),
        setting_mgmt::setting_mgmt_config(),
        setting_radius::setting_radius_config(),
        site::site_config(),
        static_route::static_route_config(),
        user_group::user_group_config(),
    ]
}

pub fn schemas() -> Vec<ResourceSchema> {
    configs().into_iter().map(|c| c.schema).collect()
}
