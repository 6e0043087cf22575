//! static_route schema definition for UniFi
//!
//! Auto-generated from UniFi kind table: rest/routing
//!
//! DO NOT EDIT MANUALLY - regenerate with unifi-tf-codegen

use super::UnifiSchemaConfig;
use unifi_tf_core::provider::Endpoint;
use unifi_tf_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

/// Returns the schema config for static_route (rest/routing)
pub fn static_route_config() -> UnifiSchemaConfig {
    UnifiSchemaConfig {
        endpoint: Endpoint::Scoped("routing"),
        schema: ResourceSchema::new("static_route")
        .with_description("Manages a static route on the gateway.")
        .with_scope()
        .with_last_updated()
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .computed()
                .with_wire_name("_id")
                .with_description("The ID of the Static Route."),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the static route."),
        )
        .attribute(
            AttributeSchema::new("type", AttributeType::Enum(vec!["interface-route".to_string(), "nexthop-route".to_string(), "blackhole".to_string()]))
                .required()
                .with_wire_name("static-route_type")
                .with_description("The type of static route. Can be `interface-route`, `nexthop-route`, or `blackhole`."),
        )
        .attribute(
            AttributeSchema::new("network", types::cidr())
                .required()
                .with_wire_name("static-route_network")
                .with_description("The network subnet address."),
        )
        .attribute(
            AttributeSchema::new("distance", AttributeType::Int)
                .required()
                .narrow_i32()
                .with_wire_name("static-route_distance")
                .with_description("The distance of the static route."),
        )
        .attribute(
            AttributeSchema::new("next_hop", AttributeType::String)
                .optional_computed()
                .with_wire_name("static-route_nexthop")
                .with_description("The next hop of the static route (only valid for `nexthop-route` type)."),
        )
        .attribute(
            AttributeSchema::new("interface", AttributeType::String)
                .optional_computed()
                .with_wire_name("static-route_interface")
                .with_description("The interface of the static route (only valid for `interface-route` type)."),
        )
    }
}
