//! account schema definition for UniFi
//!
//! Auto-generated from UniFi kind table: rest/account
//!
//! DO NOT EDIT MANUALLY - regenerate with unifi-tf-codegen

use super::UnifiSchemaConfig;
use unifi_tf_core::provider::Endpoint;
use unifi_tf_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema config for account (rest/account)
pub fn account_config() -> UnifiSchemaConfig {
    UnifiSchemaConfig {
        endpoint: Endpoint::Scoped("account"),
        schema: ResourceSchema::new("account")
        .with_description("Manages a RADIUS user account.")
        .with_scope()
        .with_last_updated()
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .computed()
                .with_wire_name("_id")
                .with_description("The ID of the Account."),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the account."),
        )
        .attribute(
            AttributeSchema::new("password", AttributeType::String)
                .required()
                .sensitive()
                .with_wire_name("x_password")
                .with_description("The password of the account."),
        )
        .attribute(
            AttributeSchema::new("tunnel_type", AttributeType::Int)
                .optional_computed()
                .narrow_i32()
                .with_description("See RFC 2868 section 3.1."),
        )
        .attribute(
            AttributeSchema::new("tunnel_medium_type", AttributeType::Int)
                .optional_computed()
                .narrow_i32()
                .with_description("See RFC 2868 section 3.2."),
        )
        .attribute(
            AttributeSchema::new("network_id", AttributeType::String)
                .optional_computed()
                .with_description("ID of the network for this account."),
        )
    }
}
