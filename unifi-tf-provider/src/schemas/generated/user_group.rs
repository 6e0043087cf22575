//! user_group schema definition for UniFi
//!
//! Auto-generated from UniFi kind table: rest/usergroup
//!
//! DO NOT EDIT MANUALLY - regenerate with unifi-tf-codegen

use super::UnifiSchemaConfig;
use unifi_tf_core::provider::Endpoint;
use unifi_tf_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema config for user_group (rest/usergroup)
pub fn user_group_config() -> UnifiSchemaConfig {
    UnifiSchemaConfig {
        endpoint: Endpoint::Scoped("usergroup"),
        schema: ResourceSchema::new("user_group")
        .with_description("Manages a user group, used to rate limit clients.")
        .with_scope()
        .with_last_updated()
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .computed()
                .with_wire_name("_id")
                .with_description("The ID of the User Group."),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the user group."),
        )
        .attribute(
            AttributeSchema::new("qos_rate_max_down", AttributeType::Int)
                .optional_computed()
                .narrow_i32()
                .with_description("The QOS maximum download rate in kbps. Use -1 for unlimited."),
        )
        .attribute(
            AttributeSchema::new("qos_rate_max_up", AttributeType::Int)
                .optional_computed()
                .narrow_i32()
                .with_description("The QOS maximum upload rate in kbps. Use -1 for unlimited."),
        )
    }
}
