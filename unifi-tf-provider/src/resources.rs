//! Resource and data source tables
//!
//! Resources come straight from the generated kind tables. Data sources are
//! derived from the same schemas, so a field added to a kind shows up in its
//! data sources as well.

use heck::ToTitleCase;

use unifi_tf_core::controller::ResourceConfig;
use unifi_tf_core::data_source::{DataSourceConfig, Lookup};
use unifi_tf_core::schema::{
    AttributeSchema, AttributeType, ID_ATTRIBUTE, LAST_UPDATED_ATTRIBUTE, Mutability,
    ResourceSchema, SCOPE_ATTRIBUTE,
};

use crate::schemas::generated::{self, UnifiSchemaConfig};

/// A data source and the resource kind it reads
#[derive(Debug, Clone)]
pub struct DataSourceDef {
    pub name: &'static str,
    pub kind: &'static str,
    pub lookup: Lookup,
}

const BY_NAME: Lookup = Lookup::IdOrName { name_field: "name" };

pub const DATA_SOURCES: &[DataSourceDef] = &[
    DataSourceDef { name: "account", kind: "account", lookup: Lookup::Id },
    DataSourceDef { name: "accounts", kind: "account", lookup: Lookup::List { attribute: "accounts" } },
    DataSourceDef { name: "dynamic_dns", kind: "dynamic_dns", lookup: Lookup::Id },
    DataSourceDef { name: "dynamic_dnses", kind: "dynamic_dns", lookup: Lookup::List { attribute: "dynamic_dnses" } },
    DataSourceDef { name: "firewall_group", kind: "firewall_group", lookup: BY_NAME },
    DataSourceDef { name: "firewall_groups", kind: "firewall_group", lookup: Lookup::List { attribute: "firewall_groups" } },
    DataSourceDef { name: "firewall_rule", kind: "firewall_rule", lookup: BY_NAME },
    DataSourceDef { name: "firewall_rules", kind: "firewall_rule", lookup: Lookup::List { attribute: "firewall_rules" } },
    DataSourceDef { name: "network", kind: "network", lookup: Lookup::Id },
    DataSourceDef { name: "networks", kind: "network", lookup: Lookup::List { attribute: "networks" } },
    DataSourceDef { name: "port_forward", kind: "port_forward", lookup: Lookup::Id },
    DataSourceDef { name: "port_forwards", kind: "port_forward", lookup: Lookup::List { attribute: "port_forwards" } },
    DataSourceDef { name: "setting_mgmt", kind: "setting_mgmt", lookup: Lookup::Singleton },
    DataSourceDef { name: "setting_radius", kind: "setting_radius", lookup: Lookup::Singleton },
    DataSourceDef { name: "site", kind: "site", lookup: Lookup::Id },
    DataSourceDef { name: "sites", kind: "site", lookup: Lookup::List { attribute: "sites" } },
    DataSourceDef { name: "static_route", kind: "static_route", lookup: Lookup::Id },
    DataSourceDef { name: "static_routes", kind: "static_route", lookup: Lookup::List { attribute: "static_routes" } },
    DataSourceDef { name: "user_group", kind: "user_group", lookup: BY_NAME },
    DataSourceDef { name: "user_groups", kind: "user_group", lookup: Lookup::List { attribute: "user_groups" } },
];

/// Controller configurations for every resource kind
pub fn resource_configs() -> Vec<ResourceConfig> {
    generated::configs()
        .into_iter()
        .map(UnifiSchemaConfig::resource_config)
        .collect()
}

/// Data source configurations keyed by data source name
pub fn data_source_configs() -> Vec<(&'static str, DataSourceConfig)> {
    let kinds = generated::configs();
    DATA_SOURCES
        .iter()
        .filter_map(|def| {
            let kind = kinds.iter().find(|k| k.schema.resource_type == def.kind)?;
            let schema = match &def.lookup {
                Lookup::List { attribute } => list_schema(def.name, attribute, &kind.schema),
                lookup => single_schema(def.name, lookup, &kind.schema),
            };
            Some((
                def.name,
                DataSourceConfig::new(kind.endpoint, schema, def.lookup.clone()),
            ))
        })
        .collect()
}

/// Schema of a data source returning one object
///
/// Lookup keys stay settable; everything else is read back.
fn single_schema(name: &str, lookup: &Lookup, kind: &ResourceSchema) -> ResourceSchema {
    let mut schema = ResourceSchema::new(name)
        .with_description(format!("Look up a {}.", kind.resource_type.to_title_case()));

    for attr in kind.attributes.values() {
        if attr.name == LAST_UPDATED_ATTRIBUTE {
            continue;
        }
        let mut attr = attr.clone();
        attr.mutability = match (lookup, attr.name.as_str()) {
            (_, SCOPE_ATTRIBUTE) => Mutability::OptionalComputed,
            (Lookup::Id, ID_ATTRIBUTE) => Mutability::Required,
            (Lookup::IdOrName { .. }, ID_ATTRIBUTE) => Mutability::OptionalComputed,
            (Lookup::IdOrName { name_field }, field) if field == *name_field => {
                Mutability::OptionalComputed
            }
            _ => Mutability::Computed,
        };
        schema = schema.attribute(attr);
    }
    schema
}

/// Schema of a data source returning every object of a kind as a list
fn list_schema(name: &str, attribute: &str, kind: &ResourceSchema) -> ResourceSchema {
    let members: Vec<AttributeSchema> = kind
        .wire_attributes()
        .map(|attr| {
            let mut attr = attr.clone();
            attr.mutability = Mutability::Computed;
            attr
        })
        .collect();

    let title = kind.resource_type.to_title_case();
    let mut schema = ResourceSchema::new(name).with_description(format!("List every {}.", title));
    if kind.get(SCOPE_ATTRIBUTE).is_some() {
        schema = schema.with_scope();
    }
    schema.attribute(
        AttributeSchema::new(attribute, AttributeType::List(Box::new(AttributeType::Object(members))))
            .computed()
            .with_description(format!("The list of {} objects.", title)),
    )
}
