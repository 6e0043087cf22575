//! UniFi kind table to schema module code generator
//!
//! This tool generates the `schemas/generated/<kind>.rs` modules of
//! unifi-tf-provider from JSON kind tables.
//!
//! Usage:
//!   # Generate from file
//!   unifi-tf-codegen --file schemas/firewall_group.json \
//!     --output ../unifi-tf-provider/src/schemas/generated/firewall_group.rs
//!
//!   # Generate from stdin
//!   cat schemas/site.json | unifi-tf-codegen

use anyhow::{Context, Result, bail};
use clap::Parser;
use heck::{ToSnakeCase, ToTitleCase};
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::{self, Read};

#[derive(Parser, Debug)]
#[command(name = "unifi-tf-codegen")]
#[command(about = "Generate UniFi provider schema modules from JSON kind tables")]
struct Args {
    /// Input file (reads from stdin if not specified)
    #[arg(long)]
    file: Option<String>,

    /// Output file (writes to stdout if not specified)
    #[arg(long, short)]
    output: Option<String>,
}

/// One resource kind: where it lives and which fields it maps
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KindTable {
    resource_type: String,
    endpoint: EndpointDef,
    description: Option<String>,
    #[serde(default)]
    identity: IdentityDef,
    #[serde(default = "default_true")]
    site_scoped: bool,
    #[serde(default = "default_true")]
    last_updated: bool,
    attributes: Vec<AttributeDef>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
enum EndpointDef {
    Global(String),
    Scoped(String),
    Singleton(String),
}

impl EndpointDef {
    fn display(&self) -> String {
        match self {
            EndpointDef::Global(name) => name.clone(),
            EndpointDef::Scoped(name) => format!("rest/{}", name),
            EndpointDef::Singleton(name) => format!("setting/{}", name),
        }
    }

    fn code(&self) -> String {
        match self {
            EndpointDef::Global(name) => format!("Endpoint::Global(\"{}\")", name),
            EndpointDef::Scoped(name) => format!("Endpoint::Scoped(\"{}\")", name),
            EndpointDef::Singleton(name) => format!("Endpoint::Singleton(\"{}\")", name),
        }
    }
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum IdentityDef {
    Simple,
    #[default]
    Composite,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AttributeDef {
    name: String,
    #[serde(rename = "type")]
    attr_type: TypeDef,
    #[serde(default)]
    mutability: MutabilityDef,
    wire_name: Option<String>,
    #[serde(default)]
    sensitive: bool,
    #[serde(default)]
    narrow_i32: bool,
    flattened: Option<Vec<String>>,
    description: Option<String>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum MutabilityDef {
    Required,
    #[default]
    Optional,
    Computed,
    OptionalComputed,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TypeDef {
    String,
    Int,
    Bool,
    Cidr,
    Port,
    Enum(Vec<String>),
    List(Box<TypeDef>),
    Object(Vec<AttributeDef>),
}

impl TypeDef {
    fn is_int(&self) -> bool {
        matches!(self, TypeDef::Int | TypeDef::Port)
    }

    fn uses_types_helpers(&self) -> bool {
        match self {
            TypeDef::Cidr | TypeDef::Port => true,
            TypeDef::List(inner) => inner.uses_types_helpers(),
            TypeDef::Object(attrs) => attrs.iter().any(|a| a.attr_type.uses_types_helpers()),
            _ => false,
        }
    }
}

/// Attribute names the generated builders declare themselves
const RESERVED_ATTRIBUTES: &[&str] = &["site", "last_updated"];

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Read kind table JSON
    let table_json = if let Some(file_path) = &args.file {
        std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    let table: KindTable =
        serde_json::from_str(&table_json).context("Failed to parse kind table")?;
    debug!(
        "parsed kind table {} with {} attributes",
        table.resource_type,
        table.attributes.len()
    );

    check_table(&table)?;
    let code = generate_schema_code(&table);

    // Output
    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &code)
            .with_context(|| format!("Failed to write to: {}", output_path))?;
        info!("Generated: {}", output_path);
    } else {
        print!("{}", code);
    }

    Ok(())
}

/// Reject tables that would generate a schema the codec cannot use
fn check_table(table: &KindTable) -> Result<()> {
    if table.resource_type != table.resource_type.to_snake_case() {
        bail!(
            "Resource type '{}' must be snake_case",
            table.resource_type
        );
    }
    if table.site_scoped && matches!(table.endpoint, EndpointDef::Global(_)) {
        bail!(
            "Resource type '{}' lives on a global endpoint and cannot be site scoped",
            table.resource_type
        );
    }
    check_attributes(&table.attributes, &table.resource_type, true)
}

fn check_attributes(attrs: &[AttributeDef], owner: &str, top_level: bool) -> Result<()> {
    let mut seen = HashSet::new();
    let mut wire_names = HashSet::new();
    for attr in attrs {
        if !seen.insert(attr.name.as_str()) {
            bail!("Duplicate attribute '{}' in {}", attr.name, owner);
        }
        if attr.name != attr.name.to_snake_case() {
            bail!("Attribute '{}' in {} must be snake_case", attr.name, owner);
        }
        if top_level && RESERVED_ATTRIBUTES.contains(&attr.name.as_str()) {
            bail!(
                "Attribute '{}' in {} is declared by site_scoped / last_updated",
                attr.name,
                owner
            );
        }
        if attr.narrow_i32 && !attr.attr_type.is_int() {
            bail!("Attribute '{}' in {} is narrow_i32 but not an integer", attr.name, owner);
        }

        match &attr.flattened {
            Some(slots) => {
                if !matches!(&attr.attr_type, TypeDef::List(inner) if matches!(**inner, TypeDef::String))
                {
                    bail!(
                        "Flattened attribute '{}' in {} must be a list of strings",
                        attr.name,
                        owner
                    );
                }
                if slots.is_empty() {
                    bail!("Flattened attribute '{}' in {} has no slots", attr.name, owner);
                }
                if attr.wire_name.is_some() {
                    bail!(
                        "Flattened attribute '{}' in {} cannot also set wire_name",
                        attr.name,
                        owner
                    );
                }
                for slot in slots {
                    if !wire_names.insert(slot.clone()) {
                        bail!("Wire field '{}' mapped twice in {}", slot, owner);
                    }
                }
            }
            None => {
                let wire = attr.wire_name.clone().unwrap_or_else(|| attr.name.clone());
                if !wire_names.insert(wire.clone()) {
                    bail!("Wire field '{}' mapped twice in {}", wire, owner);
                }
            }
        }

        if let TypeDef::Object(members) = inner_type(&attr.attr_type) {
            check_attributes(members, &format!("{}.{}", owner, attr.name), false)?;
        }
    }
    Ok(())
}

fn inner_type(attr_type: &TypeDef) -> &TypeDef {
    match attr_type {
        TypeDef::List(inner) => inner_type(inner),
        other => other,
    }
}

fn generate_schema_code(table: &KindTable) -> String {
    let mut code = String::new();
    let resource = &table.resource_type;
    let endpoint = table.endpoint.display();

    // Pre-scan attributes to determine which imports are needed
    let needs_types = table
        .attributes
        .iter()
        .any(|a| a.attr_type.uses_types_helpers());
    let needs_identity = table.identity == IdentityDef::Simple;

    let identity_import = if needs_identity { "IdentityShape, " } else { "" };
    let types_import = if needs_types { ", types" } else { "" };
    code.push_str(&format!(
        r#"//! {} schema definition for UniFi
//!
//! Auto-generated from UniFi kind table: {}
//!
//! DO NOT EDIT MANUALLY - regenerate with unifi-tf-codegen

use super::UnifiSchemaConfig;
use unifi_tf_core::provider::Endpoint;
use unifi_tf_core::schema::{{AttributeSchema, AttributeType, {}ResourceSchema{}}};

"#,
        resource, endpoint, identity_import, types_import
    ));

    code.push_str(&format!(
        r#"/// Returns the schema config for {} ({})
pub fn {}_config() -> UnifiSchemaConfig {{
    UnifiSchemaConfig {{
        endpoint: {},
        schema: ResourceSchema::new("{}")
"#,
        resource,
        endpoint,
        resource,
        table.endpoint.code(),
        resource
    ));

    let title = resource.to_title_case();
    let description = table
        .description
        .clone()
        .unwrap_or_else(|| format!("Manages a {}.", title));
    code.push_str(&format!(
        "        .with_description(\"{}\")\n",
        escape(&description)
    ));
    if needs_identity {
        code.push_str("        .with_identity(IdentityShape::Simple)\n");
    }
    if table.site_scoped {
        code.push_str("        .with_scope()\n");
    }
    if table.last_updated {
        code.push_str("        .with_last_updated()\n");
    }

    for attr in &table.attributes {
        code.push_str("        .attribute(\n");
        code.push_str(&render_attribute(attr, 12, &title));
        code.push_str(",\n        )\n");
    }

    code.push_str("    }\n}\n");
    code
}

/// Render an `AttributeSchema` builder chain starting at `indent` columns
fn render_attribute(attr: &AttributeDef, indent: usize, title: &str) -> String {
    let pad = " ".repeat(indent);
    let mut out = format!(
        "{}AttributeSchema::new(\"{}\", {})",
        pad,
        attr.name,
        render_type(&attr.attr_type, indent, title)
    );

    let chain_pad = " ".repeat(indent + 4);
    match attr.mutability {
        MutabilityDef::Required => out.push_str(&format!("\n{}.required()", chain_pad)),
        MutabilityDef::Computed => out.push_str(&format!("\n{}.computed()", chain_pad)),
        MutabilityDef::OptionalComputed => {
            out.push_str(&format!("\n{}.optional_computed()", chain_pad))
        }
        MutabilityDef::Optional => {}
    }
    if attr.sensitive {
        out.push_str(&format!("\n{}.sensitive()", chain_pad));
    }
    if attr.narrow_i32 {
        out.push_str(&format!("\n{}.narrow_i32()", chain_pad));
    }
    if let Some(wire_name) = &attr.wire_name {
        out.push_str(&format!("\n{}.with_wire_name(\"{}\")", chain_pad, wire_name));
    }
    if let Some(slots) = &attr.flattened {
        let slots: Vec<String> = slots.iter().map(|s| format!("\"{}\"", s)).collect();
        out.push_str(&format!("\n{}.flattened([{}])", chain_pad, slots.join(", ")));
    }

    let description = match (&attr.description, attr.name.as_str()) {
        (Some(desc), _) => Some(desc.clone()),
        (None, "id") => Some(format!("The ID of the {}.", title)),
        (None, _) => None,
    };
    if let Some(desc) = description {
        out.push_str(&format!(
            "\n{}.with_description(\"{}\")",
            chain_pad,
            escape(&desc)
        ));
    }
    out
}

fn render_type(attr_type: &TypeDef, indent: usize, title: &str) -> String {
    match attr_type {
        TypeDef::String => "AttributeType::String".to_string(),
        TypeDef::Int => "AttributeType::Int".to_string(),
        TypeDef::Bool => "AttributeType::Bool".to_string(),
        TypeDef::Cidr => "types::cidr()".to_string(),
        TypeDef::Port => "types::port()".to_string(),
        TypeDef::Enum(variants) => {
            let values: Vec<String> = variants.iter().map(|v| format!("\"{}\"", v)).collect();
            format!(
                "AttributeType::Enum(vec![{}.to_string()])",
                values.join(".to_string(), ")
            )
        }
        TypeDef::List(inner) => format!(
            "AttributeType::List(Box::new({}))",
            render_type(inner, indent, title)
        ),
        TypeDef::Object(members) => {
            let mut out = "AttributeType::Object(vec![\n".to_string();
            for member in members {
                out.push_str(&render_attribute(member, indent + 4, title));
                out.push_str(",\n");
            }
            out.push_str(&format!("{}])", " ".repeat(indent)));
            out
        }
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', " ")
}
