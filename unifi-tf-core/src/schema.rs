//! Schema - Describe the attributes of each resource kind
//!
//! A provider declares one schema per resource kind. The schema drives the
//! state codec (which attributes exist on the wire and under which field
//! names) and validation of host-supplied records.

use std::collections::BTreeMap;
use std::fmt;

use crate::resource::{State, Value};

/// Attribute holding the remote object ID
pub const ID_ATTRIBUTE: &str = "id";

/// Local attribute holding the site a resource lives in
pub const SCOPE_ATTRIBUTE: &str = "site";

/// Local attribute stamped by the controller after create/update
pub const LAST_UPDATED_ATTRIBUTE: &str = "last_updated";

/// Site used when a record leaves `site` unset
pub const DEFAULT_SCOPE: &str = "default";

/// Attribute type
#[derive(Debug, Clone)]
pub enum AttributeType {
    /// String
    String,
    /// Integer
    Int,
    /// Boolean
    Bool,
    /// Enum (list of allowed values)
    Enum(Vec<String>),
    /// Custom type (with validation function)
    Custom {
        name: String,
        base: Box<AttributeType>,
        validate: fn(&Value) -> Result<(), String>,
    },
    /// List
    List(Box<AttributeType>),
    /// Nested object with its own attributes
    Object(Vec<AttributeSchema>),
}

impl AttributeType {
    /// Check if a value conforms to this type
    ///
    /// `Null` and `Unknown` conform to every type.
    pub fn validate(&self, value: &Value) -> Result<(), TypeError> {
        match (self, value) {
            (_, Value::Null | Value::Unknown) => Ok(()),
            (AttributeType::String, Value::String(_)) => Ok(()),
            (AttributeType::Int, Value::Int(_)) => Ok(()),
            (AttributeType::Bool, Value::Bool(_)) => Ok(()),

            (AttributeType::Enum(variants), Value::String(s)) => {
                if variants.iter().any(|v| v == s) {
                    Ok(())
                } else {
                    Err(TypeError::InvalidEnumVariant {
                        value: s.clone(),
                        expected: variants.clone(),
                    })
                }
            }

            (AttributeType::Custom { validate, .. }, v) => {
                validate(v).map_err(|msg| TypeError::ValidationFailed { message: msg })
            }

            (AttributeType::List(inner), Value::List(items)) => {
                for (i, item) in items.iter().enumerate() {
                    inner.validate(item).map_err(|e| TypeError::ListItemError {
                        index: i,
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Object(attrs), Value::Object(members)) => {
                for (key, member) in members {
                    let inner = match attrs.iter().find(|a| &a.name == key) {
                        Some(attr) => attr.attr_type.validate(member),
                        None => Err(TypeError::ExtraAttribute { name: key.clone() }),
                    };
                    inner.map_err(|e| TypeError::ObjectMemberError {
                        key: key.clone(),
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            _ => Err(TypeError::TypeMismatch {
                expected: self.type_name(),
                got: value.type_name(),
            }),
        }
    }

    /// The primitive type values of this type are carried as on the wire
    pub fn base_type(&self) -> &AttributeType {
        static STRING: AttributeType = AttributeType::String;
        match self {
            AttributeType::Enum(_) => &STRING,
            AttributeType::Custom { base, .. } => base.base_type(),
            other => other,
        }
    }

    pub fn type_name(&self) -> String {
        match self {
            AttributeType::String => "String".to_string(),
            AttributeType::Int => "Int".to_string(),
            AttributeType::Bool => "Bool".to_string(),
            AttributeType::Enum(variants) => format!("Enum({})", variants.join(" | ")),
            AttributeType::Custom { name, .. } => name.clone(),
            AttributeType::List(inner) => format!("List<{}>", inner.type_name()),
            AttributeType::Object(_) => "Object".to_string(),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Type error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Invalid enum variant '{value}', expected one of: {}", expected.join(", "))]
    InvalidEnumVariant {
        value: String,
        expected: Vec<String>,
    },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Attribute '{name}' is missing from the record")]
    MissingAttribute { name: String },

    #[error("Required attribute '{name}' is missing")]
    MissingRequired { name: String },

    #[error("Attribute '{name}' is not declared by the schema")]
    ExtraAttribute { name: String },

    #[error("Attribute '{name}': {inner}")]
    AttributeError { name: String, inner: Box<TypeError> },

    #[error("List item at index {index}: {inner}")]
    ListItemError { index: usize, inner: Box<TypeError> },

    #[error("Object member '{key}': {inner}")]
    ObjectMemberError { key: String, inner: Box<TypeError> },
}

impl TypeError {
    /// Name of the top-level attribute the error refers to
    pub fn attribute(&self) -> Option<&str> {
        match self {
            TypeError::MissingAttribute { name }
            | TypeError::MissingRequired { name }
            | TypeError::ExtraAttribute { name }
            | TypeError::AttributeError { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Who sets an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    Required,
    Optional,
    /// Set by the remote side only
    Computed,
    /// Set by the user, or by the remote side when left unset
    OptionalComputed,
}

/// Where an attribute lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeSource {
    /// Carried in wire records
    Wire,
    /// Owned by the host record, never sent to or read from the remote API
    Local,
}

/// Width of the remote side's native integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    I64,
    I32,
}

/// Attribute schema
#[derive(Debug, Clone)]
pub struct AttributeSchema {
    pub name: String,
    pub attr_type: AttributeType,
    pub mutability: Mutability,
    pub sensitive: bool,
    pub description: Option<String>,
    /// Wire field name when it differs from `name` (e.g., "desc" for "description")
    pub wire_name: Option<String>,
    pub source: AttributeSource,
    pub int_width: IntWidth,
    /// Wire fields a bounded list is spread over, in order
    pub flattened: Option<Vec<String>>,
}

impl AttributeSchema {
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            mutability: Mutability::Optional,
            sensitive: false,
            description: None,
            wire_name: None,
            source: AttributeSource::Wire,
            int_width: IntWidth::I64,
            flattened: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.mutability = Mutability::Required;
        self
    }

    pub fn computed(mut self) -> Self {
        self.mutability = Mutability::Computed;
        self
    }

    pub fn optional_computed(mut self) -> Self {
        self.mutability = Mutability::OptionalComputed;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_wire_name(mut self, name: impl Into<String>) -> Self {
        self.wire_name = Some(name.into());
        self
    }

    pub fn local(mut self) -> Self {
        self.source = AttributeSource::Local;
        self
    }

    pub fn narrow_i32(mut self) -> Self {
        self.int_width = IntWidth::I32;
        self
    }

    /// Spread a list of strings over the given wire fields
    pub fn flattened<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flattened = Some(slots.into_iter().map(Into::into).collect());
        self
    }

    /// Wire field name of this attribute
    pub fn wire_name(&self) -> &str {
        self.wire_name.as_deref().unwrap_or(&self.name)
    }

    pub fn is_wire(&self) -> bool {
        self.source == AttributeSource::Wire
    }

    pub fn is_required(&self) -> bool {
        self.mutability == Mutability::Required
    }

    /// Whether the remote side may fill this attribute in
    pub fn is_computed(&self) -> bool {
        matches!(
            self.mutability,
            Mutability::Computed | Mutability::OptionalComputed
        )
    }
}

/// How a resource kind is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityShape {
    /// By `id` alone
    Simple,
    /// By `site` and `id`
    Composite,
}

/// Resource schema
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    pub resource_type: String,
    pub attributes: BTreeMap<String, AttributeSchema>,
    pub description: Option<String>,
    pub identity: IdentityShape,
    pub tracks_last_updated: bool,
}

impl ResourceSchema {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            attributes: BTreeMap::new(),
            description: None,
            identity: IdentityShape::Composite,
            tracks_last_updated: false,
        }
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_identity(mut self, identity: IdentityShape) -> Self {
        self.identity = identity;
        self
    }

    /// Declare the local `site` attribute
    pub fn with_scope(self) -> Self {
        self.attribute(
            AttributeSchema::new(SCOPE_ATTRIBUTE, AttributeType::String)
                .optional_computed()
                .local()
                .with_description("The name of the site to associate the resource with."),
        )
    }

    /// Declare the local `last_updated` attribute and have the controller stamp it
    pub fn with_last_updated(mut self) -> Self {
        self.tracks_last_updated = true;
        self.attribute(
            AttributeSchema::new(LAST_UPDATED_ATTRIBUTE, AttributeType::String)
                .computed()
                .local(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.get(name)
    }

    /// Attributes carried in wire records
    pub fn wire_attributes(&self) -> impl Iterator<Item = &AttributeSchema> {
        self.attributes.values().filter(|a| a.is_wire())
    }

    /// Attributes owned by the host record
    pub fn local_attributes(&self) -> impl Iterator<Item = &AttributeSchema> {
        self.attributes.values().filter(|a| !a.is_wire())
    }

    /// A record with every declared attribute set to `Null`
    pub fn null_state(&self) -> State {
        self.attributes
            .keys()
            .map(|name| (name.clone(), Value::Null))
            .collect()
    }

    /// Validate a host-supplied record
    ///
    /// Reports missing, wrongly typed and undeclared attributes, each naming
    /// the attribute.
    pub fn validate(&self, state: &State) -> Result<(), Vec<TypeError>> {
        let mut errors = Vec::new();

        for (name, schema) in &self.attributes {
            match state.get(name) {
                None => errors.push(TypeError::MissingAttribute { name: name.clone() }),
                Some(Value::Null) if schema.is_required() => {
                    errors.push(TypeError::MissingRequired { name: name.clone() })
                }
                Some(_) => {}
            }
        }

        for (name, value) in &state.attributes {
            match self.attributes.get(name) {
                Some(schema) => {
                    if let Err(e) = schema.attr_type.validate(value) {
                        errors.push(TypeError::AttributeError {
                            name: name.clone(),
                            inner: Box::new(e),
                        });
                    }
                }
                None => errors.push(TypeError::ExtraAttribute { name: name.clone() }),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Helper functions for common types
pub mod types {
    use super::*;

    /// CIDR block type (e.g., "10.0.0.0/16")
    pub fn cidr() -> AttributeType {
        AttributeType::Custom {
            name: "Cidr".to_string(),
            base: Box::new(AttributeType::String),
            validate: |value| match value {
                Value::String(s) => validate_cidr(s),
                Value::Null | Value::Unknown => Ok(()),
                _ => Err("Expected string".to_string()),
            },
        }
    }

    /// Port number type (1-65535)
    pub fn port() -> AttributeType {
        AttributeType::Custom {
            name: "Port".to_string(),
            base: Box::new(AttributeType::Int),
            validate: |value| match value {
                Value::Int(n) if (1..=65535).contains(n) => Ok(()),
                Value::Int(n) => Err(format!("Port {} out of range 1-65535", n)),
                Value::Null | Value::Unknown => Ok(()),
                _ => Err("Expected integer".to_string()),
            },
        }
    }
}

/// Validate CIDR block format (e.g., "10.0.0.0/16")
pub fn validate_cidr(cidr: &str) -> Result<(), String> {
    let Some((ip, prefix)) = cidr.split_once('/') else {
        return Err(format!(
            "Invalid CIDR format '{}': expected IP/prefix",
            cidr
        ));
    };

    let octets: Vec<&str> = ip.split('.').collect();
    if octets.len() != 4 {
        return Err(format!("Invalid IP address '{}': expected 4 octets", ip));
    }

    for octet in &octets {
        if octet.parse::<u8>().is_err() {
            return Err(format!(
                "Invalid octet '{}' in IP address: must be 0-255",
                octet
            ));
        }
    }

    match prefix.parse::<u8>() {
        Ok(p) if p <= 32 => Ok(()),
        Ok(p) => Err(format!("Invalid prefix length '{}': must be 0-32", p)),
        Err(_) => Err(format!(
            "Invalid prefix length '{}': must be a number",
            prefix
        )),
    }
}
