//! Resource - Typed values, state records and resource identities

use std::collections::BTreeMap;
use std::fmt;

/// Separator between the scope and the local ID of a composite identity
pub const IDENTITY_DELIMITER: char = '/';

/// Attribute value of a resource
///
/// `Null` and `Unknown` are first-class: the host hands over plans in which
/// computed attributes are not yet known, and optional attributes may be unset.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    List(Vec<Value>),
    Object(BTreeMap<String, Value>),
    /// Known to be absent
    Null,
    /// Not yet known (only valid in plans)
    Unknown,
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Build a list of strings
    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(|s| Value::String(s.into())).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// Neither `Null` nor `Unknown`
    pub fn is_known(&self) -> bool {
        !self.is_null() && !self.is_unknown()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Whether any part of this value is still unknown
    pub fn contains_unknown(&self) -> bool {
        match self {
            Value::Unknown => true,
            Value::List(items) => items.iter().any(Value::contains_unknown),
            Value::Object(members) => members.values().any(Value::contains_unknown),
            _ => false,
        }
    }

    pub(crate) fn type_name(&self) -> String {
        match self {
            Value::String(_) => "String".to_string(),
            Value::Int(_) => "Int".to_string(),
            Value::Bool(_) => "Bool".to_string(),
            Value::List(_) => "List".to_string(),
            Value::Object(_) => "Object".to_string(),
            Value::Null => "Null".to_string(),
            Value::Unknown => "Unknown".to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// A typed record keyed by attribute name
///
/// Plans, prior states, data-source configs and operation results all share
/// this shape; which attributes are expected is decided by the schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub attributes: BTreeMap<String, Value>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// String value of an attribute if it is known
    pub fn known_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn contains_unknown(&self) -> bool {
        self.attributes.values().any(Value::contains_unknown)
    }
}

impl FromIterator<(String, Value)> for State {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

/// Error type for identity construction and parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Expected import identifier with format: site/id. Got: {raw:?}")]
    Format { raw: String },

    #[error("Identity component must not be empty")]
    EmptyComponent,

    #[error("Identity component {component:?} must not contain '/'")]
    DelimiterInComponent { component: String },
}

/// Identity of a remote object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceIdentity {
    /// A single opaque ID
    Simple(String),
    /// A scope (site) and an ID local to it
    Composite { scope: String, id: String },
}

impl ResourceIdentity {
    pub fn simple(id: impl Into<String>) -> Self {
        ResourceIdentity::Simple(id.into())
    }

    /// Build a composite identity, rejecting components that would not
    /// survive a join/split round trip
    pub fn composite(
        scope: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        let scope = scope.into();
        let id = id.into();
        for component in [&scope, &id] {
            if component.is_empty() {
                return Err(IdentityError::EmptyComponent);
            }
            if component.contains(IDENTITY_DELIMITER) {
                return Err(IdentityError::DelimiterInComponent {
                    component: component.clone(),
                });
            }
        }
        Ok(ResourceIdentity::Composite { scope, id })
    }

    /// Parse a `scope/id` import identifier
    pub fn parse_composite(raw: &str) -> Result<Self, IdentityError> {
        let parts: Vec<&str> = raw.split(IDENTITY_DELIMITER).collect();
        match parts.as_slice() {
            [scope, id] if !scope.is_empty() && !id.is_empty() => Ok(ResourceIdentity::Composite {
                scope: scope.to_string(),
                id: id.to_string(),
            }),
            _ => Err(IdentityError::Format {
                raw: raw.to_string(),
            }),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ResourceIdentity::Simple(id) => id,
            ResourceIdentity::Composite { id, .. } => id,
        }
    }

    pub fn scope(&self) -> Option<&str> {
        match self {
            ResourceIdentity::Simple(_) => None,
            ResourceIdentity::Composite { scope, .. } => Some(scope),
        }
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceIdentity::Simple(id) => write!(f, "{}", id),
            ResourceIdentity::Composite { scope, id } => {
                write!(f, "{}{}{}", scope, IDENTITY_DELIMITER, id)
            }
        }
    }
}
