//! Codec - Convert between typed states and wire records
//!
//! One generic codec for every resource kind: the schema decides which
//! attributes exist, their wire field names and how they are laid out.

use std::collections::BTreeMap;

use serde_json::json;

use crate::diagnostics::{Diagnostic, Severity};
use crate::resource::{State, Value};
use crate::schema::{AttributeSchema, AttributeType, IntWidth, ResourceSchema};

/// The remote API's JSON representation of one object
pub type WireRecord = serde_json::Map<String, serde_json::Value>;

/// Error type for state/wire conversion
///
/// `path` names the attribute, with `.member` and `[index]` suffixes for
/// nested values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("Attribute '{path}' is missing from the record")]
    MissingAttribute { path: String },

    #[error("Attribute '{path}': expected {expected}, got {actual}")]
    WrongType {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("Attribute '{path}' is not declared by the schema")]
    ExtraAttribute { path: String },

    #[error("Attribute '{path}' is unknown and cannot be sent to the remote API")]
    UnknownValue { path: String },

    #[error("Attribute '{path}': {value} does not fit in a 32-bit integer")]
    OutOfRange { path: String, value: String },

    #[error("Attribute '{path}' has {count} elements but only {slots} are supported")]
    TooManyElements {
        path: String,
        count: usize,
        slots: usize,
    },
}

impl CodecError {
    pub fn path(&self) -> &str {
        match self {
            CodecError::MissingAttribute { path }
            | CodecError::WrongType { path, .. }
            | CodecError::ExtraAttribute { path }
            | CodecError::UnknownValue { path }
            | CodecError::OutOfRange { path, .. }
            | CodecError::TooManyElements { path, .. } => path,
        }
    }

    /// Top-level attribute the error refers to
    pub fn attribute(&self) -> &str {
        let path = self.path();
        let end = path.find(['.', '[']).unwrap_or(path.len());
        &path[..end]
    }

    fn summary(&self) -> &'static str {
        match self {
            CodecError::MissingAttribute { .. } => "Attribute Missing",
            CodecError::WrongType { .. } => "Attribute Wrong Type",
            CodecError::ExtraAttribute { .. } => "Extra Attribute",
            CodecError::UnknownValue { .. } => "Unknown Value",
            CodecError::OutOfRange { .. } => "Value Out Of Range",
            CodecError::TooManyElements { .. } => "Too Many Elements",
        }
    }
}

impl From<CodecError> for Diagnostic {
    fn from(err: CodecError) -> Self {
        Diagnostic {
            severity: Severity::Error,
            summary: err.summary().to_string(),
            attribute: Some(err.attribute().to_string()),
            detail: err.to_string(),
        }
    }
}

/// Decode a wire record into a state holding every wire attribute of the schema
///
/// Wire fields the schema does not declare are ignored.
pub fn decode(schema: &ResourceSchema, wire: &WireRecord) -> Result<State, CodecError> {
    let attributes = decode_fields(schema.wire_attributes(), wire, None)?;
    Ok(State { attributes })
}

/// Decode a wire object against a list of member attributes
pub fn decode_object(
    attrs: &[AttributeSchema],
    wire: &WireRecord,
) -> Result<BTreeMap<String, Value>, CodecError> {
    decode_fields(attrs.iter(), wire, None)
}

/// Encode a state into a wire record holding every wire attribute of the schema
///
/// Local attributes are checked for existence but never emitted.
pub fn encode(schema: &ResourceSchema, state: &State) -> Result<WireRecord, CodecError> {
    if let Some(extra) = state
        .attributes
        .keys()
        .find(|name| schema.get(name).is_none())
    {
        return Err(CodecError::ExtraAttribute {
            path: extra.clone(),
        });
    }
    encode_fields(schema.wire_attributes(), &state.attributes, None)
}

fn child_path(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}.{}", prefix, name),
        None => name.to_string(),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "Null",
        serde_json::Value::Bool(_) => "Bool",
        serde_json::Value::Number(_) => "Number",
        serde_json::Value::String(_) => "String",
        serde_json::Value::Array(_) => "Array",
        serde_json::Value::Object(_) => "Object",
    }
}

fn decode_fields<'a>(
    attrs: impl Iterator<Item = &'a AttributeSchema>,
    wire: &WireRecord,
    prefix: Option<&str>,
) -> Result<BTreeMap<String, Value>, CodecError> {
    let mut out = BTreeMap::new();
    for attr in attrs {
        let path = child_path(prefix, &attr.name);
        let value = match &attr.flattened {
            Some(slots) => decode_flattened(slots, wire, &path)?,
            None => {
                let raw = wire
                    .get(attr.wire_name())
                    .ok_or_else(|| CodecError::MissingAttribute { path: path.clone() })?;
                decode_value(&attr.attr_type, attr.int_width, raw, &path)?
            }
        };
        out.insert(attr.name.clone(), value);
    }
    Ok(out)
}

/// Collect non-empty slots in slot order; absent and null slots count as empty
fn decode_flattened(slots: &[String], wire: &WireRecord, path: &str) -> Result<Value, CodecError> {
    let mut items = Vec::new();
    for slot in slots {
        match wire.get(slot) {
            None | Some(serde_json::Value::Null) => {}
            Some(serde_json::Value::String(s)) if s.is_empty() => {}
            Some(serde_json::Value::String(s)) => items.push(Value::String(s.clone())),
            Some(other) => {
                return Err(CodecError::WrongType {
                    path: format!("{}.{}", path, slot),
                    expected: "String".to_string(),
                    actual: json_type_name(other).to_string(),
                });
            }
        }
    }
    Ok(Value::List(items))
}

fn decode_value(
    attr_type: &AttributeType,
    width: IntWidth,
    raw: &serde_json::Value,
    path: &str,
) -> Result<Value, CodecError> {
    match (attr_type.base_type(), raw) {
        (_, serde_json::Value::Null) => Ok(Value::Null),
        (AttributeType::String, serde_json::Value::String(s)) => Ok(Value::String(s.clone())),
        (AttributeType::Bool, serde_json::Value::Bool(b)) => Ok(Value::Bool(*b)),
        (AttributeType::Int, serde_json::Value::Number(n)) => {
            let int = match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => i,
                (None, Some(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => f as i64,
                (None, Some(f)) if f.fract() == 0.0 => {
                    return Err(CodecError::OutOfRange {
                        path: path.to_string(),
                        value: n.to_string(),
                    });
                }
                _ => {
                    return Err(CodecError::WrongType {
                        path: path.to_string(),
                        expected: "Int".to_string(),
                        actual: format!("Number({})", n),
                    });
                }
            };
            check_width(int, width, path)?;
            Ok(Value::Int(int))
        }
        (AttributeType::List(inner), serde_json::Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| decode_value(inner, width, item, &format!("{}[{}]", path, i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        (AttributeType::Object(attrs), serde_json::Value::Object(members)) => {
            decode_fields(attrs.iter(), members, Some(path)).map(Value::Object)
        }
        (expected, actual) => Err(CodecError::WrongType {
            path: path.to_string(),
            expected: expected.type_name(),
            actual: json_type_name(actual).to_string(),
        }),
    }
}

fn check_width(value: i64, width: IntWidth, path: &str) -> Result<(), CodecError> {
    if width == IntWidth::I32 && i32::try_from(value).is_err() {
        return Err(CodecError::OutOfRange {
            path: path.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

fn encode_fields<'a>(
    attrs: impl Iterator<Item = &'a AttributeSchema>,
    members: &BTreeMap<String, Value>,
    prefix: Option<&str>,
) -> Result<WireRecord, CodecError> {
    let mut out = WireRecord::new();
    for attr in attrs {
        let path = child_path(prefix, &attr.name);
        let value = members.get(&attr.name).unwrap_or(&Value::Null);
        match &attr.flattened {
            Some(slots) => encode_flattened(slots, value, &path, &mut out)?,
            None => {
                let raw = encode_value(&attr.attr_type, attr.int_width, value, &path)?;
                out.insert(attr.wire_name().to_string(), raw);
            }
        }
    }
    Ok(out)
}

/// Write list elements into the slots in order and blank the rest
fn encode_flattened(
    slots: &[String],
    value: &Value,
    path: &str,
    out: &mut WireRecord,
) -> Result<(), CodecError> {
    let items: &[Value] = match value {
        Value::Unknown => {
            return Err(CodecError::UnknownValue {
                path: path.to_string(),
            });
        }
        Value::Null => &[],
        Value::List(items) => items,
        other => {
            return Err(CodecError::WrongType {
                path: path.to_string(),
                expected: "List<String>".to_string(),
                actual: other.type_name(),
            });
        }
    };

    if items.len() > slots.len() {
        return Err(CodecError::TooManyElements {
            path: path.to_string(),
            count: items.len(),
            slots: slots.len(),
        });
    }

    for (i, slot) in slots.iter().enumerate() {
        let raw = match items.get(i) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Unknown) => {
                return Err(CodecError::UnknownValue {
                    path: format!("{}[{}]", path, i),
                });
            }
            Some(other) => {
                return Err(CodecError::WrongType {
                    path: format!("{}[{}]", path, i),
                    expected: "String".to_string(),
                    actual: other.type_name(),
                });
            }
        };
        out.insert(slot.clone(), json!(raw));
    }
    Ok(())
}

fn encode_value(
    attr_type: &AttributeType,
    width: IntWidth,
    value: &Value,
    path: &str,
) -> Result<serde_json::Value, CodecError> {
    match (attr_type.base_type(), value) {
        (_, Value::Unknown) => Err(CodecError::UnknownValue {
            path: path.to_string(),
        }),
        (base, Value::Null) => Ok(zero_value(base)),
        (AttributeType::String, Value::String(s)) => Ok(json!(s)),
        (AttributeType::Bool, Value::Bool(b)) => Ok(json!(b)),
        (AttributeType::Int, Value::Int(n)) => {
            check_width(*n, width, path)?;
            Ok(json!(n))
        }
        (AttributeType::List(inner), Value::List(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| encode_value(inner, width, item, &format!("{}[{}]", path, i)))
            .collect::<Result<Vec<_>, _>>()
            .map(serde_json::Value::Array),
        (AttributeType::Object(attrs), Value::Object(members)) => {
            if let Some(extra) = members.keys().find(|k| !attrs.iter().any(|a| &a.name == *k)) {
                return Err(CodecError::ExtraAttribute {
                    path: child_path(Some(path), extra),
                });
            }
            encode_fields(attrs.iter(), members, Some(path)).map(serde_json::Value::Object)
        }
        (expected, actual) => Err(CodecError::WrongType {
            path: path.to_string(),
            expected: expected.type_name(),
            actual: actual.type_name(),
        }),
    }
}

/// Wire representation of an unset value
fn zero_value(attr_type: &AttributeType) -> serde_json::Value {
    match attr_type.base_type() {
        AttributeType::Int => json!(0),
        AttributeType::Bool => json!(false),
        AttributeType::List(_) => json!([]),
        AttributeType::Object(attrs) => {
            let mut out = WireRecord::new();
            for attr in attrs {
                match &attr.flattened {
                    Some(slots) => {
                        for slot in slots {
                            out.insert(slot.clone(), json!(""));
                        }
                    }
                    None => {
                        out.insert(attr.wire_name().to_string(), zero_value(&attr.attr_type));
                    }
                }
            }
            serde_json::Value::Object(out)
        }
        _ => json!(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dns_slots() -> Vec<&'static str> {
        vec!["dhcpd_dns_1", "dhcpd_dns_2", "dhcpd_dns_3", "dhcpd_dns_4"]
    }

    fn network_schema() -> ResourceSchema {
        ResourceSchema::new("network")
            .attribute(AttributeSchema::new("id", AttributeType::String).computed())
            .attribute(AttributeSchema::new("name", AttributeType::String).required())
            .attribute(
                AttributeSchema::new("description", AttributeType::String).with_wire_name("desc"),
            )
            .attribute(AttributeSchema::new("vlan", AttributeType::Int).narrow_i32())
            .attribute(AttributeSchema::new("enabled", AttributeType::Bool))
            .attribute(
                AttributeSchema::new(
                    "dhcp_dns",
                    AttributeType::List(Box::new(AttributeType::String)),
                )
                .flattened(dns_slots()),
            )
            .with_scope()
    }

    fn wire(value: serde_json::Value) -> WireRecord {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    fn known_state() -> State {
        State::new()
            .with_attribute("id", "5f1e")
            .with_attribute("name", "lan")
            .with_attribute("description", "office")
            .with_attribute("vlan", 10i64)
            .with_attribute("enabled", true)
            .with_attribute("dhcp_dns", Value::strings(["8.8.8.8", "1.1.1.1"]))
    }

    #[test]
    fn round_trip_fully_known_state() {
        let schema = network_schema();
        let state = known_state();
        let encoded = encode(&schema, &state).unwrap();
        assert_eq!(encoded.get("desc"), Some(&json!("office")));
        assert!(encoded.get("description").is_none());
        assert_eq!(decode(&schema, &encoded).unwrap(), state);
    }

    #[test]
    fn encode_flattened_fills_unused_slots() {
        let encoded = encode(&network_schema(), &known_state()).unwrap();
        let slots: Vec<&serde_json::Value> =
            dns_slots().iter().map(|s| &encoded[*s]).collect();
        assert_eq!(
            slots,
            vec![&json!("8.8.8.8"), &json!("1.1.1.1"), &json!(""), &json!("")]
        );
    }

    #[test]
    fn decode_flattened_skips_empty_slots() {
        let record = wire(json!({
            "_id": "5f1e",
            "name": "lan",
            "desc": "",
            "vlan": 10,
            "enabled": true,
            "dhcpd_dns_1": "9.9.9.9",
            "dhcpd_dns_2": "",
            "dhcpd_dns_3": "",
            "dhcpd_dns_4": "8.8.4.4",
            "id": "5f1e"
        }));
        let state = decode(&network_schema(), &record).unwrap();
        assert_eq!(
            state.get("dhcp_dns"),
            Some(&Value::strings(["9.9.9.9", "8.8.4.4"]))
        );
    }

    #[test]
    fn decode_flattened_all_empty_is_empty_list() {
        let record = wire(json!({
            "id": "1", "name": "lan", "desc": "", "vlan": 1, "enabled": false
        }));
        let state = decode(&network_schema(), &record).unwrap();
        assert_eq!(state.get("dhcp_dns"), Some(&Value::List(vec![])));
    }

    #[test]
    fn decode_missing_attribute_names_it() {
        let record = wire(json!({
            "id": "1", "desc": "", "vlan": 1, "enabled": false
        }));
        let err = decode(&network_schema(), &record).unwrap_err();
        assert_eq!(
            err,
            CodecError::MissingAttribute {
                path: "name".to_string()
            }
        );
        let diagnostic: Diagnostic = err.into();
        assert_eq!(diagnostic.summary, "Attribute Missing");
        assert_eq!(diagnostic.attribute.as_deref(), Some("name"));
    }

    #[test]
    fn decode_ignores_local_and_unknown_wire_fields() {
        let record = wire(json!({
            "id": "1", "name": "lan", "desc": "", "vlan": 1, "enabled": false,
            "site_id": "abc", "attr_hidden_id": "x"
        }));
        let state = decode(&network_schema(), &record).unwrap();
        assert!(state.get("site").is_none());
        assert!(state.get("site_id").is_none());
    }

    #[test]
    fn decode_null_and_empty_lists() {
        let schema = ResourceSchema::new("firewall_group").attribute(AttributeSchema::new(
            "group_members",
            AttributeType::List(Box::new(AttributeType::String)),
        ));
        let null = decode(&schema, &wire(json!({"group_members": null}))).unwrap();
        assert_eq!(null.get("group_members"), Some(&Value::Null));
        let empty = decode(&schema, &wire(json!({"group_members": []}))).unwrap();
        assert_eq!(empty.get("group_members"), Some(&Value::List(vec![])));
    }

    #[test]
    fn decode_rejects_out_of_range_narrow_int() {
        let record = wire(json!({
            "id": "1", "name": "lan", "desc": "", "vlan": 4_294_967_296u64, "enabled": false
        }));
        let err = decode(&network_schema(), &record).unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { ref path, .. } if path == "vlan"));
    }

    #[test]
    fn decode_rejects_fractional_int() {
        let record = wire(json!({
            "id": "1", "name": "lan", "desc": "", "vlan": 1.5, "enabled": false
        }));
        assert!(matches!(
            decode(&network_schema(), &record),
            Err(CodecError::WrongType { .. })
        ));
    }

    #[test]
    fn encode_unknown_fails_fast() {
        let state = known_state().with_attribute("id", Value::Unknown);
        let err = encode(&network_schema(), &state).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnknownValue {
                path: "id".to_string()
            }
        );
    }

    #[test]
    fn encode_null_as_zero_values() {
        let state = State::new()
            .with_attribute("id", Value::Null)
            .with_attribute("name", "lan")
            .with_attribute("description", Value::Null)
            .with_attribute("vlan", Value::Null)
            .with_attribute("enabled", Value::Null)
            .with_attribute("dhcp_dns", Value::Null)
            .with_attribute("site", Value::Null);
        let encoded = encode(&network_schema(), &state).unwrap();
        assert_eq!(encoded["id"], json!(""));
        assert_eq!(encoded["desc"], json!(""));
        assert_eq!(encoded["vlan"], json!(0));
        assert_eq!(encoded["enabled"], json!(false));
        assert_eq!(encoded["dhcpd_dns_1"], json!(""));
        assert!(encoded.get("site").is_none());
    }

    #[test]
    fn encode_rejects_extra_attribute() {
        let state = known_state().with_attribute("color", "red");
        let err = encode(&network_schema(), &state).unwrap_err();
        assert_eq!(
            err,
            CodecError::ExtraAttribute {
                path: "color".to_string()
            }
        );
    }

    #[test]
    fn encode_rejects_too_many_flattened_elements() {
        let state = known_state().with_attribute(
            "dhcp_dns",
            Value::strings(["1.1.1.1", "1.0.0.1", "8.8.8.8", "8.8.4.4", "9.9.9.9"]),
        );
        let err = encode(&network_schema(), &state).unwrap_err();
        assert_eq!(
            err,
            CodecError::TooManyElements {
                path: "dhcp_dns".to_string(),
                count: 5,
                slots: 4
            }
        );
        assert_eq!(Diagnostic::from(err).summary, "Too Many Elements");
    }

    #[test]
    fn encode_checks_narrow_int_range() {
        let state = known_state().with_attribute("vlan", i64::from(i32::MAX) + 1);
        let err = encode(&network_schema(), &state).unwrap_err();
        assert_eq!(Diagnostic::from(err).summary, "Value Out Of Range");
    }

    #[test]
    fn encode_wrong_type() {
        let state = known_state().with_attribute("enabled", "yes");
        let err = encode(&network_schema(), &state).unwrap_err();
        assert_eq!(
            err,
            CodecError::WrongType {
                path: "enabled".to_string(),
                expected: "Bool".to_string(),
                actual: "String".to_string()
            }
        );
    }

    #[test]
    fn nested_object_paths() {
        let member = AttributeType::Object(vec![
            AttributeSchema::new("name", AttributeType::String),
            AttributeSchema::new("port", AttributeType::Int),
        ]);
        let schema = ResourceSchema::new("group")
            .attribute(AttributeSchema::new("members", AttributeType::List(Box::new(member))));
        let record = wire(json!({
            "members": [{"name": "a", "port": 1}, {"name": "b"}]
        }));
        let err = decode(&schema, &record).unwrap_err();
        assert_eq!(err.path(), "members[1].port");
        assert_eq!(err.attribute(), "members");
    }

    #[test]
    fn decode_object_list_item() {
        let attrs = vec![
            AttributeSchema::new("id", AttributeType::String).with_wire_name("_id"),
            AttributeSchema::new("name", AttributeType::String),
        ];
        let item = wire(json!({"_id": "1", "name": "guests", "site_id": "s"}));
        let members = decode_object(&attrs, &item).unwrap();
        assert_eq!(members.get("id"), Some(&Value::string("1")));
        assert_eq!(members.len(), 2);
    }
}
