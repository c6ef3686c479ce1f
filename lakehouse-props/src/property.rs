// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Property descriptors
//!
//! A `PropertyEntry` describes one configuration key a connector accepts: its
//! flags, its default, and the kind of value it holds. Entries are declared
//! through the constructor functions below and validate candidate values
//! without touching any shared state.

use crate::error::{PropertyError, PropertyResult};
use serde::Serialize;
use std::fmt;

/// Kind of value a property holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValueKind {
    String,
    Integer,
    Boolean,
    /// Closed set of allowed tags, matched case-sensitively
    Enum { allowed: Vec<String> },
}

impl ValueKind {
    /// Human readable name used in type errors and introspection output
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Boolean => "boolean",
            ValueKind::Enum { .. } => "enum",
        }
    }
}

/// Validated, typed property value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    Enum(String),
}

impl TypedValue {
    /// String form of string and enum values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) | TypedValue::Enum(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TypedValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::String(s) | TypedValue::Enum(s) => write!(f, "{}", s),
            TypedValue::Integer(i) => write!(f, "{}", i),
            TypedValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Makes a property required only while another property holds a given tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredWhen {
    pub key: String,
    pub equals: String,
}

/// Schema entry for a single configuration key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyEntry {
    name: String,
    description: String,
    required: bool,
    immutable: bool,
    hidden: bool,
    reserved: bool,
    default_value: Option<String>,
    kind: ValueKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    required_when: Option<RequiredWhen>,
}

/// Declare a required string property with no default
pub fn string_required_entry(
    name: &str,
    description: &str,
    immutable: bool,
    hidden: bool,
) -> PropertyEntry {
    PropertyEntry::new(name, description, ValueKind::String)
        .flags(true, immutable, hidden, false)
}

/// Declare an optional string property, substituted with `default_value` when absent
pub fn string_optional_entry(
    name: &str,
    description: &str,
    immutable: bool,
    default_value: Option<&str>,
    hidden: bool,
) -> PropertyEntry {
    PropertyEntry::new(name, description, ValueKind::String)
        .flags(false, immutable, hidden, false)
        .with_default(default_value)
}

/// Declare an enumerated property validated against `allowed_tags`
#[allow(clippy::too_many_arguments)]
pub fn enum_entry(
    name: &str,
    description: &str,
    required: bool,
    immutable: bool,
    allowed_tags: &[&str],
    default_value: Option<&str>,
    hidden: bool,
    reserved: bool,
) -> PropertyEntry {
    let allowed = allowed_tags.iter().map(|tag| tag.to_string()).collect();
    PropertyEntry::new(name, description, ValueKind::Enum { allowed })
        .flags(required, immutable, hidden, reserved)
        .with_default(default_value)
}

/// Declare an optional integer property
pub fn integer_optional_entry(
    name: &str,
    description: &str,
    immutable: bool,
    default_value: Option<i64>,
    hidden: bool,
) -> PropertyEntry {
    let default_value = default_value.map(|v| v.to_string());
    PropertyEntry::new(name, description, ValueKind::Integer)
        .flags(false, immutable, hidden, false)
        .with_default(default_value.as_deref())
}

/// Declare an optional boolean property
pub fn boolean_optional_entry(
    name: &str,
    description: &str,
    immutable: bool,
    default_value: Option<bool>,
    hidden: bool,
) -> PropertyEntry {
    let default_value = default_value.map(|v| v.to_string());
    PropertyEntry::new(name, description, ValueKind::Boolean)
        .flags(false, immutable, hidden, false)
        .with_default(default_value.as_deref())
}

impl PropertyEntry {
    fn new(name: &str, description: &str, kind: ValueKind) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            required: false,
            immutable: false,
            hidden: false,
            reserved: false,
            default_value: None,
            kind,
            required_when: None,
        }
    }

    fn flags(mut self, required: bool, immutable: bool, hidden: bool, reserved: bool) -> Self {
        self.required = required;
        self.immutable = immutable;
        self.hidden = hidden;
        self.reserved = reserved;
        self
    }

    fn with_default(mut self, default_value: Option<&str>) -> Self {
        self.default_value = default_value.map(str::to_string);
        self
    }

    /// Require this property whenever `key` resolves to `equals`
    pub fn required_when(mut self, key: &str, equals: &str) -> Self {
        self.required_when = Some(RequiredWhen {
            key: key.to_string(),
            equals: equals.to_string(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_reserved(&self) -> bool {
        self.reserved
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    pub fn condition(&self) -> Option<&RequiredWhen> {
        self.required_when.as_ref()
    }

    /// Validate a candidate value, or its absence
    ///
    /// Absent optional values resolve to the parsed default, or to `None` when
    /// the entry declares no default.
    pub fn validate(&self, value: Option<&str>) -> PropertyResult<Option<TypedValue>> {
        match value {
            Some(raw) => self.decode(raw).map(Some),
            None if self.required => Err(PropertyError::MissingRequiredProperty(self.name.clone())),
            None => match &self.default_value {
                Some(default) => self.decode(default).map(Some),
                None => Ok(None),
            },
        }
    }

    /// Check declaration-time invariants of this entry
    pub(crate) fn check_declaration(&self) -> PropertyResult<()> {
        if self.required && self.default_value.is_some() {
            return Err(PropertyError::InvalidDescriptor {
                name: self.name.clone(),
                reason: "required property must not declare a default value".to_string(),
            });
        }
        if self.required && self.required_when.is_some() {
            return Err(PropertyError::InvalidDescriptor {
                name: self.name.clone(),
                reason: "property cannot be both required and conditionally required".to_string(),
            });
        }
        if let Some(default) = &self.default_value {
            self.decode(default)
                .map_err(|e| PropertyError::InvalidDescriptor {
                    name: self.name.clone(),
                    reason: format!("default value does not validate: {}", e),
                })?;
        }
        Ok(())
    }

    fn decode(&self, raw: &str) -> PropertyResult<TypedValue> {
        match &self.kind {
            ValueKind::String => Ok(TypedValue::String(raw.to_string())),
            ValueKind::Integer => raw
                .parse::<i64>()
                .map(TypedValue::Integer)
                .map_err(|_| PropertyError::invalid_type(&self.name, "integer", raw)),
            ValueKind::Boolean => match raw {
                "true" => Ok(TypedValue::Boolean(true)),
                "false" => Ok(TypedValue::Boolean(false)),
                _ => Err(PropertyError::invalid_type(&self.name, "boolean", raw)),
            },
            ValueKind::Enum { allowed } => validate_enum_tag(&self.name, allowed, raw),
        }
    }
}

/// Check `got` against a closed tag set, case-sensitively
pub fn validate_enum_tag(name: &str, allowed: &[String], got: &str) -> PropertyResult<TypedValue> {
    if allowed.iter().any(|tag| tag == got) {
        Ok(TypedValue::Enum(got.to_string()))
    } else {
        Err(PropertyError::InvalidEnumValue {
            name: name.to_string(),
            allowed: allowed.to_vec(),
            got: got.to_string(),
        })
    }
}
