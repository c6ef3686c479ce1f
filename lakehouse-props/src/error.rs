// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for property schema validation and translation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    #[error("Missing required property: {0}")]
    MissingRequiredProperty(String),

    #[error("Invalid value '{got}' for property '{name}', allowed values: [{}]", .allowed.join(", "))]
    InvalidEnumValue {
        name: String,
        allowed: Vec<String>,
        got: String,
    },

    #[error("Invalid value '{got}' for property '{name}', expected {expected}")]
    InvalidPropertyType {
        name: String,
        expected: String,
        got: String,
    },

    #[error("Property '{0}' is immutable and cannot be modified")]
    ImmutablePropertyModified(String),

    #[error("Property '{0}' is reserved and cannot be set")]
    ReservedPropertySet(String),

    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    #[error("Property '{name}' is declared by both '{first}' and '{second}' namespaces")]
    DuplicateProperty {
        name: String,
        first: String,
        second: String,
    },

    #[error("Translation of '{key}' is claimed by both '{first}' and '{second}' tables")]
    TranslationConflict {
        key: String,
        first: String,
        second: String,
    },

    #[error("Invalid property name: {0}")]
    InvalidPropertyName(String),

    #[error("Invalid property descriptor '{name}': {reason}")]
    InvalidDescriptor { name: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl PropertyError {
    pub(crate) fn invalid_type(name: &str, expected: &str, got: &str) -> Self {
        PropertyError::InvalidPropertyType {
            name: name.to_string(),
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }
}

impl From<std::io::Error> for PropertyError {
    fn from(err: std::io::Error) -> Self {
        PropertyError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for PropertyError {
    fn from(err: serde_json::Error) -> Self {
        PropertyError::ConfigError(err.to_string())
    }
}

pub type PropertyResult<T> = Result<T, PropertyError>;
