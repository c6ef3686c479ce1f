// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Property validation against the aggregated schema
//!
//! Runs before translation on every catalog creation and alteration. Keys are
//! visited in sorted order so the first reported failure is deterministic.

use crate::config::RegistryConfig;
use crate::error::{PropertyError, PropertyResult};
use crate::property::{PropertyEntry, TypedValue};
use std::collections::{BTreeMap, HashMap};

/// A single alteration applied to an existing catalog configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyChange {
    Set { key: String, value: String },
    Remove { key: String },
}

impl PropertyChange {
    pub fn set(key: &str, value: &str) -> Self {
        PropertyChange::Set {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    pub fn remove(key: &str) -> Self {
        PropertyChange::Remove {
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            PropertyChange::Set { key, .. } | PropertyChange::Remove { key } => key,
        }
    }
}

/// Configuration that passed validation
///
/// Keeps the caller's string map untouched, so no default ever reaches the
/// transformer as a synthesized key, plus typed values with defaults resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProperties {
    properties: HashMap<String, String>,
    typed: BTreeMap<String, TypedValue>,
}

impl ValidatedProperties {
    /// The validated configuration exactly as supplied
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    /// Typed value for a modeled key, falling back to its default
    pub fn get(&self, name: &str) -> Option<&TypedValue> {
        self.typed.get(name)
    }

    pub fn typed_values(&self) -> &BTreeMap<String, TypedValue> {
        &self.typed
    }

    pub fn into_properties(self) -> HashMap<String, String> {
        self.properties
    }
}

/// Checks configurations against a name to descriptor schema
pub struct PropertiesValidator<'a> {
    schema: &'a BTreeMap<String, PropertyEntry>,
    allow_unknown_properties: bool,
    log_warnings: bool,
}

impl<'a> PropertiesValidator<'a> {
    pub fn new(schema: &'a BTreeMap<String, PropertyEntry>, config: &RegistryConfig) -> Self {
        Self {
            schema,
            allow_unknown_properties: config.allow_unknown_properties,
            log_warnings: config.log_warnings,
        }
    }

    /// Validate the configuration of a catalog being created
    pub fn validate_create(
        &self,
        config: &HashMap<String, String>,
    ) -> PropertyResult<ValidatedProperties> {
        self.validate_config(config, None)
    }

    /// Reserved keys are accepted only when `preserved` holds the same value
    fn validate_config(
        &self,
        config: &HashMap<String, String>,
        preserved: Option<&HashMap<String, String>>,
    ) -> PropertyResult<ValidatedProperties> {
        let mut keys: Vec<&String> = config.keys().collect();
        keys.sort();

        let mut typed = BTreeMap::new();
        for key in keys {
            let value = &config[key];
            match self.schema.get(key) {
                Some(entry) => {
                    let carried = preserved.and_then(|p| p.get(key)) == Some(value);
                    if entry.is_reserved() && !carried {
                        return Err(PropertyError::ReservedPropertySet(key.clone()));
                    }
                    if let Some(typed_value) = entry.validate(Some(value.as_str()))? {
                        typed.insert(key.clone(), typed_value);
                    }
                }
                None if self.allow_unknown_properties => {
                    if self.log_warnings {
                        log::warn!("Passing through undeclared property '{}'", key);
                    }
                }
                None => return Err(PropertyError::UnknownProperty(key.clone())),
            }
        }

        for (name, entry) in self.schema {
            if config.contains_key(name) {
                continue;
            }
            if let Some(default) = entry.validate(None)? {
                typed.insert(name.clone(), default);
            }
        }

        for (name, entry) in self.schema {
            let Some(condition) = entry.condition() else {
                continue;
            };
            if config.contains_key(name) {
                continue;
            }
            let active = typed
                .get(&condition.key)
                .and_then(TypedValue::as_str)
                .map(|v| v == condition.equals)
                .unwrap_or(false);
            if active {
                return Err(PropertyError::MissingRequiredProperty(name.clone()));
            }
        }

        log::debug!(
            "Validated {} properties ({} typed)",
            config.len(),
            typed.len()
        );

        Ok(ValidatedProperties {
            properties: config.clone(),
            typed,
        })
    }

    /// Validate an alteration of an existing catalog configuration
    ///
    /// Changes are applied in order. Setting an immutable property to anything
    /// other than its effective value (supplied or default), or removing one
    /// that is present, fails with `ImmutablePropertyModified`. The altered
    /// configuration is then validated as on creation, except that reserved
    /// keys carried over unchanged from `current` are accepted.
    pub fn validate_alter(
        &self,
        current: &HashMap<String, String>,
        changes: &[PropertyChange],
    ) -> PropertyResult<ValidatedProperties> {
        let mut altered = current.clone();

        for change in changes {
            let entry = self.schema.get(change.key());
            match change {
                PropertyChange::Set { key, value } => {
                    if let Some(entry) = entry {
                        if entry.is_reserved() {
                            return Err(PropertyError::ReservedPropertySet(key.clone()));
                        }
                        let effective = altered
                            .get(key)
                            .map(String::as_str)
                            .or_else(|| entry.default_value());
                        if entry.is_immutable() && effective != Some(value.as_str()) {
                            return Err(PropertyError::ImmutablePropertyModified(key.clone()));
                        }
                    }
                    altered.insert(key.clone(), value.clone());
                }
                PropertyChange::Remove { key } => {
                    if let Some(entry) = entry {
                        if entry.is_immutable() && altered.contains_key(key) {
                            return Err(PropertyError::ImmutablePropertyModified(key.clone()));
                        }
                    }
                    altered.remove(key);
                }
            }
        }

        log::debug!("Applied {} property changes", changes.len());
        self.validate_config(&altered, Some(current))
    }
}
