// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Translation tables and the configuration transformer
//!
//! Each capability namespace owns a `TranslationTable` from generic key names
//! to the names the backend expects. The `Transformer` folds every table into
//! one lookup and renames keys of a validated configuration; keys without an
//! entry pass through unchanged.

use crate::config::CollisionPolicy;
use crate::error::{PropertyError, PropertyResult};
use std::collections::{BTreeMap, HashMap};

/// Generic key to backend-native key mapping owned by one namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    owner: String,
    mappings: BTreeMap<String, String>,
}

impl TranslationTable {
    /// Build a table, rejecting a generic key declared twice
    pub fn new<'a, I>(owner: &str, mappings: I) -> PropertyResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = BTreeMap::new();
        for (generic, native) in mappings {
            if table.insert(generic.to_string(), native.to_string()).is_some() {
                return Err(PropertyError::TranslationConflict {
                    key: generic.to_string(),
                    first: owner.to_string(),
                    second: owner.to_string(),
                });
            }
        }
        Ok(Self {
            owner: owner.to_string(),
            mappings: table,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn get(&self, generic: &str) -> Option<&str> {
        self.mappings.get(generic).map(String::as_str)
    }

    pub fn contains(&self, generic: &str) -> bool {
        self.mappings.contains_key(generic)
    }

    /// True when the key is mapped onto itself
    pub fn is_identity(&self, generic: &str) -> bool {
        self.get(generic) == Some(generic)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mappings
            .iter()
            .map(|(generic, native)| (generic.as_str(), native.as_str()))
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[derive(Debug, Clone)]
struct Rule {
    native: String,
    owner: String,
}

/// Table-driven key renamer for validated configurations
///
/// Every generic key belongs to at most one table and every native key is the
/// target of at most one generic key, so the rename never merges two inputs.
#[derive(Debug, Clone)]
pub struct Transformer {
    rules: BTreeMap<String, Rule>,
}

impl Transformer {
    /// Fold translation tables into one lookup
    ///
    /// With `CollisionPolicy::Reject` a generic key claimed by two tables, or
    /// two generic keys renamed onto one native key, fails with
    /// `TranslationConflict`. With `LastRegisteredWins` the later table
    /// replaces the earlier rule.
    pub fn new<'a, I>(tables: I, policy: CollisionPolicy) -> PropertyResult<Self>
    where
        I: IntoIterator<Item = &'a TranslationTable>,
    {
        let mut rules: BTreeMap<String, Rule> = BTreeMap::new();
        for table in tables {
            for (generic, native) in table.iter() {
                if let Some(existing) = rules.get(generic) {
                    match policy {
                        CollisionPolicy::Reject => {
                            return Err(PropertyError::TranslationConflict {
                                key: generic.to_string(),
                                first: existing.owner.clone(),
                                second: table.owner().to_string(),
                            });
                        }
                        CollisionPolicy::LastRegisteredWins => {
                            log::warn!(
                                "Translation of '{}' from '{}' replaced by '{}'",
                                generic,
                                existing.owner,
                                table.owner()
                            );
                        }
                    }
                }
                rules.insert(
                    generic.to_string(),
                    Rule {
                        native: native.to_string(),
                        owner: table.owner().to_string(),
                    },
                );
            }
        }

        check_native_targets(&rules)?;
        Ok(Self { rules })
    }

    /// Native key for a generic key, if any table maps it
    pub fn native_key(&self, generic: &str) -> Option<&str> {
        self.rules.get(generic).map(|rule| rule.native.as_str())
    }

    /// Rename the keys of a validated configuration
    ///
    /// Unmapped keys are emitted unchanged. When an unmapped key collides with
    /// the native name of a mapped key, the translated value is kept.
    pub fn transform(&self, config: &HashMap<String, String>) -> HashMap<String, String> {
        let mut output = HashMap::with_capacity(config.len());
        let mut translated = Vec::new();

        for (key, value) in config {
            match self.rules.get(key) {
                Some(rule) => translated.push((rule.native.clone(), value.clone())),
                None => {
                    output.insert(key.clone(), value.clone());
                }
            }
        }

        for (native, value) in translated {
            if let Some(shadowed) = output.insert(native.clone(), value) {
                log::warn!(
                    "Pass-through value '{}' for '{}' replaced by translated value",
                    shadowed,
                    native
                );
            }
        }

        log::debug!(
            "Transformed {} properties into {} backend properties",
            config.len(),
            output.len()
        );
        output
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

fn check_native_targets(rules: &BTreeMap<String, Rule>) -> PropertyResult<()> {
    let mut targets: BTreeMap<&str, &Rule> = BTreeMap::new();
    for rule in rules.values() {
        if let Some(existing) = targets.insert(rule.native.as_str(), rule) {
            return Err(PropertyError::TranslationConflict {
                key: rule.native.clone(),
                first: existing.owner.clone(),
                second: rule.owner.clone(),
            });
        }
    }
    Ok(())
}
