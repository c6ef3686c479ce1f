// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Capability namespaces and their registration
//!
//! Each capability area (core connection, authentication, Kerberos, S3 and
//! OSS storage) implements `CapabilityProvider` in its own module. Adding a
//! new area requires implementing the trait and adding one line to
//! `register_all_namespaces`.

use crate::error::{PropertyError, PropertyResult};
use crate::property::PropertyEntry;
use crate::registry::SchemaRegistryBuilder;
use crate::translation::TranslationTable;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

pub mod authentication;
pub mod connection;
pub mod kerberos;
pub mod oss;
pub mod s3;

static PROPERTY_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9._-]*$").expect("property name pattern"));

/// A capability area that owns a set of property descriptors
pub trait CapabilityProvider: Send + Sync {
    /// Namespace name, used in collision reports and introspection
    fn name(&self) -> &'static str;

    /// Descriptors declared by this capability area
    fn property_entries(&self) -> Vec<PropertyEntry>;

    /// Generic to backend-native key pairs, including identity pairs
    fn translations(&self) -> Vec<(&'static str, &'static str)>;
}

/// Immutable, validated set of descriptors plus the owning translation table
#[derive(Debug, Clone)]
pub struct CapabilityNamespace {
    name: String,
    entries: BTreeMap<String, PropertyEntry>,
    translations: TranslationTable,
}

impl CapabilityNamespace {
    /// Build a namespace from a provider
    pub fn from_provider(provider: &dyn CapabilityProvider) -> PropertyResult<Self> {
        Self::new(
            provider.name(),
            provider.property_entries(),
            provider.translations(),
        )
    }

    /// Build a namespace, checking names, declarations and translation coverage
    ///
    /// Every declared entry must have a translation (identity when the backend
    /// uses the same name) and every translation must refer to a declared entry.
    pub fn new<'a, I>(name: &str, entries: Vec<PropertyEntry>, translations: I) -> PropertyResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut by_name = BTreeMap::new();
        for entry in entries {
            if !PROPERTY_NAME.is_match(entry.name()) {
                return Err(PropertyError::InvalidPropertyName(entry.name().to_string()));
            }
            entry.check_declaration()?;
            if by_name.contains_key(entry.name()) {
                return Err(PropertyError::DuplicateProperty {
                    name: entry.name().to_string(),
                    first: name.to_string(),
                    second: name.to_string(),
                });
            }
            by_name.insert(entry.name().to_string(), entry);
        }

        let translations = TranslationTable::new(name, translations)?;
        for (generic, _) in translations.iter() {
            if !by_name.contains_key(generic) {
                return Err(PropertyError::InvalidDescriptor {
                    name: generic.to_string(),
                    reason: format!("translated by '{}' but not declared there", name),
                });
            }
        }
        for entry_name in by_name.keys() {
            if !translations.contains(entry_name) {
                return Err(PropertyError::InvalidDescriptor {
                    name: entry_name.clone(),
                    reason: format!("declared by '{}' without a translation entry", name),
                });
            }
        }

        Ok(Self {
            name: name.to_string(),
            entries: by_name,
            translations,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &BTreeMap<String, PropertyEntry> {
        &self.entries
    }

    pub fn entry(&self, name: &str) -> Option<&PropertyEntry> {
        self.entries.get(name)
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }
}

/// Register the built-in namespaces in their fixed merge order
///
/// Order: core, authentication, kerberos, s3, oss.
pub fn register_all_namespaces(builder: &mut SchemaRegistryBuilder) -> PropertyResult<()> {
    builder.register(&connection::CoreNamespace)?;
    builder.register(&authentication::AuthenticationNamespace)?;
    builder.register(&kerberos::KerberosNamespace)?;
    builder.register(&s3::S3Namespace)?;
    builder.register(&oss::OssNamespace)?;

    log::info!("Capability namespace registration complete");
    Ok(())
}
