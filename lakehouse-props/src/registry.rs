// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Schema registry implementation
//!
//! This module provides the SchemaRegistry that merges every registered
//! capability namespace into one name-keyed schema. Namespaces are merged in
//! registration order and name collisions are resolved by the configured
//! `CollisionPolicy`.

use crate::config::CollisionPolicy;
use crate::error::{PropertyError, PropertyResult};
use crate::namespace::{self, CapabilityNamespace, CapabilityProvider};
use crate::property::PropertyEntry;
use crate::translation::TranslationTable;
use std::collections::BTreeMap;

/// Collects capability namespaces before the schema is frozen
pub struct SchemaRegistryBuilder {
    policy: CollisionPolicy,
    namespaces: Vec<CapabilityNamespace>,
}

impl SchemaRegistryBuilder {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            namespaces: Vec::new(),
        }
    }

    /// Register a capability provider
    ///
    /// The provider's descriptors are checked immediately; a malformed
    /// namespace fails here rather than at merge time.
    pub fn register(&mut self, provider: &dyn CapabilityProvider) -> PropertyResult<&mut Self> {
        let namespace = CapabilityNamespace::from_provider(provider)?;
        self.register_namespace(namespace)
    }

    /// Register an already built namespace
    pub fn register_namespace(
        &mut self,
        namespace: CapabilityNamespace,
    ) -> PropertyResult<&mut Self> {
        if self.namespaces.iter().any(|ns| ns.name() == namespace.name()) {
            return Err(PropertyError::ConfigError(format!(
                "Namespace '{}' registered twice",
                namespace.name()
            )));
        }
        log::info!(
            "Registered capability namespace: {} ({} properties)",
            namespace.name(),
            namespace.entries().len()
        );
        self.namespaces.push(namespace);
        Ok(self)
    }

    /// Merge the registered namespaces into an immutable registry
    pub fn build(self) -> PropertyResult<SchemaRegistry> {
        let mut schema: BTreeMap<String, PropertyEntry> = BTreeMap::new();
        let mut owners: BTreeMap<String, String> = BTreeMap::new();

        for namespace in &self.namespaces {
            for (name, entry) in namespace.entries() {
                if let Some(previous) = owners.get(name) {
                    match self.policy {
                        CollisionPolicy::Reject => {
                            return Err(PropertyError::DuplicateProperty {
                                name: name.clone(),
                                first: previous.clone(),
                                second: namespace.name().to_string(),
                            });
                        }
                        CollisionPolicy::LastRegisteredWins => {
                            log::warn!(
                                "Property '{}' from '{}' replaced by '{}'",
                                name,
                                previous,
                                namespace.name()
                            );
                        }
                    }
                }
                schema.insert(name.clone(), entry.clone());
                owners.insert(name.clone(), namespace.name().to_string());
            }
        }

        log::info!(
            "Built property schema: {} properties from {} namespaces",
            schema.len(),
            self.namespaces.len()
        );

        Ok(SchemaRegistry {
            policy: self.policy,
            namespaces: self.namespaces,
            schema,
            owners,
        })
    }
}

/// Immutable aggregated schema
///
/// Holds the merged name to descriptor map alongside the namespaces it was
/// built from, so the owner of every property stays traceable.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    policy: CollisionPolicy,
    namespaces: Vec<CapabilityNamespace>,
    schema: BTreeMap<String, PropertyEntry>,
    owners: BTreeMap<String, String>,
}

impl SchemaRegistry {
    /// Build the registry from the built-in namespaces
    ///
    /// Merge order is fixed: core, authentication, kerberos, s3, oss.
    pub fn with_default_namespaces(policy: CollisionPolicy) -> PropertyResult<Self> {
        let mut builder = SchemaRegistryBuilder::new(policy);
        namespace::register_all_namespaces(&mut builder)?;
        builder.build()
    }

    /// The aggregated name to descriptor mapping
    pub fn schema(&self) -> &BTreeMap<String, PropertyEntry> {
        &self.schema
    }

    pub fn entry(&self, name: &str) -> Option<&PropertyEntry> {
        self.schema.get(name)
    }

    /// Namespace whose descriptor is in effect for `name`
    pub fn owner_of(&self, name: &str) -> Option<&str> {
        self.owners.get(name).map(String::as_str)
    }

    /// Namespaces in merge order
    pub fn namespaces(&self) -> &[CapabilityNamespace] {
        &self.namespaces
    }

    pub fn namespace(&self, name: &str) -> Option<&CapabilityNamespace> {
        self.namespaces.iter().find(|ns| ns.name() == name)
    }

    /// Translation tables in merge order
    pub fn translation_tables(&self) -> impl Iterator<Item = &TranslationTable> {
        self.namespaces.iter().map(CapabilityNamespace::translations)
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    pub fn property_count(&self) -> usize {
        self.schema.len()
    }
}
