// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog properties metadata
//!
//! `CatalogPropertiesMetadata` is the entry point used by catalog lifecycle
//! code: it owns the aggregated schema and the transformer, both built once,
//! and runs the validate-then-transform pipeline:
//!
//! ```text
//! raw configuration -> validate_create / validate_alter -> transform -> backend configuration
//! ```
//!
//! Callers construct it at startup and pass it where needed, or use
//! `CatalogPropertiesMetadata::shared()` for a process-wide instance built
//! with the default configuration.

use crate::config::RegistryConfig;
use crate::error::PropertyResult;
use crate::namespace::CapabilityNamespace;
use crate::property::PropertyEntry;
use crate::registry::SchemaRegistry;
use crate::translation::Transformer;
use crate::validation::{PropertiesValidator, PropertyChange, ValidatedProperties};
use once_cell::sync::OnceCell;
use std::collections::{BTreeMap, HashMap};

static SHARED_METADATA: OnceCell<CatalogPropertiesMetadata> = OnceCell::new();

/// Immutable schema, validator settings and transformer for one connector
#[derive(Debug, Clone)]
pub struct CatalogPropertiesMetadata {
    config: RegistryConfig,
    registry: SchemaRegistry,
    transformer: Transformer,
}

impl CatalogPropertiesMetadata {
    /// Build the schema and transformer from the built-in namespaces
    pub fn new(config: RegistryConfig) -> PropertyResult<Self> {
        let registry = SchemaRegistry::with_default_namespaces(config.collision_policy)?;
        Self::from_registry(registry, config)
    }

    /// Wrap an already built registry
    pub fn from_registry(registry: SchemaRegistry, config: RegistryConfig) -> PropertyResult<Self> {
        let transformer = Transformer::new(registry.translation_tables(), config.collision_policy)?;
        log::debug!(
            "Catalog properties metadata ready: {} properties, {} translation rules",
            registry.property_count(),
            transformer.rule_count()
        );
        Ok(Self {
            config,
            registry,
            transformer,
        })
    }

    /// Process-wide instance built on first use with `RegistryConfig::default()`
    pub fn shared() -> PropertyResult<&'static CatalogPropertiesMetadata> {
        SHARED_METADATA.get_or_try_init(|| Self::new(RegistryConfig::default()))
    }

    /// Aggregated name to descriptor mapping
    pub fn schema(&self) -> &BTreeMap<String, PropertyEntry> {
        self.registry.schema()
    }

    pub fn entry(&self, name: &str) -> Option<&PropertyEntry> {
        self.registry.entry(name)
    }

    /// Descriptors that are not hidden, in name order
    pub fn visible_entries(&self) -> impl Iterator<Item = &PropertyEntry> {
        self.registry
            .schema()
            .values()
            .filter(|entry| !entry.is_hidden())
    }

    pub fn namespaces(&self) -> &[CapabilityNamespace] {
        self.registry.namespaces()
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn validator(&self) -> PropertiesValidator<'_> {
        PropertiesValidator::new(self.registry.schema(), &self.config)
    }

    pub fn validate_create(
        &self,
        config: &HashMap<String, String>,
    ) -> PropertyResult<ValidatedProperties> {
        self.validator().validate_create(config)
    }

    pub fn validate_alter(
        &self,
        current: &HashMap<String, String>,
        changes: &[PropertyChange],
    ) -> PropertyResult<ValidatedProperties> {
        self.validator().validate_alter(current, changes)
    }

    /// Rename generic keys to backend-native keys
    ///
    /// Expects a configuration that already passed validation; never fails.
    pub fn transform(&self, config: &HashMap<String, String>) -> HashMap<String, String> {
        self.transformer.transform(config)
    }

    pub fn transform_validated(&self, validated: &ValidatedProperties) -> HashMap<String, String> {
        self.transformer.transform(validated.properties())
    }

    pub fn native_key(&self, generic: &str) -> Option<&str> {
        self.transformer.native_key(generic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CollisionPolicy;
    use crate::property::{enum_entry, string_optional_entry};
    use crate::registry::SchemaRegistryBuilder;

    #[test]
    fn test_shared_is_built_once() {
        let first = CatalogPropertiesMetadata::shared().unwrap();
        let second = CatalogPropertiesMetadata::shared().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.schema(), second.schema());
    }

    #[test]
    fn test_lenient_config_builds_builtin_schema() {
        let metadata = CatalogPropertiesMetadata::new(RegistryConfig::lenient()).unwrap();
        assert_eq!(metadata.schema().len(), 18);
        assert_eq!(metadata.native_key("catalog-backend"), Some("metastore"));
    }

    #[test]
    fn test_hidden_entries_are_not_visible() {
        let namespace = CapabilityNamespace::new(
            "internal",
            vec![
                enum_entry("catalog-kind", "", false, true, &["paimon"], None, true, false),
                string_optional_entry("region", "", false, None, false),
            ],
            vec![("catalog-kind", "catalog-kind"), ("region", "region")],
        )
        .unwrap();
        let mut builder = SchemaRegistryBuilder::new(CollisionPolicy::Reject);
        crate::namespace::register_all_namespaces(&mut builder).unwrap();
        builder.register_namespace(namespace).unwrap();
        let metadata =
            CatalogPropertiesMetadata::from_registry(builder.build().unwrap(), RegistryConfig::default())
                .unwrap();

        let visible: Vec<&str> = metadata.visible_entries().map(|e| e.name()).collect();
        assert_eq!(visible.len(), metadata.schema().len() - 1);
        assert!(!visible.contains(&"catalog-kind"));
        assert!(visible.contains(&"region"));
        assert!(metadata.entry("catalog-kind").unwrap().is_hidden());
    }
}
