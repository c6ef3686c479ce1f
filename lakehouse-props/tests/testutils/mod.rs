//! Test utilities for lakehouse-props integration tests
//!
//! `PropsFixture` wraps a `CatalogPropertiesMetadata` built with a chosen
//! configuration and offers assertion helpers over the validate/transform
//! pipeline.

#![allow(dead_code)]

use lakehouse_props::{
    CatalogPropertiesMetadata, PropertyError, RegistryConfig, ValidatedProperties,
};
use std::collections::HashMap;

pub struct PropsFixture {
    pub metadata: CatalogPropertiesMetadata,
}

impl PropsFixture {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        let metadata =
            CatalogPropertiesMetadata::new(config).expect("Failed to build properties metadata");
        Self { metadata }
    }

    pub fn assert_valid(&self, pairs: &[(&str, &str)]) -> ValidatedProperties {
        match self.metadata.validate_create(&props(pairs)) {
            Ok(validated) => validated,
            Err(e) => panic!("Expected {:?} to validate, got error: {}", pairs, e),
        }
    }

    pub fn assert_invalid(&self, pairs: &[(&str, &str)]) -> PropertyError {
        match self.metadata.validate_create(&props(pairs)) {
            Ok(_) => panic!("Expected {:?} to fail validation", pairs),
            Err(e) => e,
        }
    }

    /// Validate then transform, panicking on validation failure
    pub fn pipeline(&self, pairs: &[(&str, &str)]) -> HashMap<String, String> {
        let validated = self.assert_valid(pairs);
        self.metadata.transform_validated(&validated)
    }
}

pub fn props(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
