// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Lakehouse Props - property schema registry and configuration translator
//!
//! Declares the configuration keys a lakehouse catalog connector accepts,
//! validates caller-supplied key/value configuration against that schema, and
//! rewrites generic keys into the names the backend metastore, storage and
//! authentication clients expect.
//!
//! # Features
//!
//! - **Capability namespaces**: core connection, authentication, Kerberos, S3
//!   and OSS properties, each owning its descriptors and translation table
//! - **Aggregated schema**: one immutable name-keyed schema with an explicit
//!   collision policy
//! - **Validation**: required, optional, conditional, immutable, reserved,
//!   typed and enumerated properties
//! - **Translation**: table-driven key renaming with pass-through for
//!   undeclared keys
//!
//! # Usage
//!
//! ```rust,ignore
//! use lakehouse_props::{CatalogPropertiesMetadata, RegistryConfig};
//!
//! let metadata = CatalogPropertiesMetadata::new(RegistryConfig::default())?;
//! let validated = metadata.validate_create(&properties)?;
//! let backend = metadata.transform_validated(&validated);
//! ```

pub mod config;
pub mod error;
pub mod metadata;
pub mod namespace;
pub mod property;
pub mod registry;
pub mod translation;
pub mod validation;

pub use config::{CollisionPolicy, RegistryConfig};
pub use error::{PropertyError, PropertyResult};
pub use metadata::CatalogPropertiesMetadata;
pub use namespace::{register_all_namespaces, CapabilityNamespace, CapabilityProvider};
pub use property::{
    boolean_optional_entry, enum_entry, integer_optional_entry, string_optional_entry,
    string_required_entry, validate_enum_tag, PropertyEntry, RequiredWhen, TypedValue, ValueKind,
};
pub use registry::{SchemaRegistry, SchemaRegistryBuilder};
pub use translation::{TranslationTable, Transformer};
pub use validation::{PropertiesValidator, PropertyChange, ValidatedProperties};

/// Lakehouse Props version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lakehouse Props crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
