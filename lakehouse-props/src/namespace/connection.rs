// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Core connection properties: backend discriminator, warehouse, uri and
//! relational metastore credentials

use super::CapabilityProvider;
use crate::property::{enum_entry, string_optional_entry, string_required_entry, PropertyEntry};

pub const CATALOG_BACKEND: &str = "catalog-backend";
pub const METASTORE: &str = "metastore";
pub const WAREHOUSE: &str = "warehouse";
pub const URI: &str = "uri";
pub const JDBC_USER: &str = "jdbc-user";
pub const BACKEND_JDBC_USER: &str = "jdbc.user";
pub const JDBC_PASSWORD: &str = "jdbc-password";
pub const BACKEND_JDBC_PASSWORD: &str = "jdbc.password";
pub const JDBC_DRIVER: &str = "jdbc-driver";

/// Backend metastore tags accepted by `catalog-backend`
pub const BACKEND_TAGS: [&str; 3] = ["filesystem", "jdbc", "hive"];

pub struct CoreNamespace;

impl CapabilityProvider for CoreNamespace {
    fn name(&self) -> &'static str {
        "core"
    }

    fn property_entries(&self) -> Vec<PropertyEntry> {
        vec![
            enum_entry(
                CATALOG_BACKEND,
                "Catalog backend type",
                true,  // required
                true,  // immutable
                &BACKEND_TAGS,
                None,  // default
                false, // hidden
                false, // reserved
            ),
            string_required_entry(WAREHOUSE, "Catalog warehouse location", false, false),
            string_optional_entry(URI, "Catalog connection uri", false, None, false),
            string_optional_entry(JDBC_USER, "Catalog jdbc user", false, None, false),
            string_optional_entry(JDBC_PASSWORD, "Catalog jdbc password", false, None, false),
            string_optional_entry(JDBC_DRIVER, "The driver of the jdbc connection", false, None, false),
        ]
    }

    fn translations(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (CATALOG_BACKEND, METASTORE),
            (WAREHOUSE, WAREHOUSE),
            (URI, URI),
            (JDBC_USER, BACKEND_JDBC_USER),
            (JDBC_PASSWORD, BACKEND_JDBC_PASSWORD),
            (JDBC_DRIVER, JDBC_DRIVER),
        ]
    }
}
