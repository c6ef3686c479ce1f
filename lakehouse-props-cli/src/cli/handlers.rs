// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for Lakehouse Props

use colored::Colorize;
use std::collections::HashMap;
use std::path::Path;

use super::commands::OutputFormat;
use super::output::PropsFormatter;
use lakehouse_props::{CatalogPropertiesMetadata, PropertyEntry, RegistryConfig};

/// Load the registry configuration, falling back to defaults without a path
pub fn load_config(path: Option<&Path>) -> Result<RegistryConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(RegistryConfig::from_json_file(path)?),
        None => Ok(RegistryConfig::default()),
    }
}

/// Descriptors in effect, paired with the namespace that owns them
///
/// Hidden descriptors are skipped unless `all` is set.
pub fn describe_rows<'m>(
    metadata: &'m CatalogPropertiesMetadata,
    namespace: Option<&str>,
    all: bool,
) -> Result<Vec<(&'m str, &'m PropertyEntry)>, Box<dyn std::error::Error>> {
    if let Some(wanted) = namespace {
        if metadata.registry().namespace(wanted).is_none() {
            return Err(format!("Unknown namespace '{}'", wanted).into());
        }
    }

    let mut rows = Vec::new();
    for ns in metadata.namespaces() {
        if namespace.map_or(false, |wanted| wanted != ns.name()) {
            continue;
        }
        for name in ns.entries().keys() {
            // Report the descriptor in effect, which may come from a later namespace
            let Some(entry) = metadata.entry(name) else {
                continue;
            };
            if entry.is_hidden() && !all {
                continue;
            }
            if metadata.registry().owner_of(name) == Some(ns.name()) {
                rows.push((ns.name(), entry));
            }
        }
    }
    Ok(rows)
}

/// Handle the describe command
pub fn handle_describe(
    config: RegistryConfig,
    namespace: Option<String>,
    all: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = CatalogPropertiesMetadata::new(config)?;
    let rows = describe_rows(&metadata, namespace.as_deref(), all)?;

    let native_keys: HashMap<&str, &str> = rows
        .iter()
        .filter_map(|(_, entry)| {
            metadata
                .native_key(entry.name())
                .map(|native| (entry.name(), native))
        })
        .collect();

    print!("{}", PropsFormatter::format_schema(&rows, &native_keys, format));
    Ok(())
}

/// Handle the validate command
///
/// Validation failures are returned to the caller, which reports them once.
pub fn handle_validate(
    config: RegistryConfig,
    properties: Vec<(String, String)>,
) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = CatalogPropertiesMetadata::new(config)?;
    let properties: HashMap<String, String> = properties.into_iter().collect();

    let validated = metadata.validate_create(&properties)?;
    println!("{}", "Properties are valid".bold().green());
    print!("{}", PropsFormatter::format_typed(validated.typed_values()));
    Ok(())
}

/// Handle the transform command
pub fn handle_transform(
    config: RegistryConfig,
    properties: Vec<(String, String)>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = CatalogPropertiesMetadata::new(config)?;
    let properties: HashMap<String, String> = properties.into_iter().collect();

    let validated = metadata.validate_create(&properties)?;
    let backend = metadata.transform_validated(&validated);

    print!("{}", PropsFormatter::format_properties(&backend, format));
    Ok(())
}
