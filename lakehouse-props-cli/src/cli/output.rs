// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Formatting for CLI output

use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use lakehouse_props::{PropertyEntry, TypedValue, ValueKind};
use std::collections::{BTreeMap, HashMap};

use super::commands::OutputFormat;

/// Formatter for schema listings and property maps
pub struct PropsFormatter;

impl PropsFormatter {
    /// Format descriptors as `(namespace, entry)` rows
    pub fn format_schema(
        rows: &[(&str, &PropertyEntry)],
        native_keys: &HashMap<&str, &str>,
        format: OutputFormat,
    ) -> String {
        match format {
            OutputFormat::Table => Self::schema_table(rows, native_keys),
            OutputFormat::Json => Self::schema_json(rows, native_keys),
        }
    }

    fn schema_table(rows: &[(&str, &PropertyEntry)], native_keys: &HashMap<&str, &str>) -> String {
        if rows.is_empty() {
            return format!("{}\n", "No properties found".yellow());
        }

        let mut output = String::new();
        output.push_str(&format!("{}\n", "Catalog Properties".bold().green()));
        output.push_str(&format!("Properties: {}\n\n", rows.len()));

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(
            ["Namespace", "Property", "Backend Key", "Type", "Flags", "Default", "Description"]
                .iter()
                .map(|h| Cell::new(h).fg(Color::Green))
                .collect::<Vec<_>>(),
        );

        for (namespace, entry) in rows {
            table.add_row(vec![
                namespace.to_string(),
                entry.name().to_string(),
                native_keys
                    .get(entry.name())
                    .map(|k| k.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                Self::kind_to_string(entry.kind()),
                Self::flags_to_string(entry),
                entry.default_value().unwrap_or("-").to_string(),
                entry.description().to_string(),
            ]);
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    fn schema_json(rows: &[(&str, &PropertyEntry)], native_keys: &HashMap<&str, &str>) -> String {
        let items: Vec<serde_json::Value> = rows
            .iter()
            .map(|(namespace, entry)| {
                let mut value = serde_json::to_value(entry).unwrap_or(serde_json::Value::Null);
                if let serde_json::Value::Object(ref mut map) = value {
                    map.insert("namespace".to_string(), serde_json::json!(namespace));
                    map.insert(
                        "backend_key".to_string(),
                        serde_json::json!(native_keys.get(entry.name())),
                    );
                }
                value
            })
            .collect();

        Self::to_pretty_json(&serde_json::json!({ "properties": items }))
    }

    /// Format validated values, defaults included
    pub fn format_typed(values: &BTreeMap<String, TypedValue>) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Property").fg(Color::Green),
            Cell::new("Value").fg(Color::Green),
        ]);
        for (name, value) in values {
            table.add_row(vec![name.clone(), value.to_string()]);
        }
        format!("{}\n", table)
    }

    /// Format a backend property map, sorted by key
    pub fn format_properties(properties: &HashMap<String, String>, format: OutputFormat) -> String {
        let sorted: BTreeMap<&String, &String> = properties.iter().collect();
        match format {
            OutputFormat::Json => Self::to_pretty_json(&serde_json::json!(sorted)),
            OutputFormat::Table => {
                if sorted.is_empty() {
                    return format!("{}\n", "No properties".yellow());
                }
                let mut table = Table::new();
                table.load_preset(UTF8_FULL);
                table.set_header(vec![
                    Cell::new("Backend Key").fg(Color::Green),
                    Cell::new("Value").fg(Color::Green),
                ]);
                for (key, value) in sorted {
                    table.add_row(vec![key.as_str(), value.as_str()]);
                }
                format!("{}\n", table)
            }
        }
    }

    fn kind_to_string(kind: &ValueKind) -> String {
        match kind {
            ValueKind::Enum { allowed } => format!("enum[{}]", allowed.join("|")),
            other => other.type_name().to_string(),
        }
    }

    fn flags_to_string(entry: &PropertyEntry) -> String {
        let mut flags = Vec::new();
        if entry.is_required() {
            flags.push("required".to_string());
        }
        if let Some(condition) = entry.condition() {
            flags.push(format!("required if {}={}", condition.key, condition.equals));
        }
        if entry.is_immutable() {
            flags.push("immutable".to_string());
        }
        if entry.is_hidden() {
            flags.push("hidden".to_string());
        }
        if entry.is_reserved() {
            flags.push("reserved".to_string());
        }
        if flags.is_empty() {
            "-".to_string()
        } else {
            flags.join(", ")
        }
    }

    fn to_pretty_json(value: &serde_json::Value) -> String {
        let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| {
            "{\"status\": \"error\", \"error\": \"Could not serialize output to JSON\"}".to_string()
        });
        format!("{}\n", json)
    }
}
