// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Registry and validation configuration

use crate::error::PropertyResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the aggregator treats a property name declared by more than one namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Fail schema construction on the first duplicate name
    Reject,
    /// Keep the descriptor from the namespace registered last
    LastRegisteredWins,
}

impl Default for CollisionPolicy {
    fn default() -> Self {
        CollisionPolicy::Reject
    }
}

/// Configuration for schema aggregation and property validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Policy applied when namespaces or translation tables overlap
    pub collision_policy: CollisionPolicy,

    /// Whether keys not declared in the schema are accepted and passed through
    pub allow_unknown_properties: bool,

    /// Whether to log a warning for keys accepted without a descriptor
    pub log_warnings: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            collision_policy: CollisionPolicy::Reject,
            allow_unknown_properties: true,
            log_warnings: true,
        }
    }
}

impl RegistryConfig {
    /// Reject collisions and undeclared keys
    pub fn strict() -> Self {
        Self {
            collision_policy: CollisionPolicy::Reject,
            allow_unknown_properties: false,
            log_warnings: true,
        }
    }

    /// Tolerate collisions (last registered wins) and undeclared keys
    pub fn lenient() -> Self {
        Self {
            collision_policy: CollisionPolicy::LastRegisteredWins,
            allow_unknown_properties: true,
            log_warnings: false,
        }
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> PropertyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> PropertyResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded registry configuration from {}", path.as_ref().display());
        Ok(config)
    }
}
