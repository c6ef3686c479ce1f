// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! OSS-compatible storage credentials

use super::CapabilityProvider;
use crate::property::{string_optional_entry, PropertyEntry};

pub const OSS_ENDPOINT: &str = "oss-endpoint";
pub const OSS_ACCESS_KEY_ID: &str = "oss-access-key-id";
pub const OSS_SECRET_ACCESS_KEY: &str = "oss-secret-access-key";

pub const BACKEND_OSS_ENDPOINT: &str = "fs.oss.endpoint";
pub const BACKEND_OSS_ACCESS_KEY: &str = "fs.oss.accessKeyId";
pub const BACKEND_OSS_SECRET_KEY: &str = "fs.oss.accessKeySecret";

pub struct OssNamespace;

impl CapabilityProvider for OssNamespace {
    fn name(&self) -> &'static str {
        "oss"
    }

    fn property_entries(&self) -> Vec<PropertyEntry> {
        vec![
            string_optional_entry(OSS_ENDPOINT, "The endpoint of the OSS service", false, None, false),
            string_optional_entry(
                OSS_ACCESS_KEY_ID,
                "The access key of the OSS service",
                false,
                None,
                false,
            ),
            string_optional_entry(
                OSS_SECRET_ACCESS_KEY,
                "The secret key of the OSS service",
                false,
                None,
                false,
            ),
        ]
    }

    fn translations(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (OSS_ENDPOINT, BACKEND_OSS_ENDPOINT),
            (OSS_ACCESS_KEY_ID, BACKEND_OSS_ACCESS_KEY),
            (OSS_SECRET_ACCESS_KEY, BACKEND_OSS_SECRET_KEY),
        ]
    }
}
