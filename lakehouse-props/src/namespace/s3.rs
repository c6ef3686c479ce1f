// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! S3-compatible storage credentials

use super::CapabilityProvider;
use crate::property::{string_optional_entry, PropertyEntry};

pub const S3_ENDPOINT: &str = "s3-endpoint";
pub const S3_ACCESS_KEY_ID: &str = "s3-access-key-id";
pub const S3_SECRET_ACCESS_KEY: &str = "s3-secret-access-key";

pub const BACKEND_S3_ENDPOINT: &str = "s3.endpoint";
pub const BACKEND_S3_ACCESS_KEY: &str = "s3.access-key";
pub const BACKEND_S3_SECRET_KEY: &str = "s3.secret-key";

pub struct S3Namespace;

impl CapabilityProvider for S3Namespace {
    fn name(&self) -> &'static str {
        "s3"
    }

    fn property_entries(&self) -> Vec<PropertyEntry> {
        vec![
            string_optional_entry(S3_ENDPOINT, "The endpoint of the S3 service", false, None, false),
            string_optional_entry(S3_ACCESS_KEY_ID, "The access key of the S3 service", false, None, false),
            string_optional_entry(
                S3_SECRET_ACCESS_KEY,
                "The secret key of the S3 service",
                false,
                None,
                false,
            ),
        ]
    }

    fn translations(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (S3_ENDPOINT, BACKEND_S3_ENDPOINT),
            (S3_ACCESS_KEY_ID, BACKEND_S3_ACCESS_KEY),
            (S3_SECRET_ACCESS_KEY, BACKEND_S3_SECRET_KEY),
        ]
    }
}
