// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Generic authentication properties

use super::CapabilityProvider;
use crate::property::{boolean_optional_entry, enum_entry, PropertyEntry};

pub const AUTH_TYPE: &str = "authentication.type";
pub const IMPERSONATION_ENABLE: &str = "authentication.impersonation-enable";

pub const AUTH_SIMPLE: &str = "simple";
pub const AUTH_KERBEROS: &str = "kerberos";

/// Authentication modes accepted by `authentication.type`
pub const AUTH_TAGS: [&str; 2] = [AUTH_SIMPLE, AUTH_KERBEROS];

pub struct AuthenticationNamespace;

impl CapabilityProvider for AuthenticationNamespace {
    fn name(&self) -> &'static str {
        "authentication"
    }

    fn property_entries(&self) -> Vec<PropertyEntry> {
        vec![
            enum_entry(
                AUTH_TYPE,
                "The type of authentication, either simple or kerberos",
                false, // required
                true,  // immutable
                &AUTH_TAGS,
                Some(AUTH_SIMPLE),
                false, // hidden
                false, // reserved
            ),
            boolean_optional_entry(
                IMPERSONATION_ENABLE,
                "Whether to enable impersonation for the catalog",
                true,
                Some(false),
                false,
            ),
        ]
    }

    fn translations(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (AUTH_TYPE, AUTH_TYPE),
            (IMPERSONATION_ENABLE, IMPERSONATION_ENABLE),
        ]
    }
}
