// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Kerberos authentication properties
//!
//! Principal and keytab only become required once `authentication.type` is
//! set to `kerberos`.

use super::authentication::{AUTH_KERBEROS, AUTH_TYPE};
use super::CapabilityProvider;
use crate::property::{integer_optional_entry, string_optional_entry, PropertyEntry};

pub const PRINCIPAL: &str = "authentication.kerberos.principal";
pub const KEYTAB_URI: &str = "authentication.kerberos.keytab-uri";
pub const CHECK_INTERVAL_SEC: &str = "authentication.kerberos.check-interval-sec";
pub const FETCH_TIMEOUT_SEC: &str = "authentication.kerberos.keytab-fetch-timeout-sec";

pub const DEFAULT_CHECK_INTERVAL_SEC: i64 = 60;
pub const DEFAULT_FETCH_TIMEOUT_SEC: i64 = 60;

pub struct KerberosNamespace;

impl CapabilityProvider for KerberosNamespace {
    fn name(&self) -> &'static str {
        "kerberos"
    }

    fn property_entries(&self) -> Vec<PropertyEntry> {
        vec![
            string_optional_entry(PRINCIPAL, "The principal of the kerberos connection", true, None, false)
                .required_when(AUTH_TYPE, AUTH_KERBEROS),
            string_optional_entry(KEYTAB_URI, "The keytab of the kerberos connection", true, None, false)
                .required_when(AUTH_TYPE, AUTH_KERBEROS),
            integer_optional_entry(
                CHECK_INTERVAL_SEC,
                "The check interval of the kerberos credential, in seconds",
                true,
                Some(DEFAULT_CHECK_INTERVAL_SEC),
                false,
            ),
            integer_optional_entry(
                FETCH_TIMEOUT_SEC,
                "The timeout for fetching the keytab, in seconds",
                true,
                Some(DEFAULT_FETCH_TIMEOUT_SEC),
                false,
            ),
        ]
    }

    fn translations(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (PRINCIPAL, PRINCIPAL),
            (KEYTAB_URI, KEYTAB_URI),
            (CHECK_INTERVAL_SEC, CHECK_INTERVAL_SEC),
            (FETCH_TIMEOUT_SEC, FETCH_TIMEOUT_SEC),
        ]
    }
}
