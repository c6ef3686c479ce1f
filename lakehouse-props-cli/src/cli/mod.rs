// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for Lakehouse Props
//!
//! Provides schema introspection, one-off validation and translation of
//! catalog properties supplied on the command line.

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use handlers::{handle_describe, handle_transform, handle_validate, load_config};
