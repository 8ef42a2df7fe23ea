// SPDX-License-Identifier: MIT OR Apache-2.0

//! session-ui library root.
//!
//! Re-exports public modules so that integration tests (under `tests/`) can
//! import components. The binary entry-point lives in `main.rs`.

pub mod components;
pub mod config;
pub mod context;
pub mod date_utils;
pub mod i18n;
pub mod pages;
pub mod routing;
