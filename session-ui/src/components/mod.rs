// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod config_error;
pub mod device_tile;
pub mod heading;
pub mod tooltip;
