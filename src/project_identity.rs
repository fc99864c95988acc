//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values.

pub const DISPLAY_NAME: &str = "Strategies Structure";
pub const BINARY_NAME: &str = "strategies-structure";
