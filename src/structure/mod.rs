//! Parameter-framework product strategies structure file.

pub mod naming;
pub mod writer;

pub use naming::{ComponentRecord, display_name, mapping_for};
pub use writer::{XmlAttributes, render_structure};

use crate::constants::{
    MAPPING_IDENTIFIER, PRODUCT_STRATEGIES_NAME, PRODUCT_STRATEGY_TYPE, STRATEGY_NAME_PREFIX,
};

/// Naming and mapping convention applied to every strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureSettings {
    /// Prefix removed from raw strategy names
    pub strategy_prefix: String,
    /// Identifier written into each `Mapping`
    pub mapping_identifier: u32,
    /// `Type` of each strategy component
    pub component_type: String,
    /// `Name` of the grouping component type
    pub component_type_name: String,
}

impl Default for StructureSettings {
    fn default() -> Self {
        Self {
            strategy_prefix: STRATEGY_NAME_PREFIX.to_string(),
            mapping_identifier: MAPPING_IDENTIFIER,
            component_type: PRODUCT_STRATEGY_TYPE.to_string(),
            component_type_name: PRODUCT_STRATEGIES_NAME.to_string(),
        }
    }
}
