// Parameter-framework structure file conventions

pub const COMPONENT_TYPE_SET_TAG: &str = "ComponentTypeSet";
pub const COMPONENT_TYPE_TAG: &str = "ComponentType";
pub const COMPONENT_TAG: &str = "Component";

pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const SCHEMA_LOCATION: &str = "Schemas/ComponentTypeSet.xsd";

/// `Name` of the single component type grouping all strategies
pub const PRODUCT_STRATEGIES_NAME: &str = "ProductStrategies";

/// `Type` given to every strategy component
pub const PRODUCT_STRATEGY_TYPE: &str = "ProductStrategy";

/// Prefix removed from engine strategy names
pub const STRATEGY_NAME_PREFIX: &str = "STRATEGY_";

/// Identifier embedded in every `Mapping` attribute
pub const MAPPING_IDENTIFIER: u32 = 1000;
