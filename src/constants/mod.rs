pub mod engine;
pub mod structure;

pub use engine::{
    MAX_INCLUDE_DEPTH, PRODUCT_STRATEGY_TAG, STRATEGY_NAME_ATTRIBUTE, XINCLUDE_FALLBACK,
    XINCLUDE_INCLUDE, XINCLUDE_NAMESPACE,
};
pub use structure::{
    COMPONENT_TAG, COMPONENT_TYPE_SET_TAG, COMPONENT_TYPE_TAG, MAPPING_IDENTIFIER,
    PRODUCT_STRATEGIES_NAME, PRODUCT_STRATEGY_TYPE, SCHEMA_LOCATION, STRATEGY_NAME_PREFIX,
    XSI_NAMESPACE,
};
