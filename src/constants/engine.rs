// Names read from the audio policy engine configuration

/// Element declaring one product strategy
pub const PRODUCT_STRATEGY_TAG: &str = "ProductStrategy";

/// Attribute carrying the strategy name
pub const STRATEGY_NAME_ATTRIBUTE: &str = "name";

/// XInclude namespace URI
pub const XINCLUDE_NAMESPACE: &str = "http://www.w3.org/2001/XInclude";
pub const XINCLUDE_INCLUDE: &str = "include";
pub const XINCLUDE_FALLBACK: &str = "fallback";

/// Maximum nesting of `xi:include` directives
pub const MAX_INCLUDE_DEPTH: usize = 6;
