use crate::config::document::Element;
use crate::constants::{PRODUCT_STRATEGY_TAG, STRATEGY_NAME_ATTRIBUTE};

/// Collect the `name` of every `ProductStrategy` element in document order.
///
/// Duplicates are kept. An element without the attribute yields `None` at its
/// position; values are not validated.
pub fn collect_strategy_names(root: &Element) -> Vec<Option<String>> {
    root.descendants()
        .filter(|e| e.is(None, PRODUCT_STRATEGY_TAG))
        .map(|e| e.attribute(STRATEGY_NAME_ATTRIBUTE).map(str::to_string))
        .collect()
}
