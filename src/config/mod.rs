pub mod document;
pub mod loader;
pub mod strategies;

pub use document::{Element, Node, parse_document};
pub use loader::load_engine_configuration;
pub use strategies::collect_strategy_names;
