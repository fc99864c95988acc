use super::StructureSettings;

/// One `Component` leaf of the structure file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    pub name: String,
    pub component_type: String,
    pub mapping: String,
}

impl ComponentRecord {
    pub fn from_strategy(raw_name: &str, settings: &StructureSettings) -> Self {
        Self {
            name: display_name(raw_name, &settings.strategy_prefix),
            component_type: settings.component_type.clone(),
            mapping: mapping_for(raw_name, settings.mapping_identifier),
        }
    }
}

/// Strip `prefix` when present, then lower-case.
pub fn display_name(raw_name: &str, prefix: &str) -> String {
    raw_name
        .strip_prefix(prefix)
        .unwrap_or(raw_name)
        .to_lowercase()
}

/// `Identifier:<id>,Name:<raw_name>`; the raw name is kept verbatim.
pub fn mapping_for(raw_name: &str, identifier: u32) -> String {
    format!("Identifier:{},Name:{}", identifier, raw_name)
}
