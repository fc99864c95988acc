use crate::config::{collect_strategy_names, load_engine_configuration};
use crate::error::{Result, StructureError};
use crate::structure::{ComponentRecord, StructureSettings, render_structure};
use crate::ui;
use crate::utils::persist::write_atomically;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub engine_config: PathBuf,
    pub output: PathBuf,
    pub settings: StructureSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub strategy_count: usize,
    pub output: PathBuf,
}

pub fn run(options: &GenerateOptions) -> Result<GenerateSummary> {
    let root = load_engine_configuration(&options.engine_config)?;
    let names = collect_strategy_names(&root);

    if names.is_empty() {
        ui::warning(&format!(
            "No product strategies found in {}",
            options.engine_config.display()
        ));
    }

    let records = build_records(&names, &options.settings)?;
    for record in &records {
        ui::keyval(&record.name, &record.mapping);
    }

    let content = render_structure(&records, &options.settings)?;
    write_output(&options.output, &content)?;

    Ok(GenerateSummary {
        strategy_count: records.len(),
        output: options.output.clone(),
    })
}

/// Turn extracted names into components, rejecting strategies with no name.
pub fn build_records(
    names: &[Option<String>],
    settings: &StructureSettings,
) -> Result<Vec<ComponentRecord>> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            name.as_deref()
                .map(|raw| ComponentRecord::from_strategy(raw, settings))
                .ok_or(StructureError::MissingStrategyName { index: index + 1 })
        })
        .collect()
}

fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    ui::verbose(&format!("Writing {}", path.display()));
    write_atomically(path, content)
}
