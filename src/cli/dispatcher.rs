//! Command dispatcher
//!
//! Turns parsed CLI arguments into a generation run.

use crate::cli::args::Cli;
use crate::commands::generate::{self, GenerateOptions};
use crate::error::Result;
use crate::project_identity;
use crate::structure::StructureSettings;
use crate::ui as output;

/// Dispatch the parsed CLI arguments to the generator
pub fn dispatch(args: &Cli) -> Result<()> {
    if output::is_verbose() {
        output::header(project_identity::DISPLAY_NAME);
    }

    let summary = generate::run(&GenerateOptions {
        engine_config: args.engine_config.clone(),
        output: args.output.clone(),
        settings: StructureSettings::default(),
    })?;

    if output::is_verbose() {
        output::success(&format!(
            "Wrote {} product strategies to {}",
            summary.strategy_count,
            summary.output.display()
        ));
    }

    Ok(())
}
