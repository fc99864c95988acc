use crate::project_identity;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = project_identity::BINARY_NAME,
    about = "Parameter-Framework XML product strategies structure file generator",
    long_about = "Parameter-Framework XML product strategies structure file generator.\n\
                  Reads the audio policy engine configuration file, discovers every product \
                  strategy (following XInclude directives) and writes the matching \
                  ProductStrategies structure file.",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    /// Android Audio Policy Engine Configuration file
    #[arg(
        long = "audiopolicyengineconfigurationfile",
        value_name = "AUDIO_POLICY_ENGINE_CONFIGURATION_FILE",
        value_parser = existing_file
    )]
    pub engine_config: PathBuf,

    /// Product Strategies Structure output file
    #[arg(
        long = "outputfile",
        value_name = "STRATEGIES_STRUCTURE_OUTPUT_FILE",
        value_parser = writable_output
    )]
    pub output: PathBuf,

    /// Verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if !path.exists() {
        return Err(format!("file not found: {}", value));
    }
    if !path.is_file() {
        return Err(format!("not a regular file: {}", value));
    }
    std::fs::File::open(&path).map_err(|e| format!("cannot read {}: {}", value, e))?;
    Ok(path)
}

fn writable_output(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        return Err(format!("output path is a directory: {}", value));
    }
    if path.file_name().is_none() {
        return Err(format!("output path has no file name: {}", value));
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(format!("output directory does not exist: {}", parent.display()));
    }

    Ok(path)
}
