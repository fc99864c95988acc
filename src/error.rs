use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StructureError {
    #[error("Configuration file not found at: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parsing error in '{file}' at byte {position}: {message}")]
    ParseError {
        file: String,
        position: usize,
        message: String,
    },

    #[error("Include error in '{file}': {message}")]
    IncludeError { file: String, message: String },

    /// A `ProductStrategy` element carried no `name` attribute
    #[error("Product strategy #{index} has no 'name' attribute")]
    MissingStrategyName { index: usize },

    #[error("XML write error: {0}")]
    XmlWriteError(#[from] quick_xml::Error),

    /// Path resolution or validation error
    #[error("Path error: {0}")]
    PathError(String),
}

pub type Result<T> = std::result::Result<T, StructureError>;
