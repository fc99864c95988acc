use crate::error::{Result, StructureError};
use std::path::{Path, PathBuf};

pub(super) fn resolve_primary_config_path(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path).map_err(|_e| StructureError::ConfigNotFound {
        path: path.to_path_buf(),
    })
}

pub(super) fn parent_dir_of(path: &Path) -> Result<PathBuf> {
    path.parent().map(Path::to_path_buf).ok_or_else(|| {
        StructureError::PathError(format!(
            "Cannot determine parent directory for configuration file: {}",
            path.display()
        ))
    })
}

/// Resolve an `xi:include` href against the directory of the including file.
///
/// Only local paths are supported; a `file:` scheme prefix is accepted and
/// stripped. The result is canonicalized so include chains compare reliably.
pub(super) fn resolve_include_path(base_dir: &Path, href: &str) -> Result<PathBuf> {
    let local = href.strip_prefix("file://").unwrap_or(href);
    let local = local.strip_prefix("file:").unwrap_or(local);

    if local.is_empty() {
        return Err(StructureError::PathError(
            "Include href must not be empty".to_string(),
        ));
    }

    if local.contains("://") {
        return Err(StructureError::PathError(format!(
            "Unsupported include href (only local files are allowed): {}",
            href
        )));
    }

    let candidate = Path::new(local);
    let joined = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        base_dir.join(candidate)
    };

    std::fs::canonicalize(&joined).map_err(|e| StructureError::IoError {
        path: joined,
        source: e,
    })
}
