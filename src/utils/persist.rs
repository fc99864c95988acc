use crate::error::{Result, StructureError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `content` to a sibling temporary file and rename it over `path`,
/// so a failed run never leaves a truncated output behind.
pub fn write_atomically(path: &Path, content: &[u8]) -> Result<()> {
    let file_name = path.file_name().ok_or_else(|| {
        StructureError::PathError(format!(
            "Invalid output path (no file name): {}",
            path.display()
        ))
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = dir.join(tmp_name);

    let mut tmp_file = fs::File::create(&tmp_path).map_err(|e| StructureError::IoError {
        path: tmp_path.clone(),
        source: e,
    })?;

    if let Err(e) = tmp_file.write_all(content).and_then(|()| tmp_file.sync_all()) {
        drop(tmp_file);
        let _ = fs::remove_file(&tmp_path);
        return Err(StructureError::IoError {
            path: tmp_path,
            source: e,
        });
    }
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        StructureError::IoError {
            path: path.to_path_buf(),
            source: e,
        }
    })
}
