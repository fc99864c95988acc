use crate::constants::MAX_INCLUDE_DEPTH;
use crate::error::{Result, StructureError};
use std::path::{Path, PathBuf};

/// Track the include chain for circular include detection.
#[derive(Debug)]
pub(super) struct IncludeContext {
    /// Stack of files currently being loaded, root document first.
    stack: Vec<PathBuf>,
    max_depth: usize,
}

impl Default for IncludeContext {
    fn default() -> Self {
        Self {
            stack: Vec::new(),
            max_depth: MAX_INCLUDE_DEPTH,
        }
    }
}

impl IncludeContext {
    pub(super) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(super) fn with_max_depth(max_depth: usize) -> Self {
        Self {
            stack: Vec::new(),
            max_depth,
        }
    }

    pub(super) fn push(&mut self, path: PathBuf) -> Result<()> {
        if let Some(pos) = self.stack.iter().position(|p| p == &path) {
            let cycle: Vec<String> = self.stack[pos..]
                .iter()
                .chain(std::iter::once(&path))
                .map(|p| p.display().to_string())
                .collect();
            return Err(StructureError::IncludeError {
                file: self.current_label(),
                message: format!("Circular include detected:\n  {}", cycle.join("\n  -> ")),
            });
        }

        // The root document is not an include.
        if self.depth() >= self.max_depth {
            return Err(StructureError::IncludeError {
                file: self.current_label(),
                message: format!(
                    "Maximum include depth of {} exceeded by '{}'",
                    self.max_depth,
                    path.display()
                ),
            });
        }

        self.stack.push(path);
        Ok(())
    }

    pub(super) fn pop(&mut self) {
        self.stack.pop();
    }

    /// Number of nested includes below the root document.
    pub(super) fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    pub(super) fn current(&self) -> Option<&Path> {
        self.stack.last().map(PathBuf::as_path)
    }

    fn current_label(&self) -> String {
        self.current()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}
