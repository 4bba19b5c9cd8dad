//! Sketch snapshots read from a file on disk.

#[cfg(test)]
#[path = "sketch_test.rs"]
mod sketch_test;

use std::path::PathBuf;

use studio::workflow::{SketchError, SketchSource};

/// A sketch document prepared elsewhere (typically exported from the
/// browser canvas) and passed to `generate` or `save-sketch`.
#[derive(Clone, Debug)]
pub struct FileSketch {
    path: PathBuf,
    discarded: bool,
}

impl FileSketch {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), discarded: false }
    }
}

impl SketchSource for FileSketch {
    fn snapshot(&self) -> Result<Option<String>, SketchError> {
        if self.discarded {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| SketchError::Unreadable(format!("{}: {e}", self.path.display())))?;
        let trimmed = raw.trim();
        Ok(if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) })
    }

    /// Forget the file for this process; the file itself is left alone.
    fn clear(&mut self) {
        self.discarded = true;
    }
}
