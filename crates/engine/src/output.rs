use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only output document backed by a truncated file.
///
/// The file is created when the document is opened and flushed by
/// [`OutputDocument::finish`]. Dropping without `finish` still closes the
/// handle but write errors on the final flush are lost.
#[derive(Debug)]
pub struct OutputDocument {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl OutputDocument {
    /// # Errors
    /// Returns [`EngineError::OutputWrite`] if the file cannot be created.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| EngineError::output_write(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    /// Appends one complete block.
    ///
    /// # Errors
    /// Returns [`EngineError::OutputWrite`] on I/O failure.
    pub fn push_block(&mut self, block: &str) -> Result<()> {
        self.writer
            .write_all(block.as_bytes())
            .map_err(|e| EngineError::output_write(&self.path, e))
    }

    /// Flushes and closes the document, returning its path.
    ///
    /// # Errors
    /// Returns [`EngineError::OutputWrite`] if the flush fails.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer
            .flush()
            .map_err(|e| EngineError::output_write(&self.path, e))?;
        Ok(self.path)
    }
}
