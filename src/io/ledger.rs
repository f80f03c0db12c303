use crate::error::{GenerateError, Result};
use crate::report::Reporter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only `basename<TAB>tag` sink for one generation run.
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    out: BufWriter<File>,
    entries: usize,
}

impl Ledger {
    /// Opens `path` for writing, truncating (with a warning) a previous ledger.
    pub fn create(
        path: &Path,
        reporter: &dyn Reporter,
    ) -> Result<Self> {
        if path.exists() {
            reporter.warn(&format!(
                "Tag file {} already exists and will be overwritten",
                path.display()
            ));
        }
        let file = File::create(path).map_err(|e| GenerateError::io("create ledger", path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            out: BufWriter::new(file),
            entries: 0,
        })
    }

    pub fn append(
        &mut self,
        file_name: &str,
        tag: &str,
    ) -> Result<()> {
        writeln!(self.out, "{file_name}\t{tag}")
            .map_err(|e| GenerateError::io("write ledger", &self.path, e))?;
        self.entries += 1;
        Ok(())
    }

    /// Flushes buffered entries and closes the file.
    pub fn finish(mut self) -> Result<usize> {
        self.out
            .flush()
            .map_err(|e| GenerateError::io("flush ledger", &self.path, e))?;
        Ok(self.entries)
    }
}
