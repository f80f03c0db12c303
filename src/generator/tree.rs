use super::{Generator, Run};
use crate::constants::FILE_SUFFIX;
use crate::error::{GenerateError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

impl Generator {
    /// Fills `path` with subdirectories first, then files.
    ///
    /// Every subdirectory slot consumes an identifier, but directories are
    /// only created (and recursed into) while `depth < max depth`.
    pub(super) fn build(
        &mut self,
        run: &mut Run,
        path: &Path,
        depth: usize,
    ) -> Result<()> {
        let subdirs = self.rng.range_inclusive(1, self.config.branch_factor);
        for _ in 0..subdirs {
            let name = run.mint(&self.ids);
            if depth < self.config.depth {
                let child = path.join(&name);
                fs::create_dir(&child)
                    .map_err(|e| GenerateError::io("create directory", &child, e))?;
                run.directories += 1;
                self.build(run, &child, depth + 1)?;
            }
        }

        let files = self.rng.range_inclusive(0, self.config.max_files);
        for _ in 0..files {
            let file_name = format!("{}{FILE_SUFFIX}", run.mint(&self.ids));
            let file_path = path.join(&file_name);
            let len = self.rng.range_inclusive(0, self.config.max_file_size);
            let payload = self.rng.bytes(len);
            write_payload(&file_path, &payload)?;
            run.files += 1;
            run.payload_bytes += len as u64;
            self.assign(run, &file_name)?;
        }

        tracing::debug!(
            "{}: depth {depth}, {subdirs} subdirectory slots, {files} files",
            path.display()
        );
        Ok(())
    }
}

// Never overwrites: identifiers are unique within a run.
fn write_payload(
    path: &Path,
    payload: &[u8],
) -> Result<()> {
    let mut file = File::create_new(path).map_err(|e| GenerateError::io("create file", path, e))?;
    file.write_all(payload)
        .map_err(|e| GenerateError::io("write file", path, e))
}
