//! Plain-text output of resolved program ids

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::shared::utils::generate_id;

/// Writes a resolved program id to a fixed path, replacing prior contents.
/// The file is written beside the target under a unique name and renamed
/// into place, so readers never observe a truncated file.
#[derive(Debug, Clone)]
pub struct ProgramIdWriter {
    path: PathBuf,
}

impl ProgramIdWriter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, program_id: &str) -> io::Result<()> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"))?;

        let mut temp_name = std::ffi::OsString::from(".");
        temp_name.push(file_name);
        temp_name.push(format!(".{}.tmp", generate_id()));
        let temp_path = self.path.with_file_name(temp_name);

        fs::write(&temp_path, program_id.as_bytes())?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        debug!("Wrote program id to {}", self.path.display());
        Ok(())
    }
}
