use std::fs;
use std::path::Path;

use anvil_core::AnvilError;

pub struct CodeWriter;

impl CodeWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write generated source, creating parent directories as needed.
    /// Refuses to clobber an existing file unless `force` is set.
    pub fn write(&self, path: &Path, content: &str, force: bool) -> Result<(), AnvilError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        if path.exists() && !force {
            return Err(AnvilError::FileAlreadyExists(path.to_path_buf()));
        }

        fs::write(path, content)?;
        Ok(())
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}
