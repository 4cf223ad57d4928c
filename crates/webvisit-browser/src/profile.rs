use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Browser profile directory handed to the process as --user-data-dir
pub struct ProfileDir {
    path: PathBuf,
    is_temporary: bool,
}

impl ProfileDir {
    /// Create a temporary profile that will be deleted on drop
    pub fn temporary() -> Result<Self> {
        let temp_dir = tempfile::tempdir().map_err(|e| Error::Io(e.into()))?;

        let path = temp_dir.keep();

        Ok(Self {
            path,
            is_temporary: true,
        })
    }

    /// Create or reuse a named persistent profile under ~/.webvisit/profiles
    pub fn named(name: &str) -> Result<Self> {
        let path = dirs::home_dir()
            .ok_or_else(|| Error::Launch("Could not determine home directory".to_string()))?
            .join(".webvisit")
            .join("profiles")
            .join(name);

        Self::persistent(path)
    }

    /// Create or use a persistent profile at the given path
    pub fn persistent(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(&path).map_err(Error::Io)?;
        }

        Ok(Self {
            path,
            is_temporary: false,
        })
    }

    /// Get the profile directory path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if this is a temporary profile
    pub fn is_temporary(&self) -> bool {
        self.is_temporary
    }
}

impl Drop for ProfileDir {
    fn drop(&mut self) {
        if self.is_temporary && self.path.exists() {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }
}
