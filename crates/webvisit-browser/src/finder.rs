use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Binary names probed on PATH, in order of preference.
const PATH_CANDIDATES: &[&str] = &["google-chrome", "chromium", "chromium-browser"];

/// Locates a Chromium-family browser binary on the system
pub struct BrowserFinder {
    custom_path: Option<PathBuf>,
}

impl BrowserFinder {
    /// Create a new BrowserFinder with optional custom executable path
    pub fn new(custom_path: Option<PathBuf>) -> Self {
        Self { custom_path }
    }

    /// Find the browser binary.
    ///
    /// A custom path, when given, is used exclusively. Otherwise the
    /// well-known binary names are looked up on PATH, then the platform
    /// default install locations are probed.
    pub fn find(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.custom_path {
            return self.validate_browser_path(path);
        }

        for name in PATH_CANDIDATES {
            if let Ok(path) = which::which(name) {
                tracing::debug!("Found {} on PATH: {}", name, path.display());
                return Ok(path);
            }
        }

        for path in Self::default_paths() {
            if let Ok(valid_path) = self.validate_browser_path(&path) {
                return Ok(valid_path);
            }
        }

        Err(Error::Launch(format!(
            "Browser not found. Checked PATH for {} and: {}. Use --browser-path to specify location.",
            PATH_CANDIDATES.join(", "),
            Self::default_paths()
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }

    /// Platform-specific default install locations
    fn default_paths() -> Vec<PathBuf> {
        #[cfg(target_os = "macos")]
        return vec![
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"),
            PathBuf::from("/Applications/Chromium.app/Contents/MacOS/Chromium"),
        ];

        #[cfg(target_os = "linux")]
        return vec![
            PathBuf::from("/usr/bin/google-chrome"),
            PathBuf::from("/usr/bin/chromium"),
            PathBuf::from("/usr/bin/chromium-browser"),
        ];

        #[cfg(target_os = "windows")]
        return vec![
            PathBuf::from(r"C:\Program Files\Google\Chrome\Application\chrome.exe"),
            PathBuf::from(r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe"),
        ];

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        return vec![];
    }

    /// Validate that a path exists and is executable
    fn validate_browser_path(&self, path: &Path) -> Result<PathBuf> {
        if !path.exists() {
            return Err(Error::Launch(format!(
                "Browser not found at: {}",
                path.display()
            )));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(path).map_err(Error::Io)?;
            if metadata.permissions().mode() & 0o111 == 0 {
                return Err(Error::Launch(format!(
                    "Browser binary not executable: {}",
                    path.display()
                )));
            }
        }

        Ok(path.to_path_buf())
    }
}
