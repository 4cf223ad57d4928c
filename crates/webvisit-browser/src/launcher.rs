use crate::{Error, LaunchPrefs, Result};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

/// Builds the launch command and spawns the browser process.
///
/// The remote-debugging port is the automation capability the session
/// attaches to; the page itself starts on about:blank and is driven to the
/// start URL over the DevTools protocol.
pub struct Launcher {
    browser_path: PathBuf,
    profile_path: PathBuf,
    prefs: LaunchPrefs,
    debugging_port: u16,
}

impl Launcher {
    /// Create a new Launcher
    pub fn new(browser_path: PathBuf, profile_path: PathBuf, prefs: LaunchPrefs) -> Self {
        Self {
            browser_path,
            profile_path,
            prefs,
            debugging_port: 9222,
        }
    }

    /// Launch the browser process
    pub fn launch(&self) -> Result<Child> {
        let args = self.build_args();
        tracing::debug!("Launching {} {}", self.browser_path.display(), args.join(" "));

        Command::new(&self.browser_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Launch(format!("Failed to launch browser: {}", e)))
    }

    /// Build the browser command-line arguments
    fn build_args(&self) -> Vec<String> {
        let mut args = vec![
            format!("--remote-debugging-port={}", self.debugging_port),
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            format!("--user-data-dir={}", self.profile_path.display()),
        ];

        args.extend(self.prefs.to_args());
        args.push("about:blank".to_string());

        args
    }

    /// Get the debugging port
    pub fn debugging_port(&self) -> u16 {
        self.debugging_port
    }
}
