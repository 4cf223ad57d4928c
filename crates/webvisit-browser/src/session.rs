use crate::{Error, Result};
use chromiumoxide::browser::Browser;
use futures::StreamExt;
use std::process::Child;
use tokio::task::JoinHandle;

const CONNECT_ATTEMPTS: u32 = 5;

/// DevTools session over a spawned browser process.
///
/// The session owns the child process. `close` tears everything down in
/// order; if it is never reached, `Drop` still kills the process so no
/// browser outlives a failed visit.
#[derive(Debug)]
pub struct VisitSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    child: Child,
    closed: bool,
}

impl VisitSession {
    /// Attach to the browser's debugging port, taking ownership of the process.
    ///
    /// The browser may still be starting up, so connection is retried a few
    /// times. On a definitive failure the process is killed before the error
    /// is returned.
    pub async fn connect(debugging_port: u16, mut child: Child) -> Result<Self> {
        let ws_url = format!("http://localhost:{}", debugging_port);

        let mut retries = CONNECT_ATTEMPTS;
        let connected = loop {
            tracing::debug!("Attempting CDP connection to {}...", ws_url);
            match Browser::connect(&ws_url).await {
                Ok(result) => {
                    tracing::info!("CDP connection established");
                    break Ok(result);
                }
                Err(e) => {
                    retries -= 1;
                    if retries == 0 {
                        break Err(Error::Session(format!(
                            "Failed to connect to browser after {} attempts: {}",
                            CONNECT_ATTEMPTS, e
                        )));
                    }
                    tracing::info!("CDP connection attempt failed, retrying... ({} left)", retries);
                    tokio::time::sleep(std::time::Duration::from_millis(500)).await;
                }
            }
        };

        let (browser, mut handler) = match connected {
            Ok(pair) => pair,
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(e);
            }
        };

        // The handler task must run for any browser command to make progress
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    // Some CDP events may not be fully parseable
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        Ok(Self {
            browser,
            handler_task,
            child,
            closed: false,
        })
    }

    /// Drive the initial page to the given URL and wait for the load to settle.
    ///
    /// Returns the page title, when the document has one.
    pub async fn navigate(&self, url: &str) -> Result<Option<String>> {
        // Give the browser a moment to create its initial page
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;

        let page = if let Some(page) = self.browser.pages().await?.first() {
            tracing::debug!("Using existing page");
            page.clone()
        } else {
            tracing::debug!("No existing pages, creating new page");
            self.browser.new_page("about:blank").await?
        };

        page.goto(url).await?;
        if let Err(e) = page.wait_for_navigation().await {
            tracing::debug!("Navigation settled with error (continuing): {}", e);
        }

        Ok(page.get_title().await.ok().flatten())
    }

    /// Tear the session down: CDP close, then terminate and reap the process.
    pub async fn close(mut self) -> Result<()> {
        let _ = self.browser.close().await;
        let _ = self.browser.wait().await;
        self.handler_task.abort();

        let _ = self.child.kill();
        self.child.wait().map_err(Error::Io)?;

        self.closed = true;
        Ok(())
    }
}

impl Drop for VisitSession {
    fn drop(&mut self) {
        if !self.closed {
            self.handler_task.abort();
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::{Command, Stdio};

    #[cfg(unix)]
    fn process_alive(pid: u32) -> bool {
        Command::new("kill")
            .args(["-0", &pid.to_string()])
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failed_connect_kills_and_reaps_child() {
        let child = Command::new("sleep")
            .arg("60")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .unwrap();
        let pid = child.id();
        assert!(process_alive(pid));

        // Nothing listens on this port, so every attempt is refused
        let result = VisitSession::connect(49581, child).await;

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to connect")
        );
        assert!(!process_alive(pid));
    }

    // Navigate/close behavior needs a running browser; it is exercised by
    // the CLI integration tests when one is installed.
}
