use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;
use url::Url;
use webvisit_browser::{BrowserFinder, LaunchPrefs, Launcher, ProfileDir, VisitSession};

pub struct VisitArgs {
    pub url: String,
    pub headless: bool,
    pub disable_images: bool,
    pub rotate_user_agent: bool,
    pub user_agent: Option<String>,
    pub proxy: Option<String>,
    pub browser_path: Option<PathBuf>,
    pub profile: Option<String>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct VisitSummary {
    url: String,
    title: Option<String>,
}

pub fn execute(args: VisitArgs) -> Result<()> {
    let url = parse_start_url(&args.url)?;

    // Create tokio runtime for async operations
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    // Keep stdout clean for piping when JSON output is requested
    let quiet = args.json;

    let result = runtime.block_on(async {
        // Step 1: Find the browser binary
        if !quiet {
            println!("🔍 Locating browser...");
        }
        let finder = BrowserFinder::new(args.browser_path);
        let browser_binary = finder.find()?;
        if !quiet {
            println!("✅ Found browser at: {}", browser_binary.display());
        }

        // Step 2: Setup profile directory
        let profile_dir = if let Some(ref name) = args.profile {
            if !quiet {
                println!("📁 Using profile: {}", name);
            }
            ProfileDir::named(name)?
        } else {
            if !quiet {
                println!("📁 Using temporary profile");
            }
            ProfileDir::temporary()?
        };

        // Step 3: Assemble launch preferences
        let mut prefs = LaunchPrefs::new()
            .headless(args.headless)
            .disable_images(args.disable_images);

        if let Some(ua) = args.user_agent {
            prefs = prefs.user_agent(ua);
        } else if args.rotate_user_agent {
            prefs = prefs.rotate_user_agent();
        }

        if let Some(proxy) = args.proxy {
            if !quiet {
                println!("🔀 Routing through proxy");
            }
            prefs = prefs.proxy(proxy);
        }

        // Step 4: Launch the browser
        let launcher = Launcher::new(browser_binary, profile_dir.path().to_path_buf(), prefs);
        let debugging_port = launcher.debugging_port();

        if !quiet {
            println!("🚀 Launching browser...");
        }
        let child = launcher.launch()?;

        // Step 5: Attach the DevTools session
        let session = VisitSession::connect(debugging_port, child).await?;

        // Step 6: The one navigation
        tracing::info!("Start get");
        let nav_result = session.navigate(url.as_str()).await;
        tracing::info!("End get");

        // Step 7: Teardown runs regardless of how the navigation went
        tracing::info!("Good bye");
        session.close().await?;

        let title = nav_result?;

        let summary = VisitSummary {
            url: url.to_string(),
            title,
        };

        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!("✅ Visited: {}", summary.url);
            if let Some(title) = &summary.title {
                println!("   Title: {}", title);
            }
        }

        Ok(())
    });

    // Explicitly shutdown runtime with timeout to prevent hanging on blocking tasks
    runtime.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}

/// Validate the start URL, defaulting schemeless input to https
fn parse_start_url(raw: &str) -> Result<Url> {
    let with_scheme = if !raw.starts_with("http://") && !raw.starts_with("https://") {
        format!("https://{}", raw)
    } else {
        raw.to_string()
    };

    Url::parse(&with_scheme)
        .map_err(|e| anyhow::anyhow!("Invalid start URL '{}': {}", raw, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_url_keeps_scheme() {
        let url = parse_start_url("http://example.com/page").unwrap();
        assert_eq!(url.as_str(), "http://example.com/page");
    }

    #[test]
    fn test_parse_start_url_defaults_to_https() {
        let url = parse_start_url("example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_parse_start_url_rejects_garbage() {
        let result = parse_start_url("http://");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid start URL"));
    }
}
