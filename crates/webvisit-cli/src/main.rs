use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "webvisit")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Open one page in a real browser and close it",
    long_about = "Webvisit launches a Chromium-family browser with a configurable profile \
                  (image loading, user-agent, proxy), navigates to a single start URL over \
                  the DevTools protocol, and tears the session down."
)]
struct Cli {
    /// Start URL to open
    #[arg(value_name = "URL", env = "WEBVISIT_URL")]
    url: String,

    /// Run the browser without a visible window
    #[arg(long, env = "WEBVISIT_HEADLESS")]
    headless: bool,

    /// Skip image loading
    #[arg(long, env = "WEBVISIT_DISABLE_IMAGES")]
    disable_images: bool,

    /// Report a random user agent from the built-in pool
    #[arg(long, env = "WEBVISIT_ROTATE_USER_AGENT", conflicts_with = "user_agent")]
    rotate_user_agent: bool,

    /// Report a fixed user agent string
    #[arg(long, env = "WEBVISIT_USER_AGENT", value_name = "STRING")]
    user_agent: Option<String>,

    /// Route traffic through a proxy (e.g. http://127.0.0.1:8080)
    #[arg(long, env = "WEBVISIT_PROXY", value_name = "URL")]
    proxy: Option<String>,

    /// Path to the browser executable
    #[arg(long, env = "WEBVISIT_BROWSER_PATH", value_name = "PATH")]
    browser_path: Option<PathBuf>,

    /// Use a named persistent profile instead of a temporary one
    #[arg(long, env = "WEBVISIT_PROFILE", value_name = "NAME")]
    profile: Option<String>,

    /// Print the visit summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    commands::visit::execute(commands::visit::VisitArgs {
        url: cli.url,
        headless: cli.headless,
        disable_images: cli.disable_images,
        rotate_user_agent: cli.rotate_user_agent,
        user_agent: cli.user_agent,
        proxy: cli.proxy,
        browser_path: cli.browser_path,
        profile: cli.profile,
        json: cli.json,
    })
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("webvisit=debug,webvisit_browser=debug")
    } else {
        EnvFilter::new("webvisit=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
