use crate::random_user_agent;

/// Boolean-gated preference toggles applied to the browser at launch.
///
/// Each toggle maps to a single Chrome command-line switch; anything left
/// unset contributes no switch at all.
#[derive(Debug, Clone, Default)]
pub struct LaunchPrefs {
    pub headless: bool,
    pub disable_images: bool,
    pub user_agent: Option<String>,
    pub proxy: Option<String>,
}

impl LaunchPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run without a visible window
    pub fn headless(mut self, enabled: bool) -> Self {
        self.headless = enabled;
        self
    }

    /// Skip image loading to cut page weight
    pub fn disable_images(mut self, enabled: bool) -> Self {
        self.disable_images = enabled;
        self
    }

    /// Override the reported user agent with a fixed string
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the reported user agent with a random pick from the pool
    pub fn rotate_user_agent(mut self) -> Self {
        self.user_agent = Some(random_user_agent().to_string());
        self
    }

    /// Route all traffic through the given proxy (e.g. "http://127.0.0.1:8080")
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Render the toggles as Chrome command-line switches
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if self.headless {
            args.push("--headless=new".to_string());
        }

        if self.disable_images {
            args.push("--blink-settings=imagesEnabled=false".to_string());
        }

        if let Some(ua) = &self.user_agent {
            args.push(format!("--user-agent={}", ua));
        }

        if let Some(proxy) = &self.proxy {
            args.push(format!("--proxy-server={}", proxy));
        }

        args
    }
}
