use std::time::Duration;

use crate::browser::Browser;
use crate::error::Result;

pub struct BrowserConfig {
    pub headless: bool,
    /// Extra Chrome flags, applied in order. chromiumoxide prepends `--`
    /// itself, so entries must not carry the prefix.
    pub args: Vec<String>,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub chrome_path: Option<String>,
    /// Default wait window for locator resolution (default: 30s).
    pub default_timeout: Duration,
}

/// Per-context preferences, applied when the browsing context is created.
#[derive(Clone, Default)]
pub struct ContextConfig {
    pub accept_downloads: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            args: Vec::new(),
            viewport_width: 1920,
            viewport_height: 1080,
            chrome_path: None,
            default_timeout: Duration::from_secs(30),
        }
    }
}

pub struct BrowserBuilder {
    config: BrowserConfig,
}

impl BrowserBuilder {
    pub fn new() -> Self {
        Self {
            config: BrowserConfig::default(),
        }
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    /// Append a Chrome flag (without the `--` prefix).
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.config.args.push(arg.into());
        self
    }

    /// Append several Chrome flags, preserving order.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.config.viewport_width = width;
        self.config.viewport_height = height;
        self
    }

    pub fn chrome_path(mut self, path: impl Into<String>) -> Self {
        self.config.chrome_path = Some(path.into());
        self
    }

    /// Set the default wait window for locator resolution.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.default_timeout = timeout;
        self
    }

    pub fn build_config(self) -> BrowserConfig {
        self.config
    }

    pub async fn build(self) -> Result<Browser> {
        Browser::launch(self.build_config()).await
    }
}

impl Default for BrowserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_headless_with_empty_args() {
        let config = BrowserConfig::default();
        assert!(config.headless);
        assert!(config.args.is_empty());
        assert_eq!(config.default_timeout, Duration::from_secs(30));
    }

    #[test]
    fn builder_preserves_arg_order() {
        let config = BrowserBuilder::new()
            .headless(false)
            .arg("verbose")
            .arg("disable-notifications")
            .build_config();
        assert!(!config.headless);
        assert_eq!(config.args, vec!["verbose", "disable-notifications"]);
    }

    #[test]
    fn context_config_defaults_to_rejecting_downloads() {
        let config = ContextConfig::default();
        assert!(!config.accept_downloads);
    }
}
