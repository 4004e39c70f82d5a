use chromiumoxide::browser::{Browser as CrBrowser, BrowserConfig as CrBrowserConfig};
use chromiumoxide::cdp::browser_protocol::browser::{
    BrowserContextId, SetDownloadBehaviorBehavior, SetDownloadBehaviorParams,
};
use chromiumoxide::cdp::browser_protocol::target::{
    CreateBrowserContextParams, CreateTargetParams,
};
use chromiumoxide::handler::viewport::Viewport;
use futures::StreamExt;
use tracing::debug;

use crate::config::{BrowserBuilder, BrowserConfig, ContextConfig};
use crate::error::{Error, Result};
use crate::page::Page;

/// An isolated browsing context (own cookie jar and storage) inside a
/// running browser. Disposed implicitly when the browser closes.
pub struct BrowsingContext {
    id: BrowserContextId,
}

impl BrowsingContext {
    /// The CDP identifier of this context.
    pub fn id(&self) -> &BrowserContextId {
        &self.id
    }
}

/// The entry point for controlling a browser process. Closing consumes the
/// handle, so a closed browser cannot be reused and the process is released
/// exactly once.
pub struct Browser {
    inner: CrBrowser,
    default_timeout: std::time::Duration,
    handler_task: tokio::task::JoinHandle<()>,
}

impl Browser {
    /// Create a new BrowserBuilder for configuring and launching a browser.
    pub fn builder() -> BrowserBuilder {
        BrowserBuilder::new()
    }

    /// Launch a browser process with the given configuration.
    pub async fn launch(config: BrowserConfig) -> Result<Self> {
        let mut builder = CrBrowserConfig::builder();

        if config.headless {
            builder = builder.new_headless_mode().no_sandbox();
        } else {
            builder = builder.with_head().no_sandbox();
        }

        // chromiumoxide adds the `--` prefix itself, so keys must not include it
        for arg in &config.args {
            builder = builder.arg(arg.as_str());
        }

        if let Some(ref path) = config.chrome_path {
            builder = builder.chrome_executable(path);
        }

        builder = builder.viewport(Viewport {
            width: config.viewport_width,
            height: config.viewport_height,
            device_scale_factor: None,
            emulating_mobile: false,
            is_landscape: false,
            has_touch: false,
        });

        let cr_config = builder
            .build()
            .map_err(|e| Error::LaunchError(e.to_string()))?;

        let (browser, mut handler) = CrBrowser::launch(cr_config)
            .await
            .map_err(|e| Error::LaunchError(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {}
        });

        debug!(headless = config.headless, "browser process launched");

        Ok(Self {
            inner: browser,
            default_timeout: config.default_timeout,
            handler_task,
        })
    }

    /// Open an isolated browsing context. When `accept_downloads` is false,
    /// downloads started from pages in this context are denied.
    pub async fn new_context(&mut self, config: ContextConfig) -> Result<BrowsingContext> {
        let id = self
            .inner
            .create_browser_context(CreateBrowserContextParams::default())
            .await
            .map_err(|e| Error::ContextError(e.to_string()))?;

        if !config.accept_downloads {
            let params = SetDownloadBehaviorParams::builder()
                .behavior(SetDownloadBehaviorBehavior::Deny)
                .browser_context_id(id.clone())
                .build()
                .map_err(Error::ContextError)?;
            self.inner
                .execute(params)
                .await
                .map_err(|e| Error::ContextError(e.to_string()))?;
        }

        debug!("browsing context created");
        Ok(BrowsingContext { id })
    }

    /// Open a new blank page (tab) inside the given browsing context.
    pub async fn new_page(&self, context: &BrowsingContext) -> Result<Page> {
        let params = CreateTargetParams::builder()
            .url("about:blank")
            .browser_context_id(context.id.clone())
            .build()
            .map_err(Error::ContextError)?;

        let cr_page = self
            .inner
            .new_page(params)
            .await
            .map_err(|e| Error::NavigationError(e.to_string()))?;

        Ok(Page::new(cr_page, self.default_timeout))
    }

    /// Close the browser and wait for the process to exit. Consumes the
    /// handle, so release happens exactly once on every exit path that
    /// reaches it. Contexts and pages are torn down with the process.
    pub async fn close(mut self) -> Result<()> {
        self.inner.close().await.map_err(Error::CdpError)?;
        self.inner.wait().await.map_err(Error::IoError)?;
        self.handler_task.abort();
        debug!("browser process closed");
        Ok(())
    }
}
