use std::time::Duration;

use chromiumoxide::page::Page as CrPage;

use crate::element::{Element, SelectedOption};
use crate::error::{Error, Result};
use crate::locator::{Locator, Query};

/// Wrapper around a chromiumoxide Page. Interactions are addressed by
/// [`Locator`], and every call re-resolves the locator against the live
/// page rather than reusing a previously resolved element.
pub struct Page {
    inner: CrPage,
    default_timeout: Duration,
}

impl Page {
    pub(crate) fn new(inner: CrPage, default_timeout: Duration) -> Self {
        Self { inner, default_timeout }
    }

    /// Navigate to the given URL and wait for the page to load.
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.inner
            .goto(url)
            .await
            .map_err(|e| Error::NavigationError(e.to_string()))?;
        Ok(())
    }

    /// Get the full HTML content of the page.
    pub async fn html(&self) -> Result<String> {
        self.inner
            .content()
            .await
            .map_err(|e| Error::JsError(e.to_string()))
    }

    /// Resolve a locator to an element. Polls every 100ms up to the
    /// configured default timeout, then fails with `NotFoundError`.
    pub async fn resolve(&self, locator: &Locator) -> Result<Element> {
        let interval = Duration::from_millis(100);
        let start = std::time::Instant::now();

        loop {
            match self.try_resolve(locator).await {
                Ok(element) => return Ok(element),
                Err(_) if start.elapsed() < self.default_timeout => {
                    tokio::time::sleep(interval).await;
                }
                Err(_) => {
                    return Err(Error::NotFoundError(format!(
                        "no element matched {locator} within {:?}",
                        self.default_timeout
                    )));
                }
            }
        }
    }

    async fn try_resolve(&self, locator: &Locator) -> Result<Element> {
        let element = match locator.query() {
            Query::Css(selector) => self.inner.find_element(selector).await,
            Query::XPath(expression) => self.inner.find_xpath(expression).await,
        }
        .map_err(|e| Error::NotFoundError(e.to_string()))?;
        Ok(Element::new(element))
    }

    /// Get the outer HTML of the element the locator resolves to.
    pub async fn outer_html(&self, locator: &Locator) -> Result<String> {
        self.resolve(locator).await?.outer_html().await
    }

    /// Fill the text control the locator resolves to with the given value.
    pub async fn fill(&self, locator: &Locator, text: &str) -> Result<()> {
        self.resolve(locator).await?.fill(text).await
    }

    /// Check the checkbox or radio button the locator resolves to.
    pub async fn check(&self, locator: &Locator) -> Result<()> {
        self.resolve(locator).await?.check().await
    }

    /// Select the option at the given index in the `<select>` control the
    /// locator resolves to.
    pub async fn select_index(&self, locator: &Locator, index: usize) -> Result<()> {
        self.resolve(locator).await?.select_index(index).await
    }

    /// Read the current value of the control the locator resolves to.
    pub async fn input_value(&self, locator: &Locator) -> Result<String> {
        self.resolve(locator).await?.input_value().await
    }

    /// Read back the selected option of the `<select>` control the locator
    /// resolves to.
    pub async fn selected_option(&self, locator: &Locator) -> Result<SelectedOption> {
        self.resolve(locator).await?.selected_option().await
    }
}
