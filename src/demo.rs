//! The sequential demo walkthrough: launch, open a context and a page,
//! look up elements five different ways, drive the form controls, and
//! always close the browser.

use tracing::{error, info};

use crate::browser::{Browser, BrowsingContext};
use crate::config::{BrowserConfig, ContextConfig};
use crate::error::Result;
use crate::fixture;
use crate::locator::Locator;

/// Run the demo. Launch and context-creation failures propagate to the
/// caller; anything that fails between navigation and the last form
/// readback is logged and swallowed, but the browser is closed on every
/// path before this returns.
pub async fn run(config: BrowserConfig) -> Result<()> {
    let mut browser = Browser::launch(config).await?;
    let context = browser
        .new_context(ContextConfig {
            accept_downloads: false,
        })
        .await?;

    if let Err(err) = walkthrough(&browser, &context).await {
        // Message first, then the debug representation with the full chain.
        error!("demo step failed: {err}");
        error!("{err:?}");
    }

    browser.close().await
}

/// The guarded region. The first failed step aborts the rest of the run;
/// there is no per-step isolation.
async fn walkthrough(browser: &Browser, context: &BrowsingContext) -> Result<()> {
    let page = browser.new_page(context).await?;
    page.goto(fixture::TARGET_URL).await?;

    // Look up the same kind of element five different ways, logging the
    // resolved outer markup each time.

    let by_id = Locator::id(fixture::ID_EXAMPLE);
    info!(selector = %by_id, html = %page.outer_html(&by_id).await?, "found element by id");

    let (name, value) = fixture::NAME_ATTRIBUTE;
    let by_attribute = Locator::attribute(name, value);
    info!(selector = %by_attribute, html = %page.outer_html(&by_attribute).await?, "found element by attribute");

    let by_class = Locator::class_name(fixture::CLASS_EXAMPLE);
    info!(selector = %by_class, html = %page.outer_html(&by_class).await?, "found element by class");

    let by_link_text = Locator::link_text(fixture::LINK_TEXT);
    info!(selector = %by_link_text, html = %page.outer_html(&by_link_text).await?, "found link by text");

    let by_xpath = Locator::xpath(fixture::SUBMIT_XPATH);
    info!(selector = %by_xpath, html = %page.outer_html(&by_xpath).await?, "found element by xpath");

    // Interact with the form controls, logging each control's markup
    // before touching it.

    let text = Locator::id(fixture::TEXT_INPUT_ID);
    info!(html = %page.outer_html(&text).await?, "text input");
    page.fill(&text, fixture::TEXT_INPUT_VALUE).await?;

    let checkbox = Locator::id(fixture::CHECKBOX_ID);
    info!(html = %page.outer_html(&checkbox).await?, "checkbox input");
    page.check(&checkbox).await?;

    let radio = Locator::id(fixture::RADIO_ID);
    info!(html = %page.outer_html(&radio).await?, "radio input");
    page.check(&radio).await?;

    let select = Locator::id(fixture::SELECT_ID);
    info!(html = %page.outer_html(&select).await?, "select control");
    page.select_index(&select, 0).await?;
    info!(value = %page.input_value(&select).await?, "selected option value");
    let option = page.selected_option(&select).await?;
    info!(html = %option.html, "selected option");

    Ok(())
}
