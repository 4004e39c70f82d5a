pub mod browser;
pub mod config;
pub mod demo;
pub mod element;
pub mod error;
pub mod fixture;
pub mod locator;
pub mod page;

pub use browser::{Browser, BrowsingContext};
pub use config::{BrowserBuilder, BrowserConfig, ContextConfig};
pub use element::{Element, SelectedOption};
pub use error::{Error, Result};
pub use locator::Locator;
pub use page::Page;
