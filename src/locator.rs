use std::fmt;

/// A lazily-resolved element query. A `Locator` is only the query string;
/// it holds no element reference and is re-evaluated against the live page
/// on every interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    query: Query,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Query {
    Css(String),
    XPath(String),
}

impl Locator {
    /// Match an element by its `id` attribute.
    pub fn id(id: &str) -> Self {
        Self {
            query: Query::Css(format!("#{id}")),
        }
    }

    /// Match an element carrying the given attribute value.
    pub fn attribute(name: &str, value: &str) -> Self {
        Self {
            query: Query::Css(format!("[{name}=\"{value}\"]")),
        }
    }

    /// Match an element by a single class name.
    pub fn class_name(class: &str) -> Self {
        Self {
            query: Query::Css(format!(".{class}")),
        }
    }

    /// Match an anchor whose visible text contains the given string.
    /// Substring match, like Playwright's `hasText` filter.
    pub fn link_text(text: &str) -> Self {
        Self {
            query: Query::XPath(format!(
                "//a[contains(normalize-space(.), \"{text}\")]"
            )),
        }
    }

    /// Match elements with a raw XPath expression.
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self {
            query: Query::XPath(expression.into()),
        }
    }

    /// Match elements with a raw CSS selector.
    pub fn css(selector: impl Into<String>) -> Self {
        Self {
            query: Query::Css(selector.into()),
        }
    }

    pub(crate) fn query(&self) -> &Query {
        &self.query
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.query {
            Query::Css(selector) => write!(f, "css={selector}"),
            Query::XPath(expression) => write!(f, "xpath={expression}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_builds_hash_selector() {
        let locator = Locator::id("id-example-1");
        assert_eq!(locator.query(), &Query::Css("#id-example-1".into()));
    }

    #[test]
    fn attribute_builds_bracket_selector() {
        let locator = Locator::attribute("name", "name-example-1");
        assert_eq!(
            locator.query(),
            &Query::Css("[name=\"name-example-1\"]".into())
        );
    }

    #[test]
    fn class_name_builds_dot_selector() {
        let locator = Locator::class_name("class-example-1");
        assert_eq!(locator.query(), &Query::Css(".class-example-1".into()));
    }

    #[test]
    fn link_text_builds_anchor_xpath() {
        let locator = Locator::link_text("Link Example 1");
        assert_eq!(
            locator.query(),
            &Query::XPath("//a[contains(normalize-space(.), \"Link Example 1\")]".into())
        );
    }

    #[test]
    fn xpath_passes_through() {
        let locator = Locator::xpath(r#"//input[@type="submit"]"#);
        assert_eq!(
            locator.query(),
            &Query::XPath(r#"//input[@type="submit"]"#.into())
        );
    }

    #[test]
    fn display_includes_strategy_prefix() {
        assert_eq!(Locator::id("x").to_string(), "css=#x");
        assert_eq!(Locator::xpath("//p").to_string(), "xpath=//p");
    }
}
