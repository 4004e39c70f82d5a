//! The page the demo walkthrough runs against, and the selectors and
//! literal values it uses. The target exposes a fixed structure, so these
//! are constants rather than runtime configuration.

/// The demo target. Serves the fixture markup referenced by the constants
/// below.
pub const TARGET_URL: &str = "https://testingexamples.github.io";

/// Id lookup target:
///
/// ```html
/// <p id="id-example-1">Lorem Ipsum</p>
/// ```
pub const ID_EXAMPLE: &str = "id-example-1";

/// Attribute lookup target, as an (attribute, value) pair:
///
/// ```html
/// <p name="name-example-1">Lorem Ipsum</p>
/// ```
pub const NAME_ATTRIBUTE: (&str, &str) = ("name", "name-example-1");

/// Class lookup target:
///
/// ```html
/// <p class="class-example-1">Lorem Ipsum</p>
/// ```
pub const CLASS_EXAMPLE: &str = "class-example-1";

/// Link text lookup target:
///
/// ```html
/// <a href="https://example.com">Link Example 1</a>
/// ```
pub const LINK_TEXT: &str = "Link Example 1";

/// XPath lookup target:
///
/// ```html
/// <input type="submit">
/// ```
pub const SUBMIT_XPATH: &str = r#"//input[@type="submit"]"#;

/// Text input:
///
/// ```html
/// <input type="text" id="text-example-1-id">
/// ```
pub const TEXT_INPUT_ID: &str = "text-example-1-id";

/// The literal value typed into the text input.
pub const TEXT_INPUT_VALUE: &str = "hello";

/// Checkbox input:
///
/// ```html
/// <input type="checkbox" id="checkbox-example-1-id">
/// ```
pub const CHECKBOX_ID: &str = "checkbox-example-1-id";

/// Radio input:
///
/// ```html
/// <input type="radio" id="radio-example-1-option-1-id">
/// ```
pub const RADIO_ID: &str = "radio-example-1-option-1-id";

/// Select control:
///
/// ```html
/// <select id="select-example-1-id">
///   <option>alfa</option>
///   <option>bravo</option>
///   <option>charlie</option>
/// </select>
/// ```
pub const SELECT_ID: &str = "select-example-1-id";
