use chromiumoxide::element::Element as CrElement;

use crate::error::{Error, Result};

/// Readback of the currently selected `<option>` in a `<select>` control.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct SelectedOption {
    pub index: usize,
    pub value: String,
    pub label: String,
    pub html: String,
}

/// A resolved element handle. Obtained by resolving a [`Locator`](crate::Locator)
/// against a page; stale once the page changes, so interactions that go through
/// the page re-resolve rather than holding on to one of these.
pub struct Element {
    inner: CrElement,
}

impl Element {
    pub(crate) fn new(inner: CrElement) -> Self {
        Self { inner }
    }

    /// Click this element (scrolls into view first).
    pub async fn click(&self) -> Result<()> {
        self.inner
            .click()
            .await
            .map_err(|e| Error::InteractionError(e.to_string()))?;
        Ok(())
    }

    /// Get the outer HTML of this element.
    pub async fn outer_html(&self) -> Result<String> {
        self.inner
            .outer_html()
            .await
            .map_err(Error::CdpError)?
            .ok_or_else(|| Error::NotFoundError("outer HTML is empty".into()))
    }

    /// Get the inner text of this element.
    pub async fn inner_text(&self) -> Result<String> {
        self.inner
            .inner_text()
            .await
            .map_err(Error::CdpError)?
            .ok_or_else(|| Error::NotFoundError("inner text is empty".into()))
    }

    /// Set a text control's value: click to focus, clear, then type.
    pub async fn fill(&self, text: &str) -> Result<()> {
        self.click().await?;
        self.eval("function() { this.value = ''; }").await?;
        self.inner
            .type_str(text)
            .await
            .map_err(|e| Error::InteractionError(e.to_string()))?;
        Ok(())
    }

    /// Ensure a checkbox or radio button is checked. Clicks only when the
    /// control is currently unchecked, so a second call is a no-op.
    pub async fn check(&self) -> Result<()> {
        if self.is_checked().await? {
            return Ok(());
        }
        self.click().await
    }

    /// Whether this checkbox/radio control is currently checked.
    pub async fn is_checked(&self) -> Result<bool> {
        let value = self.eval("function() { return this.checked === true; }").await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    /// Read the control's current `value` property.
    pub async fn input_value(&self) -> Result<String> {
        let js = "function() { return this.value === undefined ? null : String(this.value); }";
        match self.eval(js).await? {
            serde_json::Value::String(value) => Ok(value),
            _ => Err(Error::InteractionError(
                "element has no value property".into(),
            )),
        }
    }

    /// Select the option at the given zero-based index in a `<select>`
    /// control, firing the same `input`/`change` events a user would.
    pub async fn select_index(&self, index: usize) -> Result<()> {
        let js = format!(
            "function() {{ \
                if (!this.options || this.options.length <= {index}) {{ \
                    throw new Error('option index {index} out of range'); \
                }} \
                this.selectedIndex = {index}; \
                this.dispatchEvent(new Event('input', {{ bubbles: true }})); \
                this.dispatchEvent(new Event('change', {{ bubbles: true }})); \
            }}"
        );
        self.eval(&js).await.map_err(|e| match e {
            Error::JsError(message) => Error::InteractionError(message),
            other => other,
        })?;
        Ok(())
    }

    /// Read back the currently selected option of a `<select>` control.
    pub async fn selected_option(&self) -> Result<SelectedOption> {
        let js = r#"function() {
            const option = this.options && this.options[this.selectedIndex];
            if (!option) { throw new Error('no option is selected'); }
            return JSON.stringify({
                index: this.selectedIndex,
                value: option.value,
                label: option.label,
                html: option.outerHTML
            });
        }"#;
        let raw = self.eval(js).await.map_err(|e| match e {
            Error::JsError(message) => Error::InteractionError(message),
            other => other,
        })?;
        let json = raw.as_str().ok_or_else(|| {
            Error::InteractionError("selected option readback returned no data".into())
        })?;
        serde_json::from_str(json).map_err(|e| Error::InteractionError(e.to_string()))
    }

    /// Call a JS function with `this` bound to the element and return its value.
    async fn eval(&self, function: &str) -> Result<serde_json::Value> {
        let returns = self
            .inner
            .call_js_fn(function, false)
            .await
            .map_err(Error::CdpError)?;
        if let Some(details) = returns.exception_details {
            return Err(Error::JsError(details.text));
        }
        Ok(returns.result.value.unwrap_or(serde_json::Value::Null))
    }
}
