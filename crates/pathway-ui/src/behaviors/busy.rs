//! Busy state for submit buttons

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlFormElement};

use crate::behaviors::Behavior;
use crate::dom;
use crate::error::Result;

/// A form's submit control
pub const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;

/// Class marking a busy button
pub const LOADING_CLASS: &str = "loading";

/// Label shown while the submission is pending
pub const BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Processing..."#;

/// Disables a button and shows the spinner label
///
/// # Errors
///
/// Returns an error if the class cannot be added.
pub fn mark_busy(button: &HtmlButtonElement) -> Result<()> {
    dom::add_class(button, LOADING_CLASS)?;
    button.set_disabled(true);
    button.set_inner_html(BUSY_LABEL);
    Ok(())
}

/// Puts each form's submit button into the busy state on submit
///
/// Submissions already cancelled by an earlier listener leave the button
/// untouched, so the user can correct the form and retry.
pub struct SubmitBusyState {
    forms: Vec<HtmlFormElement>,
}

impl SubmitBusyState {
    /// Creates the behavior for explicit forms
    #[must_use]
    pub const fn new(forms: Vec<HtmlFormElement>) -> Self {
        Self { forms }
    }

    /// Finds every form on the page
    ///
    /// # Errors
    ///
    /// Returns an error if the form selector is rejected.
    pub fn from_document(document: &Document) -> Result<Option<Self>> {
        let forms: Vec<HtmlFormElement> = dom::query_all(document, "form")?
            .into_iter()
            .filter_map(|element| element.dyn_into::<HtmlFormElement>().ok())
            .collect();

        Ok((!forms.is_empty()).then(|| Self::new(forms)))
    }
}

impl Behavior for SubmitBusyState {
    const NAME: &'static str = "submit-busy-state";

    fn attach(self) -> Result<()> {
        for form in self.forms {
            let root: Element = form.clone().into();
            dom::listen(&form, "submit", move |event: Event| {
                if event.default_prevented() {
                    tracing::debug!("submission cancelled, leaving button enabled");
                    return;
                }
                match dom::query_one::<HtmlButtonElement>(&root, SUBMIT_BUTTON_SELECTOR) {
                    Ok(Some(button)) => {
                        if let Err(err) = mark_busy(&button) {
                            tracing::warn!(error = %err, "could not mark submit button busy");
                        }
                    }
                    Ok(None) => {}
                    Err(err) => tracing::warn!(error = %err, "submit button lookup failed"),
                }
            })?;
        }
        Ok(())
    }
}
