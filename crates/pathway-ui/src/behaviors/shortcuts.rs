//! Global keyboard shortcuts
//!
//! - Ctrl/Cmd + Enter submits the form that currently holds focus
//! - Escape dismisses every visible alert

use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::behaviors::busy::SUBMIT_BUTTON_SELECTOR;
use crate::behaviors::{Behavior, alerts};
use crate::dom;
use crate::error::Result;

/// Form containing the focused element
pub const FOCUSED_FORM_SELECTOR: &str = "form:focus-within";

/// Action bound to a key combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Click the focused form's submit button
    SubmitFocusedForm,
    /// Remove all alerts
    DismissAlerts,
}

impl Shortcut {
    /// Maps a key press to its shortcut, if any
    ///
    /// `ctrl` and `meta` are the modifier states; either one arms the
    /// submit shortcut so it works on every platform.
    ///
    /// ```
    /// use pathway_ui::behaviors::shortcuts::Shortcut;
    ///
    /// assert_eq!(Shortcut::classify("Enter", true, false), Some(Shortcut::SubmitFocusedForm));
    /// assert_eq!(Shortcut::classify("Enter", false, false), None);
    /// ```
    #[must_use]
    pub fn classify(key: &str, ctrl: bool, meta: bool) -> Option<Self> {
        match key {
            "Enter" if ctrl || meta => Some(Self::SubmitFocusedForm),
            "Escape" => Some(Self::DismissAlerts),
            _ => None,
        }
    }
}

/// Clicks the submit button of the focused form
///
/// Returns `true` if a button was clicked.
///
/// # Errors
///
/// Returns an error if a selector is rejected.
pub fn submit_focused_form(document: &Document) -> Result<bool> {
    let Some(form) = dom::query_one::<Element>(document, FOCUSED_FORM_SELECTOR)? else {
        return Ok(false);
    };
    let Some(button) = dom::query_one::<HtmlElement>(&form, SUBMIT_BUTTON_SELECTOR)? else {
        return Ok(false);
    };
    button.click();
    Ok(true)
}

/// Document-wide keydown handler
pub struct KeyboardShortcuts {
    document: Document,
}

impl KeyboardShortcuts {
    /// Creates the handler for `document`
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }
}

/// Runs a shortcut against the document
///
/// # Errors
///
/// Returns an error if the underlying DOM query fails.
pub fn run_shortcut(document: &Document, shortcut: Shortcut) -> Result<()> {
    match shortcut {
        Shortcut::SubmitFocusedForm => {
            let clicked = submit_focused_form(document)?;
            tracing::debug!(clicked, "submit shortcut");
        }
        Shortcut::DismissAlerts => {
            let removed = alerts::dismiss_all(document)?;
            tracing::debug!(removed, "dismissed alerts");
        }
    }
    Ok(())
}

impl Behavior for KeyboardShortcuts {
    const NAME: &'static str = "keyboard-shortcuts";

    fn attach(self) -> Result<()> {
        let document = self.document.clone();
        dom::listen(&self.document, "keydown", move |event: KeyboardEvent| {
            let Some(shortcut) =
                Shortcut::classify(&event.key(), event.ctrl_key(), event.meta_key())
            else {
                return;
            };
            if let Err(err) = run_shortcut(&document, shortcut) {
                tracing::warn!(?shortcut, error = %err, "shortcut failed");
            }
        })
    }
}
