//! Mobile navigation toggle

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, Node};

use crate::behaviors::Behavior;
use crate::dom;
use crate::error::Result;

/// Hamburger button
pub const TOGGLER_SELECTOR: &str = ".navbar-toggler";

/// Collapsible navigation panel
pub const PANEL_SELECTOR: &str = ".navbar-collapse";

/// Class that expands the panel
pub const SHOW_CLASS: &str = "show";

/// Whether a click should collapse the panel
#[must_use]
pub const fn is_outside_click(in_toggler: bool, in_panel: bool) -> bool {
    !in_toggler && !in_panel
}

/// Expands the panel from its toggler; collapses it on outside clicks
pub struct NavToggle {
    document: Document,
    toggler: Element,
    panel: Element,
}

impl NavToggle {
    /// Creates the toggle for explicit elements
    #[must_use]
    pub const fn new(document: Document, toggler: Element, panel: Element) -> Self {
        Self {
            document,
            toggler,
            panel,
        }
    }

    /// Finds the toggler and panel; both must be present
    ///
    /// # Errors
    ///
    /// Returns an error if a selector is rejected.
    pub fn from_document(document: &Document) -> Result<Option<Self>> {
        let toggler = dom::query_one::<Element>(document, TOGGLER_SELECTOR)?;
        let panel = dom::query_one::<Element>(document, PANEL_SELECTOR)?;
        Ok(toggler
            .zip(panel)
            .map(|(toggler, panel)| Self::new(document.clone(), toggler, panel)))
    }
}

impl Behavior for NavToggle {
    const NAME: &'static str = "nav-toggle";

    fn attach(self) -> Result<()> {
        let panel = self.panel.clone();
        dom::listen(&self.toggler, "click", move |_: MouseEvent| {
            if let Err(e) = panel.class_list().toggle(SHOW_CLASS) {
                tracing::warn!(error = ?e, "could not toggle navigation panel");
            }
        })?;

        let Self {
            document,
            toggler,
            panel,
        } = self;
        dom::listen(&document, "click", move |event: MouseEvent| {
            let target: Option<Node> = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let in_toggler = toggler.contains(target.as_ref());
            let in_panel = panel.contains(target.as_ref());
            if is_outside_click(in_toggler, in_panel) {
                if let Err(err) = dom::remove_class(&panel, SHOW_CLASS) {
                    tracing::warn!(error = %err, "could not collapse navigation panel");
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_on_toggler_keeps_panel() {
        assert!(!is_outside_click(true, false));
    }

    #[test]
    fn test_click_inside_panel_keeps_panel() {
        assert!(!is_outside_click(false, true));
    }

    #[test]
    fn test_click_elsewhere_collapses() {
        assert!(is_outside_click(false, false));
    }
}
