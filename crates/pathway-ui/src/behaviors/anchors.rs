//! Smooth scrolling for same-page anchors

use web_sys::{
    Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::behaviors::Behavior;
use crate::dom;
use crate::error::Result;

/// Links to a fragment on this page
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Selector for the element a fragment link points at
///
/// A bare `#` points nowhere.
///
/// ```
/// use pathway_ui::behaviors::anchors::fragment_target;
///
/// assert_eq!(fragment_target("#faq"), Some("#faq"));
/// assert_eq!(fragment_target("#"), None);
/// assert_eq!(fragment_target("/about#faq"), None);
/// ```
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    let name = href.strip_prefix('#')?;
    (!name.is_empty()).then_some(href)
}

/// Scrolls smoothly to the element named by `href`
///
/// Returns `false` when nothing matches.
///
/// # Errors
///
/// Returns `BehaviorError::InvalidSelector` for fragments that are not
/// valid CSS selectors (e.g. `#1-intro`).
pub fn scroll_to_fragment(document: &Document, href: &str) -> Result<bool> {
    let Some(selector) = fragment_target(href) else {
        return Ok(false);
    };
    let Some(target) = dom::query_one::<Element>(document, selector)? else {
        return Ok(false);
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    Ok(true)
}

/// Replaces jump navigation with animated scrolling
pub struct SmoothScroll {
    document: Document,
    anchors: Vec<Element>,
}

impl SmoothScroll {
    /// Creates the behavior for explicit anchors
    #[must_use]
    pub const fn new(document: Document, anchors: Vec<Element>) -> Self {
        Self { document, anchors }
    }

    /// Finds the page's fragment links
    ///
    /// # Errors
    ///
    /// Returns an error if the anchor selector is rejected.
    pub fn from_document(document: &Document) -> Result<Option<Self>> {
        let anchors = dom::query_all(document, ANCHOR_SELECTOR)?;
        Ok((!anchors.is_empty()).then(|| Self::new(document.clone(), anchors)))
    }
}

impl Behavior for SmoothScroll {
    const NAME: &'static str = "smooth-scroll";

    fn attach(self) -> Result<()> {
        for anchor in self.anchors {
            let document = self.document.clone();
            let link = anchor.clone();
            dom::listen(&anchor, "click", move |event: MouseEvent| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                match scroll_to_fragment(&document, &href) {
                    Ok(true) => {}
                    Ok(false) => tracing::debug!(%href, "no scroll target"),
                    Err(err) => tracing::debug!(%href, error = %err, "unusable fragment"),
                }
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_target_keeps_hash() {
        assert_eq!(fragment_target("#contact"), Some("#contact"));
    }

    #[test]
    fn test_bare_hash_has_no_target() {
        assert_eq!(fragment_target("#"), None);
    }

    #[test]
    fn test_non_fragment_href_has_no_target() {
        assert_eq!(fragment_target("https://example.com/#top"), None);
        assert_eq!(fragment_target(""), None);
    }
}
