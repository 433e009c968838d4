//! Injected stylesheet for behavior-driven classes

use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::error::{BehaviorError, Result};

/// Id of the injected `<style>` element
pub const STYLE_ELEMENT_ID: &str = "page-behaviors-style";

/// Keyframes and transitions used by the alert and success behaviors
pub const BEHAVIOR_CSS: &str = "
    .success-animation {
        animation: successPulse 1s ease-in-out;
    }

    @keyframes successPulse {
        0% { transform: scale(1); }
        50% { transform: scale(1.05); }
        100% { transform: scale(1); }
    }

    .fade {
        opacity: 0;
        transition: opacity 0.3s ease;
    }
";

/// Appends the behavior stylesheet to `<head>` once
///
/// Returns `true` when a new element was inserted, `false` if it was
/// already present.
///
/// # Errors
///
/// Returns an error if the document has no head or the element cannot be
/// created or appended.
pub fn inject(document: &Document) -> Result<bool> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(false);
    }

    let head = document.head().ok_or(BehaviorError::HeadUnavailable)?;
    let style: HtmlElement = dom::create(document, "style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(BEHAVIOR_CSS));

    head.append_child(&style)
        .map_err(|e| BehaviorError::dom("head.appendChild(style)", &e))?;

    Ok(true)
}
