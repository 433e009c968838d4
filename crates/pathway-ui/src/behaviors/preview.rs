//! Live preview of a message being composed
//!
//! Field text is only ever assigned as text content, so typing markup into
//! the form shows the markup instead of executing it.

use std::rc::Rc;

use web_sys::{Document, Event, HtmlElement};

use crate::behaviors::Behavior;
use crate::dom::{self, TextField};
use crate::error::{BehaviorError, Result};

/// Message title field id
pub const TITLE_ID: &str = "title";

/// Message body field id
pub const CONTENT_ID: &str = "content";

/// Classes of the inserted preview block
pub const PREVIEW_CLASS: &str = "mt-3 p-3 border rounded bg-light";

/// Shown in place of an empty title
pub const TITLE_PLACEHOLDER: &str = "Untitled";

/// Shown in place of an empty body
pub const BODY_PLACEHOLDER: &str = "No content yet...";

/// Heading above the previewed message
pub const PREVIEW_HEADING: &str = "Preview:";

/// Classes of the previewed body paragraph
pub const BODY_CLASS: &str = "mb-0 mt-2";

/// What the preview block shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewContent {
    /// Title line, placeholder substituted
    pub title: String,
    /// Body paragraph, placeholder substituted
    pub body: String,
}

impl PreviewContent {
    /// Builds the preview for the current field values
    ///
    /// Returns `None` when both fields are empty and the preview should be
    /// hidden.
    #[must_use]
    pub fn from_fields(title: &str, body: &str) -> Option<Self> {
        if title.is_empty() && body.is_empty() {
            return None;
        }

        let or_placeholder = |value: &str, placeholder: &str| {
            if value.is_empty() {
                placeholder.to_string()
            } else {
                value.to_string()
            }
        };

        Some(Self {
            title: or_placeholder(title, TITLE_PLACEHOLDER),
            body: or_placeholder(body, BODY_PLACEHOLDER),
        })
    }
}

/// Creates a `tag` element holding `text` as plain text
fn text_element(document: &Document, tag: &str, text: &str) -> Result<HtmlElement> {
    let element: HtmlElement = dom::create(document, tag)?;
    element.set_text_content(Some(text));
    Ok(element)
}

/// Renders the preview block for the current field values
///
/// The block's previous children are replaced by a heading, the title in
/// `<strong>` and the body in a paragraph.
///
/// # Errors
///
/// Returns an error if the block is detached from a document or a child
/// element cannot be created or appended.
pub fn render(block: &HtmlElement, title: &str, body: &str) -> Result<()> {
    let Some(content) = PreviewContent::from_fields(title, body) else {
        return dom::set_style(block, "display", "none");
    };

    let document = block
        .owner_document()
        .ok_or(BehaviorError::DocumentUnavailable)?;
    let heading = text_element(&document, "h6", PREVIEW_HEADING)?;
    let strong = text_element(&document, "strong", &content.title)?;
    let paragraph = text_element(&document, "p", &content.body)?;
    paragraph.set_class_name(BODY_CLASS);

    block.set_text_content(None);
    for child in [&heading, &strong, &paragraph] {
        block
            .append_child(child)
            .map_err(|e| BehaviorError::dom("appendChild(preview)", &e))?;
    }
    dom::set_style(block, "display", "block")
}

/// Preview block under the title field, updated on every keystroke
pub struct LivePreview {
    document: Document,
    title: TextField,
    content: TextField,
}

impl LivePreview {
    /// Creates the preview for explicit fields
    #[must_use]
    pub const fn new(document: Document, title: TextField, content: TextField) -> Self {
        Self {
            document,
            title,
            content,
        }
    }

    /// Finds the title and body fields; both must be present
    ///
    /// # Errors
    ///
    /// Returns an error if either element is not a text control.
    pub fn from_document(document: &Document) -> Result<Option<Self>> {
        let title = TextField::by_id(document, TITLE_ID)?;
        let content = TextField::by_id(document, CONTENT_ID)?;
        Ok(title
            .zip(content)
            .map(|(title, content)| Self::new(document.clone(), title, content)))
    }
}

impl Behavior for LivePreview {
    const NAME: &'static str = "live-preview";

    fn attach(self) -> Result<()> {
        let parent = self
            .title
            .element()
            .parent_node()
            .ok_or_else(|| BehaviorError::Dom {
                operation: "parentNode".to_string(),
                message: format!("#{TITLE_ID} is detached"),
            })?;

        let block: HtmlElement = dom::create(&self.document, "div")?;
        block.set_class_name(PREVIEW_CLASS);
        dom::set_style(&block, "display", "none")?;
        parent
            .append_child(&block)
            .map_err(|e| BehaviorError::dom("appendChild(preview)", &e))?;

        let title = Rc::new(self.title);
        let content = Rc::new(self.content);
        let update = Rc::new({
            let title = Rc::clone(&title);
            let content = Rc::clone(&content);
            move || {
                if let Err(err) = render(&block, &title.value(), &content.value()) {
                    tracing::debug!(error = %err, "could not render message preview");
                }
            }
        });

        for field in [&title, &content] {
            let update = Rc::clone(&update);
            dom::listen(field.element(), "input", move |_: Event| update())?;
        }
        Ok(())
    }
}
