//! Thin, panic-free wrappers over the web-sys DOM API
//!
//! Every call that can throw in JS returns a `Result` here. Queries return
//! `Ok(None)` / an empty `Vec` for missing elements so behaviors can treat
//! absence as "skip", and an error only when the browser rejects the call.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    NodeList, Window,
};

use crate::error::{BehaviorError, Result};

type JsResult<T> = std::result::Result<T, JsValue>;

/// Returns the global window
///
/// # Errors
///
/// Returns `BehaviorError::WindowUnavailable` outside a browser context.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(BehaviorError::WindowUnavailable)
}

/// Returns the window's document
///
/// # Errors
///
/// Returns an error if there is no window or it has no document.
pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or(BehaviorError::DocumentUnavailable)
}

/// Anything that supports `querySelector` / `querySelectorAll`
pub trait Queryable {
    /// Raw `querySelector`
    ///
    /// # Errors
    ///
    /// Returns the thrown JS value for a malformed selector.
    fn select_one(&self, selector: &str) -> JsResult<Option<Element>>;

    /// Raw `querySelectorAll`
    ///
    /// # Errors
    ///
    /// Returns the thrown JS value for a malformed selector.
    fn select_all(&self, selector: &str) -> JsResult<NodeList>;
}

impl Queryable for Document {
    fn select_one(&self, selector: &str) -> JsResult<Option<Element>> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> JsResult<NodeList> {
        self.query_selector_all(selector)
    }
}

impl Queryable for Element {
    fn select_one(&self, selector: &str) -> JsResult<Option<Element>> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> JsResult<NodeList> {
        self.query_selector_all(selector)
    }
}

/// Finds the first element matching `selector`, cast to `T`
///
/// # Errors
///
/// Returns `BehaviorError::InvalidSelector` if the browser rejects the
/// selector, or `BehaviorError::ElementType` if the match is not a `T`.
pub fn query_one<T: JsCast>(root: &impl Queryable, selector: &str) -> Result<Option<T>> {
    let found = root
        .select_one(selector)
        .map_err(|_| BehaviorError::InvalidSelector {
            selector: selector.to_string(),
        })?;

    found
        .map(|element| cast_element(element, selector))
        .transpose()
}

/// Finds every element matching `selector`, in document order
///
/// Non-element nodes are skipped.
///
/// # Errors
///
/// Returns `BehaviorError::InvalidSelector` if the browser rejects the
/// selector.
pub fn query_all(root: &impl Queryable, selector: &str) -> Result<Vec<Element>> {
    let list = root
        .select_all(selector)
        .map_err(|_| BehaviorError::InvalidSelector {
            selector: selector.to_string(),
        })?;

    Ok(elements_of(&list))
}

/// Collects the element nodes of a `NodeList`
#[must_use]
pub fn elements_of(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Looks up an element by id, cast to `T`
///
/// # Errors
///
/// Returns `BehaviorError::ElementType` if the element is not a `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<Option<T>> {
    document
        .get_element_by_id(id)
        .map(|element| cast_element(element, &format!("#{id}")))
        .transpose()
}

fn cast_element<T: JsCast>(element: Element, selector: &str) -> Result<T> {
    element
        .dyn_into::<T>()
        .map_err(|_| BehaviorError::ElementType {
            selector: selector.to_string(),
            expected: std::any::type_name::<T>()
                .rsplit("::")
                .next()
                .unwrap_or("element"),
        })
}

/// Casts a generic element to `HtmlElement`
///
/// # Errors
///
/// Returns `BehaviorError::ElementType` for non-HTML elements (e.g. SVG).
pub fn as_html(element: Element) -> Result<HtmlElement> {
    let tag = element.tag_name();
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| BehaviorError::ElementType {
            selector: tag,
            expected: "HtmlElement",
        })
}

/// Registers a page-lifetime event listener
///
/// The handler receives the event cast to `E`; events of another type are
/// ignored. The closure is intentionally leaked: listeners live as long as
/// the page.
///
/// # Errors
///
/// Returns `BehaviorError::Dom` if the listener cannot be attached.
pub fn listen<E, F>(target: &EventTarget, event_type: &str, mut handler: F) -> Result<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| {
        if let Ok(typed) = event.dyn_into::<E>() {
            handler(typed);
        }
    }) as Box<dyn FnMut(Event)>);

    target
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        .map_err(|e| BehaviorError::dom(format!("addEventListener({event_type})"), &e))?;

    closure.forget();
    Ok(())
}

/// Sets one inline style property
///
/// # Errors
///
/// Returns `BehaviorError::Dom` if the browser rejects the property.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element
        .style()
        .set_property(property, value)
        .map_err(|e| BehaviorError::dom(format!("style.{property}"), &e))
}

/// Adds a class to an element
///
/// # Errors
///
/// Returns `BehaviorError::Dom` for an invalid class token.
pub fn add_class(element: &Element, class: &str) -> Result<()> {
    element
        .class_list()
        .add_1(class)
        .map_err(|e| BehaviorError::dom(format!("classList.add({class})"), &e))
}

/// Removes a class from an element
///
/// # Errors
///
/// Returns `BehaviorError::Dom` for an invalid class token.
pub fn remove_class(element: &Element, class: &str) -> Result<()> {
    element
        .class_list()
        .remove_1(class)
        .map_err(|e| BehaviorError::dom(format!("classList.remove({class})"), &e))
}

/// Creates an element and casts it to `T`
///
/// # Errors
///
/// Returns an error if creation fails or the element is not a `T`.
pub fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T> {
    let element = document
        .create_element(tag)
        .map_err(|e| BehaviorError::dom(format!("createElement({tag})"), &e))?;
    cast_element(element, tag)
}

/// A single-line or multi-line text control
#[derive(Debug, Clone)]
pub enum TextField {
    /// `<input>`
    Input(HtmlInputElement),
    /// `<textarea>`
    TextArea(HtmlTextAreaElement),
}

impl TextField {
    /// Wraps an element if it is an input or textarea
    #[must_use]
    pub fn from_element(element: Element) -> Option<Self> {
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(element) => element
                .dyn_into::<HtmlTextAreaElement>()
                .ok()
                .map(Self::TextArea),
        }
    }

    /// Looks up a text control by id
    ///
    /// # Errors
    ///
    /// Returns `BehaviorError::ElementType` if the element exists but is
    /// neither an input nor a textarea.
    pub fn by_id(document: &Document, id: &str) -> Result<Option<Self>> {
        document
            .get_element_by_id(id)
            .map(|element| {
                Self::from_element(element).ok_or_else(|| BehaviorError::ElementType {
                    selector: format!("#{id}"),
                    expected: "text field",
                })
            })
            .transpose()
    }

    /// Current value
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(area) => area.value(),
        }
    }

    /// Underlying element, for listeners and DOM placement
    #[must_use]
    pub fn element(&self) -> &HtmlElement {
        match self {
            Self::Input(input) => input,
            Self::TextArea(area) => area,
        }
    }
}

/// Blocking user dialogs
///
/// Behaviors report validation failures and ask for confirmation through
/// this seam so their decisions can be exercised without a browser.
pub trait Prompter {
    /// Shows a message and blocks until dismissed
    fn alert(&self, message: &str);

    /// Asks a yes/no question; `true` when the user confirms
    fn confirm(&self, message: &str) -> bool;
}

/// `Prompter` backed by `window.alert` / `window.confirm`
#[derive(Debug, Clone)]
pub struct WindowPrompter {
    window: Window,
}

impl WindowPrompter {
    /// Wraps the given window
    #[must_use]
    pub const fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Prompter for WindowPrompter {
    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::warn!(error = ?e, "window.alert failed");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or_else(|e| {
            tracing::warn!(error = ?e, "window.confirm failed; treating as declined");
            false
        })
    }
}
