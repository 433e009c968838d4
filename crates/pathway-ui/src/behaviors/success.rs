//! Pulse animation for success alerts inserted after load

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, HtmlElement, MutationObserver, MutationObserverInit, MutationRecord,
};

use crate::behaviors::Behavior;
use crate::config::BehaviorConfig;
use crate::dom;
use crate::error::{BehaviorError, Result};

/// Marker class of success alerts
pub const SUCCESS_CLASS: &str = "alert-success";

/// Class carrying the pulse animation (defined by the injected stylesheet)
pub const ANIMATION_CLASS: &str = "success-animation";

/// Whether a `class` attribute value marks a success alert
///
/// ```
/// use pathway_ui::behaviors::success::is_success_alert;
///
/// assert!(is_success_alert("alert alert-success"));
/// assert!(!is_success_alert("alert alert-success-ish"));
/// ```
#[must_use]
pub fn is_success_alert(class_name: &str) -> bool {
    class_name.split_whitespace().any(|class| class == SUCCESS_CLASS)
}

/// Adds the pulse class and removes it after `duration_ms`
///
/// # Errors
///
/// Returns an error if the class cannot be added.
pub fn pulse(element: Element, duration_ms: u32) -> Result<()> {
    dom::add_class(&element, ANIMATION_CLASS)?;
    Timeout::new(duration_ms, move || {
        if let Err(err) = dom::remove_class(&element, ANIMATION_CLASS) {
            tracing::debug!(error = %err, "could not end success pulse");
        }
    })
    .forget();
    Ok(())
}

/// Handles one batch of mutation records
fn on_mutations(records: &Array, duration_ms: u32) {
    for record in records.iter() {
        let Ok(record) = record.dyn_into::<MutationRecord>() else {
            continue;
        };
        if record.type_() != "childList" {
            continue;
        }
        for node in dom::elements_of(&record.added_nodes()) {
            if is_success_alert(&node.get_attribute("class").unwrap_or_default()) {
                if let Err(err) = pulse(node, duration_ms) {
                    tracing::debug!(error = %err, "could not start success pulse");
                }
            }
        }
    }
}

/// Watches the body for inserted success alerts
///
/// The observer lives for the rest of the page and is never disconnected.
pub struct SuccessObserver {
    body: HtmlElement,
    duration_ms: u32,
}

impl SuccessObserver {
    /// Creates the observer for an explicit root
    #[must_use]
    pub const fn new(body: HtmlElement, duration_ms: u32) -> Self {
        Self { body, duration_ms }
    }

    /// Observes the document body
    ///
    /// # Errors
    ///
    /// This lookup does not fail; a document without a body yields `Ok(None)`.
    pub fn from_document(document: &Document, config: &BehaviorConfig) -> Result<Option<Self>> {
        Ok(document
            .body()
            .map(|body| Self::new(body, config.success_pulse_ms)))
    }
}

impl Behavior for SuccessObserver {
    const NAME: &'static str = "success-observer";

    fn attach(self) -> Result<()> {
        let duration_ms = self.duration_ms;
        let callback = Closure::wrap(Box::new(move |records: Array, _observer: MutationObserver| {
            on_mutations(&records, duration_ms);
        }) as Box<dyn FnMut(Array, MutationObserver)>);

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| BehaviorError::dom("new MutationObserver", &e))?;

        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        observer
            .observe_with_options(&self.body, &options)
            .map_err(|e| BehaviorError::dom("MutationObserver.observe", &e))?;

        callback.forget();
        Ok(())
    }
}
