//! WASM page behaviors for the C-Suite Pathway Program web front-end
//!
//! The server renders plain HTML; this crate layers small conveniences on
//! top of it once the document is parsed: staggered card fade-in,
//! registration password checks, auto-dismissing alerts, smooth anchor
//! scrolling, busy submit buttons, a message character counter and live
//! preview, FAQ search, an event date guard, the mobile nav toggle, logout
//! confirmation, keyboard shortcuts, and a pulse on newly inserted success
//! alerts.
//!
//! ## Architecture
//! - Single entry point [`start`], run once per page load
//! - Every behavior is independent and skipped when its markup is absent
//! - Decision logic lives in pure functions, tested natively
//! - DOM wiring goes through [`dom`], which never panics
//!
//! ## Module Structure
//! - `behaviors`: one module per page behavior plus the attachment pass
//! - `config`: per-page timing and limit overrides
//! - `dom`: typed queries, listeners, and the `Prompter` dialog seam
//! - `error`: error types and handling
//! - `logging`: `tracing` output to the browser console
//! - `styles`: injected keyframes and transitions

#![forbid(unsafe_code)]

pub mod behaviors;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod styles;

#[cfg(test)]
mod tests;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub use behaviors::{AttachReport, Decision, PageBehaviors};
pub use config::BehaviorConfig;
pub use error::{BehaviorError, Result};

use dom::WindowPrompter;

/// Initializes logging and styles, then attaches behaviors at document-ready
///
/// If the document is still loading, attachment waits for
/// `DOMContentLoaded`; otherwise it runs immediately. Either way it runs
/// exactly once.
///
/// # Errors
///
/// Returns an error if there is no window or document, or if the
/// stylesheet or ready listener cannot be installed. Individual behavior
/// failures are logged, not returned.
pub fn start() -> Result<()> {
    let window = dom::window()?;
    let document = window
        .document()
        .ok_or(BehaviorError::DocumentUnavailable)?;

    let loaded = BehaviorConfig::from_document(&document);
    let config = loaded.clone().unwrap_or_default();

    if let Err(err) = logging::init(&config.log_level) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    if let Err(err) = loaded {
        tracing::warn!(error = %err, "using default behavior config");
    }

    styles::inject(&document)?;

    let behaviors = PageBehaviors::new(
        document.clone(),
        config,
        Rc::new(WindowPrompter::new(window)),
    );

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || {
            behaviors.attach();
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .map_err(|e| BehaviorError::dom("addEventListener(DOMContentLoaded)", &e))?;
        tracing::debug!("waiting for DOMContentLoaded");
    } else {
        behaviors.attach();
    }

    Ok(())
}

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        let config = BehaviorConfig::default();
        let schedule = config.dismiss_schedule();
        assert_eq!(schedule.total_ms(), 5300);
        assert!(Decision::Cancel.is_cancel());
        assert_eq!(AttachReport::default().total(), 0);
    }

    #[test]
    fn test_error_types() {
        let err = BehaviorError::WindowUnavailable;
        assert!(err.to_string().contains("window"));
    }
}
