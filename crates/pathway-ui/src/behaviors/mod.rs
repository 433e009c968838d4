//! Page behaviors and the one-shot attachment pass
//!
//! Each behavior lives in its own module and follows the same shape:
//!
//! - a constructor taking the exact elements it operates on
//! - `from_document`, which performs the markup lookup and returns
//!   `Ok(None)` when the page has nothing for it to do
//! - `Behavior::attach`, which registers its listeners or timers
//!
//! Decision logic is kept in pure functions next to each behavior so it can
//! be tested without a browser.

pub mod alerts;
pub mod anchors;
pub mod busy;
pub mod counter;
pub mod date_guard;
pub mod faq;
pub mod fade_in;
pub mod hover;
pub mod logout;
pub mod nav;
pub mod preview;
pub mod registration;
pub mod shortcuts;
pub mod success;

#[cfg(all(test, target_arch = "wasm32"))]
mod nav_test;
#[cfg(all(test, target_arch = "wasm32"))]
mod shortcuts_test;

use std::rc::Rc;

use web_sys::Document;

use crate::config::BehaviorConfig;
use crate::dom::Prompter;
use crate::error::{BehaviorError, Result};

/// Outcome of a guard on a cancellable event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Let the default action happen
    Proceed,
    /// Call `preventDefault`
    Cancel,
}

impl Decision {
    /// Whether the default action must be prevented
    #[must_use]
    pub const fn is_cancel(self) -> bool {
        matches!(self, Self::Cancel)
    }
}

/// A page behavior ready to be wired into the DOM
pub trait Behavior {
    /// Short name used in logs and the attach report
    const NAME: &'static str;

    /// Registers listeners and timers
    ///
    /// # Errors
    ///
    /// Returns an error if the browser rejects a listener or DOM insertion.
    fn attach(self) -> Result<()>;
}

/// What happened to each behavior during attachment
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AttachReport {
    /// Behaviors whose listeners are live
    pub attached: Vec<&'static str>,
    /// Behaviors with no matching markup on this page
    pub skipped: Vec<&'static str>,
    /// Behaviors that failed to attach
    pub failed: Vec<(&'static str, BehaviorError)>,
}

impl AttachReport {
    /// Records the outcome of one behavior
    pub fn record(&mut self, name: &'static str, outcome: Result<bool>) {
        match outcome {
            Ok(true) => self.attached.push(name),
            Ok(false) => {
                tracing::debug!(behavior = name, "no matching markup, skipped");
                self.skipped.push(name);
            }
            Err(err) => {
                tracing::warn!(behavior = name, error = %err, "failed to attach behavior");
                self.failed.push((name, err));
            }
        }
    }

    /// Total number of behaviors considered
    #[must_use]
    pub fn total(&self) -> usize {
        self.attached.len() + self.skipped.len() + self.failed.len()
    }
}

/// Looks up and attaches one behavior
///
/// `Ok(true)` when attached, `Ok(false)` when its markup is absent.
fn run<B: Behavior>(found: Result<Option<B>>) -> Result<bool> {
    match found? {
        Some(behavior) => behavior.attach().map(|()| true),
        None => Ok(false),
    }
}

/// The fixed set of page behaviors, attached once per page load
pub struct PageBehaviors {
    document: Document,
    config: BehaviorConfig,
    prompter: Rc<dyn Prompter>,
}

impl PageBehaviors {
    /// Creates the attachment pass for `document`
    #[must_use]
    pub fn new(document: Document, config: BehaviorConfig, prompter: Rc<dyn Prompter>) -> Self {
        Self {
            document,
            config,
            prompter,
        }
    }

    /// Attaches every behavior whose markup is present
    ///
    /// Failures are isolated: one behavior failing never prevents the
    /// others from attaching.
    ///
    /// Submit listeners are order sensitive. The registration guard is
    /// attached before the busy-state handler so the latter can observe a
    /// cancelled submission.
    pub fn attach(&self) -> AttachReport {
        let doc = &self.document;
        let config = &self.config;
        let mut report = AttachReport::default();

        report.record(
            fade_in::StaggeredFadeIn::NAME,
            run(fade_in::StaggeredFadeIn::from_document(doc, config)),
        );
        report.record(
            registration::RegistrationGuard::NAME,
            run(registration::RegistrationGuard::from_document(
                doc,
                config,
                Rc::clone(&self.prompter),
            )),
        );
        report.record(
            alerts::AlertDismissal::NAME,
            run(alerts::AlertDismissal::from_document(doc, config)),
        );
        report.record(
            anchors::SmoothScroll::NAME,
            run(anchors::SmoothScroll::from_document(doc)),
        );
        report.record(
            busy::SubmitBusyState::NAME,
            run(busy::SubmitBusyState::from_document(doc)),
        );
        report.record(
            hover::FeatureCardHover::NAME,
            run(hover::FeatureCardHover::from_document(doc)),
        );
        report.record(
            counter::CharCounter::NAME,
            run(counter::CharCounter::from_document(doc, config)),
        );
        report.record(
            faq::FaqFilter::NAME,
            run(faq::FaqFilter::from_document(doc)),
        );
        report.record(
            date_guard::FutureDateGuard::NAME,
            run(date_guard::FutureDateGuard::from_document(
                doc,
                Rc::clone(&self.prompter),
            )),
        );
        report.record(
            nav::NavToggle::NAME,
            run(nav::NavToggle::from_document(doc)),
        );
        report.record(
            logout::LogoutConfirm::NAME,
            run(logout::LogoutConfirm::from_document(
                doc,
                Rc::clone(&self.prompter),
            )),
        );
        report.record(
            preview::LivePreview::NAME,
            run(preview::LivePreview::from_document(doc)),
        );
        report.record(
            shortcuts::KeyboardShortcuts::NAME,
            run(Ok(Some(shortcuts::KeyboardShortcuts::new(doc.clone())))),
        );
        report.record(
            success::SuccessObserver::NAME,
            run(success::SuccessObserver::from_document(doc, config)),
        );

        tracing::info!(
            attached = report.attached.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "page behaviors attached"
        );

        report
    }
}
