//! Confirmation before logging out

use std::rc::Rc;

use web_sys::{Document, Element, MouseEvent};

use crate::behaviors::{Behavior, Decision};
use crate::dom::{self, Prompter};
use crate::error::Result;

/// The logout link
pub const LOGOUT_SELECTOR: &str = r#"a[href*="logout"]"#;

/// Confirmation question
pub const CONFIRM_MESSAGE: &str = "Are you sure you want to logout?";

/// Asks the user whether to log out
#[must_use]
pub fn confirm_logout(prompter: &dyn Prompter) -> Decision {
    if prompter.confirm(CONFIRM_MESSAGE) {
        Decision::Proceed
    } else {
        Decision::Cancel
    }
}

/// Cancels logout navigation unless the user confirms
pub struct LogoutConfirm {
    link: Element,
    prompter: Rc<dyn Prompter>,
}

impl LogoutConfirm {
    /// Creates the guard for an explicit link
    #[must_use]
    pub fn new(link: Element, prompter: Rc<dyn Prompter>) -> Self {
        Self { link, prompter }
    }

    /// Finds the first logout link
    ///
    /// # Errors
    ///
    /// Returns an error if the link selector is rejected.
    pub fn from_document(document: &Document, prompter: Rc<dyn Prompter>) -> Result<Option<Self>> {
        Ok(dom::query_one::<Element>(document, LOGOUT_SELECTOR)?
            .map(|link| Self::new(link, prompter)))
    }
}

impl Behavior for LogoutConfirm {
    const NAME: &'static str = "logout-confirm";

    fn attach(self) -> Result<()> {
        let prompter = self.prompter;
        dom::listen(&self.link, "click", move |event: MouseEvent| {
            if confirm_logout(prompter.as_ref()).is_cancel() {
                event.prevent_default();
            }
        })
    }
}
