//! Client-side password checks on the registration form
//!
//! This is a convenience for the user, not a security boundary: the server
//! validates the same rules.

use std::rc::Rc;

use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement};

use crate::behaviors::{Behavior, Decision};
use crate::config::BehaviorConfig;
use crate::dom::{self, Prompter};
use crate::error::Result;

/// The registration form
pub const FORM_SELECTOR: &str = r#"form[action*="register"]"#;

/// Primary password field id
pub const PASSWORD_ID: &str = "password";

/// Confirmation field id
pub const CONFIRM_PASSWORD_ID: &str = "confirm_password";

/// Why a registration submission was rejected
///
/// The display text is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// The two password fields differ
    #[error("Passwords do not match!")]
    PasswordMismatch,

    /// The password is shorter than the minimum
    #[error("Password must be at least {min} characters long!")]
    PasswordTooShort { min: usize },
}

/// Length as the browser reports it (UTF-16 code units)
fn browser_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Checks a password pair
///
/// Mismatch is reported before length.
///
/// # Errors
///
/// Returns the first rule the pair violates.
///
/// ```
/// use pathway_ui::behaviors::registration::{validate_registration, RegistrationError};
///
/// assert_eq!(validate_registration("secret12", "secret12", 8), Ok(()));
/// assert_eq!(
///     validate_registration("secret12", "secret13", 8),
///     Err(RegistrationError::PasswordMismatch)
/// );
/// ```
pub fn validate_registration(
    password: &str,
    confirmation: &str,
    min_length: usize,
) -> std::result::Result<(), RegistrationError> {
    if password != confirmation {
        return Err(RegistrationError::PasswordMismatch);
    }

    if browser_length(password) < min_length {
        return Err(RegistrationError::PasswordTooShort { min: min_length });
    }

    Ok(())
}

/// Validates a submission, telling the user why it was rejected
#[must_use]
pub fn review_submission(
    password: &str,
    confirmation: &str,
    min_length: usize,
    prompter: &dyn Prompter,
) -> Decision {
    match validate_registration(password, confirmation, min_length) {
        Ok(()) => Decision::Proceed,
        Err(err) => {
            tracing::debug!(reason = %err, "registration submission rejected");
            prompter.alert(&err.to_string());
            Decision::Cancel
        }
    }
}

/// Blocks registration submissions with invalid passwords
pub struct RegistrationGuard {
    form: HtmlFormElement,
    password: HtmlInputElement,
    confirmation: HtmlInputElement,
    min_length: usize,
    prompter: Rc<dyn Prompter>,
}

impl RegistrationGuard {
    /// Creates the guard for an explicit form and its two password fields
    #[must_use]
    pub fn new(
        form: HtmlFormElement,
        password: HtmlInputElement,
        confirmation: HtmlInputElement,
        min_length: usize,
        prompter: Rc<dyn Prompter>,
    ) -> Self {
        Self {
            form,
            password,
            confirmation,
            min_length,
            prompter,
        }
    }

    /// Finds the registration form and its password fields
    ///
    /// All three elements must be present.
    ///
    /// # Errors
    ///
    /// Returns an error if an element has an unexpected type.
    pub fn from_document(
        document: &Document,
        config: &BehaviorConfig,
        prompter: Rc<dyn Prompter>,
    ) -> Result<Option<Self>> {
        let Some(form) = dom::query_one::<HtmlFormElement>(document, FORM_SELECTOR)? else {
            return Ok(None);
        };
        let Some(password) = dom::by_id::<HtmlInputElement>(document, PASSWORD_ID)? else {
            return Ok(None);
        };
        let Some(confirmation) = dom::by_id::<HtmlInputElement>(document, CONFIRM_PASSWORD_ID)?
        else {
            return Ok(None);
        };

        Ok(Some(Self::new(
            form,
            password,
            confirmation,
            config.min_password_length,
            prompter,
        )))
    }
}

impl Behavior for RegistrationGuard {
    const NAME: &'static str = "registration-guard";

    fn attach(self) -> Result<()> {
        let Self {
            form,
            password,
            confirmation,
            min_length,
            prompter,
        } = self;

        dom::listen(&form, "submit", move |event: Event| {
            let decision = review_submission(
                &password.value(),
                &confirmation.value(),
                min_length,
                prompter.as_ref(),
            );
            if decision.is_cancel() {
                event.prevent_default();
            }
        })
    }
}
