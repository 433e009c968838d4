//! Remaining-characters counter for the message body

use std::rc::Rc;

use web_sys::{Document, Event, HtmlElement};

use crate::behaviors::Behavior;
use crate::config::BehaviorConfig;
use crate::dom::{self, TextField};
use crate::error::{BehaviorError, Result};

/// Message body field id
pub const CONTENT_ID: &str = "content";

/// Id of the inserted counter element
pub const COUNTER_ID: &str = "char-counter";

/// Classes of the inserted counter element
pub const COUNTER_CLASS: &str = "form-text text-end";

/// Counter color when few characters remain
pub const WARNING_COLOR: &str = "#dc3545";

/// Counter color otherwise
pub const NORMAL_COLOR: &str = "#6c757d";

/// One evaluation of the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterReading {
    /// Characters left before the limit; negative once exceeded
    pub remaining: i64,
    /// Whether the warning color applies
    pub warning: bool,
}

impl CounterReading {
    /// Measures `text` against `limit`, warning below `threshold`
    ///
    /// Length is counted in UTF-16 code units, matching the browser's
    /// `maxlength` accounting.
    ///
    /// ```
    /// use pathway_ui::behaviors::counter::CounterReading;
    ///
    /// let reading = CounterReading::measure(&"a".repeat(901), 1000, 100);
    /// assert_eq!(reading.remaining, 99);
    /// assert!(reading.warning);
    /// ```
    #[must_use]
    pub fn measure(text: &str, limit: usize, threshold: usize) -> Self {
        let length = to_i64(text.encode_utf16().count());
        let remaining = to_i64(limit).saturating_sub(length);
        Self {
            remaining,
            warning: remaining < to_i64(threshold),
        }
    }

    /// Counter text
    #[must_use]
    pub fn label(self) -> String {
        format!("{} characters remaining", self.remaining)
    }

    /// Counter color
    #[must_use]
    pub const fn color(self) -> &'static str {
        if self.warning {
            WARNING_COLOR
        } else {
            NORMAL_COLOR
        }
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Live counter below the message body
pub struct CharCounter {
    document: Document,
    field: TextField,
    limit: usize,
    threshold: usize,
}

impl CharCounter {
    /// Creates the counter for an explicit field
    #[must_use]
    pub const fn new(document: Document, field: TextField, limit: usize, threshold: usize) -> Self {
        Self {
            document,
            field,
            limit,
            threshold,
        }
    }

    /// Finds the message body field
    ///
    /// # Errors
    ///
    /// Returns an error if `#content` is not a text control.
    pub fn from_document(document: &Document, config: &BehaviorConfig) -> Result<Option<Self>> {
        Ok(TextField::by_id(document, CONTENT_ID)?.map(|field| {
            Self::new(
                document.clone(),
                field,
                config.message_limit,
                config.message_warning_threshold,
            )
        }))
    }
}

/// Writes a reading into the counter element
fn render(counter: &HtmlElement, reading: CounterReading) -> Result<()> {
    counter.set_text_content(Some(&reading.label()));
    dom::set_style(counter, "color", reading.color())
}

impl Behavior for CharCounter {
    const NAME: &'static str = "char-counter";

    fn attach(self) -> Result<()> {
        let parent = self
            .field
            .element()
            .parent_node()
            .ok_or_else(|| BehaviorError::Dom {
                operation: "parentNode".to_string(),
                message: format!("#{CONTENT_ID} is detached"),
            })?;

        let counter: HtmlElement = dom::create(&self.document, "div")?;
        counter.set_class_name(COUNTER_CLASS);
        counter.set_id(COUNTER_ID);
        parent
            .append_child(&counter)
            .map_err(|e| BehaviorError::dom("appendChild(char-counter)", &e))?;

        let field = Rc::new(self.field);
        let (limit, threshold) = (self.limit, self.threshold);
        let update = {
            let field = Rc::clone(&field);
            move || {
                let reading = CounterReading::measure(&field.value(), limit, threshold);
                if let Err(err) = render(&counter, reading) {
                    tracing::debug!(error = %err, "could not update character counter");
                }
            }
        };

        update();
        dom::listen(field.element(), "input", move |_: Event| update())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_has_full_allowance() {
        let reading = CounterReading::measure("", 1000, 100);
        assert_eq!(reading.remaining, 1000);
        assert!(!reading.warning);
        assert_eq!(reading.label(), "1000 characters remaining");
        assert_eq!(reading.color(), NORMAL_COLOR);
    }

    #[test]
    fn test_exactly_threshold_is_not_flagged() {
        let reading = CounterReading::measure(&"x".repeat(900), 1000, 100);
        assert_eq!(reading.remaining, 100);
        assert!(!reading.warning);
    }

    #[test]
    fn test_one_below_threshold_is_flagged() {
        let reading = CounterReading::measure(&"x".repeat(901), 1000, 100);
        assert_eq!(reading.remaining, 99);
        assert!(reading.warning);
        assert_eq!(reading.color(), WARNING_COLOR);
    }

    #[test]
    fn test_over_limit_goes_negative() {
        let reading = CounterReading::measure(&"x".repeat(1005), 1000, 100);
        assert_eq!(reading.remaining, -5);
        assert!(reading.warning);
        assert_eq!(reading.label(), "-5 characters remaining");
    }

    #[test]
    fn test_counts_utf16_units() {
        // One emoji occupies two UTF-16 code units
        let reading = CounterReading::measure("\u{1F600}", 1000, 100);
        assert_eq!(reading.remaining, 998);
    }
}
