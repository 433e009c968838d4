//! Search box for the FAQ accordion

use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::behaviors::Behavior;
use crate::dom;
use crate::error::{BehaviorError, Result};

/// Accordion container id
pub const ACCORDION_ID: &str = "faqAccordion";

/// One question/answer unit
pub const ITEM_SELECTOR: &str = ".accordion-item";

/// Question text inside an item
pub const QUESTION_SELECTOR: &str = ".accordion-button";

/// Answer text inside an item
pub const ANSWER_SELECTOR: &str = ".accordion-body";

/// Classes of the inserted search box
pub const SEARCH_CLASS: &str = "form-control mb-3";

/// Placeholder of the inserted search box
pub const SEARCH_PLACEHOLDER: &str = "Search FAQs...";

/// Whether an item stays visible for `term`
///
/// Case-insensitive substring match against either the question or the
/// answer. An empty term matches everything.
///
/// ```
/// use pathway_ui::behaviors::faq::faq_matches;
///
/// assert!(faq_matches("MENTOR", "Who are the mentors?", ""));
/// assert!(!faq_matches("fees", "Who are the mentors?", "Industry leaders."));
/// ```
#[must_use]
pub fn faq_matches(term: &str, question: &str, answer: &str) -> bool {
    let term = term.to_lowercase();
    question.to_lowercase().contains(&term) || answer.to_lowercase().contains(&term)
}

fn text_of(item: &Element, selector: &str) -> Result<String> {
    Ok(dom::query_one::<Element>(item, selector)?
        .and_then(|part| part.text_content())
        .unwrap_or_default())
}

/// Shows matching items and hides the rest
///
/// Returns how many items remain visible.
///
/// # Errors
///
/// Returns an error if an item cannot be queried or styled.
pub fn apply_filter(container: &Element, term: &str) -> Result<usize> {
    let mut visible = 0;
    for item in dom::query_all(container, ITEM_SELECTOR)? {
        let question = text_of(&item, QUESTION_SELECTOR)?;
        let answer = text_of(&item, ANSWER_SELECTOR)?;
        let matched = faq_matches(term, &question, &answer);
        let display = if matched { "block" } else { "none" };
        dom::set_style(&dom::as_html(item)?, "display", display)?;
        if matched {
            visible += 1;
        }
    }
    Ok(visible)
}

/// Inserts a search box above the accordion and filters on each keystroke
pub struct FaqFilter {
    document: Document,
    container: Element,
}

impl FaqFilter {
    /// Creates the filter for an explicit accordion container
    #[must_use]
    pub const fn new(document: Document, container: Element) -> Self {
        Self {
            document,
            container,
        }
    }

    /// Finds the FAQ accordion
    ///
    /// # Errors
    ///
    /// Returns an error if the container lookup fails.
    pub fn from_document(document: &Document) -> Result<Option<Self>> {
        Ok(dom::by_id::<Element>(document, ACCORDION_ID)?
            .map(|container| Self::new(document.clone(), container)))
    }
}

impl Behavior for FaqFilter {
    const NAME: &'static str = "faq-filter";

    fn attach(self) -> Result<()> {
        let parent = self
            .container
            .parent_node()
            .ok_or_else(|| BehaviorError::Dom {
                operation: "parentNode".to_string(),
                message: format!("#{ACCORDION_ID} is detached"),
            })?;

        let search: HtmlInputElement = dom::create(&self.document, "input")?;
        search.set_type("text");
        search.set_class_name(SEARCH_CLASS);
        search.set_placeholder(SEARCH_PLACEHOLDER);
        parent
            .insert_before(&search, Some(&self.container))
            .map_err(|e| BehaviorError::dom("insertBefore(faq-search)", &e))?;

        let container = self.container;
        let input = search.clone();
        dom::listen(&search, "input", move |_: Event| {
            match apply_filter(&container, &input.value()) {
                Ok(visible) => tracing::debug!(visible, "faq filter applied"),
                Err(err) => tracing::warn!(error = %err, "faq filter failed"),
            }
        })
    }
}
