//! Staggered fade-in for decorative cards

use web_sys::{Document, HtmlElement};

use crate::behaviors::Behavior;
use crate::config::BehaviorConfig;
use crate::dom;
use crate::error::Result;

/// Elements that fade in on load
pub const CARD_SELECTOR: &str = ".card, .message-item, .event-card";

/// Class carrying the fade-in animation
pub const FADE_IN_CLASS: &str = "fade-in";

/// CSS `animation-delay` value for the card at `index`
///
/// Rounded to millisecond precision so the style attribute stays readable.
///
/// ```
/// use pathway_ui::behaviors::fade_in::animation_delay;
///
/// assert_eq!(animation_delay(0, 0.1), "0s");
/// assert_eq!(animation_delay(3, 0.1), "0.3s");
/// assert_eq!(animation_delay(12, 0.1), "1.2s");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn animation_delay(index: usize, step_secs: f64) -> String {
    let secs = index as f64 * step_secs;
    let fixed = format!("{secs:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}s")
}

/// Assigns increasing animation delays to cards
pub struct StaggeredFadeIn {
    cards: Vec<HtmlElement>,
    step_secs: f64,
}

impl StaggeredFadeIn {
    /// Creates the behavior for the given cards, in display order
    #[must_use]
    pub const fn new(cards: Vec<HtmlElement>, step_secs: f64) -> Self {
        Self { cards, step_secs }
    }

    /// Finds the page's cards
    ///
    /// # Errors
    ///
    /// Returns an error if the card selector is rejected.
    pub fn from_document(document: &Document, config: &BehaviorConfig) -> Result<Option<Self>> {
        let cards: Vec<HtmlElement> = dom::query_all(document, CARD_SELECTOR)?
            .into_iter()
            .filter_map(|element| dom::as_html(element).ok())
            .collect();

        Ok((!cards.is_empty()).then(|| Self::new(cards, config.fade_step_secs)))
    }
}

impl Behavior for StaggeredFadeIn {
    const NAME: &'static str = "fade-in";

    fn attach(self) -> Result<()> {
        for (index, card) in self.cards.iter().enumerate() {
            dom::set_style(card, "animation-delay", &animation_delay(index, self.step_secs))?;
            dom::add_class(card, FADE_IN_CLASS)?;
        }
        Ok(())
    }
}
