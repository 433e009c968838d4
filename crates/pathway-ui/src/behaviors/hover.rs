//! Lift effect on feature cards

use web_sys::{Document, Event, HtmlElement};

use crate::behaviors::Behavior;
use crate::dom;
use crate::error::Result;

/// Cards that lift on hover
pub const FEATURE_CARD_SELECTOR: &str = ".feature-card";

/// Visual pose of a feature card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPose {
    /// Pointer is over the card
    Raised,
    /// Pointer has left the card
    Resting,
}

impl CardPose {
    /// CSS `transform` for this pose
    #[must_use]
    pub const fn transform(self) -> &'static str {
        match self {
            Self::Raised => "translateY(-5px) scale(1.02)",
            Self::Resting => "translateY(0) scale(1)",
        }
    }

    /// Pose a pointer event leads to
    #[must_use]
    pub fn for_event(event_type: &str) -> Option<Self> {
        match event_type {
            "mouseenter" => Some(Self::Raised),
            "mouseleave" => Some(Self::Resting),
            _ => None,
        }
    }
}

/// Toggles the lift transform on pointer enter/leave
pub struct FeatureCardHover {
    cards: Vec<HtmlElement>,
}

impl FeatureCardHover {
    /// Creates the behavior for explicit cards
    #[must_use]
    pub const fn new(cards: Vec<HtmlElement>) -> Self {
        Self { cards }
    }

    /// Finds the page's feature cards
    ///
    /// # Errors
    ///
    /// Returns an error if the card selector is rejected.
    pub fn from_document(document: &Document) -> Result<Option<Self>> {
        let cards: Vec<HtmlElement> = dom::query_all(document, FEATURE_CARD_SELECTOR)?
            .into_iter()
            .filter_map(|element| dom::as_html(element).ok())
            .collect();

        Ok((!cards.is_empty()).then(|| Self::new(cards)))
    }
}

impl Behavior for FeatureCardHover {
    const NAME: &'static str = "feature-card-hover";

    fn attach(self) -> Result<()> {
        for card in self.cards {
            for event_type in ["mouseenter", "mouseleave"] {
                let target = card.clone();
                dom::listen(&card, event_type, move |event: Event| {
                    let Some(pose) = CardPose::for_event(&event.type_()) else {
                        return;
                    };
                    if let Err(err) = dom::set_style(&target, "transform", pose.transform()) {
                        tracing::debug!(error = %err, "could not set card transform");
                    }
                })?;
            }
        }
        Ok(())
    }
}
