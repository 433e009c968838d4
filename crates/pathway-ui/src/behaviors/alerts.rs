//! Alert auto-dismissal

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::behaviors::Behavior;
use crate::config::BehaviorConfig;
use crate::dom;
use crate::error::Result;

/// Alert elements
pub const ALERT_SELECTOR: &str = ".alert";

/// Class that fades an alert out (defined by the injected stylesheet)
pub const FADE_CLASS: &str = "fade";

/// When an alert starts fading and when it is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissSchedule {
    fade_after_ms: u32,
    fade_ms: u32,
}

impl DismissSchedule {
    /// Creates a schedule: fade after `fade_after_ms`, remove `fade_ms` later
    #[must_use]
    pub const fn new(fade_after_ms: u32, fade_ms: u32) -> Self {
        Self {
            fade_after_ms,
            fade_ms,
        }
    }

    /// Delay before the fade class is applied
    #[must_use]
    pub const fn fade_after_ms(self) -> u32 {
        self.fade_after_ms
    }

    /// Delay between fading and removal
    #[must_use]
    pub const fn fade_ms(self) -> u32 {
        self.fade_ms
    }

    /// Time from attach until the alert is gone
    #[must_use]
    pub const fn total_ms(self) -> u32 {
        self.fade_after_ms.saturating_add(self.fade_ms)
    }
}

impl Default for DismissSchedule {
    fn default() -> Self {
        BehaviorConfig::default().dismiss_schedule()
    }
}

/// Fades then removes one alert on `schedule`
pub fn schedule_dismissal(alert: Element, schedule: DismissSchedule) {
    Timeout::new(schedule.fade_after_ms(), move || {
        if let Err(err) = dom::add_class(&alert, FADE_CLASS) {
            tracing::warn!(error = %err, "could not fade alert");
        }
        Timeout::new(schedule.fade_ms(), move || alert.remove()).forget();
    })
    .forget();
}

/// Removes every alert currently in the document
///
/// Returns how many were removed.
///
/// # Errors
///
/// Returns an error if the alert selector is rejected.
pub fn dismiss_all(document: &Document) -> Result<usize> {
    let alerts = dom::query_all(document, ALERT_SELECTOR)?;
    for alert in &alerts {
        alert.remove();
    }
    Ok(alerts.len())
}

/// Dismisses the alerts rendered with the page
pub struct AlertDismissal {
    alerts: Vec<Element>,
    schedule: DismissSchedule,
}

impl AlertDismissal {
    /// Creates the behavior for explicit alerts
    #[must_use]
    pub const fn new(alerts: Vec<Element>, schedule: DismissSchedule) -> Self {
        Self { alerts, schedule }
    }

    /// Finds the alerts present at load time
    ///
    /// # Errors
    ///
    /// Returns an error if the alert selector is rejected.
    pub fn from_document(document: &Document, config: &BehaviorConfig) -> Result<Option<Self>> {
        let alerts = dom::query_all(document, ALERT_SELECTOR)?;
        Ok((!alerts.is_empty()).then(|| Self::new(alerts, config.dismiss_schedule())))
    }
}

impl Behavior for AlertDismissal {
    const NAME: &'static str = "alert-dismissal";

    fn attach(self) -> Result<()> {
        tracing::debug!(
            count = self.alerts.len(),
            after_ms = self.schedule.total_ms(),
            "scheduling alert dismissal"
        );
        for alert in self.alerts {
            schedule_dismissal(alert, self.schedule);
        }
        Ok(())
    }
}
