//! Rejects event dates that are not in the future

use std::rc::Rc;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use web_sys::{Document, Event, HtmlInputElement};

use crate::behaviors::Behavior;
use crate::dom::{self, Prompter};
use crate::error::Result;

/// Event date field id
pub const DATE_ID: &str = "date";

/// Message shown when the selected moment is not in the future
pub const PAST_DATE_MESSAGE: &str = "Please select a future date and time.";

/// Formats produced by `datetime-local` inputs
const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Result of checking a selected date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateVerdict {
    /// Strictly after now
    Future,
    /// Now or earlier
    NotFuture,
    /// Empty or not a recognised date
    Unparsed,
}

/// Resolves a field value to an instant
///
/// Date-times without an offset are read with `zone`'s rules for the
/// selected date. A repeated wall-clock time resolves to its earlier
/// instant, and one skipped by a forward transition moves forward by an
/// hour. A bare date is midnight UTC, as browsers parse ISO date-only
/// strings.
#[must_use]
pub fn resolve<Tz: TimeZone>(value: &str, zone: &Tz) -> Option<DateTime<Utc>> {
    let value = value.trim();

    let local = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok());
    if let Some(naive) = local {
        return zone
            .from_local_datetime(&naive)
            .earliest()
            .or_else(|| {
                naive
                    .checked_add_signed(Duration::hours(1))
                    .and_then(|shifted| zone.from_local_datetime(&shifted).earliest())
            })
            .map(|moment| moment.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight))
}

/// Judges a field value against `now`
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use pathway_ui::behaviors::date_guard::{judge, DateVerdict};
///
/// let offset = FixedOffset::east_opt(0).unwrap();
/// let now = offset.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
/// assert_eq!(judge("2025-06-01T12:01", &now), DateVerdict::Future);
/// assert_eq!(judge("2025-06-01T12:00", &now), DateVerdict::NotFuture);
/// ```
#[must_use]
pub fn judge<Tz: TimeZone>(value: &str, now: &DateTime<Tz>) -> DateVerdict {
    match resolve(value, &now.timezone()) {
        Some(moment) if moment > now.with_timezone(&Utc) => DateVerdict::Future,
        Some(_) => DateVerdict::NotFuture,
        None => DateVerdict::Unparsed,
    }
}

/// Judges a selection, telling the user when it is rejected
#[must_use]
pub fn review_selection<Tz: TimeZone>(
    value: &str,
    now: &DateTime<Tz>,
    prompter: &dyn Prompter,
) -> DateVerdict {
    let verdict = judge(value, now);
    if verdict == DateVerdict::NotFuture {
        prompter.alert(PAST_DATE_MESSAGE);
    }
    verdict
}

/// Clears the event date field when a past moment is chosen
pub struct FutureDateGuard {
    field: HtmlInputElement,
    prompter: Rc<dyn Prompter>,
}

impl FutureDateGuard {
    /// Creates the guard for an explicit date field
    #[must_use]
    pub fn new(field: HtmlInputElement, prompter: Rc<dyn Prompter>) -> Self {
        Self { field, prompter }
    }

    /// Finds the event date field
    ///
    /// # Errors
    ///
    /// Returns an error if `#date` is not an input.
    pub fn from_document(document: &Document, prompter: Rc<dyn Prompter>) -> Result<Option<Self>> {
        Ok(dom::by_id::<HtmlInputElement>(document, DATE_ID)?
            .map(|field| Self::new(field, prompter)))
    }
}

impl Behavior for FutureDateGuard {
    const NAME: &'static str = "future-date-guard";

    fn attach(self) -> Result<()> {
        let field = self.field.clone();
        let prompter = self.prompter;
        dom::listen(&self.field, "change", move |_: Event| {
            let now = Local::now();
            let value = field.value();
            if review_selection(&value, &now, prompter.as_ref()) == DateVerdict::NotFuture {
                tracing::debug!(%value, "cleared past event date");
                field.set_value("");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::offset::LocalResult;
    use chrono::{FixedOffset, NaiveDate};

    fn noon(offset_hours: i32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_one_minute_ahead_is_future() {
        let now = noon(0);
        let ahead = (now + Duration::minutes(1)).format("%Y-%m-%dT%H:%M").to_string();
        assert_eq!(judge(&ahead, &now), DateVerdict::Future);
    }

    #[test]
    fn test_now_is_not_future() {
        assert_eq!(judge("2025-06-01T12:00", &noon(0)), DateVerdict::NotFuture);
    }

    #[test]
    fn test_past_is_not_future() {
        assert_eq!(judge("2024-12-31T23:59", &noon(0)), DateVerdict::NotFuture);
    }

    #[test]
    fn test_seconds_precision_accepted() {
        assert_eq!(judge("2025-06-01T12:00:01", &noon(0)), DateVerdict::Future);
    }

    #[test]
    fn test_local_time_uses_zone_offset() {
        // noon at UTC+2 is 10:00 UTC
        let now_plus_two = noon(2);
        assert_eq!(judge("2025-06-01T13:00", &now_plus_two), DateVerdict::Future);
        assert_eq!(judge("2025-06-01T11:59", &now_plus_two), DateVerdict::NotFuture);

        // noon at UTC-2 is 14:00 UTC
        let now_minus_two = noon(-2);
        assert_eq!(judge("2025-06-01T12:01", &now_minus_two), DateVerdict::Future);
        assert_eq!(judge("2025-06-01T11:00", &now_minus_two), DateVerdict::NotFuture);
    }

    /// US Eastern around the 2025 transitions: EDT (UTC-4) from
    /// 2025-03-09 07:00 UTC until 2025-11-02 06:00 UTC, EST (UTC-5) otherwise
    #[derive(Debug, Clone, Copy)]
    struct Eastern;

    fn edt() -> FixedOffset {
        FixedOffset::west_opt(4 * 3600).unwrap()
    }

    fn est() -> FixedOffset {
        FixedOffset::west_opt(5 * 3600).unwrap()
    }

    fn utc(month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    impl TimeZone for Eastern {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            Self
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            local
                .and_hms_opt(12, 0, 0)
                .map_or(LocalResult::None, |midday| {
                    self.offset_from_local_datetime(&midday)
                })
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let as_edt = *local - edt();
            let as_est = *local - est();
            let edt_valid = as_edt >= utc(3, 9, 7) && as_edt < utc(11, 2, 6);
            let est_valid = !(as_est >= utc(3, 9, 7) && as_est < utc(11, 2, 6));
            match (edt_valid, est_valid) {
                (true, true) => LocalResult::Ambiguous(edt(), est()),
                (true, false) => LocalResult::Single(edt()),
                (false, true) => LocalResult::Single(est()),
                (false, false) => LocalResult::None,
            }
        }

        fn offset_from_utc_date(&self, utc_date: &NaiveDate) -> FixedOffset {
            utc_date
                .and_hms_opt(12, 0, 0)
                .map_or(est(), |midday| self.offset_from_utc_datetime(&midday))
        }

        fn offset_from_utc_datetime(&self, utc_time: &NaiveDateTime) -> FixedOffset {
            if *utc_time >= utc(3, 9, 7) && *utc_time < utc(11, 2, 6) {
                edt()
            } else {
                est()
            }
        }
    }

    #[test]
    fn test_repeated_hour_resolves_to_earlier_instant() {
        // 06:10 UTC is 01:10 EST, just after clocks fell back from 02:00 EDT
        let now = Eastern.from_utc_datetime(&(utc(11, 2, 6) + Duration::minutes(10)));

        let resolved = resolve("2025-11-02T01:45", &Eastern).unwrap();
        assert_eq!(resolved, Utc.from_utc_datetime(&(utc(11, 2, 5) + Duration::minutes(45))));
        assert_eq!(judge("2025-11-02T01:45", &now), DateVerdict::NotFuture);
    }

    #[test]
    fn test_selected_date_uses_its_own_offset() {
        // Chosen in winter for a summer event
        let now = Eastern.from_utc_datetime(&utc(1, 15, 17));
        let resolved = resolve("2025-07-04T09:00", &Eastern).unwrap();
        assert_eq!(resolved, Utc.from_utc_datetime(&utc(7, 4, 13)));
        assert_eq!(judge("2025-07-04T09:00", &now), DateVerdict::Future);
    }

    #[test]
    fn test_skipped_hour_moves_forward() {
        // 02:30 does not exist on 2025-03-09; it reads as 03:30 EDT
        let resolved = resolve("2025-03-09T02:30", &Eastern).unwrap();
        assert_eq!(resolved, Utc.from_utc_datetime(&(utc(3, 9, 7) + Duration::minutes(30))));
    }

    #[test]
    fn test_date_only_is_utc_midnight() {
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        let resolved = resolve("2025-06-02", &minus_five).unwrap();
        assert_eq!(resolved, Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap());
        assert_eq!(judge("2025-06-02", &noon(0)), DateVerdict::Future);
        assert_eq!(judge("2025-06-01", &noon(0)), DateVerdict::NotFuture);
    }

    #[test]
    fn test_empty_and_garbage_are_unparsed() {
        assert_eq!(judge("", &noon(0)), DateVerdict::Unparsed);
        assert_eq!(judge("next tuesday", &noon(0)), DateVerdict::Unparsed);
        assert_eq!(judge("2025-13-01T10:00", &noon(0)), DateVerdict::Unparsed);
    }
}
