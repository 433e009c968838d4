//! Integration tests for the page rules exposed by the crate
//!
//! These exercise the pure decision functions behind each behavior the way a
//! page sees them: configuration first, then the values users type.

use chrono::{FixedOffset, TimeZone};
use pathway_ui::behaviors::anchors::fragment_target;
use pathway_ui::behaviors::counter::CounterReading;
use pathway_ui::behaviors::date_guard::{DateVerdict, judge};
use pathway_ui::behaviors::fade_in::animation_delay;
use pathway_ui::behaviors::hover::CardPose;
use pathway_ui::behaviors::preview::PreviewContent;
use pathway_ui::behaviors::registration::{RegistrationError, validate_registration};
use pathway_ui::behaviors::shortcuts::Shortcut;
use pathway_ui::{BehaviorConfig, BehaviorError};

#[test]
fn test_page_config_overrides_limits() -> Result<(), BehaviorError> {
    let config = BehaviorConfig::from_json(
        r#"{"message_limit": 280, "message_warning_threshold": 20, "min_password_length": 12}"#,
    )?;

    let reading = CounterReading::measure(
        &"x".repeat(261),
        config.message_limit,
        config.message_warning_threshold,
    );
    assert_eq!(reading.remaining, 19);
    assert!(reading.warning);

    assert_eq!(
        validate_registration("elevenchars", "elevenchars", config.min_password_length),
        Err(RegistrationError::PasswordTooShort { min: 12 })
    );
    assert_eq!(config.alert_dismiss_ms, 5000, "untouched fields keep defaults");

    Ok(())
}

#[test]
fn test_page_config_rejects_typos() {
    let result = BehaviorConfig::from_json(r#"{"mesage_limit": 10}"#);
    assert!(matches!(result, Err(BehaviorError::Config(_))));
}

#[test]
fn test_fade_in_delays_follow_card_order() {
    let step = BehaviorConfig::default().fade_step_secs;
    let delays: Vec<String> = (0..4).map(|index| animation_delay(index, step)).collect();
    assert_eq!(delays, vec!["0s", "0.1s", "0.2s", "0.3s"]);
}

#[test]
fn test_hover_poses_round_trip_through_events() {
    let enter = CardPose::for_event("mouseenter");
    let leave = CardPose::for_event("mouseleave");

    assert_eq!(enter.map(CardPose::transform), Some("translateY(-5px) scale(1.02)"));
    assert_eq!(leave.map(CardPose::transform), Some("translateY(0) scale(1)"));
    assert_eq!(CardPose::for_event("click"), None);
}

#[test]
fn test_anchor_targets() {
    assert_eq!(fragment_target("#programs"), Some("#programs"));
    assert_eq!(fragment_target("#"), None);
    assert_eq!(fragment_target("https://example.org/#top"), None);
}

#[test]
fn test_preview_content_keeps_field_text() {
    let preview = PreviewContent::from_fields("Q3 <draft>", "");

    assert_eq!(
        preview,
        Some(PreviewContent {
            title: "Q3 <draft>".to_string(),
            body: "No content yet...".to_string(),
        })
    );
    assert!(PreviewContent::from_fields("", "").is_none());
}

#[test]
fn test_event_dates_must_be_in_the_future() -> Result<(), String> {
    let offset = FixedOffset::east_opt(2 * 3600).ok_or("bad offset")?;
    let now = offset
        .with_ymd_and_hms(2025, 9, 1, 18, 0, 0)
        .single()
        .ok_or("ambiguous time")?;

    assert_eq!(judge("2025-09-02T09:00", &now), DateVerdict::Future);
    assert_eq!(judge("2025-09-01T17:59", &now), DateVerdict::NotFuture);
    assert_eq!(judge("next tuesday", &now), DateVerdict::Unparsed);

    Ok(())
}

#[test]
fn test_shortcut_table() {
    let cases = [
        ("Enter", true, false, Some(Shortcut::SubmitFocusedForm)),
        ("Enter", false, true, Some(Shortcut::SubmitFocusedForm)),
        ("Enter", false, false, None),
        ("Escape", false, false, Some(Shortcut::DismissAlerts)),
        ("s", true, false, None),
    ];

    for (key, ctrl, meta, expected) in cases {
        assert_eq!(
            Shortcut::classify(key, ctrl, meta),
            expected,
            "{key} ctrl={ctrl} meta={meta}"
        );
    }
}
