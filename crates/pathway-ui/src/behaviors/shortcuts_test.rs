//! WASM browser tests for keyboard shortcuts
//!
//! Run with: wasm-pack test --headless --firefox

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_test::*;
use web_sys::{Event, HtmlFormElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

use super::shortcuts::{Shortcut, run_shortcut, submit_focused_form};
use crate::dom;
use crate::dom_test::mount;

wasm_bindgen_test_configure!(run_in_browser);

const FORM: &str = r#"<form class="kb-form" action="javascript:void(0)"><input class="kb-input"><button type="submit">Go</button></form>"#;

fn count_submits(form: &HtmlFormElement) -> Rc<Cell<u32>> {
    let submits = Rc::new(Cell::new(0));
    let seen = Rc::clone(&submits);
    dom::listen(form, "submit", move |event: Event| {
        event.prevent_default();
        seen.set(seen.get() + 1);
    })
    .unwrap();
    submits
}

#[wasm_bindgen_test]
fn test_submit_focused_form_clicks_its_button() {
    let root = mount(FORM);
    let form: HtmlFormElement = dom::query_one(&root, ".kb-form").unwrap().unwrap();
    let input: HtmlInputElement = dom::query_one(&root, ".kb-input").unwrap().unwrap();
    let submits = count_submits(&form);
    let document = dom::document().unwrap();

    input.focus().unwrap();
    // Headless runners may not report focus; only assert when it took
    if document.has_focus().unwrap_or(false) {
        assert!(submit_focused_form(&document).unwrap());
        assert_eq!(submits.get(), 1);
    }

    input.blur().unwrap();
    assert!(!submit_focused_form(&document).unwrap());
    root.remove();
}

#[wasm_bindgen_test]
fn test_escape_shortcut_dismisses_alerts() {
    let root = mount(r#"<div class="alert">a</div><div class="alert">b</div>"#);
    let document = dom::document().unwrap();

    run_shortcut(&document, Shortcut::DismissAlerts).unwrap();

    assert!(dom::query_all(&root, ".alert").unwrap().is_empty());
    root.remove();
}

#[wasm_bindgen_test]
fn test_keyboard_event_fields_classify() {
    let init = KeyboardEventInit::new();
    init.set_key("Enter");
    init.set_meta_key(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();

    assert_eq!(
        Shortcut::classify(&event.key(), event.ctrl_key(), event.meta_key()),
        Some(Shortcut::SubmitFocusedForm)
    );
}
