//! WASM browser tests for the navigation toggle
//!
//! Run with: wasm-pack test --headless --firefox

#![allow(clippy::unwrap_used, clippy::expect_used)]

use wasm_bindgen_test::*;
use web_sys::{Document, Element};

use super::Behavior;
use super::nav::{NavToggle, SHOW_CLASS};
use crate::dom;
use crate::dom_test::{click, isolated_document};

wasm_bindgen_test_configure!(run_in_browser);

const NAVBAR: &str = r#"
<nav>
  <button class="navbar-toggler"><span class="icon">=</span></button>
  <div class="navbar-collapse"><a class="nav-link">Programs</a></div>
</nav>
<main><p class="content">Body copy</p></main>"#;

fn attached() -> (Document, Element, Element) {
    let document = isolated_document(NAVBAR);
    NavToggle::from_document(&document)
        .unwrap()
        .unwrap()
        .attach()
        .unwrap();
    let toggler = dom::query_one(&document, ".navbar-toggler").unwrap().unwrap();
    let panel = dom::query_one(&document, ".navbar-collapse").unwrap().unwrap();
    (document, toggler, panel)
}

fn is_shown(panel: &Element) -> bool {
    panel.class_list().contains(SHOW_CLASS)
}

#[wasm_bindgen_test]
fn test_toggler_toggles_panel() {
    let (_document, toggler, panel) = attached();

    click(&toggler);
    assert!(is_shown(&panel));

    click(&toggler);
    assert!(!is_shown(&panel));
}

#[wasm_bindgen_test]
fn test_click_on_toggler_child_still_toggles() {
    let (document, _toggler, panel) = attached();
    let icon: Element = dom::query_one(&document, ".icon").unwrap().unwrap();

    click(&icon);
    assert!(is_shown(&panel));
}

#[wasm_bindgen_test]
fn test_click_inside_panel_keeps_it_open() {
    let (document, toggler, panel) = attached();
    let link: Element = dom::query_one(&document, ".nav-link").unwrap().unwrap();

    click(&toggler);
    click(&link);
    assert!(is_shown(&panel));
}

#[wasm_bindgen_test]
fn test_click_outside_collapses_panel() {
    let (document, toggler, panel) = attached();
    let content: Element = dom::query_one(&document, ".content").unwrap().unwrap();

    click(&toggler);
    assert!(is_shown(&panel));

    click(&content);
    assert!(!is_shown(&panel));

    // Collapsing an already collapsed panel is a no-op
    click(&content);
    assert!(!is_shown(&panel));
}
