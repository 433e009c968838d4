//! WASM entry point
//!
//! Compiled by Trunk and loaded by the server-rendered pages. Attaches the
//! page behaviors to the current document.

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    if let Err(err) = pathway_ui::start() {
        web_sys::console::error_1(&format!("page behaviors failed to start: {err}").into());
    }
}
