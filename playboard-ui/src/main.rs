//! Playboard Browser Entrypoint
//!
//! Built with trunk and loaded by every page of the catalogue.

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    if let Err(e) = playboard_ui::start() {
        web_sys::console::error_1(&format!("Playboard failed to start: {}", e).into());
    }
}
