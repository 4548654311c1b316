//! WASM entry point for the Plantventory UI
//!
//! Trunk compiles this to WASM and it mounts the App component to the body.

use leptos::prelude::*;
use plantventory_ui::App;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! {
            <App />
        }
    });
}
