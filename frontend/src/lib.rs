//! WebAssembly entry point of the portfolio site.
//!
//! Hydrates the server-rendered pages so the remote documents can be fetched
//! in the browser, and routes `log` records to the browser console.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the Leptos application on the client-side.
///
/// Installs `console_log` and `console_error_panic_hook` before mounting
/// `app::component` onto the server-rendered body.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}
