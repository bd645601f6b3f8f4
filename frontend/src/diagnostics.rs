use log::{error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, PromiseRejectionEvent};

/// Last-resort logging for anything the rest of the page lets escape.
/// The listeners live for the lifetime of the page.
pub fn install_global_error_handlers() {
    let Some(window) = web_sys::window() else {
        warn!("No window, global error handlers not installed");
        return;
    };

    let on_error = Closure::wrap(Box::new(move |e: ErrorEvent| {
        error!("An error occurred: {} {:?}", e.message(), e.error());
    }) as Box<dyn FnMut(ErrorEvent)>);
    if let Err(e) = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref()) {
        warn!("Could not listen for page errors: {:?}", e);
    }
    on_error.forget();

    let on_rejection = Closure::wrap(Box::new(move |e: PromiseRejectionEvent| {
        error!("Unhandled promise rejection: {:?}", e.reason());
    }) as Box<dyn FnMut(PromiseRejectionEvent)>);
    if let Err(e) =
        window.add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref())
    {
        warn!("Could not listen for unhandled rejections: {:?}", e);
    }
    on_rejection.forget();
}

pub fn print_banner() {
    gloo_console::log!(
        "%cFan-Tek Ventures Limited",
        "color: #E8431C; font-size: 24px; font-weight: bold;"
    );
    gloo_console::log!("%cMarine & Oil Field Solutions", "color: #666; font-size: 14px;");
    gloo_console::log!("%cWebsite powered by Rust and WebAssembly", "color: #333; font-size: 12px;");
}
