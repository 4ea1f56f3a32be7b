#[cfg(target_arch = "wasm32")]
use web_sys::console;

pub fn set_panic_hook() {
    // Routes panic messages to the browser console instead of the opaque
    // "unreachable executed" trap. Safe to call more than once.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Native builds only exist for unit tests; there is no console to write to.
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

pub fn debug(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console::debug_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
