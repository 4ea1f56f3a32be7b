pub mod components;
pub mod services;
pub mod models;
mod utils;
mod app;

#[cfg(test)]
mod testing;

use wasm_bindgen::prelude::*;

pub use app::Storefront;
pub use models::{BadgeState, Cart, ToastVariant};

#[wasm_bindgen]
extern "C" {
    /// The global `String()` conversion, so any value reads the way page
    /// scripts would render it.
    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

#[wasm_bindgen(start)]
pub fn run_app() {
    utils::set_panic_hook();
    match Storefront::current() {
        Ok(storefront) => {
            if let Err(e) = storefront.on_content_loaded() {
                utils::warn(&format!("{:#}", e));
            }
        }
        Err(e) => utils::warn(&format!("storefront unavailable: {:#}", e)),
    }
}

/// `showToast(message, type = 'success')`
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: JsValue, variant: JsValue) {
    let message = message.as_string().unwrap_or_else(|| js_string(&message));
    let variant = if variant.is_undefined() {
        ToastVariant::default()
    } else {
        ToastVariant::from_tag(Some(variant.as_string().as_deref().unwrap_or("")))
    };

    match Storefront::current() {
        Ok(storefront) => storefront.show_toast(&message, variant),
        Err(e) => utils::warn(&format!("storefront unavailable: {:#}", e)),
    }
}

#[wasm_bindgen(js_name = updateCartBadgeGlobal)]
pub fn update_cart_badge_global() {
    match Storefront::current() {
        Ok(storefront) => storefront.update_cart_badge(),
        Err(e) => utils::warn(&format!("storefront unavailable: {:#}", e)),
    }
}
