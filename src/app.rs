use anyhow::Result;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::{cart_badge::CartBadge, toast::ToastPresenter};
use crate::models::ToastVariant;
use crate::services::{dom::WebDocument, scheduler::WindowScheduler, storage::LocalStorage};
use crate::utils;

/// Browser-backed widgets for the current page.
pub struct Storefront {
    document: WebDocument,
}

impl Storefront {
    pub fn current() -> Result<Self> {
        Ok(Self {
            document: WebDocument::current()?,
        })
    }

    pub fn toasts(&self) -> ToastPresenter<WebDocument, WindowScheduler> {
        ToastPresenter::new(self.document.clone(), WindowScheduler)
    }

    pub fn cart_badge(&self) -> CartBadge<LocalStorage, WebDocument> {
        CartBadge::new(LocalStorage, self.document.clone())
    }

    pub fn show_toast(&self, message: &str, variant: ToastVariant) {
        if let Err(e) = self.toasts().show(message, variant) {
            utils::warn(&format!("toast could not be shown: {:#}", e));
        }
    }

    pub fn update_cart_badge(&self) {
        match self.cart_badge().update() {
            Ok(Some(state)) => utils::debug(&format!(
                "cart badge: {} item(s), visible={}",
                state.count, state.visible
            )),
            Ok(None) => {}
            Err(e) => utils::warn(&format!("cart badge update failed: {:#}", e)),
        }
    }

    /// Runs the first badge reconciliation once the DOM is parsed. The module
    /// usually finishes loading after `DOMContentLoaded`, so check readyState.
    pub fn on_content_loaded(&self) -> Result<()> {
        let document = self.document.document();
        if document.ready_state() != "loading" {
            self.update_cart_badge();
            return Ok(());
        }

        let on_loaded = Closure::<dyn FnMut()>::new(move || match Storefront::current() {
            Ok(storefront) => storefront.update_cart_badge(),
            Err(e) => utils::warn(&format!("storefront unavailable: {:#}", e)),
        });
        document
            .add_event_listener_with_callback(
                "DOMContentLoaded",
                on_loaded.as_ref().unchecked_ref(),
            )
            .map_err(|e| anyhow::anyhow!("could not listen for DOMContentLoaded: {:?}", e))?;
        on_loaded.forget();
        Ok(())
    }
}
