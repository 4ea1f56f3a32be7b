use anyhow::Result;

use crate::models::{BadgeState, Cart, BADGE_ID};
use crate::services::dom::RenderTarget;
use crate::services::storage::KeyValueStore;

/// Keeps the header cart badge in line with the persisted cart.
pub struct CartBadge<K: KeyValueStore, R: RenderTarget> {
    store: K,
    target: R,
}

impl<K: KeyValueStore, R: RenderTarget> CartBadge<K, R> {
    pub fn new(store: K, target: R) -> Self {
        Self { store, target }
    }

    /// Returns `None` when the page has no badge element.
    pub fn update(&self) -> Result<Option<BadgeState>> {
        let state = BadgeState::for_count(Cart::load(&self.store).total_items());

        let badge = match self.target.find_by_id(BADGE_ID) {
            Some(badge) => badge,
            None => return Ok(None),
        };

        self.target.set_text(&badge, &state.count.to_string());
        self.target.set_style(&badge, "display", state.display())?;
        Ok(Some(state))
    }
}
