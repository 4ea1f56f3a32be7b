use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::services::storage::KeyValueStore;

pub const KEY_CART: &str = "cart";
pub const BADGE_ID: &str = "cart-count-global";

/// How long a toast rests on screen before sliding out.
pub const TOAST_DISPLAY_MS: u32 = 4000;
/// Slide transition; the element is removed once it has run.
pub const TOAST_TRANSITION_MS: u32 = 500;
pub const TOAST_BACKGROUND: &str = "#4b2e1e";
pub const TOAST_FONT: &str = "'Italiana', serif";
pub const SUCCESS_COLOR: &str = "#2ecc71";
pub const ERROR_COLOR: &str = "#e74c3c";

/// Product identifier -> quantity, as persisted by the storefront pages.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(transparent)]
pub struct Cart {
    pub items: BTreeMap<String, u64>,
}

impl Cart {
    /// Reads the cart stored under `cart`. Anything that isn't an object of
    /// non-negative integers (including `null`) is an empty cart.
    pub fn load<K: KeyValueStore>(store: &K) -> Self {
        store
            .get::<Option<Cart>>(KEY_CART)
            .flatten()
            .unwrap_or_default()
    }

    pub fn total_items(&self) -> u64 {
        self.items
            .values()
            .fold(0u64, |acc, qty| acc.saturating_add(*qty))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    /// A missing tag means success; any tag other than `"success"` is an error.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            None | Some("success") => ToastVariant::Success,
            Some(_) => ToastVariant::Error,
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            ToastVariant::Success => "fa-check-circle",
            ToastVariant::Error => "fa-exclamation-circle",
        }
    }

    pub fn accent(self) -> &'static str {
        match self {
            ToastVariant::Success => SUCCESS_COLOR,
            ToastVariant::Error => ERROR_COLOR,
        }
    }
}

impl Default for ToastVariant {
    fn default() -> Self {
        ToastVariant::Success
    }
}

/// What the badge shows after a reconciliation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BadgeState {
    pub count: u64,
    pub visible: bool,
}

impl BadgeState {
    pub fn for_count(count: u64) -> Self {
        Self {
            count,
            visible: count > 0,
        }
    }

    pub fn display(&self) -> &'static str {
        if self.visible { "flex" } else { "none" }
    }
}
