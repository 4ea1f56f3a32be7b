pub mod cart_badge;
pub mod toast;
