//! # Commands Module
//!
//! What the UI (here: the CLI) can ask of the cart.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── cart.rs     ◄─── get_cart, add_to_cart, remove_from_cart, update_cart_item
//! ```
//!
//! Every command returns the full [`cart::CartResponse`] so the caller can
//! re-render without a second round trip. Failures never come back as
//! `Err`: they have already been shown as toasts.

pub mod cart;
