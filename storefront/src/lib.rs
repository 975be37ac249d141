//! Shop storefront
//!
//! Product listing page built on the `shop-catalog` listing logic:
//! - Search, category filter and sort over an embedded catalog snapshot
//! - Grid/list layouts with star ratings and sale prices
//! - Product detail overlay

mod app;
mod components;
mod store;

pub use app::App;
pub use store::{catalog, ShopStore};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
