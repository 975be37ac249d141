//! Client-side entry point (`trunk serve --features csr`).

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        leptos::mount::mount_to_body(shop_storefront::App);
    }
}
