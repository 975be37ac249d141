//! Application shell and pages.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use shop_catalog::PriceFormatter;

use crate::components::{CtaSection, FilterBar, Hero, ProductDetailModal, ProductResults};
use crate::store::{catalog, ShopStore};

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/shop_storefront.css"/>
        <Meta name="description" content="Browse the catalog: search, filter by category and sort by price, rating or date"/>
        <Title text="Shop"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=ShopPage/>
                    <Route path=path!("/shop") view=ShopPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    view! {
        <header>
            <h1>"Shop"</h1>
            <nav>
                <a href="/">"Home"</a>
                <a href="/shop">"Products"</a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Prices shown in US dollars"</p>
        </footer>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Product listing page.
#[component]
fn ShopPage() -> impl IntoView {
    match catalog() {
        Ok(snapshot) => {
            let store = ShopStore::new(snapshot, PriceFormatter::default());
            provide_context(store);

            view! {
                <Hero/>
                <FilterBar/>
                <p class="results-count">{move || store.summary()}</p>
                <ProductResults/>
                <CtaSection/>
                {move || store.selected().map(|product| view! { <ProductDetailModal product=product/> })}
            }
            .into_any()
        }
        Err(e) => view! {
            <p style="color: red;">"Error loading products: " {e}</p>
        }
        .into_any(),
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div style="text-align: center; padding: 4rem;">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Shop"</a>
        </div>
    }
}
