//! Listing page components.

use leptos::prelude::*;
use shop_catalog::listing::STAR_COUNT;
use shop_catalog::prelude::*;

use crate::store::{
    button_class, price_line, results_class, reviews_label, stock_class, PriceLine, ShopStore,
};

// ============================================================================
// Page Sections
// ============================================================================

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h2>"Our " <span class="accent">"Shop"</span></h2>
            <p>
                "Discover amazing products at great prices. Quality guaranteed with fast shipping and excellent customer service."
            </p>
        </section>
    }
}

#[component]
pub fn CtaSection() -> impl IntoView {
    view! {
        <section class="cta">
            <h2>"Can't Find What You're Looking For?"</h2>
            <p>"Our customer service team is here to help you find the perfect product."</p>
            <div class="cta-actions">
                <a href="/contact" class="btn">"Contact Us"</a>
                <a href="/support" class="btn btn--ghost">"Get Support"</a>
            </div>
        </section>
    }
}

// ============================================================================
// Filter Bar
// ============================================================================

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = expect_context::<ShopStore>();

    view! {
        <section class="filters">
            <input
                type="text"
                class="search"
                placeholder="Search products..."
                prop:value=move || store.search_term()
                on:input=move |ev| store.dispatch(ListingAction::SetSearch(event_target_value(&ev)))
            />

            <div class="categories">
                <CategoryButton token=CategoryToken::All label="All".to_string()/>
                {store.catalog.categories.iter().map(|category| {
                    view! {
                        <CategoryButton
                            token=CategoryToken::named(category.name.clone())
                            label=category.name.clone()
                        />
                    }
                }).collect::<Vec<_>>()}
            </div>

            <div class="controls">
                <select
                    class="sort"
                    on:change=move |ev| store.dispatch(ListingAction::SetSort(SortKey::parse(&event_target_value(&ev))))
                >
                    {SortKey::ALL.iter().map(|&key| {
                        view! {
                            <option value=key.as_str() selected=move || store.sort() == key>
                                {key.display_name()}
                            </option>
                        }
                    }).collect::<Vec<_>>()}
                </select>

                <div class="view-toggle">
                    <ViewButton mode=ViewMode::Grid label="Grid"/>
                    <ViewButton mode=ViewMode::List label="List"/>
                </div>

                <Show when=move || store.has_active_filters()>
                    <button class="btn btn--ghost" on:click=move |_| store.dispatch(ListingAction::ClearFilters)>
                        "Clear Filters"
                    </button>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn CategoryButton(token: CategoryToken, label: String) -> impl IntoView {
    let store = expect_context::<ShopStore>();
    let selected = token.clone();

    view! {
        <button
            class=move || button_class(store.is_category_selected(&selected))
            on:click=move |_| store.dispatch(ListingAction::SelectCategory(token.clone()))
        >
            {label}
        </button>
    }
}

#[component]
fn ViewButton(mode: ViewMode, label: &'static str) -> impl IntoView {
    let store = expect_context::<ShopStore>();

    view! {
        <button
            class=move || button_class(store.view_mode() == mode)
            title=label
            on:click=move |_| store.dispatch(ListingAction::SetViewMode(mode))
        >
            {label}
        </button>
    }
}

// ============================================================================
// Results
// ============================================================================

#[component]
pub fn ProductResults() -> impl IntoView {
    let store = expect_context::<ShopStore>();

    view! {
        {move || {
            let items = store.results();
            if items.is_empty() {
                return view! { <NoResults/> }.into_any();
            }
            let mode = store.view_mode();
            view! {
                <div class=results_class(mode)>
                    {items.into_iter().map(|product| {
                        view! { <ProductCard product=product mode=mode/> }
                    }).collect::<Vec<_>>()}
                </div>
            }.into_any()
        }}
    }
}

#[component]
fn NoResults() -> impl IntoView {
    let store = expect_context::<ShopStore>();

    view! {
        <div class="no-results">
            <h3>"No products found"</h3>
            <p>"Try adjusting your search terms or browse all categories."</p>
            <button class="btn" on:click=move |_| store.dispatch(ListingAction::ClearFilters)>
                "Clear All Filters"
            </button>
        </div>
    }
}

#[component]
fn ProductCard(product: Product, mode: ViewMode) -> impl IntoView {
    let store = expect_context::<ShopStore>();
    let price = price_line(&product, &store.formatter);
    let stock = product.stock_status();
    let card_class = match mode {
        ViewMode::Grid => "product-card",
        ViewMode::List => "product-card product-card--row",
    };
    let image = product.display_image().to_string();
    let category = product.category.clone();
    let name = product.name.clone();
    let short_description = product.short_description.clone();
    let rating = product.rating;
    let review_count = format!("({})", product.review_count);
    let for_title = product.clone();

    view! {
        <div class=card_class>
            <div class="product-image">
                <span>{image}</span>
            </div>
            <div class="product-info">
                <span class="badge">{category}</span>
                <h3 on:click=move |_| store.dispatch(ListingAction::OpenDetail(for_title.clone()))>
                    {name}
                </h3>
                <div class="rating">
                    <StarRating rating=rating/>
                    <span class="reviews">{review_count}</span>
                </div>
                <PriceTag price=price/>
                <p class="short-description">{short_description}</p>
                <p class=stock_class(&stock)>{stock.label()}</p>
                <div class="card-actions">
                    <button class="btn" on:click=move |_| store.dispatch(ListingAction::OpenDetail(product.clone()))>
                        "View Details"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PriceTag(price: PriceLine) -> impl IntoView {
    view! {
        <div class="price-line">
            <span class="price">{price.current}</span>
            {price.compare.map(|compare| view! { <span class="compare-price">{compare}</span> })}
            {price.discount.map(|discount| view! { <span class="discount">{discount}</span> })}
        </div>
    }
}

#[component]
pub fn StarRating(rating: f64) -> impl IntoView {
    let title = format!("{:.1} out of {}", rating, STAR_COUNT);

    view! {
        <span class="stars" title=title>
            {star_glyphs(rating).into_iter().map(|glyph| {
                view! { <span class=glyph.css_class()>{glyph.as_char().to_string()}</span> }
            }).collect::<Vec<_>>()}
        </span>
    }
}

// ============================================================================
// Detail Overlay
// ============================================================================

#[component]
pub fn ProductDetailModal(product: Product) -> impl IntoView {
    let store = expect_context::<ShopStore>();
    let close = move |_: leptos::ev::MouseEvent| store.dispatch(ListingAction::CloseDetail);
    let price = price_line(&product, &store.formatter);
    let stock = product.stock_status();
    let specs = product
        .specification_rows()
        .into_iter()
        .map(|row| (row.label, row.value.to_string()))
        .collect::<Vec<_>>();
    let features = product.features.clone();

    view! {
        <div class="overlay" on:click=close>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <div>
                        <h2>{product.name.clone()}</h2>
                        <p class="category">{product.category.clone()}</p>
                    </div>
                    <button class="close" title="Close" on:click=close>"\u{2715}"</button>
                </div>

                <div class="modal-body">
                    <div class="product-image product-image--large">
                        <span>{product.display_image().to_string()}</span>
                    </div>

                    <div class="details">
                        <div class="rating">
                            <StarRating rating=product.rating/>
                            <span class="reviews">{reviews_label(product.review_count)}</span>
                        </div>
                        <PriceTag price=price/>
                        <p class=stock_class(&stock)>{stock.detail_label()}</p>

                        <h3>"Description"</h3>
                        <p>{product.description.clone()}</p>

                        {(!features.is_empty()).then(|| view! {
                            <h3>"Features"</h3>
                            <ul class="features">
                                {features.into_iter().map(|feature| view! { <li>{feature}</li> }).collect::<Vec<_>>()}
                            </ul>
                        })}

                        {(!specs.is_empty()).then(|| view! {
                            <h3>"Specifications"</h3>
                            <dl class="specs">
                                {specs.into_iter().map(|(label, value)| view! {
                                    <dt>{label}</dt>
                                    <dd>{value}</dd>
                                }).collect::<Vec<_>>()}
                            </dl>
                        })}

                        <div class="modal-actions">
                            <button class="btn" disabled={!stock.is_available()}>"Add to Cart"</button>
                            <button class="btn btn--ghost">"Add to Wishlist"</button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
