//! Listing page view state and its transitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogSnapshot, Product};
use crate::ids::ProductId;
use crate::listing::{derive_listing, CategoryToken, ListingFilter, ListingResults, SortKey};

/// Layout of the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detail overlay: closed, or open on one product.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailOverlay {
    #[default]
    Closed,
    Open(Box<Product>),
}

impl DetailOverlay {
    pub fn is_open(&self) -> bool {
        matches!(self, DetailOverlay::Open(_))
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            DetailOverlay::Open(product) => Some(product),
            DetailOverlay::Closed => None,
        }
    }
}

/// A user interaction on the listing page.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingAction {
    SetSearch(String),
    SelectCategory(CategoryToken),
    SetSort(SortKey),
    SetViewMode(ViewMode),
    /// Reset search term and category. Sort and view mode are kept.
    ClearFilters,
    OpenDetail(Product),
    CloseDetail,
}

/// Transient state of the listing page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingState {
    pub search_term: String,
    pub category: CategoryToken,
    pub sort: SortKey,
    pub view_mode: ViewMode,
    pub overlay: DetailOverlay,
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a given sort key and view mode (e.g., from configuration).
    pub fn with_preferences(sort: SortKey, view_mode: ViewMode) -> Self {
        Self {
            sort,
            view_mode,
            ..Self::default()
        }
    }

    /// Apply one interaction.
    pub fn apply(&mut self, action: ListingAction) {
        tracing::trace!(?action, "listing action");
        match action {
            ListingAction::SetSearch(term) => self.search_term = term,
            ListingAction::SelectCategory(category) => self.category = category,
            ListingAction::SetSort(sort) => self.sort = sort,
            ListingAction::SetViewMode(mode) => self.view_mode = mode,
            ListingAction::ClearFilters => {
                self.search_term.clear();
                self.category = CategoryToken::All;
            }
            ListingAction::OpenDetail(product) => {
                self.overlay = DetailOverlay::Open(Box::new(product));
            }
            ListingAction::CloseDetail => self.overlay = DetailOverlay::Closed,
        }
    }

    /// Builder-style `apply`.
    pub fn with(mut self, action: ListingAction) -> Self {
        self.apply(action);
        self
    }

    /// Current (search, category) criteria.
    pub fn filter(&self) -> ListingFilter {
        ListingFilter::new(self.search_term.clone(), self.category.clone())
    }

    /// Whether the "Clear Filters" affordance should show.
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty() || !self.category.is_all()
    }

    /// Open the overlay on a product from the snapshot by id.
    pub fn open_by_id(&mut self, snapshot: &CatalogSnapshot, id: ProductId) -> crate::Result<()> {
        let product = snapshot.product(id)?.clone();
        self.apply(ListingAction::OpenDetail(product));
        Ok(())
    }

    /// Recompute the listing for the current state.
    pub fn results<'a>(&self, snapshot: &'a CatalogSnapshot) -> ListingResults<'a> {
        derive_listing(&snapshot.products, &self.filter(), self.sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::product;

    #[test]
    fn test_defaults() {
        let state = ListingState::new();
        assert_eq!(state.search_term, "");
        assert_eq!(state.category, CategoryToken::All);
        assert_eq!(state.sort, SortKey::Featured);
        assert_eq!(state.view_mode, ViewMode::Grid);
        assert_eq!(state.overlay, DetailOverlay::Closed);
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_each_action_sets_one_field() {
        let base = ListingState::new();

        let s = base.clone().with(ListingAction::SetSearch("lamp".into()));
        assert_eq!(s, ListingState { search_term: "lamp".into(), ..base.clone() });

        let s = base.clone().with(ListingAction::SelectCategory(CategoryToken::named("Home")));
        assert_eq!(s, ListingState { category: CategoryToken::named("Home"), ..base.clone() });

        let s = base.clone().with(ListingAction::SetSort(SortKey::Rating));
        assert_eq!(s, ListingState { sort: SortKey::Rating, ..base.clone() });

        let s = base.clone().with(ListingAction::SetViewMode(ViewMode::List));
        assert_eq!(s, ListingState { view_mode: ViewMode::List, ..base });
    }

    #[test]
    fn test_clear_filters_keeps_sort_and_view_mode() {
        let mut state = ListingState::new()
            .with(ListingAction::SetSearch("mouse".into()))
            .with(ListingAction::SelectCategory(CategoryToken::named("Electronics")))
            .with(ListingAction::SetSort(SortKey::PriceHigh))
            .with(ListingAction::SetViewMode(ViewMode::List));
        assert!(state.has_active_filters());

        state.apply(ListingAction::ClearFilters);
        assert_eq!(state.search_term, "");
        assert_eq!(state.category, CategoryToken::All);
        assert_eq!(state.sort, SortKey::PriceHigh);
        assert_eq!(state.view_mode, ViewMode::List);
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_clear_filters_leaves_overlay_alone() {
        let state = ListingState::new()
            .with(ListingAction::OpenDetail(product(1, "Lamp", 10.0)))
            .with(ListingAction::ClearFilters);
        assert!(state.overlay.is_open());
    }

    #[test]
    fn test_open_then_close_overlay() {
        let lamp = product(9, "Lamp", 10.0);
        let mut state = ListingState::new().with(ListingAction::OpenDetail(lamp.clone()));
        assert_eq!(state.overlay.product(), Some(&lamp));

        state.apply(ListingAction::CloseDetail);
        assert_eq!(state.overlay, DetailOverlay::Closed);
        assert!(state.overlay.product().is_none());

        // Closing an already-closed overlay is a no-op.
        state.apply(ListingAction::CloseDetail);
        assert_eq!(state.overlay, DetailOverlay::Closed);
    }

    #[test]
    fn test_open_replaces_previous_product() {
        let state = ListingState::new()
            .with(ListingAction::OpenDetail(product(1, "A", 1.0)))
            .with(ListingAction::OpenDetail(product(2, "B", 2.0)));
        assert_eq!(state.overlay.product().map(|p| p.id.get()), Some(2));
    }

    #[test]
    fn test_open_by_id() {
        let snapshot = CatalogSnapshot::new(vec![product(5, "Kettle", 30.0)], Vec::new());
        let mut state = ListingState::new();
        state.open_by_id(&snapshot, ProductId::new(5)).unwrap();
        assert_eq!(state.overlay.product().map(|p| p.name.as_str()), Some("Kettle"));

        assert!(state.open_by_id(&snapshot, ProductId::new(6)).is_err());
        // A failed lookup leaves the overlay as it was.
        assert_eq!(state.overlay.product().map(|p| p.id.get()), Some(5));
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!(ViewMode::from_str("LIST"), Some(ViewMode::List));
        assert_eq!(ViewMode::from_str("grid"), Some(ViewMode::Grid));
        assert_eq!(ViewMode::from_str("table"), None);
    }

    #[test]
    fn test_with_preferences() {
        let state = ListingState::with_preferences(SortKey::Newest, ViewMode::List);
        assert_eq!(state.sort, SortKey::Newest);
        assert_eq!(state.view_mode, ViewMode::List);
        assert_eq!(state.category, CategoryToken::All);
    }
}
