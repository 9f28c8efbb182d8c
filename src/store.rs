//! Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use recipe_api::{Recipe, RecipeId};

use crate::view::{effective_filter, matches_filter, RecipeCardView, FILTER_ALL};

/// Recipes currently shown by the page
#[derive(Clone, Debug, Store)]
pub struct CatalogState {
    /// Cards of the home (recent) or all-recipes page
    pub recipes: Vec<Recipe>,
    /// Cards of the search page
    pub search_results: Vec<Recipe>,
    /// Whether a search has completed since the box was last cleared
    pub searched: bool,
    /// Active category filter (`all` shows every card)
    pub active_filter: String,
    /// Recipe loaded by the detail page
    pub current: Option<Recipe>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            recipes: Vec::new(),
            search_results: Vec::new(),
            searched: false,
            active_filter: FILTER_ALL.to_string(),
            current: None,
        }
    }
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Remove a recipe from every list it appears in
pub fn store_remove_recipe(store: &CatalogStore, recipe_id: &RecipeId) {
    store.recipes().write().retain(|r| &r.id != recipe_id);
    store.search_results().write().retain(|r| &r.id != recipe_id);
    let is_current = store
        .current()
        .read()
        .as_ref()
        .is_some_and(|r| &r.id == recipe_id);
    if is_current {
        store.current().set(None);
    }
}

pub fn store_set_search_results(store: &CatalogStore, results: Vec<Recipe>) {
    store.search_results().set(results);
    store.searched().set(true);
}

pub fn store_clear_search(store: &CatalogStore) {
    store.search_results().set(Vec::new());
    store.searched().set(false);
}

/// Reset the active filter to `all` once no recipe has its category
pub fn store_prune_filter(store: &CatalogStore) {
    let active = store.active_filter().get();
    let effective = effective_filter(&active, &store.recipes().read());
    if effective != active {
        store.active_filter().set(effective);
    }
}

/// Cards of `recipes` passing the active filter
pub fn store_visible_cards(store: &CatalogStore) -> Vec<RecipeCardView> {
    let recipes = store.recipes().read();
    let filter = effective_filter(&store.active_filter().get(), &recipes);
    let cards = recipes
        .iter()
        .map(RecipeCardView::from)
        .filter(|card| matches_filter(card, &filter))
        .collect();
    cards
}
