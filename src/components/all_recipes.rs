//! All Recipes Page Component
//!
//! Full catalog, optionally with category filter buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::RecipeGrid;
use crate::context::use_app_context;
use crate::store::{store_prune_filter, store_visible_cards, use_catalog_store, CatalogStateStoreFields};
use crate::view::{category_filters, FILTER_ALL};

#[component]
pub fn AllRecipesPage(filters: bool) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_catalog_store();
    let (loaded, set_loaded) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            let recipes = ctx.api().list_all().await;
            log::info!("Loaded {} recipes", recipes.len());
            store.recipes().set(recipes);
            set_loaded.set(true);
        });
    });

    // A delete can remove the last recipe of the selected category
    Effect::new(move |_| store_prune_filter(&store));

    let filter_values = move || category_filters(&store.recipes().read());
    let cards = Signal::derive(move || store_visible_cards(&store));

    view! {
        <section class="all-recipes">
            <h2>"All Recipes"</h2>
            {filters.then(|| view! {
                <div class="recipe-filters">
                    <For
                        each=filter_values
                        key=|filter| filter.clone()
                        children=move |filter| {
                            let value = filter.clone();
                            let is_active = move || store.active_filter().get() == value;
                            let data_filter = filter.clone();
                            let label = if filter == FILTER_ALL { "All".to_string() } else { filter.clone() };
                            view! {
                                <button
                                    class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                                    data-filter=data_filter
                                    on:click=move |_| store.active_filter().set(filter.clone())
                                >
                                    {label}
                                </button>
                            }
                        }
                    />
                </div>
            })}
            <RecipeGrid
                container_id="all-recipes-container"
                cards=cards
                ready=loaded.into()
                empty_message="No recipes available. Add the first one!"
            />
        </section>
    }
}
