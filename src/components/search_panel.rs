//! Search Page Component
//!
//! Searches as the user types (debounced) and on explicit submit. Results of
//! superseded requests are dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_api::SearchType;

use crate::components::RecipeGrid;
use crate::context::use_app_context;
use crate::debounce::TimeoutScheduler;
use crate::search::{SearchBox, SearchInput};
use crate::store::{store_clear_search, store_set_search_results, use_catalog_store, CatalogStateStoreFields};
use crate::view::RecipeCardView;

fn search_type_label(search_type: SearchType) -> &'static str {
    match search_type {
        SearchType::Name => "Name",
        SearchType::Ingredients => "Ingredients",
        SearchType::Category => "Category",
        SearchType::Tags => "Tags",
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_catalog_store();

    let query = RwSignal::new(String::new());
    let search_type = RwSignal::new(SearchType::default());
    let search_box = StoredValue::new_local(SearchBox::new(TimeoutScheduler));

    let run_search = move |text: String| {
        let ticket = search_box.with_value(|b| b.issue());
        let search_type = search_type.get_untracked();
        log::debug!("Searching {:?} by {}", text, search_type.as_str());
        spawn_local(async move {
            let results = ctx.api().search(&text, search_type).await;
            if search_box.with_value(|b| b.is_current(ticket)) {
                store_set_search_results(&store, results);
            } else {
                log::debug!("Dropping stale results for {:?}", text);
            }
        });
    };

    let on_input = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        let input = search_box.try_update_value(|b| b.input(&raw, run_search));
        if input == Some(SearchInput::Clear) {
            store_clear_search(&store);
        }
        query.set(raw);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = query.get_untracked();
        if let Some(Some(text)) = search_box.try_update_value(|b| b.submit(&raw)) {
            run_search(text);
        }
    };

    let cards = Signal::derive(move || {
        store
            .search_results()
            .read()
            .iter()
            .map(RecipeCardView::from)
            .collect::<Vec<_>>()
    });
    let searched = Signal::derive(move || store.searched().get());

    view! {
        <section class="search-section">
            <h2>"Search Recipes"</h2>
            <form id="search-form" class="search-form" on:submit=on_submit>
                <input
                    type="text"
                    id="search-input"
                    placeholder="Search recipes..."
                    prop:value=move || query.get()
                    on:input=on_input
                />
                <select
                    id="search-type"
                    on:change=move |ev| search_type.set(SearchType::from_str(&event_target_value(&ev)))
                >
                    {SearchType::ALL
                        .into_iter()
                        .map(|option| view! {
                            <option value=option.as_str() selected=move || search_type.get() == option>
                                {search_type_label(option)}
                            </option>
                        })
                        .collect_view()}
                </select>
                <button type="submit" class="btn btn-primary">"Search"</button>
            </form>
            <RecipeGrid
                container_id="search-results-container"
                cards=cards
                ready=searched
                empty_message="No recipes found matching your search."
            />
        </section>
    }
}
