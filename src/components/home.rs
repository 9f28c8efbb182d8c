//! Home Page Component
//!
//! Most recently added recipes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::RecipeGrid;
use crate::context::use_app_context;
use crate::store::{use_catalog_store, CatalogStateStoreFields};
use crate::view::RecipeCardView;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_catalog_store();
    let (loaded, set_loaded) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            let recent = ctx.api().recent_recipes().await;
            log::info!("Loaded {} recent recipes", recent.len());
            store.recipes().set(recent);
            set_loaded.set(true);
        });
    });

    let cards = Signal::derive(move || {
        store
            .recipes()
            .read()
            .iter()
            .map(RecipeCardView::from)
            .collect::<Vec<_>>()
    });

    view! {
        <section class="recent-recipes">
            <h2>"Recent Recipes"</h2>
            <RecipeGrid
                container_id="recent-recipes-container"
                cards=cards
                ready=loaded.into()
                empty_message="No recipes available. Add the first one!"
            />
            <div class="text-center">
                <a href=ctx.href("all-recipes.html") class="btn btn-outline">"See all recipes"</a>
            </div>
        </section>
    }
}
