//! Recipe Grid Component
//!
//! A container of recipe cards with an empty-state message.

use leptos::prelude::*;

use crate::components::RecipeCard;
use crate::view::RecipeCardView;

#[component]
pub fn RecipeGrid(
    /// DOM id of the container (`recent-recipes-container`, ...)
    container_id: &'static str,
    cards: Signal<Vec<RecipeCardView>>,
    /// Empty message is only shown once this is true
    ready: Signal<bool>,
    empty_message: &'static str,
) -> impl IntoView {
    let is_empty = move || cards.with(|c| c.is_empty());

    view! {
        <div id=container_id class="recipes-grid">
            <Show when=move || ready.get() && is_empty()>
                <p class="text-center">{empty_message}</p>
            </Show>
            <For
                each=move || cards.get()
                key=|card| card.id.clone()
                children=|card| view! { <RecipeCard card=card /> }
            />
        </div>
    }
}
