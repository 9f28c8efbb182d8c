//! Recipe Card Component

use leptos::prelude::*;

use crate::components::DeleteRecipeButton;
use crate::context::use_app_context;
use crate::view::{RecipeCardView, PLACEHOLDER_IMAGE};

/// Summary card used by the home, list and search pages
#[component]
pub fn RecipeCard(card: RecipeCardView) -> impl IntoView {
    let ctx = use_app_context();
    let RecipeCardView {
        id,
        title,
        image_url,
        description,
        prep_time,
        servings,
        category,
        detail_href,
        edit_href,
    } = card;

    let (image, set_image) = signal(image_url);
    // Broken image links fall back to the placeholder (once)
    let on_image_error = move |_| {
        if image.get_untracked() != PLACEHOLDER_IMAGE {
            set_image.set(PLACEHOLDER_IMAGE.to_string());
        }
    };

    view! {
        <div class="recipe-card" data-category=category.unwrap_or_default()>
            <img
                class="recipe-image"
                src=move || image.get()
                alt=title.clone()
                on:error=on_image_error
            />
            <div class="recipe-card-content">
                <h3>{title}</h3>
                <p>{description}</p>
                <div class="recipe-meta">
                    <span>"⏱️ " {prep_time}</span>
                    <span>"👥 " {servings}</span>
                </div>
                <div class="recipe-actions">
                    <a href=ctx.href(&detail_href) class="btn btn-primary">"View Recipe"</a>
                    <a href=ctx.href(&edit_href) class="btn btn-outline">"Edit"</a>
                    <DeleteRecipeButton id=id />
                </div>
            </div>
        </div>
    }
}
