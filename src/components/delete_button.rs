//! Delete Recipe Button Component
//!
//! Asks for confirmation, deletes on the backend, then drops the recipe from
//! every list in the store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_api::RecipeId;

use crate::actions::delete_and_remove;
use crate::context::use_app_context;
use crate::store::{store_remove_recipe, use_catalog_store};
use crate::{browser, page::Page};

#[component]
pub fn DeleteRecipeButton(id: RecipeId) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_catalog_store();
    let id = StoredValue::new(id);

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if !browser::confirm("Are you sure you want to delete this recipe?") {
            return;
        }
        let id = id.get_value();
        spawn_local(async move {
            match delete_and_remove(&ctx.api(), &id, |id| store_remove_recipe(&store, id)).await {
                Ok(()) => {
                    ctx.toasts.success("Recipe deleted successfully");
                    // Nothing left to show on the detail page
                    if ctx.page() == Page::Detail {
                        browser::navigate_after(ctx.href("index.html"), browser::REDIRECT_DELAY_MS);
                    }
                }
                Err(e) => {
                    log::error!("Delete of recipe {} failed: {}", id, e);
                    ctx.toasts.error("Error deleting recipe");
                }
            }
        });
    };

    view! {
        <button class="btn btn-danger" on:click=on_click>"Delete"</button>
    }
}
