//! Recipe Detail Page Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_api::{ApiError, RecipeId};

use crate::components::DeleteRecipeButton;
use crate::context::use_app_context;
use crate::store::{use_catalog_store, CatalogStateStoreFields};
use crate::view::{RecipeDetailView, TextList};

#[component]
pub fn RecipeDetailPage(id: RecipeId) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_catalog_store();

    Effect::new(move |_| {
        let id = id.clone();
        spawn_local(async move {
            match ctx.api().fetch(&id).await {
                Ok(recipe) => store.current().set(Some(recipe)),
                Err(ApiError::NotFound(_)) => ctx.toasts.error("Recipe not found"),
                Err(e) => {
                    log::error!("Loading recipe {} failed: {}", id, e);
                    ctx.toasts.error("Error loading recipe details");
                }
            }
        });
    });

    let detail = move || store.current().read().as_ref().map(RecipeDetailView::from);

    view! {
        <div id="recipe-detail-container">
            {move || detail().map(|detail| view! { <RecipeDetail detail=detail /> })}
        </div>
    }
}

#[component]
fn RecipeDetail(detail: RecipeDetailView) -> impl IntoView {
    let ctx = use_app_context();
    let RecipeDetailView {
        id,
        title,
        image_url,
        meta,
        description,
        ingredients,
        instructions,
        tags,
        created,
        updated,
        edit_href,
    } = detail;
    let image_alt = title.clone();

    view! {
        <div class="recipe-detail">
            <div class="recipe-header">
                <h1>{title}</h1>
                <div class="recipe-actions">
                    <a href=ctx.href(&edit_href) class="btn btn-primary">"Edit"</a>
                    <DeleteRecipeButton id=id />
                </div>
            </div>

            {image_url.map(|src| view! { <img src=src alt=image_alt class="recipe-detail-image" /> })}

            <div class="recipe-meta-detail">
                {meta.into_iter().map(|item| view! {
                    <div class="meta-item">
                        <strong>{item.label} ": "</strong>
                        {item.value}
                    </div>
                }).collect_view()}
            </div>

            {description.map(|text| view! {
                <div class="recipe-description">
                    <h3>"Description"</h3>
                    <p>{text}</p>
                </div>
            })}

            <div class="recipe-ingredients">
                <h3>"Ingredients"</h3>
                <div class="ingredients-list"><TextListView list=ingredients /></div>
            </div>

            <div class="recipe-instructions">
                <h3>"Instructions"</h3>
                <div class="instructions-list"><TextListView list=instructions /></div>
            </div>

            {tags.map(|tags| view! {
                <div class="recipe-tags">
                    <h3>"Tags"</h3>
                    <p>{tags}</p>
                </div>
            })}

            <div class="recipe-dates">
                {created.map(|date| view! { <p><small>"Created: " {date}</small></p> })}
                {updated.map(|date| view! { <p><small>"Updated: " {date}</small></p> })}
            </div>
        </div>
    }
}

#[component]
fn TextListView(list: TextList) -> impl IntoView {
    if list.is_empty() {
        return view! { <p>{list.empty_message}</p> }.into_any();
    }
    let items = list
        .items
        .into_iter()
        .map(|item| view! { <li>{item}</li> })
        .collect_view();
    if list.ordered {
        view! { <ol>{items}</ol> }.into_any()
    } else {
        view! { <ul>{items}</ul> }.into_any()
    }
}
