//! Recipe Book App
//!
//! Identifies the page from the URL once at load, wires the shared handles,
//! and renders that page's component.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use recipe_api::{RecipeClient, RecipeId};

use crate::actions::SubmitMode;
use crate::browser;
use crate::components::{AllRecipesPage, HomePage, NavBar, RecipeDetailPage, RecipeFormPage, SearchPage};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::page::{query_param, DataLoad, FormMode, Page};
use crate::store::CatalogState;
use crate::toast::{ToastStack, Toasts};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let pathname = browser::pathname();
    let (loading, set_loading) = signal(false);
    let toasts = Toasts::new();

    let api = RecipeClient::http(config.api.clone());
    api.busy().observe(move |busy| set_loading.set(busy));

    let ctx = AppContext::new(api, pathname, toasts, loading);
    provide_context(ctx);
    provide_context(Store::new(CatalogState::default()));
    browser::install_global_error_handlers(toasts);

    // Probe the backend once so an outage is reported up front
    let base_url = config.api.base_url.clone();
    spawn_local(async move {
        match ctx.api().check_connection().await {
            Ok(()) => log::info!("Connected to recipe API at {}", base_url),
            Err(e) => {
                log::warn!("Could not reach recipe API at {}: {}", base_url, e);
                toasts.warning("Could not connect to the server. Some features may be unavailable.");
            }
        }
    });

    view! {
        <NavBar />
        <main class="container">
            {page_content(ctx)}
        </main>
        <div id="loading" class="loading" style:display=move || if loading.get() { "flex" } else { "none" }>
            <div class="spinner"></div>
        </div>
        <ToastStack toasts=toasts />
    }
}

fn page_content(ctx: AppContext) -> AnyView {
    let page = ctx.page();
    let config = page.config();

    let id = query_param(&browser::search(), "id").and_then(|raw| RecipeId::parse(&raw));
    if config.requires_id && id.is_none() {
        ctx.toasts.error("Invalid recipe ID");
        browser::navigate_after(ctx.href("index.html"), browser::REDIRECT_DELAY_MS);
        return ().into_any();
    }

    log::debug!("Rendering {:?} with {:?}", page, config);
    let form_page = |mode: SubmitMode| {
        view! {
            <RecipeFormPage
                mode=mode
                image_preview=config.image_preview
                field_validation=config.field_validation
            />
        }
        .into_any()
    };

    match (config.form, config.load, id) {
        (Some(FormMode::Create), _, _) => form_page(SubmitMode::Create),
        (Some(FormMode::Edit), _, Some(id)) => form_page(SubmitMode::Edit(id)),
        (None, DataLoad::Recent, _) => view! { <HomePage /> }.into_any(),
        (None, DataLoad::All, _) => view! { <AllRecipesPage filters=config.category_filters /> }.into_any(),
        (None, DataLoad::RecipeDetail, Some(id)) => view! { <RecipeDetailPage id=id /> }.into_any(),
        _ if config.debounced_search => view! { <SearchPage /> }.into_any(),
        _ => {
            if let Page::Unrecognized(name) = page {
                log::info!("Unrecognized page: {}", name);
            }
            ().into_any()
        }
    }
}
