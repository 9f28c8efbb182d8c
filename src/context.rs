//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use recipe_api::RecipeClient;

use crate::page::{site_href, Page};
use crate::toast::Toasts;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Not `Send`, so it lives in local storage
    api: StoredValue<RecipeClient, LocalStorage>,
    page: StoredValue<Page>,
    pathname: StoredValue<String>,
    pub toasts: Toasts,
    /// True while any API call is in flight - read
    pub loading: ReadSignal<bool>,
}

impl AppContext {
    pub fn new(
        api: RecipeClient,
        pathname: String,
        toasts: Toasts,
        loading: ReadSignal<bool>,
    ) -> Self {
        Self {
            api: StoredValue::new_local(api),
            page: StoredValue::new(Page::from_path(&pathname)),
            pathname: StoredValue::new(pathname),
            toasts,
            loading,
        }
    }

    /// Shared client; clones are cheap and see the same busy state
    pub fn api(&self) -> RecipeClient {
        self.api.get_value()
    }

    pub fn page(&self) -> Page {
        self.page.get_value()
    }

    pub fn pathname(&self) -> String {
        self.pathname.get_value()
    }

    /// Resolve a site link relative to the current page
    pub fn href(&self, target: &str) -> String {
        self.pathname.with_value(|path| site_href(path, target))
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
