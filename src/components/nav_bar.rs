//! Navigation Bar Component
//!
//! Site links with a hamburger toggle for narrow screens.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::page::{is_active_link, NAV_LINKS};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let (menu_open, set_menu_open) = signal(false);
    let nav_ref = NodeRef::<leptos::html::Nav>::new();

    // Clicking anywhere outside the bar closes the menu
    let _ = window_event_listener(leptos::ev::click, move |ev| {
        let Some(nav) = nav_ref.get_untracked() else { return };
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|node| nav.contains(Some(&node)));
        if !inside {
            set_menu_open.set(false);
        }
    });

    let pathname = ctx.pathname();
    let open_class = move |base: &'static str| {
        if menu_open.get() {
            format!("{} active", base)
        } else {
            base.to_string()
        }
    };

    view! {
        <nav class="navbar" node_ref=nav_ref>
            <a class="nav-logo" href=ctx.href("index.html")>"Recipe Book"</a>
            <ul class=move || open_class("nav-menu")>
                {NAV_LINKS.iter().map(|(target, label)| {
                    let class = if is_active_link(target, &pathname) { "nav-link active" } else { "nav-link" };
                    view! {
                        <li class="nav-item">
                            <a class=class href=ctx.href(target) on:click=move |_| set_menu_open.set(false)>
                                {*label}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <div
                class=move || open_class("hamburger")
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                <span class="bar"></span>
                <span class="bar"></span>
                <span class="bar"></span>
            </div>
        </nav>
    }
}
