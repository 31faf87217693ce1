//! TopHeader - application top bar with the sidebar toggle and brand.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <header class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=move |_| ctx.toggle_left()
                title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
            >
                {icon(Icon::Menu)}
            </button>
            <div class="top-header__brand">
                <span class="top-header__title">"MiningOS"</span>
            </div>
        </header>
    }
}
