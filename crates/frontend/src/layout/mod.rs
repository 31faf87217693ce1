pub mod global_context;
pub mod left;
pub mod top_header;

use crate::shared::theme::palette;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Routed content       |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout" style:background=palette::SURFACE style:color=palette::TEXT>
            <TopHeader />
            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
