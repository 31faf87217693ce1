use crate::shared::icons::{icon, Icon};
use crate::shared::theme::palette;
use leptos::prelude::*;

/// Page title bar with an optional icon, subtitle and action slot.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] icon_name: Option<Icon>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title" style:color=palette::BRAND>
                    {icon_name.map(icon)}
                    <span>{title}</span>
                </h1>
                {move || subtitle.get().map(|s| view! { <div class="page-header__subtitle">{s}</div> })}
            </div>
            {children.map(|c| view! { <div class="page-header__actions">{c()}</div> })}
        </div>
    }
}
