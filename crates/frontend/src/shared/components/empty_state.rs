use crate::shared::icons::{icon, Icon};
use crate::shared::theme::palette;
use leptos::prelude::*;

/// Standard "nothing here" placeholder.
#[component]
pub fn EmptyState(
    /// Text shown under the icon, rendered verbatim
    #[prop(into)]
    description: String,
    /// Optional actions below the description
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="empty-state" role="status">
            <div class="empty-state__icon" style:color=palette::MUTED>{icon(Icon::Inbox)}</div>
            <div class="empty-state__description">{description}</div>
            {children.map(|c| view! { <div class="empty-state__actions">{c()}</div> })}
        </div>
    }
}
