use crate::shared::components::empty_state::EmptyState;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <EmptyState description="Page not found">
            <A href="/">"Back to overview"</A>
        </EmptyState>
    }
}
