use leptos::prelude::*;
use thaw::*;

/// Neutral loading indicator used while content resolves.
#[component]
pub fn LoadingIndicator(
    #[prop(optional, into)]
    label: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="loading-indicator" aria-busy="true">
            <Spinner size=SpinnerSize::Small />
            {move || label.get().map(|l| view! { <span class="loading-indicator__label">{l}</span> })}
        </div>
    }
}
