//! LazyTab - deferred rendering boundary for tab content
//!
//! The tab's content is rendered only after its `load` future resolves.
//! Until then a [`LoadingIndicator`] is shown; a failed load is shown as an
//! error bar instead of spinning forever.
//!
//! ```ignore
//! view! {
//!     <LazyTab
//!         load={fetch_json::<ReportSeries>("/api/reports/hashrate")}
//!         content=render_series
//!         data=Some(serde_json::json!({ "site_id": "site-1" }))
//!     />
//! }
//! ```

use super::loading::LoadingIndicator;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use thaw::*;

/// Opaque data handed to tab content untouched.
pub type TabPayload = serde_json::Value;

/// Renders a loaded resource together with the tab payload.
pub type TabContent<T> = fn(T, Option<TabPayload>) -> AnyView;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    /// Apply the outcome of the load future. Only `Pending` can move;
    /// `Ready` and `Failed` are terminal.
    pub fn settle(self, outcome: Result<T, String>) -> Self {
        match self {
            LoadState::Pending => match outcome {
                Ok(value) => LoadState::Ready(value),
                Err(e) => LoadState::Failed(e),
            },
            settled => settled,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }
}

/// Pick what to render for `state`. The payload goes to `content` as given.
pub fn select_view<T, V>(
    state: &LoadState<T>,
    data: Option<TabPayload>,
    content: impl FnOnce(T, Option<TabPayload>) -> V,
    pending: impl FnOnce() -> V,
    failed: impl FnOnce(&str) -> V,
) -> V
where
    T: Clone,
{
    match state {
        LoadState::Pending => pending(),
        LoadState::Ready(value) => content(value.clone(), data),
        LoadState::Failed(e) => failed(e),
    }
}

#[component]
pub fn LazyTab<T, Fut>(
    /// Resolves with whatever `content` needs to render
    load: Fut,
    /// Tab content, called once the load succeeds
    content: TabContent<T>,
    /// Passed through to `content` unchanged
    #[prop(optional_no_strip)]
    data: Option<TabPayload>,
    /// Text next to the spinner
    #[prop(optional, into)]
    loading_label: MaybeProp<String>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = RwSignal::new(LoadState::<T>::Pending);

    spawn_local(async move {
        let outcome = load.await;
        if let Err(e) = &outcome {
            log::warn!("LazyTab load failed: {}", e);
        }
        let settled = state
            .try_update(|s| {
                if !s.is_pending() {
                    return false;
                }
                let current = std::mem::replace(s, LoadState::Pending);
                *s = current.settle(outcome);
                true
            })
            .unwrap_or(false);
        if settled {
            log!("LazyTab settled");
        }
    });

    let data = StoredValue::new(data);

    move || {
        state.with(|s| {
            select_view(
                s,
                data.get_value(),
                content,
                || view! { <LoadingIndicator label=loading_label /> }.into_any(),
                |e| {
                    let message = e.to_string();
                    view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            <span>{message}</span>
                        </MessageBar>
                    }
                    .into_any()
                },
            )
        })
    }
}
