//! Feature gate for route subtrees.
//!
//! Used as the `view` of a `ParentRoute`: the nested routes are reachable
//! only when the feature is switched on in the deployment's configuration.

use crate::shared::components::empty_state::EmptyState;
use contracts::system::features::{Feature, FeatureConfig};
use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use thaw::*;

use super::query::use_feature_query;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Configuration not resolved yet; render nothing
    Loading,
    Disabled,
    Enabled,
    /// Request failed and there is no cached configuration to fall back on
    Unavailable,
}

impl GateState {
    /// Loading wins over any cached configuration.
    pub fn resolve(
        is_loading: bool,
        data: Option<&FeatureConfig>,
        has_error: bool,
        feature: Feature,
    ) -> Self {
        if is_loading {
            return GateState::Loading;
        }
        match data {
            Some(config) if config.is_enabled(feature) => GateState::Enabled,
            Some(_) => GateState::Disabled,
            None if has_error => GateState::Unavailable,
            None => GateState::Disabled,
        }
    }
}

#[component]
pub fn FeatureGate(feature: Feature) -> impl IntoView {
    let query = use_feature_query();
    query.ensure_loaded();

    let state = Memo::new(move |_| {
        let is_loading = query.is_loading.get();
        let has_error = query.error.with(|e| e.is_some());
        query
            .data
            .with(|data| GateState::resolve(is_loading, data.as_ref(), has_error, feature))
    });

    Effect::new(move |_| {
        log!("feature gate '{}': {:?}", feature.key(), state.get());
    });

    move || match state.get() {
        GateState::Loading => ().into_any(),
        GateState::Disabled => view! {
            <EmptyState description=feature.disabled_message() />
        }
        .into_any(),
        GateState::Unavailable => view! {
            <MessageBar intent=MessageBarIntent::Error>
                <span>"Feature configuration is unavailable"</span>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Transparent
                    on_click=move |_| query.refetch()
                >
                    "Retry"
                </Button>
            </MessageBar>
        }
        .into_any(),
        GateState::Enabled => view! {
            <div class="feature-gate" data-feature=feature.key()>
                <Outlet />
            </div>
        }
        .into_any(),
    }
}

/// Reports section; nested routes require [`Feature::Reporting`].
#[component]
pub fn SiteReportsLayout() -> impl IntoView {
    view! { <FeatureGate feature=Feature::Reporting /> }
}

/// Pool manager section; nested routes require [`Feature::PoolManager`].
#[component]
pub fn PoolManagerLayout() -> impl IntoView {
    view! { <FeatureGate feature=Feature::PoolManager /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(value: serde_json::Value) -> FeatureConfig {
        FeatureConfig::new().with_flag(Feature::Reporting, value)
    }

    #[test]
    fn test_loading_ignores_cached_config() {
        let enabled = config(json!(true));
        assert_eq!(
            GateState::resolve(true, Some(&enabled), false, Feature::Reporting),
            GateState::Loading
        );
        assert_eq!(
            GateState::resolve(true, None, true, Feature::Reporting),
            GateState::Loading
        );
    }

    #[test]
    fn test_falsy_flags_disable() {
        for value in [json!(false), json!(0), json!(""), json!(null)] {
            let c = config(value);
            assert_eq!(
                GateState::resolve(false, Some(&c), false, Feature::Reporting),
                GateState::Disabled
            );
        }
        let absent = FeatureConfig::new();
        assert_eq!(
            GateState::resolve(false, Some(&absent), false, Feature::Reporting),
            GateState::Disabled
        );
    }

    #[test]
    fn test_truthy_flags_enable() {
        for value in [json!(true), json!(1), json!("on"), json!({ "tier": "pro" })] {
            let c = config(value);
            assert_eq!(
                GateState::resolve(false, Some(&c), false, Feature::Reporting),
                GateState::Enabled
            );
        }
    }

    #[test]
    fn test_gates_are_independent() {
        let c = config(json!(true));
        assert_eq!(
            GateState::resolve(false, Some(&c), false, Feature::PoolManager),
            GateState::Disabled
        );
    }

    #[test]
    fn test_error_without_cache_is_unavailable() {
        assert_eq!(
            GateState::resolve(false, None, true, Feature::Reporting),
            GateState::Unavailable
        );
        // A failed refetch keeps serving the cached configuration.
        let c = config(json!(true));
        assert_eq!(
            GateState::resolve(false, Some(&c), true, Feature::Reporting),
            GateState::Enabled
        );
    }

    #[test]
    fn test_reporting_scenario() {
        let steps = [
            (true, None, GateState::Loading),
            (false, Some(config(json!(false))), GateState::Disabled),
            (false, Some(config(json!(true))), GateState::Enabled),
        ];
        for (is_loading, data, expected) in steps {
            assert_eq!(
                GateState::resolve(is_loading, data.as_ref(), false, Feature::Reporting),
                expected
            );
        }
        assert_eq!(
            Feature::Reporting.disabled_message(),
            "Reporting feature is not enabled"
        );
    }
}
