use crate::routes::paths;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::{icon, Icon};
use crate::system::features::{use_feature_query, GateState};
use contracts::system::features::Feature;
use leptos::prelude::*;
use leptos_router::components::A;

fn section_path(feature: Feature) -> &'static str {
    match feature {
        Feature::Reporting => paths::REPORTS,
        Feature::PoolManager => paths::POOL_MANAGER,
    }
}

fn section_icon(feature: Feature) -> Icon {
    match feature {
        Feature::Reporting => Icon::BarChart,
        Feature::PoolManager => Icon::Server,
    }
}

fn section_status(state: GateState) -> &'static str {
    match state {
        GateState::Loading => "\u{2026}",
        GateState::Enabled => "Enabled",
        GateState::Disabled => "Not enabled",
        GateState::Unavailable => "Unavailable",
    }
}

/// Landing page listing the optional sections and whether they are on.
#[component]
pub fn HomePage() -> impl IntoView {
    let query = use_feature_query();
    query.ensure_loaded();

    view! {
        <div class="page">
            <PageHeader title="MiningOS" icon_name=Icon::Home subtitle="Site operations overview".to_string() />
            <div class="page__content home-sections">
                {Feature::all()
                    .into_iter()
                    .map(|feature| {
                        let status = move || {
                            let is_loading = query.is_loading.get();
                            let has_error = query.error.with(|e| e.is_some());
                            let state = query.data.with(|d| {
                                GateState::resolve(is_loading, d.as_ref(), has_error, feature)
                            });
                            section_status(state)
                        };
                        view! {
                            <A href=section_path(feature)>
                                <div class="home-section">
                                    {icon(section_icon(feature))}
                                    <span class="home-section__title">{feature.label()}</span>
                                    <span class="home-section__status">{status}</span>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::features::FeatureConfig;

    #[test]
    fn test_failed_fetch_reads_unavailable() {
        let state = GateState::resolve(false, None, true, Feature::Reporting);
        assert_eq!(section_status(state), "Unavailable");
    }

    #[test]
    fn test_section_status_follows_flag() {
        let config = FeatureConfig::new().with_flag(Feature::PoolManager, 1);
        let on = GateState::resolve(false, Some(&config), false, Feature::PoolManager);
        let off = GateState::resolve(false, Some(&config), false, Feature::Reporting);
        assert_eq!(section_status(on), "Enabled");
        assert_eq!(section_status(off), "Not enabled");
        assert_eq!(section_status(GateState::Loading), "\u{2026}");
    }
}
