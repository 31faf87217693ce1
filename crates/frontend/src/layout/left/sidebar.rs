//! Sidebar navigation.
//!
//! Gated sections stay listed even when their feature is off; the route's
//! feature gate explains why the page is empty.

use crate::routes::paths;
use crate::shared::icons::{icon, Icon};
use crate::system::features::use_feature_query;
use contracts::system::features::Feature;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: Icon,
    feature: Option<Feature>,
}

const MENU: &[MenuItem] = &[
    MenuItem {
        path: paths::HOME,
        label: "Overview",
        icon: Icon::Home,
        feature: None,
    },
    MenuItem {
        path: paths::REPORTS,
        label: "Site reports",
        icon: Icon::BarChart,
        feature: Some(Feature::Reporting),
    },
    MenuItem {
        path: paths::POOL_MANAGER,
        label: "Pool manager",
        icon: Icon::Server,
        feature: Some(Feature::PoolManager),
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let query = use_feature_query();

    view! {
        <nav class="app-sidebar__content">
            {MENU
                .iter()
                .map(|item| {
                    let item = *item;
                    let dimmed = move || match item.feature {
                        Some(feature) => query
                            .data
                            .with(|d| !d.as_ref().is_some_and(|c| c.is_enabled(feature))),
                        None => false,
                    };
                    view! {
                        <A href=item.path>
                            <div class="app-sidebar__item" class:app-sidebar__item--dimmed=dimmed>
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                                {icon(Icon::ChevronRight)}
                            </div>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
