use crate::layout::Shell;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use crate::pages::pool_manager::PoolManagerPage;
use crate::pages::reports::SiteReportsPage;
use crate::system::features::guard::{PoolManagerLayout, SiteReportsLayout};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <ParentRoute path=path!("/reports") view=SiteReportsLayout>
                        <Route path=path!("") view=SiteReportsPage />
                    </ParentRoute>
                    <ParentRoute path=path!("/pool-manager") view=PoolManagerLayout>
                        <Route path=path!("") view=PoolManagerPage />
                    </ParentRoute>
                </Routes>
            </Shell>
        </Router>
    }
}
