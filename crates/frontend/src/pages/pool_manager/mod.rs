use crate::shared::api_utils::fetch_json;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::lazy_tab::{LazyTab, TabPayload};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{format_measure, StatCard};
use crate::shared::components::status_tag::{DeviceStatusTag, PoolStatusTag};
use crate::shared::icons::Icon;
use contracts::enums::PoolStatus;
use contracts::pools::PoolSummary;
use leptos::prelude::*;
use thaw::*;

pub const POOLS_PATH: &str = "/api/pools";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PoolTotals {
    pub active: usize,
    pub unreachable: usize,
    pub workers: u32,
    pub hashrate_ths: f64,
}

/// Aggregates for the summary cards. Hashrate only counts active pools.
pub fn pool_totals(pools: &[PoolSummary]) -> PoolTotals {
    pools.iter().fold(PoolTotals::default(), |mut acc, pool| {
        match pool.status {
            PoolStatus::Active => {
                acc.active += 1;
                acc.hashrate_ths += pool.hashrate_ths;
            }
            PoolStatus::Unreachable => acc.unreachable += 1,
            PoolStatus::Inactive => {}
        }
        acc.workers += pool.worker_count;
        acc
    })
}

fn render_pools(pools: Vec<PoolSummary>, _data: Option<TabPayload>) -> AnyView {
    if pools.is_empty() {
        return view! { <EmptyState description="No pools configured" /> }.into_any();
    }

    let totals = pool_totals(&pools);
    let active = format!("{} / {}", totals.active, pools.len());
    let hashrate = format_measure(totals.hashrate_ths, 1, "TH/s");
    let workers = totals.workers.to_string();

    let rows = pools
        .into_iter()
        .map(|pool| {
            let hashing = pool.hashing_miners();
            let miners = pool.miners.clone();
            view! {
                <TableRow>
                    <TableCell>
                        <div class="pool__name">{pool.name.clone()}</div>
                        <div class="pool__url">{pool.url.clone()}</div>
                    </TableCell>
                    <TableCell><PoolStatusTag status=pool.status /></TableCell>
                    <TableCell>{pool.worker_count}</TableCell>
                    <TableCell>{format_measure(pool.hashrate_ths, 1, "TH/s")}</TableCell>
                    <TableCell>
                        <span class="pool__hashing">{format!("{} hashing", hashing)}</span>
                        <div class="pool__miners">
                            {miners
                                .into_iter()
                                .map(|m| view! {
                                    <div class="pool__miner">
                                        <span>{m.miner_id}</span>
                                        <DeviceStatusTag status=m.status />
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="pools">
            <div class="pools__cards">
                <StatCard label="Active pools" icon_name=Icon::Server value=Signal::derive(move || Some(active.clone())) />
                <StatCard label="Hashrate" icon_name=Icon::Activity value=Signal::derive(move || Some(hashrate.clone())) />
                <StatCard
                    label="Workers"
                    icon_name=Icon::Zap
                    value=Signal::derive(move || Some(workers.clone()))
                    subtitle=format!("{} unreachable", totals.unreachable)
                />
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Pool"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Workers"</TableHeaderCell>
                        <TableHeaderCell>"Hashrate"</TableHeaderCell>
                        <TableHeaderCell>"Miners"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
        </div>
    }
    .into_any()
}

#[component]
pub fn PoolManagerPage() -> impl IntoView {
    let reload = RwSignal::new(0u32);

    view! {
        <div class="page">
            <PageHeader title="Pool manager" icon_name=Icon::Server>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| reload.update(|n| *n += 1)>
                    "Refresh"
                </Button>
            </PageHeader>
            <div class="page__content">
                {move || {
                    reload.track();
                    view! {
                        <LazyTab
                            load={fetch_json::<Vec<PoolSummary>>(POOLS_PATH)}
                            content=render_pools
                            loading_label="Loading pools"
                        />
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(id: &str, status: PoolStatus, workers: u32, hashrate: f64) -> PoolSummary {
        PoolSummary {
            id: id.into(),
            name: id.into(),
            url: format!("stratum+tcp://{}.example:3333", id),
            status,
            worker_count: workers,
            hashrate_ths: hashrate,
            miners: vec![],
        }
    }

    #[test]
    fn test_pool_totals() {
        let pools = vec![
            pool("a", PoolStatus::Active, 10, 1200.0),
            pool("b", PoolStatus::Active, 5, 600.5),
            pool("c", PoolStatus::Unreachable, 3, 90.0),
            pool("d", PoolStatus::Inactive, 0, 0.0),
        ];
        let totals = pool_totals(&pools);
        assert_eq!(totals.active, 2);
        assert_eq!(totals.unreachable, 1);
        assert_eq!(totals.workers, 18);
        assert_eq!(totals.hashrate_ths, 1800.5);
    }

    #[test]
    fn test_empty_totals() {
        assert_eq!(pool_totals(&[]), PoolTotals::default());
    }
}
