//! Site reports: one lazily loaded tab per report kind.

use super::api::fetch_report;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::lazy_tab::{LazyTab, TabPayload};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{format_measure, StatCard};
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::Icon;
use chrono::{NaiveDate, Utc};
use contracts::enums::ReportKind;
use contracts::reports::{ReportQuery, ReportSeries};
use leptos::prelude::*;
use thaw::*;

/// Site shown until a site selector exists in the shell.
pub const DEFAULT_SITE_ID: &str = "default";

fn kind_icon(kind: ReportKind) -> Icon {
    match kind {
        ReportKind::Hashrate => Icon::Activity,
        ReportKind::Efficiency => Icon::Zap,
        ReportKind::Energy => Icon::Power,
    }
}

fn render_report(series: ReportSeries, data: Option<TabPayload>) -> AnyView {
    let site = data
        .as_ref()
        .and_then(|d| d.get("site_id"))
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_SITE_ID)
        .to_string();

    if series.points.is_empty() {
        let description = format!(
            "No {} data for site {}",
            series.kind.display_name().to_lowercase(),
            site
        );
        return view! { <EmptyState description=description /> }.into_any();
    }

    let unit = series.unit().to_string();
    let measure = {
        let unit = unit.clone();
        move |v: f64| format_measure(v, 2, &unit)
    };

    let average = series.average().map(&measure);
    let peak = series.peak().map(&measure);
    let latest = series.latest().map(|p| measure(p.value));
    let latest_at = series.latest().map(|p| format_timestamp(&p.timestamp));
    let icon_name = kind_icon(series.kind);

    let rows = series
        .points
        .iter()
        .rev()
        .map(|p| {
            let at = format_timestamp(&p.timestamp);
            let value = measure(p.value);
            view! {
                <TableRow>
                    <TableCell>{at}</TableCell>
                    <TableCell>{value}</TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="report">
            <div class="report__cards">
                <StatCard label="Average" icon_name=icon_name value=Signal::derive(move || average.clone()) />
                <StatCard label="Peak" icon_name=icon_name value=Signal::derive(move || peak.clone()) />
                <StatCard
                    label="Latest"
                    icon_name=icon_name
                    value=Signal::derive(move || latest.clone())
                    subtitle=latest_at.unwrap_or_default()
                />
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Time"</TableHeaderCell>
                        <TableHeaderCell>{format!("Value, {}", unit)}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
        </div>
    }
    .into_any()
}

#[component]
pub fn SiteReportsPage() -> impl IntoView {
    let today = Utc::now().date_naive();
    let query = RwSignal::new(ReportQuery::month_to_date(DEFAULT_SITE_ID, today));
    let selected_tab = RwSignal::new(ReportKind::Hashrate.code().to_string());

    let date_from = Signal::derive(move || query.with(|q| q.date_from));
    let date_to = Signal::derive(move || query.with(|q| q.date_to));
    let on_range_change = Callback::new(move |(from, to): (NaiveDate, NaiveDate)| {
        query.update(|q| {
            q.date_from = from;
            q.date_to = to;
        });
    });

    view! {
        <div class="page page--dashboard">
            <PageHeader title="Site reports" icon_name=Icon::BarChart>
                <DateRangePicker date_from=date_from date_to=date_to on_change=on_range_change />
            </PageHeader>
            <TabList selected_value=selected_tab>
                {ReportKind::all()
                    .into_iter()
                    .map(|kind| view! { <Tab value=kind.code()>{kind.display_name()}</Tab> })
                    .collect_view()}
            </TabList>
            <div class="page__content">
                {move || {
                    let kind = ReportKind::from_code(&selected_tab.get())
                        .unwrap_or(ReportKind::Hashrate);
                    let q = query.get();
                    let payload = serde_json::to_value(&q).ok();
                    view! {
                        <LazyTab
                            load={fetch_report(kind, q)}
                            content=render_report
                            data=payload
                            loading_label=format!("Loading {} report", kind.display_name().to_lowercase())
                        />
                    }
                }}
            </div>
        </div>
    }
}
