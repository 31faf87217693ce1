use crate::shared::icons::{icon, pool_status_icon, status_icon, Icon};
use crate::shared::theme::Tone;
use contracts::enums::{DeviceStatus, PoolStatus};
use leptos::prelude::*;

/// Icon + label pill coloured by tone.
#[component]
pub fn StatusTag(icon_name: Icon, tone: Tone, #[prop(into)] label: String) -> impl IntoView {
    let title = label.clone();
    view! {
        <span class=tone.class() style:color=tone.color() title=title>
            {icon(icon_name)}
            <span class="status__label">{label}</span>
        </span>
    }
}

#[component]
pub fn DeviceStatusTag(status: DeviceStatus) -> impl IntoView {
    let (icon_name, tone) = status_icon(status);
    view! { <StatusTag icon_name=icon_name tone=tone label=status.display_name() /> }
}

#[component]
pub fn PoolStatusTag(status: PoolStatus) -> impl IntoView {
    let (icon_name, tone) = pool_status_icon(status);
    view! { <StatusTag icon_name=icon_name tone=tone label=status.display_name() /> }
}
