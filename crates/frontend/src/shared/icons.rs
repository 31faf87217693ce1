//! Inline SVG icons.
//!
//! Icons are addressed by the closed [`Icon`] enum so every lookup is checked
//! at compile time. Status-driven icons go through the tables in
//! [`status_icon`] and [`pool_status_icon`].

use crate::shared::theme::Tone;
use contracts::enums::{DeviceStatus, PoolStatus};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    BarChart,
    Server,
    Activity,
    Zap,
    Moon,
    Power,
    AlertTriangle,
    Wrench,
    CheckCircle,
    PauseCircle,
    WifiOff,
    Inbox,
    ChevronRight,
    Menu,
}

/// Icon and tone for a miner status.
pub fn status_icon(status: DeviceStatus) -> (Icon, Tone) {
    match status {
        DeviceStatus::Mining => (Icon::Activity, Tone::Success),
        DeviceStatus::Sleeping => (Icon::Moon, Tone::Muted),
        DeviceStatus::Offline => (Icon::Power, Tone::Muted),
        DeviceStatus::Error => (Icon::AlertTriangle, Tone::Danger),
        DeviceStatus::Maintenance => (Icon::Wrench, Tone::Warning),
    }
}

/// Icon and tone for a pool connection state.
pub fn pool_status_icon(status: PoolStatus) -> (Icon, Tone) {
    match status {
        PoolStatus::Active => (Icon::CheckCircle, Tone::Success),
        PoolStatus::Inactive => (Icon::PauseCircle, Tone::Muted),
        PoolStatus::Unreachable => (Icon::WifiOff, Tone::Danger),
    }
}

pub fn icon(name: Icon) -> AnyView {
    match name {
        Icon::Home => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>
                <path d="M9 22V12h6v10"/>
            </svg>
        }.into_any(),
        Icon::BarChart => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M12 20V10"/>
                <path d="M18 20V4"/>
                <path d="M6 20v-4"/>
            </svg>
        }.into_any(),
        Icon::Server => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <rect x="2" y="2" width="20" height="8" rx="2"/>
                <rect x="2" y="14" width="20" height="8" rx="2"/>
                <path d="M6 6h.01"/>
                <path d="M6 18h.01"/>
            </svg>
        }.into_any(),
        Icon::Activity => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <polyline points="22 12 18 12 15 21 9 3 6 12 2 12"/>
            </svg>
        }.into_any(),
        Icon::Zap => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>
            </svg>
        }.into_any(),
        Icon::Moon => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"/>
            </svg>
        }.into_any(),
        Icon::Power => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M18.36 6.64a9 9 0 1 1-12.73 0"/>
                <path d="M12 2v10"/>
            </svg>
        }.into_any(),
        Icon::AlertTriangle => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/>
                <path d="M12 9v4"/>
                <path d="M12 17h.01"/>
            </svg>
        }.into_any(),
        Icon::Wrench => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"/>
            </svg>
        }.into_any(),
        Icon::CheckCircle => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/>
                <polyline points="22 4 12 14.01 9 11.01"/>
            </svg>
        }.into_any(),
        Icon::PauseCircle => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <circle cx="12" cy="12" r="10"/>
                <path d="M10 15V9"/>
                <path d="M14 15V9"/>
            </svg>
        }.into_any(),
        Icon::WifiOff => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M1 1l22 22"/>
                <path d="M16.72 11.06A10.94 10.94 0 0 1 19 12.55"/>
                <path d="M5 12.55a10.94 10.94 0 0 1 5.17-2.39"/>
                <path d="M8.53 16.11a6 6 0 0 1 6.95 0"/>
                <path d="M12 20h.01"/>
            </svg>
        }.into_any(),
        Icon::Inbox => view! {
            <svg width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <polyline points="22 12 16 12 14 15 10 15 8 12 2 12"/>
                <path d="M5.45 5.11L2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11z"/>
            </svg>
        }.into_any(),
        Icon::ChevronRight => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <polyline points="9 18 15 12 9 6"/>
            </svg>
        }.into_any(),
        Icon::Menu => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M3 12h18"/>
                <path d="M3 6h18"/>
                <path d="M3 18h18"/>
            </svg>
        }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_error_status_is_danger() {
        let faulty: Vec<_> = DeviceStatus::all()
            .into_iter()
            .filter(|s| status_icon(*s).1 == Tone::Danger)
            .collect();
        assert_eq!(faulty, vec![DeviceStatus::Error]);
        assert_eq!(status_icon(DeviceStatus::Mining), (Icon::Activity, Tone::Success));
    }

    #[test]
    fn test_pool_status_icons() {
        assert_eq!(pool_status_icon(PoolStatus::Unreachable).0, Icon::WifiOff);
        assert_eq!(pool_status_icon(PoolStatus::Active).1, Tone::Success);
    }
}
