use crate::shared::date_utils::{month_bounds, parse_input_date, previous_month_bounds};
use chrono::{Datelike, NaiveDate, Utc};
use leptos::prelude::*;
use thaw::*;

const INPUT_FORMAT: &str = "%Y-%m-%d";

/// `Some` only for a usable range (`from <= to`).
pub fn accept_range(from: NaiveDate, to: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    (from <= to).then_some((from, to))
}

/// Put the input back to the value the page is actually using.
fn reset_input(ev: &leptos::ev::Event, value: NaiveDate) {
    let input = event_target::<web_sys::HtmlInputElement>(ev);
    input.set_value(&value.format(INPUT_FORMAT).to_string());
}

/// Two native date inputs plus quick "this month" / "previous month" buttons.
///
/// Changes are reported through `on_change`; invalid or inverted input is
/// rejected and the input is reset, so the caller always receives `from <= to`.
#[component]
pub fn DateRangePicker(
    #[prop(into)] date_from: Signal<NaiveDate>,
    #[prop(into)] date_to: Signal<NaiveDate>,
    on_change: Callback<(NaiveDate, NaiveDate)>,
) -> impl IntoView {
    let emit = move |from: NaiveDate, to: NaiveDate| -> bool {
        match accept_range(from, to) {
            Some(range) => {
                on_change.run(range);
                true
            }
            None => {
                log::debug!("DateRangePicker: ignoring inverted range {} > {}", from, to);
                false
            }
        }
    };

    let on_from_input = move |ev: leptos::ev::Event| {
        let current = date_from.get_untracked();
        let accepted = parse_input_date(&event_target_value(&ev))
            .is_some_and(|from| emit(from, date_to.get_untracked()));
        if !accepted {
            reset_input(&ev, current);
        }
    };

    let on_to_input = move |ev: leptos::ev::Event| {
        let current = date_to.get_untracked();
        let accepted = parse_input_date(&event_target_value(&ev))
            .is_some_and(|to| emit(date_from.get_untracked(), to));
        if !accepted {
            reset_input(&ev, current);
        }
    };

    let on_current_month = move |_| {
        let today = Utc::now().date_naive();
        if let Some((from, to)) = month_bounds(today.year(), today.month()) {
            emit(from, to);
        }
    };

    let on_previous_month = move |_| {
        if let Some((from, to)) = previous_month_bounds(date_from.get_untracked()) {
            emit(from, to);
        }
    };

    view! {
        <div class="date-range-picker">
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=move || date_from.get().format(INPUT_FORMAT).to_string()
                on:change=on_from_input
            />
            <span class="date-range-picker__sep">"\u{2013}"</span>
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=move || date_to.get().format(INPUT_FORMAT).to_string()
                on:change=on_to_input
            />
            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=on_current_month>
                "This month"
            </Button>
            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=on_previous_month>
                "Previous month"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert_eq!(accept_range(d(2026, 10, 18), d(2026, 10, 1)), None);
    }

    #[test]
    fn test_ordered_range_is_accepted() {
        let single_day = d(2026, 10, 5);
        assert_eq!(accept_range(single_day, single_day), Some((single_day, single_day)));
        assert_eq!(
            accept_range(d(2026, 10, 1), d(2026, 10, 18)),
            Some((d(2026, 10, 1), d(2026, 10, 18)))
        );
    }
}
