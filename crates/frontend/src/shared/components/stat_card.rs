use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;

/// Format a measurement with a fixed number of decimals and a unit.
/// Large values are grouped with thin spaces: 12345.6 -> "12 345.6".
pub fn format_measure(value: f64, decimals: usize, unit: &str) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted.clone(), None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('\u{2009}');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    let number = match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    };
    if unit.is_empty() {
        number
    } else {
        format!("{} {}", number, unit)
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    icon_name: Icon,
    /// Pre-formatted value; `None` renders a dash
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "\u{2014}".to_string())}
                </div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_measure() {
        assert_eq!(format_measure(12345.64, 1, "TH/s"), "12\u{2009}345.6 TH/s");
        assert_eq!(format_measure(999.0, 0, ""), "999");
        assert_eq!(format_measure(1000.0, 0, "MWh"), "1\u{2009}000 MWh");
        assert_eq!(format_measure(-21.456, 2, "J/TH"), "-21.46 J/TH");
        assert_eq!(format_measure(-0.001, 1, ""), "0.0");
    }
}
