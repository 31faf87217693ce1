use contracts::enums::ReportKind;
use contracts::reports::{ReportQuery, ReportSeries};

use crate::shared::api_utils::fetch_json;

/// `/api/reports/{kind}?site_id=..&date_from=..&date_to=..`
pub fn report_path(kind: ReportKind, query: &ReportQuery) -> Result<String, String> {
    let qs = serde_qs::to_string(query)
        .map_err(|e| format!("Failed to encode report query: {}", e))?;
    Ok(format!("/api/reports/{}?{}", kind.code(), qs))
}

pub async fn fetch_report(kind: ReportKind, query: ReportQuery) -> Result<ReportSeries, String> {
    if !query.is_valid() {
        return Err(format!(
            "Invalid report period {} \u{2013} {}",
            query.date_from, query.date_to
        ));
    }
    let path = report_path(kind, &query)?;
    fetch_json::<ReportSeries>(&path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_report_path() {
        let query = ReportQuery {
            site_id: "site-1".into(),
            date_from: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        };
        assert_eq!(
            report_path(ReportKind::Efficiency, &query).unwrap(),
            "/api/reports/efficiency?site_id=site-1&date_from=2026-10-01&date_to=2026-10-18"
        );
    }
}
