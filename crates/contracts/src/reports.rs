use crate::enums::ReportKind;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Filter for site reports. Passed to every report tab as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    pub site_id: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

impl ReportQuery {
    /// First day of `today`'s month up to `today`
    pub fn month_to_date(site_id: &str, today: NaiveDate) -> Self {
        let date_from = today.with_day(1).unwrap_or(today);
        Self {
            site_id: site_id.to_string(),
            date_from,
            date_to: today,
        }
    }

    /// Inverted ranges are treated as empty by the services; reject them early.
    pub fn is_valid(&self) -> bool {
        !self.site_id.is_empty() && self.date_from <= self.date_to
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPoint {
    /// ISO 8601 timestamp
    pub timestamp: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSeries {
    pub kind: ReportKind,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub points: Vec<ReportPoint>,
}

impl ReportSeries {
    pub fn unit(&self) -> &str {
        self.unit.as_deref().unwrap_or(self.kind.default_unit())
    }

    pub fn average(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        let sum: f64 = self.points.iter().map(|p| p.value).sum();
        Some(sum / self.points.len() as f64)
    }

    pub fn peak(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }

    pub fn latest(&self) -> Option<&ReportPoint> {
        self.points.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> ReportSeries {
        ReportSeries {
            kind: ReportKind::Hashrate,
            unit: None,
            points: values
                .iter()
                .enumerate()
                .map(|(i, v)| ReportPoint {
                    timestamp: format!("2026-10-{:02}T00:00:00Z", i + 1),
                    value: *v,
                })
                .collect(),
        }
    }

    #[test]
    fn test_aggregates() {
        let s = series(&[100.0, 140.0, 120.0]);
        assert_eq!(s.average(), Some(120.0));
        assert_eq!(s.peak(), Some(140.0));
        assert_eq!(s.latest().map(|p| p.value), Some(120.0));
        assert_eq!(s.unit(), "TH/s");
    }

    #[test]
    fn test_empty_series() {
        let s = series(&[]);
        assert_eq!(s.average(), None);
        assert_eq!(s.peak(), None);
    }

    #[test]
    fn test_missing_fields_deserialize() {
        let s: ReportSeries = serde_json::from_str(r#"{"kind": "energy"}"#).unwrap();
        assert_eq!(s.kind, ReportKind::Energy);
        assert_eq!(s.unit(), "MWh");
        assert!(s.points.is_empty());
    }

    #[test]
    fn test_month_to_date() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let q = ReportQuery::month_to_date("site-1", today);
        assert_eq!(q.date_from, NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
        assert_eq!(q.date_to, today);
        assert!(q.is_valid());

        let inverted = ReportQuery {
            date_from: today,
            date_to: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            ..q
        };
        assert!(!inverted.is_valid());
    }
}
