use serde::{Deserialize, Serialize};

/// Site report variants, one per tab in the reports section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Hashrate,
    Efficiency,
    Energy,
}

impl ReportKind {
    /// Path segment under `/api/reports/`
    pub fn code(&self) -> &'static str {
        match self {
            ReportKind::Hashrate => "hashrate",
            ReportKind::Efficiency => "efficiency",
            ReportKind::Energy => "energy",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportKind::Hashrate => "Hashrate",
            ReportKind::Efficiency => "Efficiency",
            ReportKind::Energy => "Energy",
        }
    }

    /// Unit assumed when the series does not carry one
    pub fn default_unit(&self) -> &'static str {
        match self {
            ReportKind::Hashrate => "TH/s",
            ReportKind::Efficiency => "J/TH",
            ReportKind::Energy => "MWh",
        }
    }

    pub fn all() -> Vec<ReportKind> {
        vec![ReportKind::Hashrate, ReportKind::Efficiency, ReportKind::Energy]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "hashrate" => Some(ReportKind::Hashrate),
            "efficiency" => Some(ReportKind::Efficiency),
            "energy" => Some(ReportKind::Energy),
            _ => None,
        }
    }
}
