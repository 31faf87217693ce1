use serde::{Deserialize, Serialize};

/// Operational status of a miner as reported by the site controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    Mining,
    Sleeping,
    Offline,
    Error,
    Maintenance,
}

impl DeviceStatus {
    pub fn code(&self) -> &'static str {
        match self {
            DeviceStatus::Mining => "mining",
            DeviceStatus::Sleeping => "sleeping",
            DeviceStatus::Offline => "offline",
            DeviceStatus::Error => "error",
            DeviceStatus::Maintenance => "maintenance",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceStatus::Mining => "Mining",
            DeviceStatus::Sleeping => "Sleeping",
            DeviceStatus::Offline => "Offline",
            DeviceStatus::Error => "Error",
            DeviceStatus::Maintenance => "Maintenance",
        }
    }

    pub fn all() -> Vec<DeviceStatus> {
        vec![
            DeviceStatus::Mining,
            DeviceStatus::Sleeping,
            DeviceStatus::Offline,
            DeviceStatus::Error,
            DeviceStatus::Maintenance,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "mining" => Some(DeviceStatus::Mining),
            "sleeping" => Some(DeviceStatus::Sleeping),
            "offline" => Some(DeviceStatus::Offline),
            "error" => Some(DeviceStatus::Error),
            "maintenance" => Some(DeviceStatus::Maintenance),
            _ => None,
        }
    }

    /// Whether the device contributes hashrate right now
    pub fn is_hashing(&self) -> bool {
        matches!(self, DeviceStatus::Mining)
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for status in DeviceStatus::all() {
            assert_eq!(DeviceStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(DeviceStatus::from_code("MINING"), None);
        assert_eq!(DeviceStatus::from_code(""), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&DeviceStatus::Maintenance).unwrap();
        assert_eq!(json, "\"maintenance\"");
    }
}
