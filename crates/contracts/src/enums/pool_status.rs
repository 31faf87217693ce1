use serde::{Deserialize, Serialize};

/// Connection state of a mining pool endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolStatus {
    Active,
    Inactive,
    Unreachable,
}

impl PoolStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PoolStatus::Active => "active",
            PoolStatus::Inactive => "inactive",
            PoolStatus::Unreachable => "unreachable",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PoolStatus::Active => "Active",
            PoolStatus::Inactive => "Inactive",
            PoolStatus::Unreachable => "Unreachable",
        }
    }

    pub fn all() -> Vec<PoolStatus> {
        vec![PoolStatus::Active, PoolStatus::Inactive, PoolStatus::Unreachable]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(PoolStatus::Active),
            "inactive" => Some(PoolStatus::Inactive),
            "unreachable" => Some(PoolStatus::Unreachable),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        for status in PoolStatus::all() {
            assert_eq!(PoolStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(PoolStatus::from_code("down"), None);
    }
}
