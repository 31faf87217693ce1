use crate::enums::{DeviceStatus, PoolStatus};
use serde::{Deserialize, Serialize};

/// A configured mining pool as listed by `/api/pools`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSummary {
    pub id: String,
    pub name: String,
    pub url: String,
    pub status: PoolStatus,
    #[serde(default)]
    pub worker_count: u32,
    #[serde(default)]
    pub hashrate_ths: f64,
    #[serde(default)]
    pub miners: Vec<MinerAssignment>,
}

impl PoolSummary {
    /// Assigned miners that are currently hashing
    pub fn hashing_miners(&self) -> usize {
        self.miners.iter().filter(|m| m.status.is_hashing()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinerAssignment {
    pub miner_id: String,
    pub status: DeviceStatus,
    pub pool_id: String,
}
