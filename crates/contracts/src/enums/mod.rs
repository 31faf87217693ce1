pub mod device_status;
pub mod pool_status;
pub mod report_kind;

pub use device_status::DeviceStatus;
pub use pool_status::PoolStatus;
pub use report_kind::ReportKind;
