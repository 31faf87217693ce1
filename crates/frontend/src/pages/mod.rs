pub mod home;
pub mod not_found;
pub mod pool_manager;
pub mod reports;
