pub mod api;
pub mod guard;
pub mod query;

pub use guard::{FeatureGate, GateState};
pub use query::{use_feature_query, FeatureQuery};
