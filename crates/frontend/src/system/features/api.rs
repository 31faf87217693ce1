use contracts::system::features::FeatureConfig;

use crate::shared::api_utils::fetch_json;

pub const FEATURES_PATH: &str = "/api/features";

/// Fetch the feature configuration of the current deployment
pub async fn fetch_feature_config() -> Result<FeatureConfig, String> {
    fetch_json::<FeatureConfig>(FEATURES_PATH).await
}
