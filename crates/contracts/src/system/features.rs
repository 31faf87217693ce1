use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Optional product capabilities that can gate a whole section of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Reporting,
    PoolManager,
}

impl Feature {
    /// Key of the flag in the feature configuration payload
    pub fn key(&self) -> &'static str {
        match self {
            Feature::Reporting => "reporting",
            Feature::PoolManager => "poolManager",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Reporting => "Reporting",
            Feature::PoolManager => "Pool manager",
        }
    }

    pub fn all() -> Vec<Feature> {
        vec![Feature::Reporting, Feature::PoolManager]
    }

    /// Text of the placeholder shown when the feature is switched off,
    /// e.g. "Reporting feature is not enabled".
    pub fn disabled_message(&self) -> String {
        format!("{} feature is not enabled", self.label())
    }
}

/// Feature configuration as served by `/api/features`.
///
/// The payload is an open JSON object; flags are not guaranteed to be
/// booleans, so lookups go through [`is_truthy`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureConfig(pub Map<String, Value>);

impl FeatureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by tests and local overrides.
    pub fn with_flag(mut self, feature: Feature, value: impl Into<Value>) -> Self {
        self.0.insert(feature.key().to_string(), value.into());
        self
    }

    /// Raw flag value, if present
    pub fn flag(&self, feature: Feature) -> Option<&Value> {
        self.0.get(feature.key())
    }

    /// Absent, `null`, `false`, `0` and `""` all mean disabled.
    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.flag(feature).map(is_truthy).unwrap_or(false)
    }

    /// Features from [`Feature::all`] that are switched on
    pub fn enabled_features(&self) -> Vec<Feature> {
        Feature::all()
            .into_iter()
            .filter(|f| self.is_enabled(*f))
            .collect()
    }
}

/// Loose truthiness of a JSON flag value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_flags_are_disabled() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            let config = FeatureConfig::new().with_flag(Feature::Reporting, value.clone());
            assert!(!config.is_enabled(Feature::Reporting), "{value} should be disabled");
        }
        assert!(!FeatureConfig::new().is_enabled(Feature::Reporting));
    }

    #[test]
    fn test_truthy_flags_are_enabled() {
        for value in [json!(true), json!(1), json!(-2.5), json!("yes"), json!([]), json!({})] {
            let config = FeatureConfig::new().with_flag(Feature::Reporting, value.clone());
            assert!(config.is_enabled(Feature::Reporting), "{value} should be enabled");
        }
    }

    #[test]
    fn test_deserialize_from_wire() {
        let config: FeatureConfig =
            serde_json::from_str(r#"{"reporting": true, "poolManager": 0, "other": "x"}"#)
                .unwrap();
        assert!(config.is_enabled(Feature::Reporting));
        assert!(!config.is_enabled(Feature::PoolManager));
        assert_eq!(config.enabled_features(), vec![Feature::Reporting]);
    }

    #[test]
    fn test_disabled_message() {
        assert_eq!(
            Feature::Reporting.disabled_message(),
            "Reporting feature is not enabled"
        );
        assert_eq!(
            Feature::PoolManager.disabled_message(),
            "Pool manager feature is not enabled"
        );
    }

    #[test]
    fn test_keys_are_distinct() {
        let keys: Vec<&str> = Feature::all().iter().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["reporting", "poolManager"]);
        assert!(keys.iter().all(|k| !k.is_empty()));
    }
}
