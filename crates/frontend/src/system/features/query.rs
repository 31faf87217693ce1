//! Feature configuration query shared by every feature gate.
//!
//! One `FeatureQuery` lives in context for the whole app. The first gate to
//! mount triggers the fetch; later mounts reuse the cached configuration.

use contracts::system::features::FeatureConfig;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

/// Whether a new request should go out. Never while one is running;
/// otherwise only when forced or nothing is cached yet.
pub fn should_fetch(has_data: bool, in_flight: bool, force: bool) -> bool {
    !in_flight && (force || !has_data)
}

/// Resolved part of the query: last good configuration and last error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub data: Option<FeatureConfig>,
    pub error: Option<String>,
}

impl QueryResult {
    /// A failure keeps the previously cached configuration.
    pub fn apply(self, outcome: Result<FeatureConfig, String>) -> Self {
        match outcome {
            Ok(config) => QueryResult {
                data: Some(config),
                error: None,
            },
            Err(e) => QueryResult {
                data: self.data,
                error: Some(e),
            },
        }
    }
}

#[derive(Clone, Copy)]
pub struct FeatureQuery {
    pub data: RwSignal<Option<FeatureConfig>>,
    /// `true` until the first response arrives and while a refetch is running
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    in_flight: StoredValue<bool>,
}

impl FeatureQuery {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            is_loading: RwSignal::new(true),
            error: RwSignal::new(None),
            in_flight: StoredValue::new(false),
        }
    }

    /// Fetch unless a configuration is already cached. Safe to call on
    /// every mount.
    pub fn ensure_loaded(&self) {
        self.fetch(false);
    }

    /// Re-request the configuration. Does nothing while a request is running.
    pub fn refetch(&self) {
        self.fetch(true);
    }

    fn fetch(&self, force: bool) {
        let has_data = self.data.with_untracked(|d| d.is_some());
        if !should_fetch(has_data, self.in_flight.get_value(), force) {
            return;
        }
        self.in_flight.set_value(true);
        self.is_loading.set(true);

        let this = *self;
        spawn_local(async move {
            let outcome = api::fetch_feature_config().await;
            match &outcome {
                Ok(config) => log!("feature config loaded: {:?}", config.enabled_features()),
                Err(e) => log::error!("Failed to load feature config: {}", e),
            }

            let previous = QueryResult {
                data: this.data.get_untracked(),
                error: this.error.get_untracked(),
            };
            let next = previous.apply(outcome);
            this.data.set(next.data);
            this.error.set(next.error);
            this.is_loading.set(false);
            this.in_flight.set_value(false);
        });
    }
}

impl Default for FeatureQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the feature query
pub fn use_feature_query() -> FeatureQuery {
    use_context::<FeatureQuery>().expect("FeatureQuery not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::features::Feature;

    fn enabled() -> FeatureConfig {
        FeatureConfig::new().with_flag(Feature::Reporting, true)
    }

    #[test]
    fn test_no_duplicate_request_while_in_flight() {
        assert!(!should_fetch(false, true, false));
        assert!(!should_fetch(false, true, true));
        assert!(!should_fetch(true, true, true));
    }

    #[test]
    fn test_mount_reuses_cached_config() {
        assert!(!should_fetch(true, false, false));
        assert!(should_fetch(false, false, false));
    }

    #[test]
    fn test_forced_refetch_with_cache() {
        assert!(should_fetch(true, false, true));
    }

    #[test]
    fn test_failure_keeps_cached_config() {
        let cached = QueryResult::default().apply(Ok(enabled()));
        let after_failure = cached.apply(Err("Request failed: 503".to_string()));
        assert_eq!(after_failure.data, Some(enabled()));
        assert_eq!(after_failure.error.as_deref(), Some("Request failed: 503"));
    }

    #[test]
    fn test_success_clears_error() {
        let failed = QueryResult::default().apply(Err("Failed to send request: x".into()));
        assert_eq!(failed.data, None);
        let recovered = failed.apply(Ok(enabled()));
        assert_eq!(
            recovered,
            QueryResult {
                data: Some(enabled()),
                error: None
            }
        );
    }
}
