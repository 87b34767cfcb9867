//! Feature flag handling for the Schedulify application.
//!
//! Optional collaborators (currently only the image-upload service) are
//! switched on at runtime through configuration: a `use_*` flag plus the
//! matching configuration section. A collaborator is considered enabled
//! only when both are present.

use schedulify_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
///
/// # Arguments
///
/// * `use_feature` - The configuration flag that enables the feature
/// * `feature_config` - The configuration section for the feature
///
/// # Returns
///
/// `true` if the feature is enabled, `false` otherwise
pub fn is_feature_enabled<T>(use_feature: bool, feature_config: Option<&T>) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the image-upload collaborator is enabled at runtime.
pub fn is_uploads_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config.use_uploads, config.uploads.as_ref())
}
