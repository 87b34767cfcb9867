// --- File: crates/schedulify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g., DATABASE_URL loaded via APP_DATABASE__URL or DATABASE_URL
}

// --- Image Upload Config ---
// Holds non-secret upload-host config. API secret loaded directly from env var.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UploadConfig {
    /// Endpoint of the image-hosting upload collaborator.
    pub endpoint: String,
    /// Maximum accepted image size in bytes.
    pub max_size_bytes: Option<u64>,
    // API key loaded directly from env var: UPLOAD_API_KEY
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    /// Base URL public booking links are composed from, e.g. "https://schedulify.example".
    /// Rendered and copied verbatim as `{public_base_url}/{username}/{slug}`.
    pub public_base_url: String,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_uploads: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>, // Central DB config
    #[serde(default)]
    pub uploads: Option<UploadConfig>,
}
