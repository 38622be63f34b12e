use thiserror::Error;

/// Errors that can occur during sketch startup. Everything here is fatal:
/// the render loop only starts once GPU init and asset preload succeeded.
#[derive(Debug, Error)]
pub enum IsletError {
    #[error("GPU adapter not found: {0}")]
    AdapterNotFound(String),

    #[error("Failed to request GPU device: {0}")]
    DeviceRequestFailed(String),

    #[error("Surface configuration failed: {0}")]
    SurfaceConfigFailed(String),

    #[error("Failed to load asset {path}: {reason}")]
    AssetLoadFailed { path: String, reason: String },

    #[error("Window creation failed: {0}")]
    WindowCreationFailed(String),
}
