// --- File: crates/schedulify_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! This module provides trait definitions for the external collaborators the
//! dashboard core talks to: transient notifications, the clipboard, and the
//! image-hosting upload service. The traits allow for dependency injection
//! and easier testing by decoupling the dashboard logic from any specific
//! implementation.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for transient user notifications.
///
/// Notifications are fire-and-forget: toggle rollbacks, upload results and
/// copy-link confirmations surface through here and never block the caller.
pub trait NotificationService: Send + Sync {
    /// Show a transient success message.
    fn notify_success(&self, message: &str);

    /// Show a transient error message.
    fn notify_error(&self, message: &str);
}

/// A trait for clipboard access.
///
/// The dashboard uses a single operation: writing a composed booking URL.
/// The write can fail (permission denied, no clipboard available) and the
/// caller is responsible for surfacing the outcome as a notification.
pub trait ClipboardService: Send + Sync {
    /// Error type returned by clipboard operations.
    type Error: StdError + Send + Sync + 'static;

    /// Write the given text to the clipboard.
    fn write_text(&self, text: &str) -> BoxFuture<'_, (), Self::Error>;
}

/// A trait for the image-hosting upload collaborator.
///
/// The upload transport itself is out of band; the dashboard only consumes
/// the resulting public URL on success or a message string on failure.
pub trait UploadService: Send + Sync {
    /// Error type returned by upload operations.
    type Error: StdError + Send + Sync + 'static;

    /// Upload an image and return its hosted public URL.
    fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> BoxFuture<'_, UploadedImage, Self::Error>;
}

/// A factory for creating service instances.
///
/// This trait provides methods for creating instances of various services.
/// It's used by the application to get access to the services it needs;
/// a service that is not configured returns None.
pub trait ServiceFactory: Send + Sync {
    /// Get a notification service instance.
    fn notification_service(&self) -> Option<Arc<dyn NotificationService>>;

    /// Get a clipboard service instance.
    fn clipboard_service(&self) -> Option<Arc<dyn ClipboardService<Error = BoxedError>>>;

    /// Get an upload service instance.
    fn upload_service(&self) -> Option<Arc<dyn UploadService<Error = BoxedError>>>;
}

/// Represents the result of a completed image upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UploadedImage {
    /// The hosted public URL of the uploaded image.
    pub url: String,

    /// Size of the stored image in bytes, when the host reports it.
    pub size_bytes: Option<u64>,
}
