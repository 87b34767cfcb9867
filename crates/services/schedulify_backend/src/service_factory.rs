// --- File: crates/services/schedulify_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! This module provides an implementation of the ServiceFactory trait for
//! the backend service. Services are initialized from configuration and
//! runtime flags; anything not configured is simply absent.

use schedulify_common::is_uploads_enabled;
use schedulify_common::services::{
    BoxFuture, BoxedError, ClipboardService, NotificationService, ServiceFactory, UploadService,
    UploadedImage,
};
use schedulify_config::AppConfig;
use schedulify_dashboard::service::HttpUploadService;
use std::sync::Arc;
use tracing::{info, warn};

/// Notification service that surfaces transient messages into the
/// service logs. The browser shows its own toasts; this keeps every
/// notification observable on the server side as well.
pub struct TracingNotificationService;

impl NotificationService for TracingNotificationService {
    fn notify_success(&self, message: &str) {
        info!("notification: {}", message);
    }

    fn notify_error(&self, message: &str) {
        warn!("notification: {}", message);
    }
}

/// Adapter that erases a concrete upload service's error type.
struct BoxedUploadService {
    inner: HttpUploadService,
}

impl UploadService for BoxedUploadService {
    type Error = BoxedError;

    fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> BoxFuture<'_, UploadedImage, Self::Error> {
        let fut = self.inner.upload_image(file_name, bytes);
        Box::pin(async move { fut.await.map_err(|e| BoxedError(Box::new(e))) })
    }
}

/// Service factory implementation.
///
/// Initializes the configured collaborator services once at startup and
/// hands them out as trait objects, so handlers and tests depend only on
/// the service traits.
pub struct SchedulifyServiceFactory {
    #[allow(dead_code)]
    config: Arc<AppConfig>,
    notification_service: Arc<dyn NotificationService>,
    upload_service: Option<Arc<dyn UploadService<Error = BoxedError>>>,
}

impl SchedulifyServiceFactory {
    /// Create a new service factory.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let upload_service: Option<Arc<dyn UploadService<Error = BoxedError>>> =
            if is_uploads_enabled(&config) {
                info!("Initializing image upload service...");
                config
                    .uploads
                    .as_ref()
                    .map(|uploads| {
                        Arc::new(BoxedUploadService {
                            inner: HttpUploadService::new(uploads),
                        }) as Arc<dyn UploadService<Error = BoxedError>>
                    })
            } else {
                None
            };

        Self {
            config,
            notification_service: Arc::new(TracingNotificationService),
            upload_service,
        }
    }
}

impl ServiceFactory for SchedulifyServiceFactory {
    fn notification_service(&self) -> Option<Arc<dyn NotificationService>> {
        Some(self.notification_service.clone())
    }

    fn clipboard_service(&self) -> Option<Arc<dyn ClipboardService<Error = BoxedError>>> {
        // The clipboard only exists in the browser; the server side has
        // no implementation to offer.
        None
    }

    fn upload_service(&self) -> Option<Arc<dyn UploadService<Error = BoxedError>>> {
        self.upload_service.clone()
    }
}
