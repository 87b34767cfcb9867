// --- File: crates/schedulify_dashboard/src/profile.rs ---
//! Profile settings state and submission.
//!
//! The editable profile image lives client-side, decoupled from the
//! persisted value until the surrounding form is submitted. Deleting the
//! image is purely local and reversible until submit; the view offers
//! exactly one of two affordances depending on whether the current value
//! is empty.

use schedulify_common::models::User;
use schedulify_common::services::NotificationService;
use schedulify_db::{DbError, UserRepository};
use schedulify_forms::{profile_settings_schema, FieldErrors, FormInput, FormSubmissionController};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Name of the hidden form field carrying the image URL.
pub const PROFILE_IMAGE_FIELD: &str = "profile_image";

/// Which of the two mutually exclusive presentations the view renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageAffordance {
    /// The stored image with a remove button.
    ImageWithRemove { url: String },
    /// No image: offer the upload dropzone instead.
    UploadDropzone,
}

/// Client-side holder of the editable profile image reference.
#[derive(Debug, Clone, Default)]
pub struct ProfileSettingsState {
    current_profile_image: String,
}

impl ProfileSettingsState {
    /// Seed from the persisted value.
    pub fn new(persisted: Option<&str>) -> Self {
        Self {
            current_profile_image: persisted.unwrap_or("").to_string(),
        }
    }

    /// The value the hidden form field carries right now. Empty means
    /// "clear the stored image on submit".
    pub fn current_profile_image(&self) -> &str {
        &self.current_profile_image
    }

    /// Remove the image locally. Nothing is persisted until the form is
    /// submitted with the resulting empty value.
    pub fn delete_image(&mut self) {
        self.current_profile_image.clear();
    }

    /// The upload collaborator finished: adopt the hosted URL.
    pub fn upload_completed(&mut self, url: &str, notifier: &dyn NotificationService) {
        self.current_profile_image = url.to_string();
        notifier.notify_success("Profile image uploaded");
    }

    /// The upload collaborator failed: notify and leave local state
    /// untouched.
    pub fn upload_failed(&self, message: &str, notifier: &dyn NotificationService) {
        notifier.notify_error(message);
    }

    /// Exactly one presentation, driven solely by emptiness.
    pub fn affordance(&self) -> ImageAffordance {
        if self.current_profile_image.is_empty() {
            ImageAffordance::UploadDropzone
        } else {
            ImageAffordance::ImageWithRemove {
                url: self.current_profile_image.clone(),
            }
        }
    }

    /// Push the current value into the form's hidden field binding. The
    /// controller bumps the field's identity key only when the value
    /// changed, which is what forces the view to drop stale drop-zone
    /// state after a local delete.
    pub fn sync_into(&self, controller: &mut FormSubmissionController) {
        controller.set_initial(PROFILE_IMAGE_FIELD, &self.current_profile_image);
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("User not found.")]
    NotFound,
    #[error("Database interaction failed: {0}")]
    DatabaseError(String),
}

impl From<DbError> for SettingsError {
    fn from(err: DbError) -> Self {
        SettingsError::DatabaseError(err.to_string())
    }
}

/// The settings form's payload. Email is rendered read-only and never
/// submitted; the image field is the hidden URL string.
#[derive(Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SettingsFormRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Jan Marshall"))]
    pub full_name: String,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "https://images.example/jan.png"))]
    pub profile_image: String,
}

impl SettingsFormRequest {
    pub fn into_form_input(self) -> FormInput {
        FormInput::from([
            ("full_name".to_string(), self.full_name),
            (PROFILE_IMAGE_FIELD.to_string(), self.profile_image),
        ])
    }
}

/// How a validated settings submission ended.
#[derive(Debug)]
pub enum SettingsOutcome {
    Saved(User),
    Invalid(FieldErrors),
}

/// Persist the settings form: authoritative validation, then profile
/// update. An empty image value clears the stored image.
pub async fn submit_settings(
    users: &impl UserRepository,
    user_id: &str,
    request: SettingsFormRequest,
) -> Result<SettingsOutcome, SettingsError> {
    let input = request.into_form_input();
    let values = match profile_settings_schema().validate(&input) {
        Ok(values) => values,
        Err(field_errors) => return Ok(SettingsOutcome::Invalid(field_errors)),
    };

    let image = values.text(PROFILE_IMAGE_FIELD);
    let image = (!image.is_empty()).then_some(image);

    let updated = users
        .update_profile(user_id, values.text("full_name"), image)
        .await?
        .ok_or(SettingsError::NotFound)?;

    info!("Profile settings saved for user {}", user_id);
    Ok(SettingsOutcome::Saved(updated))
}
