//! Client-side validation for the login form and the add-work form.
//!
//! Validation failures never reach the network: the login flow turns them
//! into a banner message and the add-work form keeps its submit control
//! disabled while [`AddWorkForm::validate`] fails.

use thiserror::Error;

use crate::models::Credentials;

/// Images must be strictly smaller than this many bytes.
pub const MAX_IMAGE_BYTES: u64 = 4_000_000;

/// MIME types accepted for uploads.
pub const ACCEPTED_IMAGE_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email ou Mot de passe non rempli")]
    EmptyCredentials,
    #[error("aucune image sélectionnée")]
    MissingImage,
    #[error("format d'image non supporté : {0}")]
    UnsupportedImageType(String),
    #[error("image trop volumineuse : {0} octets")]
    ImageTooLarge(u64),
    #[error("titre manquant")]
    EmptyTitle,
    #[error("catégorie manquante")]
    MissingCategory,
}

/// Both fields must be filled before anything is sent.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), ValidationError> {
    if credentials.email.is_empty() || credentials.password.is_empty() {
        return Err(ValidationError::EmptyCredentials);
    }
    Ok(())
}

/// Metadata of a file picked in the upload input.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }
}

/// PNG or JPEG, under [`MAX_IMAGE_BYTES`]. No file is invalid.
pub fn validate_image(file: Option<&ImageFile>) -> Result<(), ValidationError> {
    let Some(file) = file else {
        return Err(ValidationError::MissingImage);
    };
    if !ACCEPTED_IMAGE_TYPES.contains(&file.mime.as_str()) {
        return Err(ValidationError::UnsupportedImageType(file.mime.clone()));
    }
    if file.size >= MAX_IMAGE_BYTES {
        return Err(ValidationError::ImageTooLarge(file.size));
    }
    Ok(())
}

/// Current values of the add-work form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddWorkForm {
    pub title: String,
    pub category: Option<u32>,
    pub image: Option<ImageFile>,
}

impl AddWorkForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.category.is_none() {
            return Err(ValidationError::MissingCategory);
        }
        validate_image(self.image.as_ref())
    }

    /// Drives the submit control's `disabled` attribute.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Clear title and image after a successful upload; the category stays.
    pub fn reset(&mut self) {
        self.title.clear();
        self.image = None;
    }
}

/// Counts file-input changes so a read that finishes after a newer selection
/// is dropped instead of overwriting it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageSelection {
    generation: u64,
}

impl ImageSelection {
    /// Register a new selection (or a reset) and return its generation.
    pub fn next(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// Single in-flight upload. Taken synchronously in the submit handler, before
/// any task is spawned.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SubmitGate {
    busy: bool,
}

impl SubmitGate {
    /// Returns `false` when an upload is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}
