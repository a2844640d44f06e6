//! Contact photo loading.

use thiserror::Error;
use tracing::warn;

use super::model::{Contact, PhotoUri};

/// Errors that can occur while resolving a photo reference into image
/// bytes.
#[derive(Debug, Error)]
pub enum PhotoError {
    /// Opening the photo stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream contents could not be decoded as an image.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Platform address-book lookup.
pub trait ContactDirectory {
    /// Find the contact for an email address, if the address book has one.
    fn contact_for(&self, email: &str) -> Option<Contact>;
}

/// Resolves a photo reference into displayable image bytes.
pub trait PhotoDecoder {
    /// Open and decode the photo behind the given reference.
    ///
    /// # Errors
    ///
    /// Returns a [`PhotoError`] if the stream cannot be opened or its
    /// contents are not a decodable image.
    fn decode(&self, uri: &PhotoUri) -> Result<Vec<u8>, PhotoError>;
}

/// Loads contact photos by email address, degrading every failure to
/// "no photo".
pub struct ContactPhotoLoader {
    directory: Box<dyn ContactDirectory>,
    decoder: Box<dyn PhotoDecoder>,
}

impl ContactPhotoLoader {
    /// Create a loader over the given directory and decoder.
    #[must_use]
    pub fn new(directory: Box<dyn ContactDirectory>, decoder: Box<dyn PhotoDecoder>) -> Self {
        Self { directory, decoder }
    }

    /// Load the photo for an email address.
    ///
    /// Returns `None` when the address is unknown, the contact has no
    /// photo, or decoding fails. Decode failures are logged and swallowed;
    /// they are a diagnostics concern, not a user-facing error.
    #[must_use]
    pub fn load(&self, email: &str) -> Option<Vec<u8>> {
        let photo_uri = self.directory.contact_for(email)?.photo_uri?;
        match self.decoder.decode(&photo_uri) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!("Couldn't load contact photo {photo_uri}: {e}");
                None
            }
        }
    }
}
