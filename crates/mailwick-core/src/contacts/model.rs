//! Contact model types.

use serde::{Deserialize, Serialize};

/// Opaque reference to a contact photo, as handed out by the platform
/// address book. Only the decoder knows how to resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoUri(pub String);

impl PhotoUri {
    /// Create a new photo reference.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }
}

impl std::fmt::Display for PhotoUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contact from the platform address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Email address (unique identifier).
    pub email: String,
    /// Display name (may be empty).
    pub name: String,
    /// Reference to the contact's photo, if one is set.
    pub photo_uri: Option<PhotoUri>,
}

impl Contact {
    /// Creates a new contact without a photo.
    #[must_use]
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            photo_uri: None,
        }
    }

    /// Creates a new contact with a photo reference.
    #[must_use]
    pub fn with_photo(
        email: impl Into<String>,
        name: impl Into<String>,
        photo_uri: PhotoUri,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            photo_uri: Some(photo_uri),
        }
    }

    /// Returns a display string for the contact.
    ///
    /// If a name is present, returns "Name <email>", otherwise just "email".
    #[must_use]
    pub fn display(&self) -> String {
        if self.name.is_empty() {
            self.email.clone()
        } else {
            format!("{} <{}>", self.name, self.email)
        }
    }
}
