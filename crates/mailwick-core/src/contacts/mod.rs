//! Contact lookup and photo loading.
//!
//! The address book and the image decoder are platform concerns behind
//! narrow traits; the loader itself never fails, it degrades to "no
//! photo".

mod model;
mod photo;

pub use model::{Contact, PhotoUri};
pub use photo::{ContactDirectory, ContactPhotoLoader, PhotoDecoder, PhotoError};
