//! Form input state.

mod field;

pub use field::{InputField, PortInputField, StringInputField};
