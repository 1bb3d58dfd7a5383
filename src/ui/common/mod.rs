//! Common reusable UI components

pub mod button;
pub mod form;
pub mod modal;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use form::{FormField, TextAreaField};
pub use modal::BaseModal;
