//! Waiting-list form record and its submit semantics.
//!
//! The rendered inputs are controlled: their displayed values are always
//! derived from a [`WaitlistForm`] owned by the page, and only change through
//! [`WaitlistForm::set`].

use serde::{Deserialize, Serialize};

/// The three-field record captured from the user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistForm {
    pub name: String,
    pub email: String,
    pub description: String,
}

/// Closed set of editable form fields.
///
/// Field edits go through this enum instead of string keys, so an unknown
/// field name is unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitlistField {
    Name,
    Email,
    Description,
}

impl WaitlistField {
    /// Form-level field name, used for the input `name` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            WaitlistField::Name => "name",
            WaitlistField::Email => "email",
            WaitlistField::Description => "description",
        }
    }
}

impl WaitlistForm {
    /// All-empty record, the state at mount and after a submit
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of one field
    pub fn get(&self, field: WaitlistField) -> &str {
        match field {
            WaitlistField::Name => &self.name,
            WaitlistField::Email => &self.email,
            WaitlistField::Description => &self.description,
        }
    }

    /// Replace the value of one field, leaving the others untouched
    pub fn set(&mut self, field: WaitlistField, value: String) {
        match field {
            WaitlistField::Name => self.name = value,
            WaitlistField::Email => self.email = value,
            WaitlistField::Description => self.description = value,
        }
    }

    /// Whether both required fields are filled in. `description` is optional.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    /// Capture the record for forwarding and reset the form atomically.
    ///
    /// Returns `None` and leaves the form untouched when a required field is
    /// still empty.
    pub fn submit(&mut self) -> Option<Self> {
        if !self.is_complete() {
            return None;
        }
        Some(std::mem::take(self))
    }
}

/// Hand a captured record to the submission collaborator.
///
/// There is no backend yet: the record is serialized and logged, and a real
/// forwarder can slot in behind this function later.
pub fn forward_submission(record: &WaitlistForm) {
    match serde_json::to_string(record) {
        Ok(payload) => leptos::logging::log!("waitlist submission: {}", payload),
        Err(err) => leptos::logging::error!("waitlist submission not serializable: {}", err),
    }
}
